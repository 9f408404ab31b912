//! Facility record model.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A care facility, as embedded in patient and shifting records.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct Facility {
    pub name: String,
    pub facility_type: Option<String>,
    pub district: Option<String>,
    pub local_body: Option<String>,
    pub state: Option<String>,
}
