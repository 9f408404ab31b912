//! Inter-facility patient-shifting records and their status lifecycle.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::error::{RecordError, RecordResult};
use crate::facility::Facility;
use crate::patient::Patient;

/// Lifecycle status of a shifting request.
///
/// The approval stages (`ShiftingApproved`, `ShiftingRejected`, `OnHold`)
/// only occur under the wartime workflow, where a designated approving
/// facility signs off before the destination does.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShiftStatus {
    Pending,
    OnHold,
    Approved,
    Rejected,
    ShiftingApproved,
    ShiftingRejected,
    DestinationApproved,
    DestinationRejected,
    TransportationToBeArranged,
    PatientToBePickedUp,
    TransferInProgress,
    Completed,
    Cancelled,
}

impl ShiftStatus {
    /// Human label shown on the board and the details page.
    pub fn label(self) -> &'static str {
        match self {
            ShiftStatus::Pending => "Pending",
            ShiftStatus::OnHold => "On Hold",
            ShiftStatus::Approved => "Approved",
            ShiftStatus::Rejected => "Rejected",
            ShiftStatus::ShiftingApproved => "Shifting Approved",
            ShiftStatus::ShiftingRejected => "Shifting Rejected",
            ShiftStatus::DestinationApproved => "Destination Approved",
            ShiftStatus::DestinationRejected => "Destination Rejected",
            ShiftStatus::TransportationToBeArranged => "Transportation to be Arranged",
            ShiftStatus::PatientToBePickedUp => "Patient to be Picked Up",
            ShiftStatus::TransferInProgress => "Transfer in Progress",
            ShiftStatus::Completed => "Completed",
            ShiftStatus::Cancelled => "Cancelled",
        }
    }

    /// Stable wire token, as used in stored records and status-update
    /// requests.
    pub fn token(self) -> &'static str {
        match self {
            ShiftStatus::Pending => "PENDING",
            ShiftStatus::OnHold => "ON_HOLD",
            ShiftStatus::Approved => "APPROVED",
            ShiftStatus::Rejected => "REJECTED",
            ShiftStatus::ShiftingApproved => "SHIFTING_APPROVED",
            ShiftStatus::ShiftingRejected => "SHIFTING_REJECTED",
            ShiftStatus::DestinationApproved => "DESTINATION_APPROVED",
            ShiftStatus::DestinationRejected => "DESTINATION_REJECTED",
            ShiftStatus::TransportationToBeArranged => "TRANSPORTATION_TO_BE_ARRANGED",
            ShiftStatus::PatientToBePickedUp => "PATIENT_TO_BE_PICKED_UP",
            ShiftStatus::TransferInProgress => "TRANSFER_IN_PROGRESS",
            ShiftStatus::Completed => "COMPLETED",
            ShiftStatus::Cancelled => "CANCELLED",
        }
    }

    /// Terminal records accept no further status updates.
    pub fn is_terminal(self) -> bool {
        matches!(self, ShiftStatus::Completed | ShiftStatus::Cancelled)
    }

    /// The peacetime status vocabulary.
    pub fn peacetime() -> &'static [ShiftStatus] {
        &[
            ShiftStatus::Pending,
            ShiftStatus::Approved,
            ShiftStatus::Rejected,
            ShiftStatus::DestinationApproved,
            ShiftStatus::DestinationRejected,
            ShiftStatus::TransportationToBeArranged,
            ShiftStatus::PatientToBePickedUp,
            ShiftStatus::TransferInProgress,
            ShiftStatus::Completed,
            ShiftStatus::Cancelled,
        ]
    }

    /// The wartime status vocabulary, with the approval-facility stages.
    pub fn wartime() -> &'static [ShiftStatus] {
        &[
            ShiftStatus::Pending,
            ShiftStatus::OnHold,
            ShiftStatus::ShiftingApproved,
            ShiftStatus::ShiftingRejected,
            ShiftStatus::DestinationApproved,
            ShiftStatus::DestinationRejected,
            ShiftStatus::TransportationToBeArranged,
            ShiftStatus::PatientToBePickedUp,
            ShiftStatus::TransferInProgress,
            ShiftStatus::Completed,
            ShiftStatus::Cancelled,
        ]
    }

    /// The vocabulary for the configured workflow.
    pub fn options(wartime: bool) -> &'static [ShiftStatus] {
        if wartime {
            Self::wartime()
        } else {
            Self::peacetime()
        }
    }
}

impl std::str::FromStr for ShiftStatus {
    type Err = RecordError;

    /// Parse a wire token such as `TRANSFER_IN_PROGRESS`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ShiftStatus::peacetime()
            .iter()
            .chain(ShiftStatus::wartime())
            .copied()
            .find(|status| status.token() == s)
            .ok_or_else(|| RecordError::UnknownStatus(s.to_owned()))
    }
}

impl std::fmt::Display for ShiftStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// The staff member a request is assigned to.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct Assignee {
    pub first_name: String,
    pub last_name: String,
    pub user_type: Option<String>,
}

/// An inter-facility patient-shifting request.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct ShiftRecord {
    pub id: Uuid,
    pub status: ShiftStatus,
    pub emergency: bool,
    pub is_up_shift: bool,
    /// Whether the request falls under the KASP scheme.
    pub is_kasp: bool,
    pub reason: Option<String>,
    pub origin_facility: Option<Facility>,
    pub assigned_facility: Option<Facility>,
    pub shifting_approving_facility: Option<Facility>,
    /// Free-text destination outside the system, takes precedence over
    /// `assigned_facility` for display.
    pub assigned_facility_external: Option<String>,
    /// Preferred facility type, wartime workflow only.
    pub assigned_facility_type: Option<String>,
    pub referring_facility_contact_name: Option<String>,
    pub referring_facility_contact_number: Option<String>,
    pub ambulance_driver_name: Option<String>,
    pub ambulance_phone_number: Option<String>,
    pub ambulance_number: Option<String>,
    /// Preferred vehicle, wartime workflow only.
    pub vehicle_preference: Option<String>,
    pub breathlessness_level: Option<String>,
    pub comments: Option<String>,
    pub patient: Patient,
    pub assigned_to: Option<Assignee>,
    pub created_date: DateTime<Utc>,
    pub modified_date: DateTime<Utc>,
}

impl Default for ShiftRecord {
    fn default() -> Self {
        let epoch = DateTime::<Utc>::UNIX_EPOCH;
        Self {
            id: Uuid::nil(),
            status: ShiftStatus::Pending,
            emergency: false,
            is_up_shift: false,
            is_kasp: false,
            reason: None,
            origin_facility: None,
            assigned_facility: None,
            shifting_approving_facility: None,
            assigned_facility_external: None,
            assigned_facility_type: None,
            referring_facility_contact_name: None,
            referring_facility_contact_number: None,
            ambulance_driver_name: None,
            ambulance_phone_number: None,
            ambulance_number: None,
            vehicle_preference: None,
            breathlessness_level: None,
            comments: None,
            patient: Patient::default(),
            assigned_to: None,
            created_date: epoch,
            modified_date: epoch,
        }
    }
}

impl ShiftRecord {
    /// Move the request to a new status.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::TerminalStatus`] when the record is already
    /// completed or cancelled.
    pub fn update_status(&mut self, status: ShiftStatus, now: DateTime<Utc>) -> RecordResult<()> {
        if self.status.is_terminal() {
            return Err(RecordError::TerminalStatus {
                status: self.status,
            });
        }
        self.status = status;
        self.modified_date = now;
        Ok(())
    }

    /// The destination shown on the details page: the external free-text
    /// destination, falling back to the assigned facility's name.
    pub fn assigned_facility_name(&self) -> Option<&str> {
        self.assigned_facility_external
            .as_deref()
            .or_else(|| self.assigned_facility.as_ref().map(|f| f.name.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn wire_tokens_round_trip() {
        let json = serde_json::to_string(&ShiftStatus::PatientToBePickedUp).unwrap();
        assert_eq!(json, r#""PATIENT_TO_BE_PICKED_UP""#);
        let parsed: ShiftStatus = json.trim_matches('"').parse().unwrap();
        assert_eq!(parsed, ShiftStatus::PatientToBePickedUp);
    }

    #[test]
    fn unknown_token_is_an_error() {
        let err = "TELEPORTED".parse::<ShiftStatus>().unwrap_err();
        assert!(matches!(err, RecordError::UnknownStatus(token) if token == "TELEPORTED"));
    }

    #[test]
    fn wartime_vocabulary_carries_the_approval_stages() {
        assert!(ShiftStatus::wartime().contains(&ShiftStatus::ShiftingApproved));
        assert!(!ShiftStatus::peacetime().contains(&ShiftStatus::ShiftingApproved));
        assert_eq!(ShiftStatus::options(true), ShiftStatus::wartime());
        assert_eq!(ShiftStatus::options(false), ShiftStatus::peacetime());
    }

    #[test]
    fn status_updates_touch_the_modified_date() {
        let mut record = ShiftRecord::default();
        let now = Utc.with_ymd_and_hms(2026, 5, 2, 12, 0, 0).unwrap();

        record
            .update_status(ShiftStatus::Approved, now)
            .expect("pending records accept updates");
        assert_eq!(record.status, ShiftStatus::Approved);
        assert_eq!(record.modified_date, now);
    }

    #[test]
    fn terminal_records_reject_updates() {
        let mut record = ShiftRecord {
            status: ShiftStatus::Completed,
            ..ShiftRecord::default()
        };
        let err = record
            .update_status(ShiftStatus::Pending, Utc::now())
            .unwrap_err();
        assert!(matches!(
            err,
            RecordError::TerminalStatus {
                status: ShiftStatus::Completed
            }
        ));
        assert_eq!(
            err.to_string(),
            "a shifting request, once completed, cannot be updated"
        );
    }

    #[test]
    fn external_destination_wins_over_the_assigned_facility() {
        let record = ShiftRecord {
            assigned_facility: Some(Facility {
                name: "St. Mary's".into(),
                ..Facility::default()
            }),
            assigned_facility_external: Some("Out-of-state ICU".into()),
            ..ShiftRecord::default()
        };
        assert_eq!(record.assigned_facility_name(), Some("Out-of-state ICU"));
    }
}
