//! Patient record model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::format::{patient_age, PatientAge};

/// Patient gender.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
    NonBinary,
}

impl Gender {
    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::NonBinary => "Non-binary",
        }
    }
}

/// The consultation fields the operations pages surface.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct Consultation {
    pub encounter_date: Option<DateTime<Utc>>,
    pub created_date: Option<DateTime<Utc>>,
    pub patient_no: Option<String>,
    pub category: Option<String>,
    pub treatment_plan: Option<String>,
    /// Patient category of the most recent daily round, when one exists.
    pub last_daily_round_category: Option<String>,
}

impl Consultation {
    /// The admission date shown on referral letters: the encounter date,
    /// falling back to the consultation's creation date.
    pub fn admission_date(&self) -> Option<DateTime<Utc>> {
        self.encounter_date.or(self.created_date)
    }
}

/// A patient record, as embedded in shifting requests.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct Patient {
    pub id: Uuid,
    pub name: String,
    pub gender: Option<Gender>,
    pub date_of_birth: Option<NaiveDate>,
    pub phone_number: Option<String>,
    pub address: Option<String>,
    pub nationality: Option<String>,
    pub blood_group: Option<String>,
    pub passport_no: Option<String>,
    pub state: Option<String>,
    pub district: Option<String>,
    pub local_body: Option<String>,
    pub ward: Option<String>,
    pub is_medical_worker: bool,
    pub is_antenatal: bool,
    pub allergies: Option<String>,
    pub ongoing_medication: Option<String>,
    /// Name of the facility the patient is registered at.
    pub facility_name: Option<String>,
    pub last_consultation: Option<Consultation>,
}

impl Default for Patient {
    fn default() -> Self {
        Self {
            id: Uuid::nil(),
            name: String::new(),
            gender: None,
            date_of_birth: None,
            phone_number: None,
            address: None,
            nationality: None,
            blood_group: None,
            passport_no: None,
            state: None,
            district: None,
            local_body: None,
            ward: None,
            is_medical_worker: false,
            is_antenatal: false,
            allergies: None,
            ongoing_medication: None,
            facility_name: None,
            last_consultation: None,
        }
    }
}

impl Patient {
    /// Calendar age as of the given date, when a date of birth is recorded.
    pub fn age(&self, as_of: NaiveDate) -> Option<PatientAge> {
        self.date_of_birth.map(|dob| patient_age(dob, as_of))
    }

    /// The patient category shown on the shifting pages: the latest daily
    /// round's category, falling back to the consultation category.
    pub fn effective_category(&self) -> Option<&str> {
        let consultation = self.last_consultation.as_ref()?;
        consultation
            .last_daily_round_category
            .as_deref()
            .or(consultation.category.as_deref())
    }

    /// Whether the Indian address block (state/district/local body) applies.
    pub fn is_domestic(&self) -> bool {
        self.nationality.as_deref() == Some("India")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn effective_category_prefers_the_latest_round() {
        let patient = Patient {
            last_consultation: Some(Consultation {
                category: Some("Stable".into()),
                last_daily_round_category: Some("Abnormal".into()),
                ..Consultation::default()
            }),
            ..Patient::default()
        };
        assert_eq!(patient.effective_category(), Some("Abnormal"));
    }

    #[test]
    fn effective_category_falls_back_to_the_consultation() {
        let patient = Patient {
            last_consultation: Some(Consultation {
                category: Some("Stable".into()),
                ..Consultation::default()
            }),
            ..Patient::default()
        };
        assert_eq!(patient.effective_category(), Some("Stable"));
    }

    #[test]
    fn no_consultation_means_no_category() {
        assert_eq!(Patient::default().effective_category(), None);
    }

    #[test]
    fn admission_date_prefers_the_encounter() {
        use chrono::TimeZone;
        let encounter = Utc.with_ymd_and_hms(2026, 2, 1, 10, 0, 0).unwrap();
        let created = Utc.with_ymd_and_hms(2026, 1, 28, 8, 0, 0).unwrap();

        let consultation = Consultation {
            encounter_date: Some(encounter),
            created_date: Some(created),
            ..Consultation::default()
        };
        assert_eq!(consultation.admission_date(), Some(encounter));

        let without_encounter = Consultation {
            created_date: Some(created),
            ..Consultation::default()
        };
        assert_eq!(without_encounter.admission_date(), Some(created));
    }

    #[test]
    fn gender_wire_tokens_are_snake_case() {
        assert_eq!(
            serde_json::to_string(&Gender::NonBinary).unwrap(),
            r#""non_binary""#
        );
        assert_eq!(Gender::NonBinary.label(), "Non-binary");
    }
}
