//! Daily vital-sign round model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Level of consciousness recorded during a round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConsciousnessLevel {
    Alert,
    RespondsToVoice,
    RespondsToPain,
    Unresponsive,
    AgitatedOrConfused,
    OnsetOfAgitationAndConfusion,
    Unknown,
}

impl ConsciousnessLevel {
    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            ConsciousnessLevel::Alert => "Alert",
            ConsciousnessLevel::RespondsToVoice => "Responds to Voice",
            ConsciousnessLevel::RespondsToPain => "Responds to Pain",
            ConsciousnessLevel::Unresponsive => "Unresponsive",
            ConsciousnessLevel::AgitatedOrConfused => "Agitated or Confused",
            ConsciousnessLevel::OnsetOfAgitationAndConfusion => {
                "Onset of Agitation and Confusion"
            }
            ConsciousnessLevel::Unknown => "Unknown",
        }
    }
}

/// Heart rhythm classification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Rhythm {
    Regular,
    Irregular,
    Unknown,
}

/// Blood pressure reading, mmHg.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct BloodPressure {
    pub systolic: Option<i32>,
    pub diastolic: Option<i32>,
}

/// One daily vital-sign round of a consultation.
///
/// Every clinical field is optional; a round records whatever was measured.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct DailyRound {
    pub id: Uuid,
    pub consultation_id: Uuid,
    pub patient_category: Option<String>,
    pub taken_at: Option<DateTime<Utc>>,
    /// Body temperature, °F.
    pub temperature: Option<f32>,
    /// Oxygen saturation, percent.
    pub spo2: Option<f32>,
    /// Pulse rate, bpm.
    pub pulse: Option<i32>,
    pub bp: Option<BloodPressure>,
    /// Respiratory rate, bpm.
    pub resp: Option<i32>,
    pub rhythm: Option<Rhythm>,
    pub rhythm_detail: Option<String>,
    pub admitted_to: Option<String>,
    pub consciousness_level: Option<ConsciousnessLevel>,
    pub other_details: Option<String>,
    pub physical_examination_info: Option<String>,
    pub recommend_discharge: bool,
}

impl Default for DailyRound {
    fn default() -> Self {
        Self {
            id: Uuid::nil(),
            consultation_id: Uuid::nil(),
            patient_category: None,
            taken_at: None,
            temperature: None,
            spo2: None,
            pulse: None,
            bp: None,
            resp: None,
            rhythm: None,
            rhythm_detail: None,
            admitted_to: None,
            consciousness_level: None,
            other_details: None,
            physical_examination_info: None,
            recommend_discharge: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_partial_round() {
        let round: DailyRound = serde_json::from_str(
            r#"{
                "id": "7f6f4f60-0e21-4bfa-a3b6-0b2dbe65a9d1",
                "consultation_id": "2c1f77b7-3f42-4a34-9e4c-57f40e8c2c11",
                "temperature": 98.6,
                "pulse": 72
            }"#,
        )
        .expect("parse round");
        assert_eq!(round.pulse, Some(72));
        assert_eq!(round.spo2, None);
        assert!(!round.recommend_discharge);
    }

    #[test]
    fn consciousness_wire_tokens_round_trip() {
        let json = serde_json::to_string(&ConsciousnessLevel::RespondsToVoice).unwrap();
        assert_eq!(json, r#""RESPONDS_TO_VOICE""#);
        let parsed: ConsciousnessLevel = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, ConsciousnessLevel::RespondsToVoice);
        assert_eq!(parsed.label(), "Responds to Voice");
    }

    #[test]
    fn blood_pressure_fields_are_independent() {
        let bp: BloodPressure = serde_json::from_str(r#"{"systolic": 120}"#).unwrap();
        assert_eq!(bp.systolic, Some(120));
        assert_eq!(bp.diastolic, None);
    }
}
