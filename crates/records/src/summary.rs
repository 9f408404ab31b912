//! Composed text documents for the shifting pages.
//!
//! Two renderings of a shift record live here: the short clipboard summary
//! offered on the details page, and the printable referral letter. Both are
//! deterministic functions of the record, the configuration and an explicit
//! `as_of` date.

use chrono::NaiveDate;

use crate::config::CareConfig;
use crate::format::format_datetime;
use crate::shifting::ShiftRecord;

const MISSING: &str = "--";

fn or_missing(value: Option<&str>) -> &str {
    value.unwrap_or(MISSING)
}

/// The plain-text patient-shift summary copied to the clipboard.
///
/// One `Label: value` line per field; the facility-preference line is only
/// present under the wartime workflow.
pub fn shift_summary(record: &ShiftRecord, cfg: &CareConfig, as_of: NaiveDate) -> String {
    let patient = &record.patient;
    let age = patient
        .age(as_of)
        .map(|a| a.abbreviated())
        .unwrap_or_default();

    let mut lines = vec![
        format!("Name: {}", patient.name),
        format!("Age: {age}"),
        format!(
            "Origin facility: {}",
            or_missing(record.origin_facility.as_ref().map(|f| f.name.as_str()))
        ),
        format!(
            "Contact number: {}",
            or_missing(patient.phone_number.as_deref())
        ),
        format!("Address: {}", or_missing(patient.address.as_deref())),
        format!("Reason: {}", or_missing(record.reason.as_deref())),
    ];
    if cfg.wartime_shifting() {
        lines.push(format!(
            "Facility preference: {}",
            or_missing(record.assigned_facility_type.as_deref())
        ));
    }

    lines.join("\n")
}

/// A printable patient referral letter.
///
/// Composition pulls the display fields out of the record once; rendering is
/// plain string formatting so the letter can be printed, attached or
/// archived without further lookups.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReferralLetter {
    /// Issuing hospital. KASP requests substitute the programme's
    /// supporting unit for the origin facility.
    pub hospital_name: String,
    pub patient_name: String,
    pub patient_age: String,
    pub patient_gender: String,
    pub patient_phone: String,
    /// Address block, one element per printed line.
    pub address_lines: Vec<String>,
    pub date_of_admission: String,
    pub unique_id: String,
    pub patient_no: String,
    pub referred_to: String,
    pub reason: String,
    pub treatment_summary: String,
    /// Link a recipient can follow to verify the letter.
    pub verification_url: String,
}

impl ReferralLetter {
    /// Compose a letter from a shift record.
    pub fn compose(record: &ShiftRecord, cfg: &CareConfig, as_of: NaiveDate) -> Self {
        let patient = &record.patient;
        let consultation = patient.last_consultation.as_ref();

        let hospital_name = if record.is_kasp {
            "District Program Management Supporting Unit".to_string()
        } else {
            record
                .origin_facility
                .as_ref()
                .map(|f| f.name.clone())
                .unwrap_or_else(|| MISSING.into())
        };

        let mut address_lines = vec![patient
            .address
            .clone()
            .unwrap_or_else(|| MISSING.into())];
        if patient.is_domestic() {
            if let (Some(ward), Some(local_body)) = (&patient.ward, &patient.local_body) {
                address_lines.push(format!("{ward}, {local_body}"));
            }
            address_lines.push(patient.district.clone().unwrap_or_else(|| MISSING.into()));
            if let Some(state) = &patient.state {
                address_lines.push(state.clone());
            }
        }

        Self {
            hospital_name,
            patient_name: patient.name.clone(),
            patient_age: patient
                .age(as_of)
                .map(|a| a.abbreviated())
                .unwrap_or_else(|| MISSING.into()),
            patient_gender: patient
                .gender
                .map(|g| g.label().to_string())
                .unwrap_or_else(|| MISSING.into()),
            patient_phone: or_missing(patient.phone_number.as_deref()).into(),
            address_lines,
            date_of_admission: consultation
                .and_then(|c| c.admission_date())
                .map(|d| format_datetime(&d))
                .unwrap_or_else(|| MISSING.into()),
            unique_id: record.id.to_string(),
            patient_no: consultation
                .and_then(|c| c.patient_no.clone())
                .unwrap_or_else(|| MISSING.into()),
            referred_to: record
                .assigned_facility_name()
                .unwrap_or(MISSING)
                .to_string(),
            reason: or_missing(record.reason.as_deref()).into(),
            treatment_summary: consultation
                .and_then(|c| c.treatment_plan.clone())
                .unwrap_or_else(|| MISSING.into()),
            verification_url: format!("{}/shifting/{}", cfg.base_url(), record.id),
        }
    }

    /// Render the letter as plain text for printing.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        out.push_str("REFERRAL LETTER\n\n");
        out.push_str(&format!("Name of hospital: {}\n\n", self.hospital_name));

        out.push_str("Patient Information\n");
        out.push_str(&format!("Name: {}\n", self.patient_name));
        out.push_str(&format!("Age: {}\n", self.patient_age));
        out.push_str(&format!("Gender: {}\n", self.patient_gender));
        out.push_str(&format!("Phone: {}\n\n", self.patient_phone));

        out.push_str("Address\n");
        for line in &self.address_lines {
            out.push_str(line);
            out.push('\n');
        }
        out.push('\n');

        out.push_str(&format!("Date of admission: {}\n", self.date_of_admission));
        out.push_str(&format!("Unique id: {}\n", self.unique_id));
        out.push_str(&format!("Patient no: {}\n", self.patient_no));
        out.push_str(&format!("Referred to: {}\n", self.referred_to));
        out.push_str(&format!("Reason for referral: {}\n", self.reason));
        out.push_str(&format!("Treatment summary: {}\n\n", self.treatment_summary));

        out.push_str(&self.verification_url);
        out.push('\n');
        out
    }
}
