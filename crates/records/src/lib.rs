//! # Careflow Records
//!
//! Hospital-operations domain logic for the Careflow services.
//!
//! This crate contains the record models and pure display logic behind the
//! patient, daily-round and patient-shifting pages:
//! - patient / facility / daily-round / shifting record models
//! - the shifting status lifecycle (peacetime and wartime vocabularies)
//! - display formatting for dates, names and patient ages
//! - composed text documents (shift summaries, referral letters)
//! - JSON record storage under a data directory
//!
//! **No API concerns**: HTTP routing, OpenAPI documentation and CORS belong
//! in `api-rest`.

pub mod config;
pub mod daily_round;
pub mod error;
pub mod facility;
pub mod format;
pub mod patient;
pub mod shifting;
pub mod store;
pub mod summary;

pub use config::{CareConfig, KaspConfig};
pub use daily_round::{BloodPressure, ConsciousnessLevel, DailyRound, Rhythm};
pub use error::{RecordError, RecordResult};
pub use facility::Facility;
pub use format::{format_datetime, format_name, patient_age, PatientAge};
pub use patient::{Consultation, Gender, Patient};
pub use shifting::{Assignee, ShiftRecord, ShiftStatus};
pub use store::RecordStore;
pub use summary::{shift_summary, ReferralLetter};
