//! Patient record types mirroring the backend DTOs. Medical detail fields
//! (allergies, chronic diseases, medications) are free-form JSON documents
//! owned by the backend; the console passes them through untouched.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Patient {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: NaiveDate,
    pub gender: String,
    pub address: Option<String>,
    pub city: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
    pub phone_number: Option<String>,
    pub email: Option<String>,

    pub blood_type: Option<String>,
    pub allergies: Option<Value>,
    pub chronic_diseases: Option<Value>,
    pub current_medications: Option<Value>,

    pub has_consent: bool,
    pub gdpr_consent: bool,
    pub consent_date: Option<NaiveDateTime>,

    pub insurance_provider: Option<String>,
    pub insurance_id: Option<String>,

    pub notes: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub is_active: bool,
}

impl Patient {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Payload for opening a new patient folder.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NewPatient {
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: NaiveDate,
    pub gender: String,
    pub address: Option<String>,
    pub city: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
    pub phone_number: Option<String>,
    pub email: Option<String>,

    pub blood_type: Option<String>,
    pub allergies: Option<Value>,
    pub chronic_diseases: Option<Value>,
    pub current_medications: Option<Value>,

    pub has_consent: bool,
    pub gdpr_consent: bool,
    pub has_guardian_consent: bool,

    pub insurance_provider: Option<String>,
    pub insurance_id: Option<String>,

    pub notes: Option<String>,
}

/// Partial update; only the populated fields change.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PatientUpdate {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
    pub phone_number: Option<String>,
    pub email: Option<String>,

    pub blood_type: Option<String>,
    pub allergies: Option<Value>,
    pub chronic_diseases: Option<Value>,
    pub current_medications: Option<Value>,

    pub has_consent: Option<bool>,
    pub gdpr_consent: Option<bool>,

    pub insurance_provider: Option<String>,
    pub insurance_id: Option<String>,

    pub notes: Option<String>,
    pub is_active: Option<bool>,
}

/// One page of patient records.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PatientPage {
    pub patients: Vec<Patient>,
    pub total: u64,
    pub skip: u64,
    pub limit: u64,
}

/// Search filters; unset fields do not constrain the result.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PatientSearch {
    pub name: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub skip: u64,
    pub limit: u64,
}

impl Default for PatientSearch {
    fn default() -> Self {
        Self {
            name: None,
            date_of_birth: None,
            email: None,
            phone: None,
            skip: 0,
            limit: 100,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patient_deserializes_backend_payload() {
        let raw = r#"{
            "id": "0b9db1f2-9c5c-41a8-a917-9d62c2f5a111",
            "first_name": "Marie",
            "last_name": "Laurent",
            "date_of_birth": "1984-03-21",
            "gender": "female",
            "address": null,
            "city": "Lyon",
            "postal_code": null,
            "country": "France",
            "phone_number": null,
            "email": "marie.laurent@example.org",
            "blood_type": "A+",
            "allergies": {"pollen": "mild"},
            "chronic_diseases": null,
            "current_medications": null,
            "has_consent": true,
            "gdpr_consent": true,
            "consent_date": "2024-11-02T09:15:00",
            "insurance_provider": null,
            "insurance_id": null,
            "notes": null,
            "created_at": "2024-11-02T09:15:00",
            "updated_at": "2025-02-10T17:42:11",
            "is_active": true
        }"#;

        let patient: Patient = serde_json::from_str(raw).expect("Failed to deserialize");
        assert_eq!(patient.full_name(), "Marie Laurent");
        assert_eq!(patient.date_of_birth, NaiveDate::from_ymd_opt(1984, 3, 21).unwrap());
        assert!(patient.allergies.is_some());
    }

    #[test]
    fn search_defaults_to_first_hundred() {
        let search = PatientSearch::default();
        assert_eq!(search.skip, 0);
        assert_eq!(search.limit, 100);
        assert!(search.name.is_none());
    }
}
