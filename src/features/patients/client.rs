//! Client helpers for the patient endpoints. Input that the backend would
//! reject anyway (a birth date in the future) fails locally without a network
//! call; everything else is the backend's decision.

use crate::api::ApiClient;
use crate::error::ApiError;
use crate::features::patients::types::{
    NewPatient, Patient, PatientPage, PatientSearch, PatientUpdate,
};
use chrono::{NaiveDate, Utc};
use uuid::Uuid;

/// Opens a new patient folder.
pub async fn create(api: &ApiClient, patient: &NewPatient) -> Result<Patient, ApiError> {
    ensure_birth_date(patient.date_of_birth)?;
    api.post("/api/patients/", patient).await
}

/// Fetches a single patient folder by id.
pub async fn fetch(api: &ApiClient, id: Uuid) -> Result<Patient, ApiError> {
    api.get(&format!("/api/patients/{id}")).await
}

/// Applies a partial update to a patient folder.
pub async fn update(
    api: &ApiClient,
    id: Uuid,
    changes: &PatientUpdate,
) -> Result<Patient, ApiError> {
    if let Some(date_of_birth) = changes.date_of_birth {
        ensure_birth_date(date_of_birth)?;
    }
    api.put(&format!("/api/patients/{id}"), changes).await
}

/// Archives a patient folder. The backend answers 204.
pub async fn remove(api: &ApiClient, id: Uuid) -> Result<(), ApiError> {
    api.delete(&format!("/api/patients/{id}")).await
}

/// Fetches one page of patient folders.
pub async fn list(api: &ApiClient, skip: u64, limit: u64) -> Result<PatientPage, ApiError> {
    api.get(&format!("/api/patients/?skip={skip}&limit={limit}"))
        .await
}

/// Searches patient folders by the populated filters.
pub async fn search(api: &ApiClient, query: &PatientSearch) -> Result<PatientPage, ApiError> {
    api.post("/api/patients/search", query).await
}

fn ensure_birth_date(date_of_birth: NaiveDate) -> Result<(), ApiError> {
    if date_of_birth > Utc::now().date_naive() {
        return Err(ApiError::Config(
            "Date of birth cannot be in the future.".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn birth_date_in_the_future_is_rejected() {
        let tomorrow = Utc::now().date_naive() + Duration::days(1);
        assert!(matches!(
            ensure_birth_date(tomorrow),
            Err(ApiError::Config(_))
        ));
    }

    #[test]
    fn birth_date_today_or_earlier_passes() {
        let today = Utc::now().date_naive();
        assert!(ensure_birth_date(today).is_ok());
        assert!(ensure_birth_date(today - Duration::days(10_000)).is_ok());
    }
}
