//! Client helpers for the appointment endpoints. Window ordering is checked
//! locally before the call; the backend enforces it again.

use crate::api::ApiClient;
use crate::error::ApiError;
use crate::features::appointments::types::{
    Appointment, AppointmentPage, AppointmentUpdate, NewAppointment,
};
use chrono::NaiveDateTime;
use uuid::Uuid;

/// Books a new appointment.
pub async fn schedule(
    api: &ApiClient,
    appointment: &NewAppointment,
) -> Result<Appointment, ApiError> {
    ensure_window(appointment.start_time, appointment.end_time)?;
    api.post("/api/appointments/", appointment).await
}

/// Fetches a single appointment by id.
pub async fn fetch(api: &ApiClient, id: Uuid) -> Result<Appointment, ApiError> {
    api.get(&format!("/api/appointments/{id}")).await
}

/// Applies a partial update to an appointment.
pub async fn update(
    api: &ApiClient,
    id: Uuid,
    changes: &AppointmentUpdate,
) -> Result<Appointment, ApiError> {
    if let (Some(start_time), Some(end_time)) = (changes.start_time, changes.end_time) {
        ensure_window(start_time, end_time)?;
    }
    api.put(&format!("/api/appointments/{id}"), changes).await
}

/// Cancels an appointment. The backend answers 204.
pub async fn cancel(api: &ApiClient, id: Uuid) -> Result<(), ApiError> {
    api.delete(&format!("/api/appointments/{id}")).await
}

/// Fetches one page of a patient's appointments.
pub async fn list_for_patient(
    api: &ApiClient,
    patient_id: Uuid,
    skip: u64,
    limit: u64,
) -> Result<AppointmentPage, ApiError> {
    api.get(&format!(
        "/api/appointments/patient/{patient_id}?skip={skip}&limit={limit}"
    ))
    .await
}

/// Fetches one page of a doctor's appointments.
pub async fn list_for_doctor(
    api: &ApiClient,
    doctor_id: Uuid,
    skip: u64,
    limit: u64,
) -> Result<AppointmentPage, ApiError> {
    api.get(&format!(
        "/api/appointments/doctor/{doctor_id}?skip={skip}&limit={limit}"
    ))
    .await
}

/// Fetches the appointments for one calendar month.
pub async fn calendar(api: &ApiClient, year: i32, month: u32) -> Result<AppointmentPage, ApiError> {
    if !(1..=12).contains(&month) {
        return Err(ApiError::Config(format!(
            "Calendar month must be between 1 and 12, got {month}."
        )));
    }
    api.get(&format!("/api/appointments/calendar?year={year}&month={month}"))
        .await
}

fn ensure_window(start_time: NaiveDateTime, end_time: NaiveDateTime) -> Result<(), ApiError> {
    if end_time <= start_time {
        return Err(ApiError::Config(
            "Appointment end time must be after the start time.".to_string(),
        ));
    }
    Ok(())
}
