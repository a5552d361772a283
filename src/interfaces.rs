use crate::error::AppError;
use crate::model::requests::AppointmentRequest;
use crate::model::responses::{Appointment, Doctor, Prescription, UserProfile};
use async_trait::async_trait;

/// Interface for appointment operations
#[async_trait]
pub trait AppointmentService: Send + Sync {
    /// Books a new appointment for the authenticated patient
    ///
    /// The backend validates the slot: the doctor must exist, the time must
    /// be in the future during business hours, and the slot must be free.
    async fn book(&self, request: &AppointmentRequest) -> Result<Appointment, AppError>;

    /// Lists the appointments visible to the authenticated user
    ///
    /// Patients see their own appointments, doctors the ones assigned to
    /// them.
    async fn get_appointments(&self) -> Result<Vec<Appointment>, AppError>;

    /// Fetches a single appointment by id
    async fn get_appointment(&self, id: u32) -> Result<Appointment, AppError>;

    /// Cancels an appointment
    ///
    /// The backend only allows patients to cancel their own appointments.
    async fn cancel_appointment(&self, id: u32) -> Result<Appointment, AppError>;

    /// Lists pending and confirmed appointments for the authenticated doctor
    async fn get_pending_appointments(&self) -> Result<Vec<Appointment>, AppError>;

    /// Lists prescriptions visible to the authenticated user
    async fn get_prescriptions(&self) -> Result<Vec<Prescription>, AppError>;
}

/// Interface for directory and profile lookups
#[async_trait]
pub trait DirectoryService: Send + Sync {
    /// Lists doctors, optionally filtered by profession
    async fn get_doctors(&self, profession: Option<&str>) -> Result<Vec<Doctor>, AppError>;

    /// Fetches the authenticated user's profile
    async fn get_profile(&self) -> Result<UserProfile, AppError>;
}
