/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/25
******************************************************************************/
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

/// Response payload from `/auth/login/`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Long-lived refresh token; returned by the backend but not used by
    /// this client
    pub refresh: String,
    /// Bearer token attached to authenticated requests
    pub access: String,
    /// Id of the authenticated user
    pub user_id: u32,
    /// Email of the authenticated user
    pub email: String,
    /// Account role: patient, doctor, lab_technician or admin
    pub user_type: String,
    /// Whether the user finished the intake profile
    pub is_profile_completed: bool,
}

/// Response payload from `/auth/register/`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistrationResponse {
    /// Echo of the created user; the shape is owned by the backend
    pub user: serde_json::Value,
    /// Long-lived refresh token for the new account
    pub refresh: String,
    /// Access token for the new account; not persisted automatically
    pub access: String,
    /// Whether the user finished the intake profile
    pub is_profile_completed: bool,
}

/// Acknowledgement from `/auth/password-reset/`
///
/// The backend answers 200 whether or not the address is registered.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PasswordResetResponse {
    /// Human-readable confirmation message
    #[serde(default)]
    pub detail: Option<String>,
}

/// One doctor entry from `/doctors/`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Doctor {
    /// User id, referenced when booking an appointment
    pub id: u32,
    /// Contact email
    pub email: String,
    /// Given name
    pub first_name: String,
    /// Family name
    pub last_name: String,
    /// Medical profession key, e.g. "dentist"
    #[serde(default)]
    pub profession: Option<String>,
    /// Contact phone number
    #[serde(default)]
    pub phone_number: Option<String>,
    /// Practice address
    #[serde(default)]
    pub address: Option<String>,
}

impl Doctor {
    /// Full display name of the doctor
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Current user's profile from `/profile/`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    /// User id
    pub id: u32,
    /// Account email
    pub email: String,
    /// Account username
    #[serde(default)]
    pub username: Option<String>,
    /// Given name
    #[serde(default)]
    pub first_name: Option<String>,
    /// Family name
    #[serde(default)]
    pub last_name: Option<String>,
    /// Account role: patient, doctor, lab_technician or admin
    pub user_type: String,
    /// Medical profession key, set for doctor accounts
    #[serde(default)]
    pub profession: Option<String>,
    /// Contact phone number
    #[serde(default)]
    pub phone_number: Option<String>,
    /// Date of birth
    #[serde(default)]
    pub date_of_birth: Option<NaiveDate>,
    /// Postal address
    #[serde(default)]
    pub address: Option<String>,
    /// Whether the account passed verification
    #[serde(default)]
    pub is_verified: bool,
}

/// One appointment as returned by the backend
///
/// List, detail and create responses all use this shape. The intake fields
/// are optional at booking time, so they deserialize as options here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Appointment {
    /// Appointment id
    pub id: u32,
    /// Id of the doctor the appointment is with
    pub doctor: u32,
    /// Display name of the doctor, e.g. "Dr. Ana García"
    #[serde(default)]
    pub doctor_name: Option<String>,
    /// Display label of the doctor's profession
    #[serde(default)]
    pub doctor_profession: Option<String>,
    /// Display name of the patient
    #[serde(default)]
    pub patient_name: Option<String>,
    /// Calendar date of the appointment
    pub appointment_date: NaiveDate,
    /// Wall-clock time of the appointment
    pub appointment_time: NaiveTime,
    /// Lifecycle status key: pending, confirmed, completed or cancelled
    pub status: String,
    /// Display label of the status
    #[serde(default)]
    pub status_display: Option<String>,
    /// Patient gender code
    #[serde(default)]
    pub gender: Option<String>,
    /// Blood group
    #[serde(default)]
    pub blood_group: Option<String>,
    /// Height in centimeters; the backend serializes decimals as strings
    #[serde(default)]
    pub height: Option<String>,
    /// Weight in kilograms; the backend serializes decimals as strings
    #[serde(default)]
    pub weight: Option<String>,
    /// Emergency contact name
    #[serde(default)]
    pub emergency_contact_name: Option<String>,
    /// Emergency contact phone number
    #[serde(default)]
    pub emergency_contact_phone: Option<String>,
    /// Symptoms or reason for the appointment
    #[serde(default)]
    pub symptoms: Option<String>,
    /// Previous medical conditions or allergies
    #[serde(default)]
    pub medical_history: Option<String>,
    /// Medications currently being taken
    #[serde(default)]
    pub current_medications: Option<String>,
    /// Insurance provider name
    #[serde(default)]
    pub insurance_provider: Option<String>,
    /// Insurance policy number
    #[serde(default)]
    pub insurance_policy_number: Option<String>,
    /// Creation timestamp
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Last update timestamp
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Appointment {
    /// Whether the appointment has been cancelled
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.status == "cancelled"
    }
}

/// One prescription entry from `/appointment/prescriptions/`
///
/// Almost everything is optional on the backend model, so almost everything
/// is optional here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prescription {
    /// Prescription id
    pub id: u32,
    /// Id of the appointment this prescription belongs to
    #[serde(default)]
    pub appointment: Option<u32>,
    /// Id of the patient
    #[serde(default)]
    pub patient: Option<u32>,
    /// Id of the prescribing doctor
    #[serde(default)]
    pub doctor: Option<u32>,
    /// Display name of the prescribing doctor
    #[serde(default)]
    pub doctor_name: Option<String>,
    /// Display name of the patient
    #[serde(default)]
    pub patient_name: Option<String>,
    /// Symptoms recorded with the prescription
    #[serde(default)]
    pub symptoms: Option<String>,
    /// Appointment date as recorded by the backend (free-form text)
    #[serde(default)]
    pub appointment_date: Option<String>,
    /// Appointment time as recorded by the backend (free-form text)
    #[serde(default)]
    pub appointment_time: Option<String>,
    /// Prescription text
    #[serde(default)]
    pub prescription_text: Option<String>,
    /// Whether lab tests were requested
    #[serde(default)]
    pub lab_tests_required: Option<bool>,
    /// Instructions for the lab technician
    #[serde(default)]
    pub lab_instructions: Option<String>,
    /// Prescription status key
    #[serde(default)]
    pub status: Option<String>,
    /// Creation timestamp
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Last update timestamp
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}
