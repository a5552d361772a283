/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/25
******************************************************************************/
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Credentials payload for `/auth/login/`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    /// Email address used as the account identifier
    pub email: String,
    /// Account password
    pub password: String,
}

/// Payload for booking an appointment via `/appointment/create/`
///
/// Field names follow the backend contract: the doctor travels as an integer
/// user id, date and time as separate values, and the free-text reason under
/// `symptoms`. Unset optional fields are omitted from the JSON body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppointmentRequest {
    /// Id of the doctor the appointment is booked with
    pub doctor: u32,
    /// Calendar date of the appointment
    pub appointment_date: NaiveDate,
    /// Wall-clock time of the appointment
    pub appointment_time: NaiveTime,
    /// Current symptoms or reason for the appointment
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symptoms: Option<String>,
    /// Patient gender code as accepted by the backend
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    /// Blood group, e.g. "A+"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blood_group: Option<String>,
    /// Height in centimeters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    /// Weight in kilograms
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    /// Emergency contact name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emergency_contact_name: Option<String>,
    /// Emergency contact phone number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emergency_contact_phone: Option<String>,
    /// Previous medical conditions or allergies
    #[serde(skip_serializing_if = "Option::is_none")]
    pub medical_history: Option<String>,
    /// Medications currently being taken
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_medications: Option<String>,
    /// Insurance provider name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insurance_provider: Option<String>,
    /// Insurance policy number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insurance_policy_number: Option<String>,
}

impl AppointmentRequest {
    /// Creates a request with the three required fields
    pub fn new(doctor: u32, appointment_date: NaiveDate, appointment_time: NaiveTime) -> Self {
        Self {
            doctor,
            appointment_date,
            appointment_time,
            symptoms: None,
            gender: None,
            blood_group: None,
            height: None,
            weight: None,
            emergency_contact_name: None,
            emergency_contact_phone: None,
            medical_history: None,
            current_medications: None,
            insurance_provider: None,
            insurance_policy_number: None,
        }
    }

    /// Sets the symptoms description
    #[must_use]
    pub fn with_symptoms(mut self, symptoms: &str) -> Self {
        self.symptoms = Some(symptoms.to_string());
        self
    }

    /// Sets the medical history
    #[must_use]
    pub fn with_medical_history(mut self, medical_history: &str) -> Self {
        self.medical_history = Some(medical_history.to_string());
        self
    }

    /// Sets the emergency contact
    #[must_use]
    pub fn with_emergency_contact(mut self, name: &str, phone: &str) -> Self {
        self.emergency_contact_name = Some(name.to_string());
        self.emergency_contact_phone = Some(phone.to_string());
        self
    }

    /// Sets the insurance details
    #[must_use]
    pub fn with_insurance(mut self, provider: &str, policy_number: &str) -> Self {
        self.insurance_provider = Some(provider.to_string());
        self.insurance_policy_number = Some(policy_number.to_string());
        self
    }
}

/// Payload for `/auth/register/`
///
/// The shape is owned by the backend; optional fields are forwarded only
/// when set and nothing is validated client-side. The backend enforces its
/// own rules, e.g. a profession being required for doctor accounts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistrationRequest {
    /// Email address, used as the unique account identifier
    pub email: String,
    /// Optional username; the backend derives one when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Account password
    pub password: String,
    /// Confirmation copy of the password, checked server-side
    pub password2: String,
    /// Given name
    pub first_name: String,
    /// Family name
    pub last_name: String,
    /// Account role: patient, doctor, lab_technician or admin
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_type: Option<String>,
    /// Medical profession key, e.g. "dentist"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profession: Option<String>,
    /// Contact phone number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    /// Date of birth
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<NaiveDate>,
    /// Postal address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl RegistrationRequest {
    /// Creates a patient registration with the required fields
    ///
    /// The password confirmation is filled from `password`.
    pub fn new(email: &str, password: &str, first_name: &str, last_name: &str) -> Self {
        Self {
            email: email.to_string(),
            username: None,
            password: password.to_string(),
            password2: password.to_string(),
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            user_type: None,
            profession: None,
            phone_number: None,
            date_of_birth: None,
            address: None,
        }
    }

    /// Sets the account role
    #[must_use]
    pub fn with_user_type(mut self, user_type: &str) -> Self {
        self.user_type = Some(user_type.to_string());
        self
    }

    /// Sets the medical profession (required by the backend for doctors)
    #[must_use]
    pub fn with_profession(mut self, profession: &str) -> Self {
        self.profession = Some(profession.to_string());
        self
    }

    /// Sets the contact phone number
    #[must_use]
    pub fn with_phone_number(mut self, phone_number: &str) -> Self {
        self.phone_number = Some(phone_number.to_string());
        self
    }
}
