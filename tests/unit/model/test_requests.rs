use assert_json_diff::assert_json_eq;
use chrono::{NaiveDate, NaiveTime};
use serde_json::json;
use zencare_client::model::requests::{AppointmentRequest, LoginRequest, RegistrationRequest};

fn sample_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
}

fn sample_time() -> NaiveTime {
    NaiveTime::from_hms_opt(10, 0, 0).unwrap()
}

#[test]
fn appointment_request_uses_backend_field_names() {
    let request = AppointmentRequest::new(5, sample_date(), sample_time()).with_symptoms("x");

    let value = serde_json::to_value(&request).unwrap();
    assert_json_eq!(
        value,
        json!({
            "doctor": 5,
            "appointment_date": "2024-01-01",
            "appointment_time": "10:00:00",
            "symptoms": "x"
        })
    );
}

#[test]
fn appointment_request_omits_unset_fields() {
    let request = AppointmentRequest::new(5, sample_date(), sample_time());

    let value = serde_json::to_value(&request).unwrap();
    let object = value.as_object().unwrap();
    assert_eq!(object.len(), 3);
    assert!(object.get("symptoms").is_none());
    assert!(object.get("gender").is_none());
    assert!(object.get("insurance_provider").is_none());
}

#[test]
fn appointment_request_doctor_is_integer() {
    let request = AppointmentRequest::new(5, sample_date(), sample_time());
    let value = serde_json::to_value(&request).unwrap();
    assert!(value["doctor"].is_u64());
    assert_eq!(value["doctor"], 5);
}

#[test]
fn appointment_request_builders_fill_pairs() {
    let request = AppointmentRequest::new(5, sample_date(), sample_time())
        .with_emergency_contact("Luz Vidal", "+34600000000")
        .with_insurance("Sanitas", "POL-123")
        .with_medical_history("asthma");

    assert_eq!(request.emergency_contact_name.as_deref(), Some("Luz Vidal"));
    assert_eq!(
        request.emergency_contact_phone.as_deref(),
        Some("+34600000000")
    );
    assert_eq!(request.insurance_provider.as_deref(), Some("Sanitas"));
    assert_eq!(request.insurance_policy_number.as_deref(), Some("POL-123"));
    assert_eq!(request.medical_history.as_deref(), Some("asthma"));
}

#[test]
fn login_request_serializes_credentials() {
    let request = LoginRequest {
        email: "ana@example.com".to_string(),
        password: "secret".to_string(),
    };

    let value = serde_json::to_value(&request).unwrap();
    assert_json_eq!(
        value,
        json!({"email": "ana@example.com", "password": "secret"})
    );
}

#[test]
fn registration_request_fills_password_confirmation() {
    let request = RegistrationRequest::new("ana@example.com", "secret", "Ana", "López");
    assert_eq!(request.password2, "secret");

    let value = serde_json::to_value(&request).unwrap();
    assert_eq!(value["password"], "secret");
    assert_eq!(value["password2"], "secret");
    assert!(value.get("user_type").is_none());
    assert!(value.get("profession").is_none());
}

#[test]
fn registration_request_doctor_builder() {
    let request = RegistrationRequest::new("eva@example.com", "secret", "Eva", "Ruiz")
        .with_user_type("doctor")
        .with_profession("dentist")
        .with_phone_number("+34911111111");

    let value = serde_json::to_value(&request).unwrap();
    assert_eq!(value["user_type"], "doctor");
    assert_eq!(value["profession"], "dentist");
    assert_eq!(value["phone_number"], "+34911111111");
}
