use chrono::{Duration, NaiveTime, Utc};
use tracing::{error, info};
use zencare_client::client::ZencareClient;
use zencare_client::config::Config;
use zencare_client::interfaces::{AppointmentService, DirectoryService};
use zencare_client::model::requests::AppointmentRequest;
use zencare_client::utils::setup_logger;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logger();

    let config = Config::new();
    let email = config.credentials.email.clone();
    let password = config.credentials.password.clone();
    let client = ZencareClient::new(config);

    client.login(&email, &password).await?;
    info!("✓ Logged in as {}", email);

    // Pick the first available dentist
    let doctors = client.get_doctors(Some("dentist")).await?;
    let Some(doctor) = doctors.first() else {
        error!("No dentists available");
        return Ok(());
    };
    info!("Booking with {} (#{})", doctor.full_name(), doctor.id);

    // Tomorrow at 10:00, inside the backend's business hours
    let date = (Utc::now() + Duration::days(1)).date_naive();
    let time = NaiveTime::from_hms_opt(10, 0, 0).expect("valid time");

    let request = AppointmentRequest::new(doctor.id, date, time)
        .with_symptoms("Tooth pain for the last two days");

    match client.book(&request).await {
        Ok(appointment) => {
            info!(
                "✓ Appointment #{} booked for {} at {} (status: {})",
                appointment.id,
                appointment.appointment_date,
                appointment.appointment_time,
                appointment.status
            );
        }
        Err(e) => {
            // The server explains rejections (slot taken, outside business
            // hours) in the error body
            error!("Booking failed: {}", e);
            if let Some(body) = e.response_body() {
                error!("Server response: {}", body);
            }
        }
    }

    Ok(())
}
