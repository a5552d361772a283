use tracing::info;
use zencare_client::client::ZencareClient;
use zencare_client::config::Config;
use zencare_client::interfaces::AppointmentService;
use zencare_client::utils::setup_logger;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logger();

    let config = Config::new();
    let email = config.credentials.email.clone();
    let password = config.credentials.password.clone();
    let client = ZencareClient::new(config);

    client.login(&email, &password).await?;

    let appointments = client.get_appointments().await?;
    info!("You have {} appointments", appointments.len());

    for appointment in &appointments {
        info!(
            "  #{} {} at {} with {} - {}",
            appointment.id,
            appointment.appointment_date,
            appointment.appointment_time,
            appointment.doctor_name.as_deref().unwrap_or("unknown"),
            appointment
                .status_display
                .as_deref()
                .unwrap_or(&appointment.status)
        );
    }

    Ok(())
}
