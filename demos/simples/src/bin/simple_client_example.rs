use tracing::info;
use zencare_client::client::ZencareClient;
use zencare_client::config::Config;
use zencare_client::interfaces::DirectoryService;
use zencare_client::utils::setup_logger;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    setup_logger();

    info!("Starting simple client example");

    // Create client - credentials come from the environment
    let config = Config::new();
    let email = config.credentials.email.clone();
    let password = config.credentials.password.clone();
    let client = ZencareClient::new(config);

    info!("Logging in as {}...", email);
    let session = client.login(&email, &password).await?;
    info!("✓ Logged in, user type: {}", session.user_type);

    let doctors = client.get_doctors(None).await?;
    info!("Found {} doctors", doctors.len());
    for doctor in &doctors {
        info!(
            "  #{} {} ({})",
            doctor.id,
            doctor.full_name(),
            doctor.profession.as_deref().unwrap_or("unknown")
        );
    }

    Ok(())
}
