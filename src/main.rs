//! HouseSkiper demo driver
//!
//! Walks a scripted booking through the configurator and prints the
//! confirmation details, standing in for the mobile front-end.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use houseskiper::models::rooms::RoomCategory;
use houseskiper::models::LoginForm;
use houseskiper::services::auth::SessionContext;
use houseskiper::{AppConfig, Services};

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load()?;

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("houseskiper={}", config.logging.level).into());

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting HouseSkiper core v{}", env!("CARGO_PKG_VERSION"));

    let services = Services::new(config);

    // Sign in
    let mut session = SessionContext::new();
    let form = LoginForm {
        email: "luisa@example.com".to_string(),
        password: "secret123".to_string(),
        remember_me: true,
    };
    session
        .login(&form)
        .map_err(|e| anyhow::anyhow!("Login rejected: {} field error(s)", e.len()))?;

    // Configure a booking
    let mut booking = services.new_booking();
    booking.toggle_room(RoomCategory::Kitchen);
    booking.increment_room(RoomCategory::Bathrooms);
    booking.drag_dirtiness(180.0, 300.0);
    booking.select_time("4:00 pm");

    let draft = booking.build_draft()?;
    tracing::info!(
        date = %draft.date,
        time = %draft.time,
        dirtiness = draft.dirtiness_level,
        "Booking draft built"
    );

    // Hand the rooms payload across the navigation boundary
    let param = draft.rooms.encode()?;
    let mut details = services.confirmation_details();
    details.merge_rooms_param(Some(&param));

    tracing::info!(
        cleaner = %details.cleaner.name,
        service = %details.service.service_type,
        total = %details.payment.total,
        "Booking confirmed"
    );
    println!("{}", serde_json::to_string_pretty(&details)?);

    Ok(())
}
