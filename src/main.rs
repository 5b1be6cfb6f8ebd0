use quickstay::config::Settings;
use quickstay::routes::Session;
use quickstay::services::DEFAULT_CATALOG_SIZE;
use quickstay::{QuickstayError, Result};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn init_logging(settings: &Settings) {
    // LOG_LEVEL / LOG_FORMAT win over the config file
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| settings.logging.level.clone());
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| settings.logging.format.clone());

    let filter = EnvFilter::try_new(&log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    // Logs go to stderr so stdout stays clean JSON
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true);

    if log_format == "json" {
        subscriber.json().init();
    } else {
        subscriber.pretty().init();
    }
}

fn load_settings() -> Result<Settings> {
    Ok(Settings::load()?)
}

fn run(settings: Settings) -> Result<()> {
    let today = chrono::Local::now().date_naive();
    let criteria = settings.criteria.clone();

    if settings.catalog.size != DEFAULT_CATALOG_SIZE {
        info!("Using catalogue of {} listings", settings.catalog.size);
    }

    let mut session = Session::start(settings, today);

    if let Some(home) = session.home() {
        if let Some(card) = home.current() {
            info!("Front card: {} (${}/month)", card.address, card.cost);
        }
    }

    session.navigate("/matches")?;
    let view = session
        .matches()
        .ok_or_else(|| QuickstayError::RouteNotFound("/matches".to_string()))?;
    view.apply_criteria(criteria)?;

    let outcome = view.results();
    info!(
        "{} of {} listings match{}",
        outcome.len(),
        outcome.total_listings,
        view.stay_label().map(|s| format!(" ({})", s)).unwrap_or_default()
    );

    if outcome.is_empty() {
        info!("No properties match your filters.");
    }

    println!("{}", serde_json::to_string_pretty(&outcome)?);
    Ok(())
}

fn main() {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Logging is configured from settings, so a bad config is reported on stderr
    let settings = match load_settings() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(2);
        }
    };

    init_logging(&settings);

    info!("Starting Quickstay session...");

    if let Err(e) = run(settings) {
        error!("Session failed: {}", e);
        std::process::exit(1);
    }
}
