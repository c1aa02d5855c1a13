use std::process::ExitCode;

use chrono::Utc;
use serde::Serialize;
use surplus_deals::config::Settings;
use surplus_deals::core::{claim_availability, format_distance, ClaimAvailability, DealLister};
use surplus_deals::models::Session;
use surplus_deals::services::Catalog;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Claim state for one listed deal, as seen by the configured session
#[derive(Debug, Serialize)]
struct ClaimPreview {
    #[serde(rename = "dealId")]
    deal_id: String,
    availability: ClaimAvailability,
    label: &'static str,
    price: String,
    reason: &'static str,
    pickup: String,
    distance: Option<String>,
    #[serde(rename = "expiringSoon")]
    expiring_soon: bool,
}

fn main() -> ExitCode {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Load configuration
    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    // Initialize logging; LOG_LEVEL / LOG_FORMAT take precedence over the config file
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| settings.logging.level.clone());
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| settings.logging.format.clone());

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(log_level))
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true);

    if log_format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.json().init();
    }

    info!("Starting surplus deals listing preview...");

    let catalog = match Catalog::load(&settings.catalog.path) {
        Ok(catalog) => catalog,
        Err(e) => {
            error!("Failed to load catalog from {}: {}", settings.catalog.path, e);
            return ExitCode::FAILURE;
        }
    };

    let filters = match settings.listing.to_request().to_filters() {
        Ok(filters) => filters,
        Err(e) => {
            error!("Invalid listing settings: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let session = match settings.session.role {
        Some(role) => Session::for_role(&catalog.users, role),
        None => Session::anonymous(),
    };

    info!("Session role: {:?}", session.role());

    let now = Utc::now();
    let lister = DealLister::new(settings.listing.max_results);
    let response = lister.respond(&catalog.deals, &filters, &settings.listing.query, now);

    let claims: Vec<ClaimPreview> = response
        .deals
        .iter()
        .map(|listed| {
            let availability = claim_availability(&listed.deal, &session, now);
            ClaimPreview {
                deal_id: listed.deal.id.clone(),
                availability,
                label: availability.label(&listed.deal),
                price: listed.deal.format_price(),
                reason: listed.deal.reason_tag.label(),
                pickup: listed.deal.formatted_pickup_window(),
                distance: listed.distance_km.map(format_distance),
                expiring_soon: listed.deal.is_expiring_soon(now),
            }
        })
        .collect();

    info!(
        "Returning {} of {} deals ({} filters active)",
        response.filtered_count,
        response.total_deals,
        response.active_filters
    );

    let output = serde_json::json!({
        "listing": response,
        "claims": claims,
    });

    match serde_json::to_string_pretty(&output) {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Failed to serialize listing: {}", e);
            ExitCode::FAILURE
        }
    }
}
