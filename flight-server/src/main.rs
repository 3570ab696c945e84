use std::net::SocketAddr;

use flight_server::amadeus::{AmadeusClient, AmadeusConfig};
use flight_server::notify::{HttpMailer, MailerConfig};
use flight_server::planner::PlannerConfig;
use flight_server::web::{AppState, create_router};

/// Default listening port.
const DEFAULT_PORT: u16 = 5000;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "flight_server=debug,tower_http=info".into()),
        )
        .init();

    // Get credentials from environment
    let api_key = std::env::var("AMADEUS_API_KEY").unwrap_or_else(|_| {
        eprintln!("Warning: AMADEUS_API_KEY not set. API calls will fail.");
        String::new()
    });
    let api_secret = std::env::var("AMADEUS_API_SECRET").unwrap_or_else(|_| {
        eprintln!("Warning: AMADEUS_API_SECRET not set. API calls will fail.");
        String::new()
    });

    // Create Amadeus client
    let mut amadeus_config = AmadeusConfig::new(&api_key, &api_secret);
    if let Ok(base_url) = std::env::var("AMADEUS_BASE_URL") {
        amadeus_config = amadeus_config.with_base_url(base_url);
    }
    let amadeus = AmadeusClient::new(amadeus_config).expect("Failed to create Amadeus client");

    // Create the mailer when fully configured
    let mailer = match (
        std::env::var("MAIL_API_URL"),
        std::env::var("MAIL_API_KEY"),
        std::env::var("MAIL_FROM"),
    ) {
        (Ok(api_url), Ok(api_key), Ok(from)) => {
            let config = MailerConfig::new(api_url, api_key, from);
            Some(HttpMailer::new(config).expect("Failed to create mailer"))
        }
        _ => {
            eprintln!("Warning: MAIL_API_URL/MAIL_API_KEY/MAIL_FROM not set. Email disabled.");
            None
        }
    };

    // Create planner config (regions, buffer table, extra travel time)
    let planner_config = PlannerConfig::default();

    // Build app state
    let state = AppState::new(amadeus, planner_config, mailer);

    // Create router
    let app = create_router(state);

    let port = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(DEFAULT_PORT);

    // Bind and serve
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    println!("Flight Itinerary Planner listening on http://{addr}");
    println!();
    println!("API Endpoints:");
    println!("  GET  /health   - Health check");
    println!("  GET  /flights  - Search the best around-the-world itinerary");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
