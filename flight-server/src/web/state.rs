//! Application state for the web layer.

use std::sync::Arc;

use crate::amadeus::AmadeusClient;
use crate::notify::HttpMailer;
use crate::planner::PlannerConfig;

/// Shared application state.
///
/// Contains all the services needed to handle requests. The mailer is
/// optional; without mail credentials the notification sink is simply
/// disabled.
#[derive(Clone)]
pub struct AppState {
    /// Flight-offers API client
    pub amadeus: Arc<AmadeusClient>,

    /// Itinerary search configuration
    pub config: Arc<PlannerConfig>,

    /// Mail-relay client, when configured
    pub mailer: Option<Arc<HttpMailer>>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(amadeus: AmadeusClient, config: PlannerConfig, mailer: Option<HttpMailer>) -> Self {
        Self {
            amadeus: Arc::new(amadeus),
            config: Arc::new(config),
            mailer: mailer.map(Arc::new),
        }
    }
}
