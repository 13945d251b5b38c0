pub mod args {
    pub mod types;
    pub mod validation;

    pub use types::{Args, args_checks};
}
pub mod cache;
pub mod controller {
    pub mod bracket;
    pub mod espn;
    pub mod games;
    pub mod league;
    pub mod local;
    pub mod matchups;
    pub mod players;
    pub mod roster;
    pub mod sleeper;
    pub mod transactions;
    pub mod week;
}
pub mod error;
pub mod model;
pub mod storage;

use chrono::FixedOffset;
use std::sync::Arc;

use controller::espn::EspnClient;
use controller::players::PlayerCatalog;
use controller::sleeper::SleeperClient;
use storage::DocumentStore;

pub use error::{AppError, AppResult};

/// Everything a request handler needs, shared across workers.
#[derive(Clone)]
pub struct AppState {
    pub sleeper: SleeperClient,
    pub espn: EspnClient,
    pub players: Arc<PlayerCatalog>,
    pub store: DocumentStore,
    pub tz: FixedOffset,
}
