pub mod bracket;
pub mod docs;
pub mod league;
pub mod matchup;
pub mod player;
pub mod scoreboard;
pub mod state;
pub mod transaction;
pub mod utils;

pub use bracket::*;
pub use docs::*;
pub use league::*;
pub use matchup::*;
pub use player::*;
pub use scoreboard::*;
pub use state::*;
pub use transaction::*;
pub use utils::*;
