pub mod leaderboard;
pub mod rewards_ledger;
pub mod submission;
pub mod user_profile;
pub mod views;

pub use leaderboard::*;
pub use rewards_ledger::*;
pub use submission::*;
pub use user_profile::*;
pub use views::*;
