use anchor_lang::prelude::*;

/// Privacy Waste Rewards Error Codes
///
/// One code per rejected precondition. Any error aborts the whole
/// instruction, so no partial ledger update is ever committed.
#[error_code]
pub enum ErrorCode {
    // Registration
    #[msg("User already registered")]
    AlreadyRegistered,

    #[msg("User not registered")]
    NotRegistered,

    // Classification
    #[msg("Invalid waste category")]
    InvalidCategory,

    #[msg("Invalid quantity")]
    InvalidQuantity,

    #[msg("Invalid submission ID")]
    InvalidSubmissionId,

    // Access control
    #[msg("Not authorized")]
    NotAuthorized,

    #[msg("Contract is paused")]
    ContractPaused,

    // Bookkeeping
    #[msg("Arithmetic overflow")]
    MathOverflow,

    #[msg("Leaderboard entry does not match user")]
    LeaderboardMismatch,

    // Views
    #[msg("Leaderboard exceeds return data limit, use get_leaderboard_page")]
    LeaderboardTooLarge,
}
