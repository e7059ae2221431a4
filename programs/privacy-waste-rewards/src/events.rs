use anchor_lang::prelude::*;

// ══════════════════════════════════════════════════════════════════════════════
// INITIALIZATION EVENTS
// ══════════════════════════════════════════════════════════════════════════════

/// Emitted once when the ledger and leaderboard accounts are created
#[event]
pub struct LedgerInitialized {
    pub authority: Pubkey,
    pub timestamp: i64,
}

// ══════════════════════════════════════════════════════════════════════════════
// PARTICIPANT EVENTS
// ══════════════════════════════════════════════════════════════════════════════

/// Emitted when a wallet registers and receives its anonymous id
#[event]
pub struct UserRegistered {
    pub user_id: u32,
    pub timestamp: i64,
}

/// Emitted for every accepted classification
#[event]
pub struct WasteClassified {
    pub user_id: u32,
    pub submission_id: u64,
}

/// Emitted alongside WasteClassified with the points credited
#[event]
pub struct PointsAwarded {
    pub user_id: u32,
    pub points: u32,
}

/// Emitted whenever a user's leaderboard entry changes
#[event]
pub struct LeaderboardUpdated {
    pub user_id: u32,
}

/// Emitted on reward claims. `min_points` is the advisory tier threshold
/// (0 when the tier is outside the published table).
#[event]
pub struct RewardClaimed {
    pub user_id: u32,
    pub tier: u32,
    pub min_points: u64,
}

// ══════════════════════════════════════════════════════════════════════════════
// AUTHORITY EVENTS
// ══════════════════════════════════════════════════════════════════════════════

/// Emitted when the authority flips a submission's verified flag
#[event]
pub struct SubmissionVerified {
    pub user_id: u32,
    pub submission_id: u64,
    pub verified: bool,
}

/// Emitted on pause / unpause
#[event]
pub struct StatusChanged {
    pub paused: bool,
    pub authority: Pubkey,
    pub timestamp: i64,
}

/// Emitted when the authority hands the role to another key
#[event]
pub struct AuthorityTransferred {
    pub old_authority: Pubkey,
    pub new_authority: Pubkey,
    pub timestamp: i64,
}
