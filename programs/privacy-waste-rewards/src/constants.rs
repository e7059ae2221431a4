// ══════════════════════════════════════════════════════════════════════════════
// PDA SEEDS
// ══════════════════════════════════════════════════════════════════════════════

/// Rewards ledger PDA seed (one per program instance)
pub const LEDGER_SEED: &[u8] = b"ledger_v1";

/// User profile PDA seed: ["user_v1", wallet]
pub const USER_SEED: &[u8] = b"user_v1";

/// Submission PDA seed: ["submission_v1", wallet, index (u64 LE)]
pub const SUBMISSION_SEED: &[u8] = b"submission_v1";

/// Leaderboard PDA seed (one per program instance)
pub const LEADERBOARD_SEED: &[u8] = b"leaderboard_v1";

// ══════════════════════════════════════════════════════════════════════════════
// USER IDS
// ══════════════════════════════════════════════════════════════════════════════

/// Returned for wallets that never registered
pub const UNREGISTERED_USER_ID: u32 = 0;

/// First id handed out by the ledger
pub const FIRST_USER_ID: u32 = 1;

// ══════════════════════════════════════════════════════════════════════════════
// WASTE CATEGORIES
// ══════════════════════════════════════════════════════════════════════════════

pub const CATEGORY_RECYCLABLE: u8 = 1;
pub const CATEGORY_ORGANIC: u8 = 2;
pub const CATEGORY_HAZARDOUS: u8 = 3;
pub const CATEGORY_GENERAL: u8 = 4;

/// Points per unit of quantity
pub const RECYCLABLE_WEIGHT: u32 = 10;
pub const ORGANIC_WEIGHT: u32 = 8;
pub const HAZARDOUS_WEIGHT: u32 = 15;
pub const GENERAL_WEIGHT: u32 = 5;

/// Accepted quantity range per submission (inclusive)
pub const MIN_QUANTITY: u8 = 1;
pub const MAX_QUANTITY: u8 = 100;

// ══════════════════════════════════════════════════════════════════════════════
// REWARD TIERS
// ══════════════════════════════════════════════════════════════════════════════
// Thresholds are advisory: claim_reward reports them but never enforces them.

pub const TIER_BRONZE: u32 = 1;
pub const TIER_SILVER: u32 = 2;
pub const TIER_GOLD: u32 = 3;
pub const TIER_PLATINUM: u32 = 4;

pub const BRONZE_MIN_POINTS: u64 = 100;
pub const SILVER_MIN_POINTS: u64 = 500;
pub const GOLD_MIN_POINTS: u64 = 1_000;
pub const PLATINUM_MIN_POINTS: u64 = 2_500;

// ══════════════════════════════════════════════════════════════════════════════
// RETURN DATA LIMITS
// ══════════════════════════════════════════════════════════════════════════════

/// Solana's return data cap (bytes)
pub const MAX_RETURN_DATA: usize = 1024;

/// A page is a 4-byte Vec length prefix plus 20 bytes per entry, so 50
/// entries always fit.
pub const MAX_LEADERBOARD_PAGE: u32 = 50;
