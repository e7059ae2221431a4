use anchor_lang::prelude::*;

// Return-data payloads for the read-only instructions.

/// get_my_stats
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UserStatsView {
    pub points: u64,
    pub recyclable_count: u32,
    pub organic_count: u32,
    pub hazardous_count: u32,
    pub general_count: u32,
}

/// get_my_submission
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SubmissionView {
    pub category: u8,
    pub quantity: u8,
    pub points: u32,
    pub timestamp: i64,
    pub verified: bool,
}

/// get_public_stats
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PublicStats {
    pub total_users: u32,
    pub total_submissions: u64,
}

/// get_ledger_info
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LedgerInfo {
    pub authority: Pubkey,
    pub paused: bool,
    pub next_user_id: u32,
    pub total_participants: u32,
    pub total_submissions: u64,
    pub rewards_claimed: u64,
}

/// Outcome of claim_reward, mirrored into the RewardClaimed event
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RewardClaim {
    pub user_id: u32,
    pub tier: u32,
    pub min_points: u64,
}
