use anchor_lang::prelude::*;
use super::views::SubmissionView;

/// One waste classification
///
/// Immutable once created except for `verified`, which only the ledger
/// authority can change.
///
/// PDA Seeds: ["submission_v1", wallet, index (u64 LE)]
#[account]
#[derive(Default)]
pub struct Submission {
    /// Wallet of the submitting user
    pub owner: Pubkey,

    /// Anonymous id of the submitting user
    pub user_id: u32,

    /// Position in the owner's submission list (0-based)
    pub index: u64,

    /// Waste category (1-4)
    pub category: u8,

    /// Quantity (1-100)
    pub quantity: u8,

    /// quantity * category weight
    pub points: u32,

    pub timestamp: i64,

    /// Defaults to true; the authority may override
    pub verified: bool,

    /// PDA bump seed
    pub bump: u8,
}

impl Submission {
    /// Account size: 32 + 4 + 8 + 1 + 1 + 4 + 8 + 1 + 1 = 60 bytes
    pub const LEN: usize = 32 + 4 + 8 + 1 + 1 + 4 + 8 + 1 + 1;

    pub fn view(&self) -> SubmissionView {
        SubmissionView {
            category: self.category,
            quantity: self.quantity,
            points: self.points,
            timestamp: self.timestamp,
            verified: self.verified,
        }
    }
}
