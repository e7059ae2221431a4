use anchor_lang::prelude::*;
use crate::constants::*;
use crate::errors::ErrorCode;

/// Global ledger configuration and counters
///
/// Only one RewardsLedger account exists per program instance. Every
/// mutating instruction takes it writable, so the runtime write-lock on this
/// account is what serialises registrations, classifications and claims.
///
/// PDA Seeds: ["ledger_v1"]
#[account]
#[derive(Default)]
pub struct RewardsLedger {
    /// Single privileged principal (verify / pause / transfer)
    pub authority: Pubkey,

    /// Ledger-wide Active ⇄ Paused flag
    pub paused: bool,

    /// Id handed to the next registration (starts at 1, never reused)
    pub next_user_id: u32,

    /// Number of registered wallets
    pub total_participants: u32,

    /// Submissions recorded across all users
    pub total_submissions: u64,

    /// Reward claims recorded across all users
    pub rewards_claimed: u64,

    /// Timestamp of initialize
    pub initialized_at: i64,

    /// PDA bump seed
    pub bump: u8,

    /// Leaderboard PDA bump seed
    pub leaderboard_bump: u8,
}

impl RewardsLedger {
    /// Account size calculation:
    /// - authority: 32 bytes (Pubkey)
    /// - paused: 1 byte
    /// - next_user_id, total_participants: 4 * 2 = 8 bytes
    /// - total_submissions, rewards_claimed, initialized_at: 8 * 3 = 24 bytes
    /// - bump, leaderboard_bump: 2 bytes
    /// Total: 67 bytes
    pub const LEN: usize = 32 + 1 + 4 * 2 + 8 * 3 + 2;

    pub fn new(authority: Pubkey, now: i64, bump: u8, leaderboard_bump: u8) -> Self {
        Self {
            authority,
            paused: false,
            next_user_id: FIRST_USER_ID,
            total_participants: 0,
            total_submissions: 0,
            rewards_claimed: 0,
            initialized_at: now,
            bump,
            leaderboard_bump,
        }
    }

    pub fn ensure_active(&self) -> Result<()> {
        require!(!self.paused, ErrorCode::ContractPaused);
        Ok(())
    }

    pub fn ensure_authority(&self, caller: &Pubkey) -> Result<()> {
        require_keys_eq!(*caller, self.authority, ErrorCode::NotAuthorized);
        Ok(())
    }

    /// Hands out the next user id and advances both counters together.
    pub fn allocate_user_id(&mut self) -> Result<u32> {
        let user_id = self.next_user_id;
        let next_user_id = user_id.checked_add(1).ok_or(ErrorCode::MathOverflow)?;
        let total_participants = self
            .total_participants
            .checked_add(1)
            .ok_or(ErrorCode::MathOverflow)?;

        self.next_user_id = next_user_id;
        self.total_participants = total_participants;
        Ok(user_id)
    }

    pub fn count_submission(&mut self) -> Result<()> {
        self.total_submissions = self
            .total_submissions
            .checked_add(1)
            .ok_or(ErrorCode::MathOverflow)?;
        Ok(())
    }

    pub fn count_claim(&mut self) -> Result<()> {
        self.rewards_claimed = self
            .rewards_claimed
            .checked_add(1)
            .ok_or(ErrorCode::MathOverflow)?;
        Ok(())
    }
}
