// ============================================================================
// OFF-CHAIN LEDGER HARNESS
// ============================================================================
//
// Stands in for the account store: profiles and submissions live in maps
// keyed the same way as their PDAs, and every call goes through the same
// helpers::ledger functions the instruction handlers use. A rejected call
// never writes back, matching transaction rollback on chain.
// ============================================================================

use std::collections::BTreeMap;

use anchor_lang::error::{Error, ERROR_CODE_OFFSET};
use anchor_lang::prelude::{Pubkey, Result};
use anchor_lang::AccountSerialize;

use crate::errors::ErrorCode;
use crate::helpers::ledger;
use crate::state::*;

pub const GENESIS: i64 = 1_700_000_000;

pub struct Harness {
    pub authority: Pubkey,
    pub ledger: RewardsLedger,
    pub board: Leaderboard,
    pub profiles: BTreeMap<Pubkey, UserProfile>,
    pub submissions: BTreeMap<(Pubkey, u64), Submission>,
    pub clock: i64,
}

impl Harness {
    pub fn new() -> Self {
        let authority = Pubkey::new_unique();
        Self {
            authority,
            ledger: RewardsLedger::new(authority, GENESIS, 254, 253),
            board: Leaderboard {
                bump: 253,
                entries: Vec::new(),
            },
            profiles: BTreeMap::new(),
            submissions: BTreeMap::new(),
            clock: GENESIS,
        }
    }

    fn tick(&mut self) -> i64 {
        self.clock += 1;
        self.clock
    }

    pub fn register(&mut self, caller: Pubkey) -> Result<u32> {
        let now = self.tick();
        // init_if_needed hands the handler a zeroed profile on first use
        let mut profile = self.profiles.get(&caller).cloned().unwrap_or_default();
        let user_id = ledger::register(&mut self.ledger, &mut profile, &mut self.board, caller, now)?;
        self.profiles.insert(caller, profile);
        Ok(user_id)
    }

    pub fn submit(&mut self, caller: Pubkey, category: u8, quantity: u8) -> Result<u64> {
        let now = self.tick();
        let record = ledger::submit_classification(
            &mut self.ledger,
            self.profiles.get_mut(&caller),
            &mut self.board,
            category,
            quantity,
            now,
        )?;
        let index = record.index;
        self.submissions.insert((caller, index), record);
        Ok(index)
    }

    pub fn stats(&self, caller: Pubkey) -> Result<UserStatsView> {
        ledger::stats(self.profiles.get(&caller))
    }

    pub fn submission(&self, caller: Pubkey, index: u64) -> Result<SubmissionView> {
        ledger::submission_view(
            self.profiles.get(&caller),
            self.submissions.get(&(caller, index)),
            index,
        )
    }

    pub fn submission_count(&self, caller: Pubkey) -> u64 {
        ledger::submission_count(self.profiles.get(&caller))
    }

    pub fn user_id(&self, caller: Pubkey) -> u32 {
        ledger::user_id(self.profiles.get(&caller))
    }

    pub fn public_stats(&self) -> PublicStats {
        ledger::public_stats(&self.ledger)
    }

    pub fn leaderboard(&self) -> Result<Vec<LeaderboardEntry>> {
        ledger::leaderboard(&self.board)
    }

    pub fn claim(&mut self, caller: Pubkey, tier: u32) -> Result<RewardClaim> {
        ledger::claim_reward(&mut self.ledger, self.profiles.get(&caller), tier)
    }

    pub fn verify(
        &mut self,
        signer: Pubkey,
        owner: Pubkey,
        owner_user_id: u32,
        index: u64,
        verified: bool,
    ) -> Result<()> {
        ledger::verify_submission(
            &self.ledger,
            &signer,
            self.profiles.get(&owner),
            owner_user_id,
            index,
            self.submissions.get_mut(&(owner, index)),
            verified,
        )
    }

    pub fn pause(&mut self, signer: Pubkey) -> Result<()> {
        ledger::set_paused(&mut self.ledger, &signer, true)
    }

    pub fn unpause(&mut self, signer: Pubkey) -> Result<()> {
        ledger::set_paused(&mut self.ledger, &signer, false)
    }

    /// Serialized image of every account, for before/after comparisons.
    pub fn snapshot(&self) -> Vec<u8> {
        let mut image = Vec::new();
        self.ledger.try_serialize(&mut image).unwrap();
        self.board.try_serialize(&mut image).unwrap();
        for (key, profile) in &self.profiles {
            image.extend_from_slice(key.as_ref());
            profile.try_serialize(&mut image).unwrap();
        }
        for ((key, index), submission) in &self.submissions {
            image.extend_from_slice(key.as_ref());
            image.extend_from_slice(&index.to_le_bytes());
            submission.try_serialize(&mut image).unwrap();
        }
        image
    }
}

/// Anchor error number carried by a failed result
pub fn code_of<T>(result: Result<T>) -> u32 {
    match result {
        Ok(_) => panic!("expected an error"),
        Err(Error::AnchorError(error)) => error.error_code_number,
        Err(other) => panic!("unexpected error: {:?}", other),
    }
}

pub fn code(error: ErrorCode) -> u32 {
    error as u32 + ERROR_CODE_OFFSET
}
