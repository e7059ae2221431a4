use anchor_lang::prelude::*;

pub mod constants;
pub mod contexts;
pub mod errors;
pub mod events;
pub mod helpers;
pub mod state;

mod formal_verification;
#[cfg(test)]
mod test_harness;

pub use constants::*;
pub use contexts::*;
pub use errors::ErrorCode;
pub use events::*;
pub use helpers::ledger;
pub use helpers::math::*;
pub use state::*;

declare_id!("GQbqHpabyAdJTX5PDXUqEmYC1V92W2ty1Dcg1dEsJQ2W");

/// Privacy Waste Rewards
///
/// Anonymous participants register once, classify waste into four
/// categories and accumulate points. A registration-ordered leaderboard
/// mirrors every user's points and last activity. A single authority can
/// override verification and pause the mutating instructions.
#[program]
pub mod privacy_waste_rewards {
    use super::*;

    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        let clock = Clock::get()?;
        let authority = ctx.accounts.authority.key();

        ctx.accounts.ledger.set_inner(RewardsLedger::new(
            authority,
            clock.unix_timestamp,
            ctx.bumps.ledger,
            ctx.bumps.leaderboard,
        ));
        ctx.accounts.leaderboard.set_inner(Leaderboard {
            bump: ctx.bumps.leaderboard,
            entries: Vec::new(),
        });

        emit!(LedgerInitialized {
            authority,
            timestamp: clock.unix_timestamp,
        });

        Ok(())
    }

    // ══════════════════════════════════════════════════════════════════════
    // PARTICIPANT INSTRUCTIONS
    // ══════════════════════════════════════════════════════════════════════

    pub fn register_anonymous_user(ctx: Context<RegisterUser>) -> Result<u32> {
        let clock = Clock::get()?;
        let caller = ctx.accounts.caller.key();
        let bump = ctx.bumps.user_profile;
        let accounts = &mut *ctx.accounts;

        let user_id = ledger::register(
            &mut accounts.ledger,
            &mut accounts.user_profile,
            &mut accounts.leaderboard,
            caller,
            clock.unix_timestamp,
        )?;
        accounts.user_profile.bump = bump;

        emit!(UserRegistered {
            user_id,
            timestamp: clock.unix_timestamp,
        });

        Ok(user_id)
    }

    pub fn submit_waste_classification(
        ctx: Context<SubmitClassification>,
        category: u8,
        quantity: u8,
    ) -> Result<u64> {
        let clock = Clock::get()?;
        let bump = ctx.bumps.submission;
        let accounts = &mut *ctx.accounts;

        let record = ledger::submit_classification(
            &mut accounts.ledger,
            accounts.user_profile.as_deref_mut(),
            &mut accounts.leaderboard,
            category,
            quantity,
            clock.unix_timestamp,
        )?;
        accounts.submission.set_inner(Submission { bump, ..record });

        emit!(WasteClassified {
            user_id: record.user_id,
            submission_id: record.index,
        });
        emit!(PointsAwarded {
            user_id: record.user_id,
            points: record.points,
        });
        emit!(LeaderboardUpdated {
            user_id: record.user_id,
        });

        Ok(record.index)
    }

    pub fn claim_reward(ctx: Context<ClaimReward>, reward_tier: u32) -> Result<()> {
        let accounts = &mut *ctx.accounts;
        let claim = ledger::claim_reward(
            &mut accounts.ledger,
            accounts.user_profile.as_deref(),
            reward_tier,
        )?;

        emit!(RewardClaimed {
            user_id: claim.user_id,
            tier: claim.tier,
            min_points: claim.min_points,
        });

        Ok(())
    }

    // ══════════════════════════════════════════════════════════════════════
    // READ-ONLY INSTRUCTIONS (values returned through return data)
    // ══════════════════════════════════════════════════════════════════════

    pub fn get_my_stats(ctx: Context<ReadUser>) -> Result<UserStatsView> {
        ledger::stats(ctx.accounts.user_profile.as_deref())
    }

    pub fn get_my_submission(ctx: Context<ReadSubmission>, index: u64) -> Result<SubmissionView> {
        ledger::submission_view(
            ctx.accounts.user_profile.as_deref(),
            ctx.accounts.submission.as_deref(),
            index,
        )
    }

    pub fn get_my_submission_count(ctx: Context<ReadUser>) -> Result<u64> {
        Ok(ledger::submission_count(ctx.accounts.user_profile.as_deref()))
    }

    pub fn get_my_user_id(ctx: Context<ReadUser>) -> Result<u32> {
        Ok(ledger::user_id(ctx.accounts.user_profile.as_deref()))
    }

    pub fn get_public_stats(ctx: Context<ReadLedger>) -> Result<PublicStats> {
        Ok(ledger::public_stats(&ctx.accounts.ledger))
    }

    pub fn get_ledger_info(ctx: Context<ReadLedger>) -> Result<LedgerInfo> {
        Ok(ledger::ledger_info(&ctx.accounts.ledger))
    }

    /// Whole leaderboard in registration order. Return data is capped at
    /// 1024 bytes, so past 51 participants this fails with
    /// LeaderboardTooLarge and the board is read with get_leaderboard_page.
    pub fn get_leaderboard(ctx: Context<ReadLeaderboard>) -> Result<Vec<LeaderboardEntry>> {
        ledger::leaderboard(&ctx.accounts.leaderboard)
    }

    pub fn get_leaderboard_page(
        ctx: Context<ReadLeaderboard>,
        offset: u32,
        limit: u32,
    ) -> Result<Vec<LeaderboardEntry>> {
        Ok(ledger::leaderboard_page(&ctx.accounts.leaderboard, offset, limit))
    }

    // ══════════════════════════════════════════════════════════════════════
    // AUTHORITY INSTRUCTIONS
    // ══════════════════════════════════════════════════════════════════════

    pub fn verify_submission(
        ctx: Context<VerifySubmission>,
        owner_user_id: u32,
        submission_index: u64,
        verified: bool,
    ) -> Result<()> {
        let authority = ctx.accounts.authority.key();
        let accounts = &mut *ctx.accounts;

        ledger::verify_submission(
            &accounts.ledger,
            &authority,
            accounts.owner_profile.as_deref(),
            owner_user_id,
            submission_index,
            accounts.submission.as_deref_mut(),
            verified,
        )?;

        emit!(SubmissionVerified {
            user_id: owner_user_id,
            submission_id: submission_index,
            verified,
        });

        Ok(())
    }

    pub fn pause(ctx: Context<AuthorityControl>) -> Result<()> {
        let authority = ctx.accounts.authority.key();
        ledger::set_paused(&mut ctx.accounts.ledger, &authority, true)?;

        emit!(StatusChanged {
            paused: true,
            authority,
            timestamp: Clock::get()?.unix_timestamp,
        });
        Ok(())
    }

    pub fn unpause(ctx: Context<AuthorityControl>) -> Result<()> {
        let authority = ctx.accounts.authority.key();
        ledger::set_paused(&mut ctx.accounts.ledger, &authority, false)?;

        emit!(StatusChanged {
            paused: false,
            authority,
            timestamp: Clock::get()?.unix_timestamp,
        });
        Ok(())
    }

    pub fn transfer_authority(ctx: Context<TransferAuthority>) -> Result<()> {
        let old_authority = ctx.accounts.authority.key();
        let new_authority = ctx.accounts.new_authority.key();
        ledger::transfer_authority(&mut ctx.accounts.ledger, &old_authority, new_authority)?;

        emit!(AuthorityTransferred {
            old_authority,
            new_authority,
            timestamp: Clock::get()?.unix_timestamp,
        });
        Ok(())
    }
}
