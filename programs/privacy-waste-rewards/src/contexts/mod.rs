use anchor_lang::prelude::*;
use crate::constants::*;
use crate::errors::ErrorCode;
use crate::state::*;

// ACCOUNTS - Instruction account validation structs
//
// User profiles and submissions that may not exist are Option<Account<..>>:
// clients pass the program id in their place, and the handler maps the
// absence to NotRegistered / InvalidSubmissionId / the 0 sentinel.

/// Index the caller's next submission will be stored at
pub fn next_submission_index(profile: &Option<Account<'_, UserProfile>>) -> u64 {
    profile.as_ref().map_or(0, |profile| profile.submission_count)
}

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,
    #[account(init, payer = authority, space = 8 + RewardsLedger::LEN, seeds = [LEDGER_SEED], bump)]
    pub ledger: Account<'info, RewardsLedger>,
    #[account(init, payer = authority, space = 8 + Leaderboard::space(0), seeds = [LEADERBOARD_SEED], bump)]
    pub leaderboard: Account<'info, Leaderboard>,
    pub system_program: Program<'info, System>,
}

/// RegisterUser - create (or reject) the caller's profile
///
/// The leaderboard grows by one entry; if registration is rejected the
/// whole transaction, realloc included, is rolled back.
#[derive(Accounts)]
pub struct RegisterUser<'info> {
    #[account(mut)]
    pub caller: Signer<'info>,
    #[account(mut, seeds = [LEDGER_SEED], bump = ledger.bump)]
    pub ledger: Account<'info, RewardsLedger>,
    #[account(
        mut,
        seeds = [LEADERBOARD_SEED],
        bump = ledger.leaderboard_bump,
        realloc = 8 + Leaderboard::space(leaderboard.entries.len() + 1),
        realloc::payer = caller,
        realloc::zero = false
    )]
    pub leaderboard: Account<'info, Leaderboard>,
    #[account(
        init_if_needed,
        payer = caller,
        space = 8 + UserProfile::LEN,
        seeds = [USER_SEED, caller.key().as_ref()],
        bump
    )]
    pub user_profile: Account<'info, UserProfile>,
    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
pub struct SubmitClassification<'info> {
    #[account(mut)]
    pub caller: Signer<'info>,
    #[account(mut, seeds = [LEDGER_SEED], bump = ledger.bump)]
    pub ledger: Account<'info, RewardsLedger>,
    #[account(mut, seeds = [LEADERBOARD_SEED], bump = ledger.leaderboard_bump)]
    pub leaderboard: Account<'info, Leaderboard>,
    #[account(mut, seeds = [USER_SEED, caller.key().as_ref()], bump)]
    pub user_profile: Option<Account<'info, UserProfile>>,
    #[account(
        init,
        payer = caller,
        space = 8 + Submission::LEN,
        seeds = [
            SUBMISSION_SEED,
            caller.key().as_ref(),
            next_submission_index(&user_profile).to_le_bytes().as_ref()
        ],
        bump
    )]
    pub submission: Account<'info, Submission>,
    pub system_program: Program<'info, System>,
}

/// ReadUser - read-only views keyed by wallet
///
/// The wallet does not need to sign, so unauthenticated polling works.
#[derive(Accounts)]
pub struct ReadUser<'info> {
    /// CHECK: any wallet; only used to derive the profile PDA
    pub caller: UncheckedAccount<'info>,
    #[account(seeds = [USER_SEED, caller.key().as_ref()], bump)]
    pub user_profile: Option<Account<'info, UserProfile>>,
}

#[derive(Accounts)]
#[instruction(index: u64)]
pub struct ReadSubmission<'info> {
    /// CHECK: any wallet; only used to derive PDAs
    pub caller: UncheckedAccount<'info>,
    #[account(seeds = [USER_SEED, caller.key().as_ref()], bump)]
    pub user_profile: Option<Account<'info, UserProfile>>,
    #[account(seeds = [SUBMISSION_SEED, caller.key().as_ref(), index.to_le_bytes().as_ref()], bump)]
    pub submission: Option<Account<'info, Submission>>,
}

#[derive(Accounts)]
pub struct ReadLedger<'info> {
    #[account(seeds = [LEDGER_SEED], bump = ledger.bump)]
    pub ledger: Account<'info, RewardsLedger>,
}

#[derive(Accounts)]
pub struct ReadLeaderboard<'info> {
    #[account(seeds = [LEDGER_SEED], bump = ledger.bump)]
    pub ledger: Account<'info, RewardsLedger>,
    #[account(seeds = [LEADERBOARD_SEED], bump = ledger.leaderboard_bump)]
    pub leaderboard: Account<'info, Leaderboard>,
}

#[derive(Accounts)]
pub struct ClaimReward<'info> {
    pub caller: Signer<'info>,
    #[account(mut, seeds = [LEDGER_SEED], bump = ledger.bump)]
    pub ledger: Account<'info, RewardsLedger>,
    #[account(seeds = [USER_SEED, caller.key().as_ref()], bump)]
    pub user_profile: Option<Account<'info, UserProfile>>,
}

/// VerifySubmission - authority override of a submission's verified flag
///
/// owner_profile / submission are matched against (owner_user_id, index)
/// in the handler; any mismatch is InvalidSubmissionId.
#[derive(Accounts)]
pub struct VerifySubmission<'info> {
    #[account(seeds = [LEDGER_SEED], bump = ledger.bump, constraint = authority.key() == ledger.authority @ ErrorCode::NotAuthorized)]
    pub ledger: Account<'info, RewardsLedger>,
    pub authority: Signer<'info>,
    pub owner_profile: Option<Account<'info, UserProfile>>,
    #[account(mut)]
    pub submission: Option<Account<'info, Submission>>,
}

#[derive(Accounts)]
pub struct AuthorityControl<'info> {
    #[account(mut, seeds = [LEDGER_SEED], bump = ledger.bump, constraint = authority.key() == ledger.authority @ ErrorCode::NotAuthorized)]
    pub ledger: Account<'info, RewardsLedger>,
    pub authority: Signer<'info>,
}

#[derive(Accounts)]
pub struct TransferAuthority<'info> {
    #[account(mut, seeds = [LEDGER_SEED], bump = ledger.bump, constraint = authority.key() == ledger.authority @ ErrorCode::NotAuthorized)]
    pub ledger: Account<'info, RewardsLedger>,
    pub authority: Signer<'info>,
    /// CHECK: New authority
    pub new_authority: AccountInfo<'info>,
}
