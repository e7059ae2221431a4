use anchor_lang::prelude::*;
use crate::constants::{MAX_RETURN_DATA, UNREGISTERED_USER_ID};
use crate::errors::ErrorCode;
use crate::helpers::math::{points_for, tier_min_points, validate_quantity, WasteCategory};
use crate::state::*;

// ══════════════════════════════════════════════════════════════════════════════
// LEDGER OPERATIONS
// ══════════════════════════════════════════════════════════════════════════════
// Account-agnostic core of every instruction. Handlers load accounts, read the
// clock and emit events; these functions validate and mutate plain state.
//
// Each mutating operation checks every precondition before writing, and
// mutates clones that are committed only once all steps succeeded.

fn registered(profile: Option<&UserProfile>) -> Result<&UserProfile> {
    match profile {
        Some(profile) if profile.is_registered() => Ok(profile),
        _ => err!(ErrorCode::NotRegistered),
    }
}

/// register_anonymous_user: assigns the next sequential id to `caller`.
pub fn register(
    ledger: &mut RewardsLedger,
    profile: &mut UserProfile,
    board: &mut Leaderboard,
    caller: Pubkey,
    now: i64,
) -> Result<u32> {
    ledger.ensure_active()?;
    require!(!profile.is_registered(), ErrorCode::AlreadyRegistered);

    let mut next_ledger = ledger.clone();
    let user_id = next_ledger.allocate_user_id()?;

    let mut next_board = board.clone();
    next_board.enroll(user_id, now)?;

    let bump = profile.bump;
    *profile = UserProfile {
        owner: caller,
        user_id,
        registered_at: now,
        last_activity: now,
        bump,
        ..UserProfile::default()
    };
    *ledger = next_ledger;
    *board = next_board;

    #[cfg(feature = "verbose")]
    msg!("Registered user {} ({} participants)", user_id, ledger.total_participants);

    Ok(user_id)
}

/// submit_waste_classification: credits `quantity * weight(category)` points
/// and returns the submission record to store at the caller's next index.
pub fn submit_classification(
    ledger: &mut RewardsLedger,
    profile: Option<&mut UserProfile>,
    board: &mut Leaderboard,
    category: u8,
    quantity: u8,
    now: i64,
) -> Result<Submission> {
    ledger.ensure_active()?;
    let profile = match profile {
        Some(profile) if profile.is_registered() => profile,
        _ => return err!(ErrorCode::NotRegistered),
    };
    let category = WasteCategory::try_from(category)?;
    validate_quantity(quantity)?;
    let points = points_for(category, quantity);

    let mut next_profile = profile.clone();
    let index = next_profile.credit(category, quantity, points, now)?;

    let mut next_ledger = ledger.clone();
    next_ledger.count_submission()?;

    let mut next_board = board.clone();
    next_board.record_activity(next_profile.user_id, next_profile.points, now)?;

    let submission = Submission {
        owner: next_profile.owner,
        user_id: next_profile.user_id,
        index,
        category: category.code(),
        quantity,
        points,
        timestamp: now,
        verified: true,
        bump: 0,
    };

    *profile = next_profile;
    *ledger = next_ledger;
    *board = next_board;

    #[cfg(feature = "verbose")]
    msg!(
        "User {} classified {} x{} (+{} points)",
        submission.user_id,
        category.label(),
        quantity,
        points
    );

    Ok(submission)
}

/// get_my_stats
pub fn stats(profile: Option<&UserProfile>) -> Result<UserStatsView> {
    Ok(registered(profile)?.stats())
}

/// get_my_submission: `index` must be below the caller's submission count and
/// the loaded submission must be the caller's record at that index.
pub fn submission_view(
    profile: Option<&UserProfile>,
    submission: Option<&Submission>,
    index: u64,
) -> Result<SubmissionView> {
    require!(index < submission_count(profile), ErrorCode::InvalidSubmissionId);
    match (profile, submission) {
        (Some(profile), Some(submission))
            if submission.owner == profile.owner && submission.index == index =>
        {
            Ok(submission.view())
        }
        _ => err!(ErrorCode::InvalidSubmissionId),
    }
}

/// get_my_submission_count: 0 for unknown callers
pub fn submission_count(profile: Option<&UserProfile>) -> u64 {
    profile
        .filter(|profile| profile.is_registered())
        .map_or(0, |profile| profile.submission_count)
}

/// get_my_user_id: 0 for unknown callers
pub fn user_id(profile: Option<&UserProfile>) -> u32 {
    profile.map_or(UNREGISTERED_USER_ID, |profile| profile.user_id)
}

/// get_public_stats
pub fn public_stats(ledger: &RewardsLedger) -> PublicStats {
    PublicStats {
        total_users: ledger.total_participants,
        total_submissions: ledger.total_submissions,
    }
}

/// get_ledger_info
pub fn ledger_info(ledger: &RewardsLedger) -> LedgerInfo {
    LedgerInfo {
        authority: ledger.authority,
        paused: ledger.paused,
        next_user_id: ledger.next_user_id,
        total_participants: ledger.total_participants,
        total_submissions: ledger.total_submissions,
        rewards_claimed: ledger.rewards_claimed,
    }
}

/// get_leaderboard: every entry in registration order.
/// Boards past the return data cap fail with LeaderboardTooLarge instead of
/// aborting in the runtime; callers then walk get_leaderboard_page.
pub fn leaderboard(board: &Leaderboard) -> Result<Vec<LeaderboardEntry>> {
    require!(
        board.return_data_len() <= MAX_RETURN_DATA,
        ErrorCode::LeaderboardTooLarge
    );
    Ok(board.entries.clone())
}

/// get_leaderboard_page
pub fn leaderboard_page(board: &Leaderboard, offset: u32, limit: u32) -> Vec<LeaderboardEntry> {
    board.page(offset, limit)
}

/// claim_reward: the tier threshold is reported, not enforced.
pub fn claim_reward(
    ledger: &mut RewardsLedger,
    profile: Option<&UserProfile>,
    tier: u32,
) -> Result<RewardClaim> {
    ledger.ensure_active()?;
    let profile = registered(profile)?;

    ledger.count_claim()?;

    #[cfg(feature = "verbose")]
    msg!(
        "User {} claimed tier {} with {} points (eligible: {:?})",
        profile.user_id,
        tier,
        profile.points,
        crate::helpers::math::highest_tier_for(profile.points)
    );

    Ok(RewardClaim {
        user_id: profile.user_id,
        tier,
        min_points: tier_min_points(tier),
    })
}

/// verify_submission: authority-only override of the verified flag.
pub fn verify_submission(
    ledger: &RewardsLedger,
    authority: &Pubkey,
    owner: Option<&UserProfile>,
    owner_user_id: u32,
    index: u64,
    submission: Option<&mut Submission>,
    verified: bool,
) -> Result<()> {
    ledger.ensure_authority(authority)?;

    let owner = match owner {
        Some(owner) if owner.is_registered() && owner.user_id == owner_user_id => owner,
        _ => return err!(ErrorCode::InvalidSubmissionId),
    };
    require!(index < owner.submission_count, ErrorCode::InvalidSubmissionId);

    match submission {
        Some(submission)
            if submission.owner == owner.owner
                && submission.user_id == owner_user_id
                && submission.index == index =>
        {
            submission.verified = verified;
            Ok(())
        }
        _ => err!(ErrorCode::InvalidSubmissionId),
    }
}

/// pause / unpause
pub fn set_paused(ledger: &mut RewardsLedger, authority: &Pubkey, paused: bool) -> Result<()> {
    ledger.ensure_authority(authority)?;
    ledger.paused = paused;
    Ok(())
}

/// transfer_authority: only the current authority can hand the role on.
pub fn transfer_authority(
    ledger: &mut RewardsLedger,
    authority: &Pubkey,
    new_authority: Pubkey,
) -> Result<()> {
    ledger.ensure_authority(authority)?;
    ledger.authority = new_authority;
    Ok(())
}
