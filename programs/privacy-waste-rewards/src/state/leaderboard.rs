use anchor_lang::prelude::*;
use crate::constants::{FIRST_USER_ID, MAX_LEADERBOARD_PAGE};
use crate::errors::ErrorCode;

/// Per-user projection kept on the leaderboard
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LeaderboardEntry {
    pub user_id: u32,
    pub points: u64,
    pub last_activity: i64,
}

impl LeaderboardEntry {
    /// 4 + 8 + 8 = 20 bytes
    pub const LEN: usize = 4 + 8 + 8;
}

/// Registration-ordered leaderboard
///
/// One entry per registered user, never evicted. Ids are handed out
/// sequentially, so the entry for `user_id` always sits at `user_id - 1`.
/// Entries are deliberately not sorted by points.
///
/// The account grows by `LeaderboardEntry::LEN` on every registration
/// (realloc in the RegisterUser context).
///
/// PDA Seeds: ["leaderboard_v1"]
#[account]
#[derive(Default)]
pub struct Leaderboard {
    /// PDA bump seed
    pub bump: u8,

    pub entries: Vec<LeaderboardEntry>,
}

impl Leaderboard {
    /// Account size for `count` entries (without the 8-byte discriminator):
    /// - bump: 1 byte
    /// - entries: 4-byte length prefix + 20 bytes per entry
    pub const fn space(count: usize) -> usize {
        1 + 4 + count * LeaderboardEntry::LEN
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Position of `user_id` in `entries`, checked against the stored id.
    pub fn slot_for(&self, user_id: u32) -> Result<usize> {
        let slot = user_id
            .checked_sub(FIRST_USER_ID)
            .ok_or(ErrorCode::LeaderboardMismatch)? as usize;
        match self.entries.get(slot) {
            Some(entry) if entry.user_id == user_id => Ok(slot),
            _ => err!(ErrorCode::LeaderboardMismatch),
        }
    }

    /// Appends the entry for a freshly registered user.
    pub fn enroll(&mut self, user_id: u32, now: i64) -> Result<()> {
        // Registration order must equal id order for slot_for to hold.
        require!(
            self.entries.len() as u64 + u64::from(FIRST_USER_ID) == u64::from(user_id),
            ErrorCode::LeaderboardMismatch
        );
        self.entries.push(LeaderboardEntry {
            user_id,
            points: 0,
            last_activity: now,
        });
        Ok(())
    }

    pub fn record_activity(&mut self, user_id: u32, points: u64, now: i64) -> Result<()> {
        let slot = self.slot_for(user_id)?;
        let entry = &mut self.entries[slot];
        entry.points = points;
        entry.last_activity = now;
        Ok(())
    }

    /// Bytes the entries take as return data (Vec prefix + entries)
    pub fn return_data_len(&self) -> usize {
        4 + self.entries.len() * LeaderboardEntry::LEN
    }

    /// At most `MAX_LEADERBOARD_PAGE` entries starting at `offset`.
    pub fn page(&self, offset: u32, limit: u32) -> Vec<LeaderboardEntry> {
        let limit = limit.min(MAX_LEADERBOARD_PAGE) as usize;
        self.entries
            .iter()
            .skip(offset as usize)
            .take(limit)
            .copied()
            .collect()
    }
}
