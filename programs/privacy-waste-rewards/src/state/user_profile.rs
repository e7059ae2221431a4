use anchor_lang::prelude::*;
use crate::constants::UNREGISTERED_USER_ID;
use crate::errors::ErrorCode;
use crate::helpers::math::WasteCategory;
use super::views::UserStatsView;

/// Anonymous participant record
///
/// Created once by register_anonymous_user and credited by every accepted
/// classification. Category counters accumulate submitted quantity.
///
/// PDA Seeds: ["user_v1", wallet]
#[account]
#[derive(Default)]
pub struct UserProfile {
    /// The wallet that owns this profile
    pub owner: Pubkey,

    /// Sequential 1-based id (0 only before registration completes)
    pub user_id: u32,

    /// Registration timestamp
    pub registered_at: i64,

    /// Total points across all submissions
    pub points: u64,

    pub recyclable_count: u32,
    pub organic_count: u32,
    pub hazardous_count: u32,
    pub general_count: u32,

    /// Timestamp of the latest registration or submission
    pub last_activity: i64,

    /// Number of submissions, also the index of the next one
    pub submission_count: u64,

    /// PDA bump seed
    pub bump: u8,
}

impl UserProfile {
    /// Account size calculation:
    /// - owner: 32 bytes (Pubkey)
    /// - user_id: 4 bytes (u32)
    /// - registered_at: 8 bytes (i64)
    /// - points: 8 bytes (u64)
    /// - 4 category counters: 4 * 4 = 16 bytes
    /// - last_activity: 8 bytes (i64)
    /// - submission_count: 8 bytes (u64)
    /// - bump: 1 byte
    /// Total: 85 bytes
    pub const LEN: usize = 32 + 4 + 8 + 8 + 4 * 4 + 8 + 8 + 1;

    pub fn is_registered(&self) -> bool {
        self.user_id != UNREGISTERED_USER_ID
    }

    /// Applies one classification and returns the index assigned to it.
    ///
    /// All new values are computed before any field is written, so an
    /// overflow leaves the profile untouched.
    pub fn credit(
        &mut self,
        category: WasteCategory,
        quantity: u8,
        points: u32,
        now: i64,
    ) -> Result<u64> {
        let index = self.submission_count;
        let submission_count = index.checked_add(1).ok_or(ErrorCode::MathOverflow)?;
        let total_points = self
            .points
            .checked_add(u64::from(points))
            .ok_or(ErrorCode::MathOverflow)?;
        let counter = match category {
            WasteCategory::Recyclable => self.recyclable_count,
            WasteCategory::Organic => self.organic_count,
            WasteCategory::Hazardous => self.hazardous_count,
            WasteCategory::General => self.general_count,
        };
        let counter = counter
            .checked_add(u32::from(quantity))
            .ok_or(ErrorCode::MathOverflow)?;

        match category {
            WasteCategory::Recyclable => self.recyclable_count = counter,
            WasteCategory::Organic => self.organic_count = counter,
            WasteCategory::Hazardous => self.hazardous_count = counter,
            WasteCategory::General => self.general_count = counter,
        }
        self.points = total_points;
        self.submission_count = submission_count;
        self.last_activity = now;
        Ok(index)
    }

    pub fn stats(&self) -> UserStatsView {
        UserStatsView {
            points: self.points,
            recyclable_count: self.recyclable_count,
            organic_count: self.organic_count,
            hazardous_count: self.hazardous_count,
            general_count: self.general_count,
        }
    }
}
