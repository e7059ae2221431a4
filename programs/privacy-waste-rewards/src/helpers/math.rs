use anchor_lang::prelude::*;
use crate::errors::ErrorCode;
use crate::constants::*;

/// Waste categories accepted by submit_waste_classification
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WasteCategory {
    Recyclable,
    Organic,
    Hazardous,
    General,
}

impl WasteCategory {
    pub const ALL: [WasteCategory; 4] = [
        WasteCategory::Recyclable,
        WasteCategory::Organic,
        WasteCategory::Hazardous,
        WasteCategory::General,
    ];

    /// Points credited per unit of quantity
    pub fn weight(self) -> u32 {
        match self {
            WasteCategory::Recyclable => RECYCLABLE_WEIGHT,
            WasteCategory::Organic => ORGANIC_WEIGHT,
            WasteCategory::Hazardous => HAZARDOUS_WEIGHT,
            WasteCategory::General => GENERAL_WEIGHT,
        }
    }

    pub fn code(self) -> u8 {
        match self {
            WasteCategory::Recyclable => CATEGORY_RECYCLABLE,
            WasteCategory::Organic => CATEGORY_ORGANIC,
            WasteCategory::Hazardous => CATEGORY_HAZARDOUS,
            WasteCategory::General => CATEGORY_GENERAL,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            WasteCategory::Recyclable => "Recyclable",
            WasteCategory::Organic => "Organic",
            WasteCategory::Hazardous => "Hazardous",
            WasteCategory::General => "General",
        }
    }
}

impl TryFrom<u8> for WasteCategory {
    type Error = anchor_lang::error::Error;

    fn try_from(code: u8) -> Result<Self> {
        match code {
            CATEGORY_RECYCLABLE => Ok(WasteCategory::Recyclable),
            CATEGORY_ORGANIC => Ok(WasteCategory::Organic),
            CATEGORY_HAZARDOUS => Ok(WasteCategory::Hazardous),
            CATEGORY_GENERAL => Ok(WasteCategory::General),
            _ => err!(ErrorCode::InvalidCategory),
        }
    }
}

/// Quantity must lie in [MIN_QUANTITY, MAX_QUANTITY]
pub fn validate_quantity(quantity: u8) -> Result<()> {
    require!(
        (MIN_QUANTITY..=MAX_QUANTITY).contains(&quantity),
        ErrorCode::InvalidQuantity
    );
    Ok(())
}

/// points = quantity * weight(category)
/// Max is 100 * 15 = 1500, so u32 never overflows for a validated quantity.
pub fn points_for(category: WasteCategory, quantity: u8) -> u32 {
    u32::from(quantity) * category.weight()
}

/// Published reward tiers. The ledger only reports these thresholds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RewardTier {
    Bronze,
    Silver,
    Gold,
    Platinum,
}

impl RewardTier {
    pub fn from_code(tier: u32) -> Option<Self> {
        match tier {
            TIER_BRONZE => Some(RewardTier::Bronze),
            TIER_SILVER => Some(RewardTier::Silver),
            TIER_GOLD => Some(RewardTier::Gold),
            TIER_PLATINUM => Some(RewardTier::Platinum),
            _ => None,
        }
    }

    pub fn min_points(self) -> u64 {
        match self {
            RewardTier::Bronze => BRONZE_MIN_POINTS,
            RewardTier::Silver => SILVER_MIN_POINTS,
            RewardTier::Gold => GOLD_MIN_POINTS,
            RewardTier::Platinum => PLATINUM_MIN_POINTS,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            RewardTier::Bronze => "Bronze",
            RewardTier::Silver => "Silver",
            RewardTier::Gold => "Gold",
            RewardTier::Platinum => "Platinum",
        }
    }
}

/// Advisory threshold for a tier code, 0 for codes outside the table
pub fn tier_min_points(tier: u32) -> u64 {
    RewardTier::from_code(tier).map_or(0, RewardTier::min_points)
}

/// Highest tier whose threshold `points` reaches
pub fn highest_tier_for(points: u64) -> Option<RewardTier> {
    [
        RewardTier::Platinum,
        RewardTier::Gold,
        RewardTier::Silver,
        RewardTier::Bronze,
    ]
    .into_iter()
    .find(|tier| points >= tier.min_points())
}
