//! The per-category update rule table.
//!
//! [`next_state`] maps `(category, state)` to the state one day later. It is
//! a pure, total function: every category and every input state has exactly
//! one successor, and nothing here can fail.
//!
//! | Category | Not expired | Expired (`expires_in <= 0`) | Ages |
//! |----------|-------------|-----------------------------|------|
//! | Normal | -1 | -2 | yes |
//! | Herbal Tea | +1 | +2 | yes |
//! | Magic Pill | 0 | 0 | no |
//! | Dafalgan | -2 | -4 | yes |
//! | Fervex | +1, +2 at <= 10 days, +3 at <= 5 days | set to 0 | yes |
//!
//! Expiry and the Fervex thresholds are read from the state *before* the
//! day's decrement. The resulting benefit is clamped to
//! [`MIN_BENEFIT`]..=[`MAX_BENEFIT`].
//!
//! [`MIN_BENEFIT`]: pharmacy_types::MIN_BENEFIT
//! [`MAX_BENEFIT`]: pharmacy_types::MAX_BENEFIT

use pharmacy_types::{DrugCategory, DrugState, clamp_benefit};

/// Benefit lost per day by a normal drug.
pub const NORMAL_MALUS: i32 = 1;

/// Benefit lost per day by an expired normal drug (twice [`NORMAL_MALUS`]).
pub const EXPIRED_NORMAL_MALUS: i32 = 2;

/// Benefit gained per day by Herbal Tea.
pub const HERBAL_BONUS: i32 = 1;

/// Benefit gained per day by expired Herbal Tea (twice [`HERBAL_BONUS`]).
pub const EXPIRED_HERBAL_BONUS: i32 = 2;

/// Benefit gained per day by Fervex far from expiry.
pub const FERVEX_BONUS: i32 = 1;

/// Benefit gained per day by Fervex within [`FERVEX_10_DAYS`] of expiry.
pub const FERVEX_BONUS_10_DAYS: i32 = 2;

/// Benefit gained per day by Fervex within [`FERVEX_5_DAYS`] of expiry.
pub const FERVEX_BONUS_5_DAYS: i32 = 3;

/// Benefit of Fervex once expired.
pub const EXPIRED_FERVEX_BENEFIT: i32 = 0;

/// First Fervex threshold (inclusive).
pub const FERVEX_10_DAYS: i32 = 10;

/// Second Fervex threshold (inclusive).
pub const FERVEX_5_DAYS: i32 = 5;

/// Benefit lost per day by Dafalgan (twice [`NORMAL_MALUS`]).
pub const DAFALGAN_MALUS: i32 = 2;

/// Benefit lost per day by expired Dafalgan (twice [`DAFALGAN_MALUS`]).
pub const EXPIRED_DAFALGAN_MALUS: i32 = 4;

/// Compute the state of a drug one day after `state`.
///
/// Magic Pill returns `state` unchanged, including a benefit outside the
/// legal range. Every other category moves `expires_in` down by one
/// (saturating at `i32::MIN`) and clamps the new benefit.
pub const fn next_state(category: DrugCategory, state: DrugState) -> DrugState {
    let expired = state.is_expired();

    let benefit = match category {
        DrugCategory::MagicPill => return state,
        DrugCategory::Normal => {
            let malus = if expired {
                EXPIRED_NORMAL_MALUS
            } else {
                NORMAL_MALUS
            };
            state.benefit.saturating_sub(malus)
        }
        DrugCategory::HerbalTea => {
            let bonus = if expired {
                EXPIRED_HERBAL_BONUS
            } else {
                HERBAL_BONUS
            };
            state.benefit.saturating_add(bonus)
        }
        DrugCategory::Fervex => {
            if expired {
                EXPIRED_FERVEX_BENEFIT
            } else {
                state.benefit.saturating_add(fervex_bonus(state.expires_in))
            }
        }
        DrugCategory::Dafalgan => {
            let malus = if expired {
                EXPIRED_DAFALGAN_MALUS
            } else {
                DAFALGAN_MALUS
            };
            state.benefit.saturating_sub(malus)
        }
    };

    DrugState {
        expires_in: state.expires_in.saturating_sub(1),
        benefit: clamp_benefit(benefit),
    }
}

/// Daily Fervex bonus for a drug that has not expired yet.
const fn fervex_bonus(expires_in: i32) -> i32 {
    if expires_in <= FERVEX_5_DAYS {
        FERVEX_BONUS_5_DAYS
    } else if expires_in <= FERVEX_10_DAYS {
        FERVEX_BONUS_10_DAYS
    } else {
        FERVEX_BONUS
    }
}
