//! Value structs shared between the core and its collaborators.
//!
//! [`DrugState`] is the mutable part of a drug that the rule table operates
//! on. [`DrugRecord`] is the serializable snapshot handed to whatever
//! displays or stores the catalogue.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Lowest benefit a drug can hold after a tick.
pub const MIN_BENEFIT: i32 = 0;

/// Highest benefit a drug can hold after a tick.
pub const MAX_BENEFIT: i32 = 50;

/// The two mutable fields of a drug.
///
/// `expires_in` is unconstrained and may go arbitrarily negative. `benefit`
/// is only guaranteed to sit in `[MIN_BENEFIT, MAX_BENEFIT]` once a tick has
/// run; an initial value is accepted as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct DrugState {
    /// Days left before expiry. Zero or below means expired.
    pub expires_in: i32,
    /// Current benefit score.
    pub benefit: i32,
}

impl DrugState {
    /// Create a state from its two fields.
    pub const fn new(expires_in: i32, benefit: i32) -> Self {
        Self {
            expires_in,
            benefit,
        }
    }

    /// Whether the expiry date has been reached (`expires_in <= 0`).
    pub const fn is_expired(self) -> bool {
        self.expires_in <= 0
    }

    /// Return this state with `benefit` clamped into the legal range.
    pub const fn clamped(self) -> Self {
        Self {
            expires_in: self.expires_in,
            benefit: clamp_benefit(self.benefit),
        }
    }
}

/// Clamp a raw benefit value into `[MIN_BENEFIT, MAX_BENEFIT]`.
pub const fn clamp_benefit(value: i32) -> i32 {
    if value < MIN_BENEFIT {
        MIN_BENEFIT
    } else if value > MAX_BENEFIT {
        MAX_BENEFIT
    } else {
        value
    }
}

/// Serializable snapshot of one drug.
///
/// Field names serialize as `name`, `expiresIn` and `benefit`, the layout
/// used by the JSON day log.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct DrugRecord {
    /// Drug name as supplied by the caller. Also selects the rule category.
    pub name: String,
    /// Days left before expiry.
    pub expires_in: i32,
    /// Current benefit score.
    pub benefit: i32,
}

impl DrugRecord {
    /// Create a record from its fields.
    pub fn new(name: impl Into<String>, expires_in: i32, benefit: i32) -> Self {
        Self {
            name: name.into(),
            expires_in,
            benefit,
        }
    }

    /// The mutable part of the record.
    pub const fn state(&self) -> DrugState {
        DrugState::new(self.expires_in, self.benefit)
    }
}
