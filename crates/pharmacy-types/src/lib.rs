//! Shared type definitions for the pharmacy drug simulation.
//!
//! Types defined here are used by the rule engine in `pharmacy-core` and by
//! anything that displays or stores the catalogue. They flow downstream to
//! `TypeScript` via `ts-rs`.
//!
//! # Modules
//!
//! - [`enums`] -- [`DrugCategory`], the closed set of rule families
//! - [`structs`] -- [`DrugState`], [`DrugRecord`] and the benefit bounds

pub mod enums;
pub mod structs;

// Re-export all public types at crate root for convenience.
pub use enums::DrugCategory;
pub use structs::{DrugRecord, DrugState, MAX_BENEFIT, MIN_BENEFIT, clamp_benefit};

#[cfg(test)]
mod tests {
    //! `TypeScript` binding generation.

    #[test]
    fn export_bindings() {
        // Files are written to `bindings/` relative to the crate root.
        use ts_rs::TS;

        let _ = crate::enums::DrugCategory::export_all();
        let _ = crate::structs::DrugState::export_all();
        let _ = crate::structs::DrugRecord::export_all();
    }
}
