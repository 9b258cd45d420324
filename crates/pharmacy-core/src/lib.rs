//! Drug update rules, pharmacy registry and day loop for the pharmacy
//! simulation.
//!
//! Each simulated day every drug in the catalogue is advanced once by the
//! rule for its category. The rule table is a pure function; the rest of
//! this crate holds drugs, iterates them and wires the loop to configuration.
//!
//! # Modules
//!
//! - [`rules`] -- The per-category rule table ([`rules::next_state`]).
//! - [`drug`] -- [`Drug`], a single catalogue entry that ticks itself.
//! - [`pharmacy`] -- [`Pharmacy`], the ordered catalogue advanced together.
//! - [`clock`] -- Day counter with checked arithmetic.
//! - [`config`] -- Configuration loading from `pharmacy-config.yaml`.
//! - [`runner`] -- Multi-day loop with per-day callbacks.

pub mod clock;
pub mod config;
pub mod drug;
pub mod pharmacy;
pub mod rules;
pub mod runner;

pub use drug::Drug;
pub use pharmacy::Pharmacy;
