//! Capability definitions and scoring.
//!
//! A capability describes which intents a handler can realize: the tags it
//! serves and the parameters it needs. Scoring is a pure function of the
//! capability and the intent; ranking and selection live in
//! [`crate::registry`].

pub mod identity;
pub mod model;

pub use identity::CapabilityName;
pub use model::{Capability, PARAMS_WEIGHT, ScoreBreakdown, TAG_WEIGHT};
