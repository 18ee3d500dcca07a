//! # glyco-pairing
//!
//! Turns meals plus raw readings into spike events. Each meal is matched
//! with the nearest earlier "before" reading and the nearest unclaimed
//! "after" reading, and then checked for a return to baseline.

pub mod engine;
pub mod recovery;

pub use engine::{PairingOutcome, SpikePairer};
