//! State Management
//!
//! Reactive page state and the pure derivations rendered from it.

pub mod derive;
pub mod global;
