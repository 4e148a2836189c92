//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod capability;
pub mod preferences;
pub mod progress;
pub mod selection;
