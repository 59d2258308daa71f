//! Wine pairing assistant: classification and recommendation in one call.

pub mod orchestrator;

pub use orchestrator::{PairingAssistant, PairingReport};
