pub mod config;
pub mod models;
pub mod session;
pub mod source;

#[cfg(test)]
mod memory;

pub use config::HerVoiceConfig;
pub use models::{ProfileSummary, ProgressRecord};
pub use session::{AuthGate, GatePhase, Session};
pub use source::{load_summary, ProgressError, ProgressSource};
