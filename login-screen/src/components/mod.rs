//! ==============================================================================
//! components/mod.rs - UI Components
//! ==============================================================================

mod welcome;

pub use welcome::{greeting, WelcomeView, DEFAULT_USER};
