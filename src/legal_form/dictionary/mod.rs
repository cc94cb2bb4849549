//! Dictionary sources: embedded defaults and file loading.

pub mod defaults;
pub mod loader;

pub use defaults::{DEFAULT_ALIASES, DEFAULT_LEGAL_FORMS};
pub use loader::*;
