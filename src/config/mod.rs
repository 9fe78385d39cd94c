//! Configuration module for the payday planner
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence
//! - Planning defaults applied before the engine runs

pub mod paths;
pub mod settings;

pub use paths::PaydayPaths;
pub use settings::Settings;
