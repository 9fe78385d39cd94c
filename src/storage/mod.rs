//! Storage layer for the payday planner
//!
//! Provides JSON file storage with atomic writes and automatic directory
//! creation.

pub mod file_io;
pub mod init;
pub mod plan_runs;
pub mod profile;

pub use file_io::{read_json, write_json_atomic};
pub use init::{demo_profile, initialize_storage};
pub use plan_runs::PlanRunRepository;
pub use profile::{Profile, ProfileRepository};

use crate::config::paths::PaydayPaths;
use crate::error::PaydayError;

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: PaydayPaths,
    pub profile: ProfileRepository,
    pub plan_runs: PlanRunRepository,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: PaydayPaths) -> Result<Self, PaydayError> {
        paths.ensure_directories()?;

        Ok(Self {
            profile: ProfileRepository::new(paths.profile_file()),
            plan_runs: PlanRunRepository::new(paths.plan_runs_file()),
            paths,
        })
    }

    pub fn paths(&self) -> &PaydayPaths {
        &self.paths
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> Result<(), PaydayError> {
        self.profile.load()?;
        self.plan_runs.load()?;
        Ok(())
    }

    /// Check if a profile has been written
    pub fn is_initialized(&self) -> bool {
        self.profile.exists_on_disk()
    }
}
