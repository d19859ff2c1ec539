use anyhow::Result;
use enroll_directory::DirectoryService;
use enroll_flow::{Enrollment, SessionManager};
use enroll_storage::RocksDbStorage;
use std::sync::Arc;

use crate::config::Config;

/// Application state shared across all handlers
pub struct AppState {
    /// Server configuration (for future use in handlers)
    #[allow(dead_code)]
    pub config: Config,
    /// Direct storage access (for future advanced queries)
    #[allow(dead_code)]
    pub storage: Arc<RocksDbStorage>,
    /// Direct store access (handlers go through the enrollment flow)
    #[allow(dead_code)]
    pub directory: Arc<DirectoryService<RocksDbStorage>>,
    pub sessions: Arc<SessionManager>,
    pub enrollment: Enrollment<DirectoryService<RocksDbStorage>>,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self> {
        // Initialize storage
        let storage = Arc::new(RocksDbStorage::open(&config.database_path)?);

        // Initialize services
        let directory = Arc::new(DirectoryService::new(Arc::clone(&storage)));
        let sessions = Arc::new(SessionManager::new());
        let enrollment = Enrollment::new(Arc::clone(&directory), Arc::clone(&sessions));

        Ok(AppState {
            config,
            storage,
            directory,
            sessions,
            enrollment,
        })
    }
}
