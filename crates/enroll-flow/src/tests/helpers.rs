//! Test helpers for flow tests.

use crate::{Enrollment, SessionManager};
use chrono::NaiveDate;
use enroll_directory::{DirectoryService, NewAccount, ProfileDetails};
use enroll_storage::RocksDbStorage;
use std::sync::Arc;
use tempfile::TempDir;

pub type TestDirectory = DirectoryService<RocksDbStorage>;
pub type TestEnrollment = Enrollment<TestDirectory>;

/// Helper to create test storage
pub fn create_test_storage() -> (Arc<RocksDbStorage>, TempDir) {
    let temp_dir = tempfile::tempdir().unwrap();
    let db = RocksDbStorage::open(temp_dir.path()).unwrap();
    (Arc::new(db), temp_dir)
}

/// Helper to create an enrollment flow over real storage
pub fn create_test_enrollment() -> (TestEnrollment, Arc<SessionManager>, Arc<TestDirectory>, TempDir)
{
    let (storage, temp_dir) = create_test_storage();
    let directory = Arc::new(DirectoryService::new(storage));
    let sessions = Arc::new(SessionManager::new());
    let enrollment = Enrollment::new(Arc::clone(&directory), Arc::clone(&sessions));
    (enrollment, sessions, directory, temp_dir)
}

pub fn new_account(username: &str, email: &str) -> NewAccount {
    NewAccount {
        name: "A".to_string(),
        username: username.to_string(),
        email: email.to_string(),
        password: "p".to_string(),
    }
}

pub fn profile_details() -> ProfileDetails {
    ProfileDetails {
        student_id: 100,
        date_of_birth: NaiveDate::from_ymd_opt(2000, 1, 1).unwrap(),
        gender: "F".to_string(),
        year: "2nd".to_string(),
        branch: "CSE".to_string(),
        college: "CUSAT".to_string(),
        address: "Kochi".to_string(),
        contact: "9999999999".to_string(),
    }
}
