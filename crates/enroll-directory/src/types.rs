//! Directory type definitions.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Account record
///
/// `username` and `email` are globally unique; the store keeps lowercased
/// index entries for both and writes them in the same batch as the record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    pub account_id: Uuid,
    pub name: String,
    pub username: String,
    pub email: String,
    /// Argon2id PHC hash string; the plaintext secret is never stored
    pub password_hash: String,
    pub created_at: u64,
    pub updated_at: u64,
}

/// Profile record, one-to-one with its owning account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub profile_id: Uuid,
    /// Owning account id; a profile never outlives its owner
    pub owner: Uuid,
    pub student_id: u32,
    pub date_of_birth: NaiveDate,
    pub gender: String,
    pub year: String,
    pub branch: String,
    pub college: String,
    pub address: String,
    pub contact: String,
    pub created_at: u64,
    pub updated_at: u64,
}

/// Registration request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewAccount {
    pub name: String,
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Profile form fields, used for both creation and update
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileDetails {
    pub student_id: u32,
    pub date_of_birth: NaiveDate,
    pub gender: String,
    pub year: String,
    pub branch: String,
    pub college: String,
    pub address: String,
    pub contact: String,
}

/// Mutable account fields for the edit step
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountUpdate {
    pub name: String,
    pub email: String,
}

impl Profile {
    /// Apply form fields onto an existing record, bumping `updated_at`
    pub fn apply(&mut self, details: ProfileDetails, now: u64) {
        self.student_id = details.student_id;
        self.date_of_birth = details.date_of_birth;
        self.gender = details.gender;
        self.year = details.year;
        self.branch = details.branch;
        self.college = details.college;
        self.address = details.address;
        self.contact = details.contact;
        self.updated_at = now;
    }
}

// Re-export current_timestamp from enroll-crypto
pub use enroll_crypto::current_timestamp;

#[cfg(test)]
mod tests {
    use super::*;

    fn details() -> ProfileDetails {
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

    #[test]
    fn test_profile_apply_overwrites_all_fields() {
        let mut profile = Profile {
            profile_id: Uuid::new_v4(),
            owner: Uuid::new_v4(),
            student_id: 1,
            date_of_birth: NaiveDate::from_ymd_opt(1999, 12, 31).unwrap(),
            gender: "M".to_string(),
            year: "1st".to_string(),
            branch: "ECE".to_string(),
            college: "Elsewhere".to_string(),
            address: "Nowhere".to_string(),
            contact: "0".to_string(),
            created_at: 10,
            updated_at: 10,
        };

        profile.apply(details(), 20);

        assert_eq!(profile.student_id, 100);
        assert_eq!(
            profile.date_of_birth,
            NaiveDate::from_ymd_opt(2000, 1, 1).unwrap()
        );
        assert_eq!(profile.branch, "CSE");
        assert_eq!(profile.updated_at, 20);
        assert_eq!(profile.created_at, 10);
    }
}
