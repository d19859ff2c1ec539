//! RocksDB column family definitions.

/// Account records: account_id → Account
pub const CF_ACCOUNTS: &str = "accounts";

/// Username uniqueness index: username_lower → account_id
pub const CF_ACCOUNTS_BY_USERNAME: &str = "accounts_by_username";

/// Email uniqueness index: email_lower → account_id
pub const CF_ACCOUNTS_BY_EMAIL: &str = "accounts_by_email";

/// Profile records: profile_id → Profile
pub const CF_PROFILES: &str = "profiles";

/// Profile ownership index (one profile per account): account_id → profile_id
pub const CF_PROFILES_BY_OWNER: &str = "profiles_by_owner";

/// Get all column family names
pub fn all_column_families() -> Vec<&'static str> {
    vec![
        CF_ACCOUNTS,
        CF_ACCOUNTS_BY_USERNAME,
        CF_ACCOUNTS_BY_EMAIL,
        CF_PROFILES,
        CF_PROFILES_BY_OWNER,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_column_families_non_empty() {
        let cfs = all_column_families();
        assert!(!cfs.is_empty());
    }

    #[test]
    fn test_no_duplicate_column_families() {
        let cfs = all_column_families();
        let mut unique = std::collections::HashSet::new();

        for cf in &cfs {
            assert!(unique.insert(cf), "Duplicate column family: {}", cf);
        }
    }
}
