use serde::{Deserialize, Serialize};

/// Core user record shared across the feed pipeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoreUser {
    pub id: u64,
    pub name: String,
    /// Contact address; absent for users lifted from fetched payloads
    pub email: Option<String>,
    pub is_active: bool,
}

/// Build one deterministic sample user.
///
/// Names follow the `User-{i}` scheme; every third user is inactive.
pub fn sample_user(index: u64) -> CoreUser {
    CoreUser {
        id: index,
        name: format!("User-{}", index),
        email: None,
        is_active: index % 3 != 0,
    }
}

/// Build `count` sample users with sequential identifiers.
pub fn sequential_users(count: u64) -> Vec<CoreUser> {
    (0..count).map(sample_user).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_user_is_deterministic() {
        assert_eq!(sample_user(4), sample_user(4));
        assert_eq!(sample_user(4).name, "User-4");
    }

    #[test]
    fn test_every_third_user_is_inactive() {
        let users = sequential_users(6);

        assert_eq!(users.len(), 6);
        assert!(!users[0].is_active);
        assert!(users[1].is_active);
        assert!(users[2].is_active);
        assert!(!users[3].is_active);
    }
}
