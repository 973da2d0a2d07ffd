use serde::{Deserialize, Serialize};

use crate::checksum::text_checksum;
use crate::models::user::CoreUser;

/// Per-user summary carried by feed items
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSummary {
    pub id: u64,
    pub name: String,
    /// Checksum of the display name
    pub checksum: i32,
    pub is_active: bool,
}

impl UserSummary {
    /// Summarize a single user
    pub fn of(user: &CoreUser) -> Self {
        UserSummary {
            id: user.id,
            name: user.name.clone(),
            checksum: text_checksum(&user.name),
            is_active: user.is_active,
        }
    }
}

/// Summarize a batch of users in input order.
pub fn summarize_users(users: &[CoreUser]) -> Vec<UserSummary> {
    users.iter().map(UserSummary::of).collect()
}

/// One feed entry before presentation mapping
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedItem {
    pub id: u64,
    pub title: String,
    pub subtitle: Option<String>,
    pub summary: UserSummary,
}

/// Labeled user wrapper handed to list adapters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserItem {
    pub user: CoreUser,
    pub label: String,
}

/// Label a user with its position in the source list.
pub fn build_user_item(user: CoreUser, index: usize) -> UserItem {
    let label = format!("User({}) idx={}", user.id, index);
    UserItem { user, label }
}

/// Flat projection of a user for downstream consumers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Projection {
    pub id: u64,
    pub label: String,
    pub active: bool,
}

/// Project a single user
pub fn project_user(user: &CoreUser) -> Projection {
    Projection {
        id: user.id,
        label: user.name.clone(),
        active: user.is_active,
    }
}

/// Project a batch of users in input order.
pub fn bulk_project(users: &[CoreUser]) -> Vec<Projection> {
    users.iter().map(project_user).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::user::sequential_users;

    #[test]
    fn test_summary_checksum_tracks_name() {
        let users = sequential_users(2);
        let summaries = summarize_users(&users);

        assert_eq!(summaries[0].checksum, text_checksum("User-0"));
        assert_eq!(summaries[1].checksum, text_checksum("User-1"));
        assert_ne!(summaries[0].checksum, summaries[1].checksum);
    }

    #[test]
    fn test_build_user_item_label() {
        let user = sequential_users(1).remove(0);
        let item = build_user_item(user, 0);

        assert_eq!(item.label, "User(0) idx=0");
    }

    #[test]
    fn test_bulk_project_preserves_order_and_flags() {
        let users = sequential_users(4);
        let projections = bulk_project(&users);

        assert_eq!(projections.len(), 4);
        assert_eq!(projections[1].label, "User-1");
        assert!(!projections[0].active);
        assert!(projections[1].active);
    }
}
