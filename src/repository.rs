use serde::{Deserialize, Serialize};

use crate::checksum::{snapshot_checksum, Fingerprint};
use crate::config::FeedConfig;
use crate::error::Result;
use crate::models::{CoreUser, FeedItem, UserSummary};
use crate::network::{ApiPost, ApiUser, FakeApiService};
use crate::presentation::activity_label;

/// Everything fetched for one user in a single pass
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedSnapshot {
    pub user: Option<ApiUser>,
    pub posts: Vec<ApiPost>,
    /// Present exactly when the user is
    pub fingerprint: Option<Fingerprint>,
}

/// Fetches feed data and derives the item list
#[derive(Debug, Clone)]
pub struct FeedRepository {
    api: FakeApiService,
    config: FeedConfig,
}

impl FeedRepository {
    /// Create a repository over an injected API service
    pub fn new(api: FakeApiService, config: FeedConfig) -> Self {
        FeedRepository { api, config }
    }

    /// Fetch a user and their posts, fingerprinting the result.
    ///
    /// The post page is bounded by the configured page size. A missing user
    /// yields a snapshot without user or fingerprint, not an error.
    pub fn load_snapshot(&self, user_id: u64) -> Result<FeedSnapshot> {
        let user = self.api.get_user(user_id)?;
        let posts = self.api.get_posts(user_id, self.config.page_size)?;
        let fingerprint = user.as_ref().map(|u| snapshot_checksum(u, &posts));

        if let Some(fingerprint) = fingerprint {
            tracing::debug!(
                "snapshot for user {}: {} posts, fingerprint {}",
                user_id,
                posts.len(),
                fingerprint
            );
        }

        Ok(FeedSnapshot {
            user,
            posts,
            fingerprint,
        })
    }

    /// Map users to feed items with sequential item identifiers.
    pub fn to_feed_items(&self, users: &[CoreUser]) -> Vec<FeedItem> {
        users
            .iter()
            .enumerate()
            .map(|(index, user)| {
                let summary = UserSummary::of(user);
                FeedItem {
                    id: index as u64,
                    title: format!("User {}", summary.name),
                    subtitle: Some(activity_label(summary.is_active).to_string()),
                    summary,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::sequential_users;
    use crate::network::FakeNetworkClient;

    fn repository(page_size: usize) -> FeedRepository {
        let config = FeedConfig {
            page_size,
            ..FeedConfig::default()
        };
        FeedRepository::new(FakeApiService::new(FakeNetworkClient::new()), config)
    }

    #[test]
    fn test_snapshot_fingerprint_matches_direct_compute() {
        let snapshot = repository(20).load_snapshot(3).unwrap();

        let user = snapshot.user.as_ref().expect("user 3 is seeded");
        let expected = snapshot_checksum(user, &snapshot.posts);
        assert_eq!(snapshot.fingerprint, Some(expected));
    }

    #[test]
    fn test_snapshot_posts_bounded_by_page_size() {
        let snapshot = repository(2).load_snapshot(1).unwrap();

        assert!(snapshot.user.is_some());
        assert_eq!(snapshot.posts.len(), 2);
    }

    #[test]
    fn test_missing_user_snapshot_has_no_fingerprint() {
        let snapshot = repository(20).load_snapshot(9999).unwrap();

        assert!(snapshot.user.is_none());
        assert!(snapshot.posts.is_empty());
        assert!(snapshot.fingerprint.is_none());
    }

    #[test]
    fn test_to_feed_items_titles_and_subtitles() {
        let users = sequential_users(2);
        let items = repository(20).to_feed_items(&users);

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].id, 0);
        assert_eq!(items[0].title, "User User-0");
        assert_eq!(items[0].subtitle.as_deref(), Some("Inactive"));
        assert_eq!(items[1].subtitle.as_deref(), Some("Active"));
    }
}
