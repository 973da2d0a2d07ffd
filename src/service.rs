use crate::error::Result;
use crate::models::{sequential_users, Analytics, AnalyticsEvent, CoreUser};
use crate::network::{FakeNetworkClient, NetworkRequest};
use crate::presentation::{FeedPresenter, Presentation};
use crate::repository::FeedRepository;

/// Facade sequencing the fetch -> checksum -> map -> present pipeline.
///
/// All collaborators are injected; nothing is default-constructed inline.
pub struct FeedService {
    repository: FeedRepository,
    presenter: FeedPresenter,
    analytics: Analytics,
    client: FakeNetworkClient,
}

impl FeedService {
    pub fn new(
        repository: FeedRepository,
        presenter: FeedPresenter,
        analytics: Analytics,
        client: FakeNetworkClient,
    ) -> Self {
        FeedService {
            repository,
            presenter,
            analytics,
            client,
        }
    }

    /// Build the presentation for one user's feed.
    ///
    /// A missing user yields the designated empty state; callers branch on
    /// the presentation, not on an error.
    pub fn build_feed(&self, user_id: u64) -> Result<Presentation> {
        let snapshot = self.repository.load_snapshot(user_id)?;

        let user = match snapshot.user {
            Some(user) => user,
            None => {
                tracing::info!("no user {} in feed source, serving empty state", user_id);
                return Ok(self.presenter.empty_state());
            }
        };

        if let Some(fingerprint) = snapshot.fingerprint {
            let event = AnalyticsEvent::new("feed_loaded", fingerprint.to_string());
            self.analytics.record(&event);
        }

        let core_user = CoreUser {
            id: user.id,
            name: user.name,
            email: None,
            is_active: true,
        };
        let items = self.repository.to_feed_items(&[core_user]);
        Ok(self.presenter.present(&items))
    }

    /// Status code of a raw GET through the transport.
    pub fn ping(&self, path: &str) -> u16 {
        let request = NetworkRequest {
            path: path.to_string(),
            method: "GET".to_string(),
            body: None,
        };
        self.client.execute(&request).code
    }

    /// Run the item pipeline over generated sample users.
    pub fn demo_feed(&self, user_count: u64) -> Presentation {
        let users = sequential_users(user_count);
        let items = self.repository.to_feed_items(&users);
        self.presenter.present(&items)
    }
}
