pub mod analytics;
pub mod feed;
pub mod user;

pub use analytics::{Analytics, AnalyticsEvent};
pub use feed::{
    build_user_item, bulk_project, project_user, summarize_users, FeedItem, Projection, UserItem,
    UserSummary,
};
pub use user::{sample_user, sequential_users, CoreUser};
