//! User Feed Snapshot Pipeline
//!
//! Fetches a user and their posts from a fake in-memory API, fingerprints the
//! fetched snapshot with a deterministic structural checksum, and maps the
//! records into display-ready values.

pub mod checksum;
pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod network;
pub mod presentation;
pub mod repository;
pub mod service;

pub use checksum::{snapshot_checksum, text_checksum, Fingerprint};
pub use config::FeedConfig;
pub use error::{ApiError, Result};
pub use models::{Analytics, AnalyticsEvent, CoreUser};
pub use network::{ApiPost, ApiUser, FakeApiService, FakeNetworkClient};
pub use presentation::{FeedPresenter, ListRow, Presentation, StateBlock};
pub use repository::{FeedRepository, FeedSnapshot};
pub use service::FeedService;
