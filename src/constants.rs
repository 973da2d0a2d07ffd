/// Default number of posts fetched per snapshot
pub const DEFAULT_PAGE_SIZE: usize = 20;

/// Default feed title used in presentation headers
pub const DEFAULT_FEED_TITLE: &str = "Feed";

/// Number of users seeded into the fake transport dataset
pub const SEED_USER_COUNT: u64 = 8;

// =============================================================================
// Presentation Headers
// =============================================================================

/// Header shown when a fetch yields no user
pub const EMPTY_HEADER: &str = "No data";

/// Header shown while a feed is loading
pub const LOADING_HEADER: &str = "Loading...";

/// Header shown when a feed failed to load
pub const ERROR_HEADER: &str = "Error";
