pub mod api;
pub mod transport;

pub use api::{ApiPost, ApiUser, FakeApiService};
pub use transport::{FakeNetworkClient, NetworkRequest, NetworkResponse};
