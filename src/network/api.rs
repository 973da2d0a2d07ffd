use serde::{Deserialize, Serialize};

use crate::error::{ApiError, Result};
use crate::network::transport::{FakeNetworkClient, NetworkRequest, NetworkResponse};

/// User payload returned by the user endpoint
///
/// Immutable once fetched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiUser {
    pub id: u64,
    pub name: String,
}

/// Post payload returned by the posts endpoint
///
/// Pages arrive as an ordered sequence belonging to one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiPost {
    pub id: u64,
    pub title: String,
}

/// Typed API over the fake transport
#[derive(Debug, Clone)]
pub struct FakeApiService {
    client: FakeNetworkClient,
}

impl FakeApiService {
    /// Create a service over the given transport client
    pub fn new(client: FakeNetworkClient) -> Self {
        FakeApiService { client }
    }

    /// Fetch a user by identifier.
    ///
    /// Absence is a normal outcome: an unknown identifier yields `Ok(None)`,
    /// and callers branch on presence rather than catching an error. Accepts
    /// any non-negative identifier.
    pub fn get_user(&self, user_id: u64) -> Result<Option<ApiUser>> {
        let path = format!("/users/{}", user_id);
        let response = self.get(&path);

        match response.code {
            200 => {
                let body = response.body.ok_or_else(|| ApiError::EmptyBody(path))?;
                let user = serde_json::from_str(&body)?;
                Ok(Some(user))
            }
            404 => Ok(None),
            code => Err(ApiError::UnexpectedStatus { path, code }),
        }
    }

    /// Fetch a page of posts for a user, at most `page_size` long.
    ///
    /// Unknown users yield an empty page.
    pub fn get_posts(&self, user_id: u64, page_size: usize) -> Result<Vec<ApiPost>> {
        let path = format!("/users/{}/posts?limit={}", user_id, page_size);
        let response = self.get(&path);

        match response.code {
            200 => {
                let body = response.body.ok_or_else(|| ApiError::EmptyBody(path))?;
                let posts = serde_json::from_str(&body)?;
                Ok(posts)
            }
            code => Err(ApiError::UnexpectedStatus { path, code }),
        }
    }

    fn get(&self, path: &str) -> NetworkResponse {
        let request = NetworkRequest {
            path: path.to_string(),
            method: "GET".to_string(),
            body: None,
        };
        self.client.execute(&request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api() -> FakeApiService {
        FakeApiService::new(FakeNetworkClient::new())
    }

    #[test]
    fn test_get_user_seeded() {
        let user = api().get_user(3).unwrap();

        let user = user.expect("user 3 is seeded");
        assert_eq!(user.id, 3);
        assert_eq!(user.name, "User-3");
    }

    #[test]
    fn test_get_user_absent_is_none_not_error() {
        let user = api().get_user(9999).unwrap();
        assert!(user.is_none());
    }

    #[test]
    fn test_get_posts_bounded_by_page_size() {
        let posts = api().get_posts(2, 3).unwrap();

        assert_eq!(posts.len(), 3);
        // Ordered sequence belonging to user 2
        assert!(posts.iter().all(|p| p.title.contains("User-2")));
        assert!(posts.windows(2).all(|w| w[0].id < w[1].id));
    }

    #[test]
    fn test_get_posts_unknown_user_empty() {
        let posts = api().get_posts(9999, 10).unwrap();
        assert!(posts.is_empty());
    }

    #[test]
    fn test_get_posts_zero_page_size() {
        let posts = api().get_posts(1, 0).unwrap();
        assert!(posts.is_empty());
    }
}
