//! In-memory stand-in for the network layer.
//!
//! No sockets are opened anywhere; every request is routed against a seeded
//! dataset held in process memory.

use std::collections::HashMap;
use std::sync::Arc;

use crate::constants::SEED_USER_COUNT;
use crate::network::api::{ApiPost, ApiUser};

/// Request routed through the fake transport
#[derive(Debug, Clone)]
pub struct NetworkRequest {
    pub path: String,
    pub method: String,
    pub body: Option<String>,
}

/// Response produced by the fake transport
#[derive(Debug, Clone)]
pub struct NetworkResponse {
    pub code: u16,
    pub body: Option<String>,
}

impl NetworkResponse {
    fn status(code: u16) -> Self {
        NetworkResponse { code, body: None }
    }
}

/// Seeded dataset backing the fake transport
#[derive(Debug)]
struct SeedData {
    users: Vec<ApiUser>,
    posts: HashMap<u64, Vec<ApiPost>>,
}

impl SeedData {
    /// Deterministic dataset: users 1..=SEED_USER_COUNT, each with a small
    /// ordered page of posts.
    fn seed() -> Self {
        let mut users = Vec::new();
        let mut posts = HashMap::new();

        for id in 1..=SEED_USER_COUNT {
            users.push(ApiUser {
                id,
                name: format!("User-{}", id),
            });

            let count = 3 + (id % 5);
            let user_posts = (0..count)
                .map(|k| ApiPost {
                    id: id * 100 + k,
                    title: format!("Post {} by User-{}", k + 1, id),
                })
                .collect();
            posts.insert(id, user_posts);
        }

        SeedData { users, posts }
    }

    fn user(&self, id: u64) -> Option<&ApiUser> {
        self.users.iter().find(|u| u.id == id)
    }

    fn posts(&self, user_id: u64) -> &[ApiPost] {
        self.posts.get(&user_id).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// In-memory network client over the seeded dataset.
///
/// Cloning shares the dataset, so independently wired consumers observe the
/// same records.
#[derive(Debug, Clone)]
pub struct FakeNetworkClient {
    data: Arc<SeedData>,
}

impl FakeNetworkClient {
    /// Create a client over the default seeded dataset
    pub fn new() -> Self {
        FakeNetworkClient {
            data: Arc::new(SeedData::seed()),
        }
    }

    /// Route a request against the dataset.
    ///
    /// Total: every request yields a response, never an error. Unknown paths
    /// answer 404 and non-GET methods answer 405, matching what a real
    /// backend would send.
    pub fn execute(&self, request: &NetworkRequest) -> NetworkResponse {
        if request.method != "GET" {
            return NetworkResponse::status(405);
        }

        let (path, query) = match request.path.split_once('?') {
            Some((path, query)) => (path, Some(query)),
            None => (request.path.as_str(), None),
        };

        let segments: Vec<&str> = path.trim_matches('/').split('/').collect();
        match segments.as_slice() {
            ["users", id] => match id.parse::<u64>() {
                Ok(id) => self.user_response(id),
                Err(_) => NetworkResponse::status(400),
            },
            ["users", id, "posts"] => match id.parse::<u64>() {
                Ok(id) => self.posts_response(id, query.and_then(parse_limit)),
                Err(_) => NetworkResponse::status(400),
            },
            _ => NetworkResponse::status(404),
        }
    }

    fn user_response(&self, id: u64) -> NetworkResponse {
        match self.data.user(id) {
            Some(user) => json_response(user),
            None => NetworkResponse::status(404),
        }
    }

    fn posts_response(&self, user_id: u64, limit: Option<usize>) -> NetworkResponse {
        let posts = self.data.posts(user_id);
        let page: Vec<&ApiPost> = match limit {
            Some(limit) => posts.iter().take(limit).collect(),
            None => posts.iter().collect(),
        };
        json_response(&page)
    }
}

impl Default for FakeNetworkClient {
    fn default() -> Self {
        FakeNetworkClient::new()
    }
}

fn json_response<T: serde::Serialize>(value: &T) -> NetworkResponse {
    match serde_json::to_string(value) {
        Ok(body) => NetworkResponse {
            code: 200,
            body: Some(body),
        },
        Err(_) => NetworkResponse::status(500),
    }
}

fn parse_limit(query: &str) -> Option<usize> {
    query.split('&').find_map(|pair| {
        let (key, value) = pair.split_once('=')?;
        if key == "limit" {
            value.parse().ok()
        } else {
            None
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn get(path: &str) -> NetworkRequest {
        NetworkRequest {
            path: path.to_string(),
            method: "GET".to_string(),
            body: None,
        }
    }

    #[test]
    fn test_seeded_user_is_served() {
        let client = FakeNetworkClient::new();
        let response = client.execute(&get("/users/1"));

        assert_eq!(response.code, 200);
        let user: ApiUser = serde_json::from_str(&response.body.unwrap()).unwrap();
        assert_eq!(user.id, 1);
        assert_eq!(user.name, "User-1");
    }

    #[test]
    fn test_unseeded_user_is_404() {
        let client = FakeNetworkClient::new();
        let response = client.execute(&get("/users/9999"));

        assert_eq!(response.code, 404);
        assert!(response.body.is_none());
    }

    #[test]
    fn test_posts_respect_limit() {
        let client = FakeNetworkClient::new();
        let response = client.execute(&get("/users/1/posts?limit=2"));

        assert_eq!(response.code, 200);
        let posts: Vec<ApiPost> = serde_json::from_str(&response.body.unwrap()).unwrap();
        assert_eq!(posts.len(), 2);
    }

    #[test]
    fn test_posts_without_limit_return_full_page() {
        let client = FakeNetworkClient::new();
        let response = client.execute(&get("/users/1/posts"));

        let posts: Vec<ApiPost> = serde_json::from_str(&response.body.unwrap()).unwrap();
        // User 1 is seeded with 3 + (1 % 5) posts
        assert_eq!(posts.len(), 4);
    }

    #[test]
    fn test_posts_for_unknown_user_are_empty() {
        let client = FakeNetworkClient::new();
        let response = client.execute(&get("/users/9999/posts?limit=10"));

        assert_eq!(response.code, 200);
        let posts: Vec<ApiPost> = serde_json::from_str(&response.body.unwrap()).unwrap();
        assert!(posts.is_empty());
    }

    #[test]
    fn test_unknown_route_is_404() {
        let client = FakeNetworkClient::new();
        assert_eq!(client.execute(&get("/missing")).code, 404);
        assert_eq!(client.execute(&get("/users/1/comments")).code, 404);
    }

    #[test]
    fn test_non_get_method_is_405() {
        let client = FakeNetworkClient::new();
        let request = NetworkRequest {
            path: "/users/1".to_string(),
            method: "POST".to_string(),
            body: Some("{}".to_string()),
        };

        assert_eq!(client.execute(&request).code, 405);
    }

    #[test]
    fn test_malformed_id_is_400() {
        let client = FakeNetworkClient::new();
        assert_eq!(client.execute(&get("/users/abc")).code, 400);
    }

    #[test]
    fn test_cloned_clients_share_dataset() {
        let client = FakeNetworkClient::new();
        let clone = client.clone();

        let a = client.execute(&get("/users/2")).body;
        let b = clone.execute(&get("/users/2")).body;
        assert_eq!(a, b);
    }
}
