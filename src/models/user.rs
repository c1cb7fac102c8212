use serde::{Deserialize, Serialize};

/// Demo credentials for the fake-authentication flow. There is no backend
/// account behind these; the point is the session mechanics in isolation.
pub const DEMO_EMAIL: &str = "jack@example.com";
pub const DEMO_PASSWORD: &str = "fakePasswordQuerty";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub email: String,
    pub avatar: String,
}

impl User {
    pub fn demo() -> Self {
        Self {
            name: "Jack".to_string(),
            email: DEMO_EMAIL.to_string(),
            avatar: "https://i.pravatar.cc/100?u=zz".to_string(),
        }
    }
}
