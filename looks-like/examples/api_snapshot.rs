//! Checks an API response against a stored record of a different type,
//! ignoring fields that change on every request.
#![allow(dead_code)]

use looks_like::{Properties, exclude, like};

#[derive(Debug, PartialEq, Properties)]
struct StoredUser {
    pub id: u64,
    pub name: String,
    pub email: Option<String>,
    pub updated_at: u64,
    password_hash: String,
}

#[derive(Debug, PartialEq, Properties)]
struct UserResponse {
    pub id: u64,
    pub name: String,
    pub email: Option<String>,
    pub updated_at: u64,
    pub links: Vec<String>,
}

pub fn main() {
    let stored = StoredUser {
        id: 7,
        name: "Ada".to_string(),
        email: None,
        updated_at: 1_700_000_000,
        password_hash: "x".repeat(16),
    };
    let response = UserResponse {
        id: 7,
        name: "Ada".to_string(),
        email: None,
        updated_at: 1_700_000_042,
        links: vec!["/users/7".to_string()],
    };

    let mut matcher = exclude!(like(stored), |u| u.updated_at);
    assert!(matcher.matches(&response));

    // Without the exclusion the timestamps are reported.
    let mut strict = like(StoredUser {
        id: 7,
        name: "Ada".to_string(),
        email: None,
        updated_at: 1_700_000_000,
        password_hash: String::new(),
    });
    if !strict.matches(&response) {
        println!("{}", strict.message().unwrap_or_default());
    }
}
