use serde::{Deserialize, Serialize};

pub type Username = String;

pub const DEFAULT_STORE_PATH: &str = "./store";

/// Sub-route every profile page links to, relative to the profile path.
pub const NOTES_SEGMENT: &str = "notes";

pub const PROFILE_TITLE: &str = "Profile | Epic Notes";
pub const PROFILE_DESCRIPTION: &str = "Checkout this Profile on Epic Notes";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    #[serde(default)]
    pub name: Option<String>,
    pub username: Username,
}

impl UserRecord {
    pub fn new(name: Option<&str>, username: &str) -> UserRecord {
        UserRecord {
            name: name.map(String::from),
            username: String::from(username),
        }
    }
}
