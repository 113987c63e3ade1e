use crate::notes::UserRecord;
use thiserror::Error;

pub mod json;
pub mod memory;

pub use json::JsonDirUserStore;
pub use memory::InMemoryUserStore;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StringFilter {
    Equals(String),
}

impl StringFilter {
    pub fn matches(&self, value: &str) -> bool {
        match self {
            StringFilter::Equals(expected) => expected == value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserQuery {
    pub username: StringFilter,
}

impl UserQuery {
    pub fn username_equals(username: &str) -> UserQuery {
        UserQuery {
            username: StringFilter::Equals(String::from(username)),
        }
    }

    pub fn matches(&self, record: &UserRecord) -> bool {
        self.username.matches(&record.username)
    }
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed user record {path:?}: {source}")]
    Decode {
        path: std::path::PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Read-only access to user records. Implementations return the first record
/// matching the query when several could match.
#[async_trait::async_trait]
pub trait UserStore: Send + Sync + std::fmt::Debug {
    async fn find_first(&self, query: &UserQuery) -> Result<Option<UserRecord>, StoreError>;
}
