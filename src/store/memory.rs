use super::{StoreError, UserQuery, UserStore};
use crate::notes::UserRecord;
use tokio::sync::RwLock;

#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    users: RwLock<Vec<UserRecord>>,
}

impl InMemoryUserStore {
    #[cfg(test)]
    pub fn new() -> InMemoryUserStore {
        InMemoryUserStore::default()
    }

    pub fn with_users(users: impl IntoIterator<Item = UserRecord>) -> InMemoryUserStore {
        InMemoryUserStore {
            users: RwLock::new(users.into_iter().collect()),
        }
    }

    #[cfg(test)]
    pub async fn insert(&self, user: UserRecord) {
        self.users.write().await.push(user);
    }
}

#[async_trait::async_trait]
impl UserStore for InMemoryUserStore {
    async fn find_first(&self, query: &UserQuery) -> Result<Option<UserRecord>, StoreError> {
        let users = self.users.read().await;
        Ok(users.iter().find(|user| query.matches(user)).cloned())
    }
}
