use crate::notes::{UserRecord, Username};
use crate::store::{StoreError, UserQuery, UserStore};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileView {
    pub name: Option<String>,
    pub username: Username,
}

/// Body of the profile data route: `{"user": {"name": ..., "username": ...}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileData {
    pub user: ProfileView,
}

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("User not found")]
    NotFound,
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ProfileView {
    /// Only a missing name falls back to the username; an empty one is shown as is.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.username)
    }
}

impl From<UserRecord> for ProfileView {
    fn from(record: UserRecord) -> ProfileView {
        ProfileView {
            name: record.name,
            username: record.username,
        }
    }
}

pub async fn lookup(store: &dyn UserStore, username: &str) -> Result<ProfileView, ProfileError> {
    let Some(user) = store
        .find_first(&UserQuery::username_equals(username))
        .await?
    else {
        tracing::debug!(username, "profile lookup found no user");
        return Err(ProfileError::NotFound);
    };

    tracing::debug!(username, "profile lookup found user");
    Ok(user.into())
}
