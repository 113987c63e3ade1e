use super::{StoreError, UserQuery, UserStore};
use crate::notes::UserRecord;
use std::path::{Path, PathBuf};

/// Users stored as one JSON document per file under `<root>/user`.
#[derive(Debug, Clone)]
pub struct JsonDirUserStore {
    root: PathBuf,
}

impl JsonDirUserStore {
    pub fn new(root: impl Into<PathBuf>) -> JsonDirUserStore {
        JsonDirUserStore { root: root.into() }
    }

    pub fn users_dir(&self) -> PathBuf {
        self.root.join("user")
    }

    // sorted so "first match" doesn't depend on directory iteration order
    async fn user_files(&self) -> Result<Vec<PathBuf>, StoreError> {
        let mut users_dir = tokio::fs::read_dir(self.users_dir()).await?;
        let mut paths = Vec::new();

        while let Some(entry) = users_dir.next_entry().await? {
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                paths.push(path);
            }
        }

        paths.sort();
        Ok(paths)
    }
}

async fn read_user(path: &Path) -> Result<UserRecord, StoreError> {
    let file = tokio::fs::read(path).await?;
    serde_json::from_slice(&file).map_err(|source| StoreError::Decode {
        path: path.to_path_buf(),
        source,
    })
}

#[async_trait::async_trait]
impl UserStore for JsonDirUserStore {
    async fn find_first(&self, query: &UserQuery) -> Result<Option<UserRecord>, StoreError> {
        for path in self.user_files().await? {
            let user = read_user(&path).await?;
            if query.matches(&user) {
                tracing::trace!(?path, username = %user.username, "matched user file");
                return Ok(Some(user));
            }
        }

        Ok(None)
    }
}
