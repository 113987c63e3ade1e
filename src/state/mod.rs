use crate::render::Renderer;
use crate::settings::{StoreBackend, Settings};
use crate::store::{InMemoryUserStore, JsonDirUserStore, UserStore};
use std::sync::Arc;

pub type SharedState = axum::extract::State<Arc<State>>;
pub type NestedRouter = axum::Router<Arc<State>>;

#[derive(Debug)]
pub struct State {
    pub users: Arc<dyn UserStore>,
    pub renderer: Renderer,
}

impl State {
    pub fn new(users: Arc<dyn UserStore>, renderer: Renderer) -> State {
        State { users, renderer }
    }

    pub fn try_from_settings(settings: &Settings) -> anyhow::Result<State> {
        let users: Arc<dyn UserStore> = match settings.store.backend {
            StoreBackend::Memory => {
                tracing::info!(
                    seeded = settings.store.users.len(),
                    "using in-memory user store"
                );
                Arc::new(InMemoryUserStore::with_users(
                    settings.store.users.iter().cloned(),
                ))
            }
            StoreBackend::Json => {
                tracing::info!(path = %settings.store.path, "using json user store");
                Arc::new(JsonDirUserStore::new(&settings.store.path))
            }
        };

        Ok(State::new(users, Renderer::new()?))
    }
}
