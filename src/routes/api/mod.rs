use crate::state::NestedRouter;
use axum::routing::get;

mod user;

pub fn route() -> NestedRouter {
    axum::Router::new().route("/users/:username", get(user::get))
}
