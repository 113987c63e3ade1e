use crate::state::State;
use std::sync::Arc;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

pub mod api;
pub mod page;

pub type App = NormalizePath<axum::Router>;

pub fn app(state: Arc<State>) -> App {
    let router = axum::Router::new()
        .merge(page::route())
        .nest("/api", api::route())
        .with_state(state);

    NormalizePathLayer::trim_trailing_slash().layer(router)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notes::UserRecord;
    use crate::render::Renderer;
    use crate::store::{InMemoryUserStore, JsonDirUserStore, UserStore};
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    fn create_test_app(users: Arc<dyn UserStore>) -> App {
        let state = State::new(users, Renderer::new().unwrap());
        app(Arc::new(state))
    }

    fn seeded_app() -> App {
        create_test_app(Arc::new(InMemoryUserStore::with_users([
            UserRecord::new(Some("Kody the Koala"), "kody"),
            UserRecord::new(None, "anon"),
        ])))
    }

    async fn send(app: App, uri: &str) -> (StatusCode, String) {
        let response = app
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = String::from_utf8(body.to_vec()).unwrap();
        (status, body)
    }

    #[tokio::test]
    async fn test_profile_data_for_named_user() {
        let (status, body) = send(seeded_app(), "/api/users/kody").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            r#"{"user":{"name":"Kody the Koala","username":"kody"}}"#
        );
    }

    #[tokio::test]
    async fn test_profile_page_for_named_user() {
        let (status, body) = send(seeded_app(), "/users/kody").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains(r#"<h1 class="text-h1">Kody the Koala</h1>"#));
        assert!(body.contains(r#"href="&#x2f;users&#x2f;kody&#x2f;notes""#));
        assert!(body.contains("<title>Profile | Epic Notes</title>"));
    }

    #[tokio::test]
    async fn test_profile_page_for_unnamed_user() {
        let (status, body) = send(seeded_app(), "/users/anon").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains(r#"<h1 class="text-h1">anon</h1>"#));

        let (_, data) = send(seeded_app(), "/api/users/anon").await;
        assert_eq!(data, r#"{"user":{"name":null,"username":"anon"}}"#);
    }

    #[tokio::test]
    async fn test_missing_user_is_404() {
        for uri in ["/users/ghost", "/api/users/ghost"] {
            let (status, body) = send(seeded_app(), uri).await;

            assert_eq!(status, StatusCode::NOT_FOUND);
            assert_eq!(body, "User not found");
        }
    }

    #[tokio::test]
    async fn test_trailing_slash_is_normalized() {
        let (status, body) = send(seeded_app(), "/users/kody/").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains(r#"href="&#x2f;users&#x2f;kody&#x2f;notes""#));
    }

    #[tokio::test]
    async fn test_store_failure_is_500_without_details() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let app = create_test_app(Arc::new(JsonDirUserStore::new(
            temp_dir.path().join("missing"),
        )));

        let (status, body) = send(app, "/users/kody").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, "Internal Server Error");
    }
}
