use crate::error::AppError;
use crate::notes::Username;
use crate::state::SharedState;
use axum::extract::{OriginalUri, Path, State};
use axum::response::Html;

pub(super) async fn get(
    State(state): SharedState,
    OriginalUri(uri): OriginalUri,
    Path(username): Path<Username>,
) -> Result<Html<String>, AppError> {
    let view = crate::profile::lookup(state.users.as_ref(), &username).await?;

    Ok(state.renderer.render_profile(&view, uri.path())?)
}
