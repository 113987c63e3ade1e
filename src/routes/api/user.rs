use crate::error::AppError;
use crate::notes::Username;
use crate::profile::ProfileData;
use crate::state::SharedState;
use axum::extract::{Path, State};
use axum::Json;

pub(super) async fn get(
    State(state): SharedState,
    Path(username): Path<Username>,
) -> Result<Json<ProfileData>, AppError> {
    let user = crate::profile::lookup(state.users.as_ref(), &username).await?;

    Ok(Json(ProfileData { user }))
}
