use crate::auth::AuthenticatedUser;
use crate::errors::AppError;
use crate::history::build_history;
use crate::models::{AddedResponse, Reading, ReadingForm};
use crate::state::AppState;
use crate::ui::render_index;
use axum::{
    Form, Json,
    extract::{State, rejection::FormRejection},
    http::StatusCode,
    response::Html,
};
use tracing::{error, info};

pub async fn index(
    State(state): State<AppState>,
    AuthenticatedUser(_username): AuthenticatedUser,
) -> (StatusCode, Html<String>) {
    match state.store.list_all().await {
        Ok(records) => (StatusCode::OK, Html(render_index(&build_history(&records), None))),
        Err(err) => {
            error!("failed to load history: {err}");
            let notice = format!("History is unavailable right now: {err}");
            (StatusCode::BAD_GATEWAY, Html(render_index(&[], Some(&notice))))
        }
    }
}

pub async fn add(
    State(state): State<AppState>,
    AuthenticatedUser(username): AuthenticatedUser,
    form: Result<Form<ReadingForm>, FormRejection>,
) -> Result<Json<AddedResponse>, AppError> {
    let Form(form) = form.map_err(|rejection| AppError::unprocessable(rejection.body_text()))?;
    let reading = Reading::from(form);

    state.store.append(&reading).await.map_err(|err| {
        error!("failed to append reading: {err}");
        AppError::from(err)
    })?;

    info!(user = %username, date = %reading.date, "reading added");
    Ok(Json(AddedResponse::ok()))
}
