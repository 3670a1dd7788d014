use super::state::AppState;
use crate::core::contact::{ContactFields, ContactForm, NotificationKind};
use crate::core::publish;
use crate::core::sections::RESUME_FILE;
use crate::utils::error::{PortfolioError, Result};
use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Redirect, Response},
    Form, Json,
};

pub async fn index(State(state): State<AppState>) -> Html<String> {
    Html(state.renderer.render_default().to_html())
}

/// Runs the form state machine on the submitted values and re-renders the page with the outcome.
pub async fn submit_contact(
    State(state): State<AppState>,
    Form(fields): Form<ContactFields>,
) -> (StatusCode, Html<String>) {
    let mut form = ContactForm::from_fields(fields);
    let notice = state.contact.submit(&mut form).await;

    let status = match notice.kind {
        NotificationKind::Success => StatusCode::OK,
        NotificationKind::Warning => StatusCode::UNPROCESSABLE_ENTITY,
        NotificationKind::Error => StatusCode::BAD_GATEWAY,
    };

    let page = state.renderer.render(&form, Some(&notice));
    (status, Html(page.to_html()))
}

pub async fn radar_figure(State(state): State<AppState>) -> Result<Json<serde_json::Value>> {
    Ok(Json(state.renderer.chart().to_figure_json()?))
}

pub async fn open_project(
    State(state): State<AppState>,
    Path(index): Path<usize>,
) -> Result<Redirect> {
    let project = state
        .renderer
        .content()
        .project(index)
        .ok_or_else(|| PortfolioError::NotFound {
            resource: format!("Project #{}", index),
        })?;

    tracing::debug!("Opening project {}: {}", index, project.repository);
    Ok(Redirect::to(&project.repository))
}

pub async fn download_resume(State(state): State<AppState>) -> Result<Response> {
    let data = publish::read_resume(&state.assets, state.resume_path()).await?;

    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", RESUME_FILE),
            ),
        ],
        data,
    )
        .into_response())
}

pub async fn health() -> &'static str {
    "OK"
}
