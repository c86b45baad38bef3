use axum::{
    extract::{Query, State},
    http::HeaderMap,
    response::{Html, IntoResponse, Redirect},
    routing::{get, post},
    Form, Router,
};
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;
use tracing::{info, instrument};

use super::{prefers_dark, ACCEPT_CH};
use crate::menu::MenuForm;
use crate::profile::ProfileForm;
use crate::session::Session;
use crate::state::AppState;
use crate::storage::CookieStore;
use crate::view::render::render_planner;

pub fn planner_routes() -> Router<AppState> {
    Router::new()
        .route("/app", get(show_planner))
        .route("/app/profile", post(submit_profile))
        .route("/app/analyze", post(analyze_menu))
        .route("/app/theme", post(toggle_theme))
}

#[derive(Debug, Deserialize)]
pub struct PlannerQuery {
    pub sidebar: Option<String>,
}

fn respond(session: Session<'_, CookieStore>) -> impl IntoResponse {
    let (page, store) = session.into_parts();
    (
        store.into_jar(),
        [(ACCEPT_CH, "Sec-CH-Prefers-Color-Scheme")],
        Html(render_planner(&page)),
    )
}

#[instrument(skip(state, headers, jar))]
pub async fn show_planner(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(q): Query<PlannerQuery>,
    jar: CookieJar,
) -> impl IntoResponse {
    let mut session = state.session(jar);
    session.initialize(prefers_dark(&headers)).await;
    if q.sidebar.as_deref() == Some("open") {
        session.page_mut().sidebar_open = true;
    }
    respond(session)
}

#[instrument(skip_all)]
pub async fn submit_profile(
    State(state): State<AppState>,
    headers: HeaderMap,
    jar: CookieJar,
    Form(form): Form<ProfileForm>,
) -> impl IntoResponse {
    let mut session = state.session(jar);
    session.restore_theme(prefers_dark(&headers));
    if session.submit_profile(form).await {
        info!("profile configured");
    }
    respond(session)
}

#[instrument(skip_all)]
pub async fn analyze_menu(
    State(state): State<AppState>,
    headers: HeaderMap,
    jar: CookieJar,
    Form(form): Form<MenuForm>,
) -> impl IntoResponse {
    let mut session = state.session(jar);
    session.initialize(prefers_dark(&headers)).await;
    session.submit_menu(form).await;
    respond(session)
}

#[instrument(skip_all)]
pub async fn toggle_theme(
    State(state): State<AppState>,
    headers: HeaderMap,
    jar: CookieJar,
) -> impl IntoResponse {
    let mut session = state.session(jar);
    session.restore_theme(prefers_dark(&headers));
    session.toggle_theme();
    let (_, store) = session.into_parts();
    (store.into_jar(), Redirect::to("/app"))
}
