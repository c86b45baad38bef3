use axum::{
    extract::State,
    http::HeaderMap,
    response::{Html, IntoResponse},
    routing::get,
    Router,
};
use axum_extra::extract::cookie::CookieJar;
use tracing::instrument;

use super::{prefers_dark, ACCEPT_CH};
use crate::state::AppState;
use crate::storage::{CookieStore, KeyValueStore};
use crate::theme::{self, THEME_KEY};
use crate::reveal;
use crate::view::render::{landing_sections, render_landing};

pub fn landing_routes() -> Router<AppState> {
    Router::new().route("/", get(landing))
}

#[instrument(skip_all)]
pub async fn landing(
    State(state): State<AppState>,
    headers: HeaderMap,
    jar: CookieJar,
) -> impl IntoResponse {
    let store = CookieStore::new(jar, state.config.cookie_secure);
    let theme = theme::resolve(store.get(THEME_KEY).as_deref(), prefers_dark(&headers));
    let targets: Vec<_> = landing_sections().into_iter().map(|(t, _, _)| t).collect();
    let revealed = reveal::first_paint(&targets).await;
    (
        [(ACCEPT_CH, "Sec-CH-Prefers-Color-Scheme")],
        Html(render_landing(theme, &revealed)),
    )
}
