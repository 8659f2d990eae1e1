//! Language selection and message catalog endpoints.

use std::collections::BTreeMap;

use axum::extract::{Path, State};
use axum::http::header::REFERER;
use axum::http::HeaderMap;
use axum::response::Redirect;
use axum::{routing::get, Json, Router};
use axum_extra::extract::cookie::{Cookie, CookieJar};

use crate::error::ApiError;
use crate::i18n::Locale;
use crate::AppState;

/// Cookie carrying the visitor's language preference.
pub const LANG_COOKIE: &str = "lang";

/// Set the language cookie and bounce back to the referring page.
/// Unsupported codes leave the cookie untouched but still redirect.
async fn set_language(
    Path(code): Path<String>,
    headers: HeaderMap,
    jar: CookieJar,
) -> (CookieJar, Redirect) {
    let back = headers
        .get(REFERER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("/")
        .to_string();

    match Locale::parse(&code) {
        Some(locale) => {
            let cookie = Cookie::build((LANG_COOKIE, locale.as_str()))
                .path("/")
                .build();
            (jar.add(cookie), Redirect::to(&back))
        }
        None => (jar, Redirect::to(&back)),
    }
}

/// The full message table for one locale, for the static UI to render.
async fn translations(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<BTreeMap<&'static str, &'static str>>, ApiError> {
    let locale = Locale::parse(&code)
        .ok_or_else(|| ApiError::Validation(format!("unsupported language code '{code}'")))?;
    Ok(Json(state.messages.strings(locale).clone()))
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/set_language/{code}", get(set_language))
        .route("/api/translations/{code}", get(translations))
}
