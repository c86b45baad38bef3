//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Request, Response},
    Router,
};
use serde_json::{json, Value};
use tara_web::{app::build_app, config::AppConfig, state::AppState};
use tower::ServiceExt;

pub const PROFILE_FORM: &str = "weight=70&height=175&age=30&sex=male&activity=moderate\
&deficit=20&meals-per-day=4&body-fat=&lean-mass=";

/// The body the profile form above must produce.
pub fn expected_profile_body() -> Value {
    json!({
        "weight_kg": 70.0,
        "height_cm": 175.0,
        "age": 30,
        "sex": "male",
        "activity_level": "moderate",
        "deficit_percent": 0.2,
        "meals_per_day": 4
    })
}

pub fn profile_response() -> Value {
    json!({
        "bmr": 1649,
        "tdee": 2556,
        "deficit_percent": 0.2,
        "target_calories": 2045,
        "macros": {"protein_g": 61, "carbs_g": 332, "fat_g": 52},
        "meals_per_day": 4,
        "meals": {
            "cafe_da_manha": {"nome": "Café da Manhã", "percentual": 20, "calorias": 409,
                              "proteina_g": 12, "carboidrato_g": 66, "gordura_g": 10},
            "almoco": {"nome": "Almoço", "percentual": 35, "calorias": 716,
                       "proteina_g": 21, "carboidrato_g": 116, "gordura_g": 18},
            "lanche_tarde": {"nome": "Lanche da Tarde", "percentual": 15, "calorias": 307,
                             "proteina_g": 9, "carboidrato_g": 50, "gordura_g": 8},
            "jantar": {"nome": "Jantar", "percentual": 30, "calorias": 614,
                       "proteina_g": 18, "carboidrato_g": 100, "gordura_g": 16}
        }
    })
}

pub fn analyze_response(with_tip: bool) -> Value {
    let mut rec = json!({
        "escolhas": [
            {"alimento": "Frango grelhado", "gramas": 150, "calorias_estimadas": 248,
             "proteina_g": 46.5, "carboidrato_g": 0, "gordura_g": 5.4,
             "justificativa": "Proteína principal para saciedade"},
            {"alimento": "Arroz branco", "gramas": 120, "calorias_estimadas": 154,
             "proteina_g": 3, "carboidrato_g": 33.8, "gordura_g": 0.3,
             "justificativa": "Carbo base em porção medida"},
            {"alimento": "Salada verde", "gramas": 80, "calorias_estimadas": 15,
             "proteina_g": 1, "carboidrato_g": 2.5, "gordura_g": 0.2,
             "justificativa": "Volume com pouca caloria"}
        ],
        "total": {"calorias": 417, "proteina_g": 50.5, "carboidrato_g": 36.3, "gordura_g": 5.9}
    });
    if with_tip {
        rec["dica"] = json!("Se quiser mais arroz, reduza o frango para 120 g");
    }
    json!({"profile": profile_response(), "recommendation": rec})
}

pub fn router_for(api_base: &str) -> Router {
    let state = AppState::from_config(AppConfig::for_api(api_base)).expect("state");
    build_app(state)
}

pub async fn send(app: &Router, req: Request<Body>) -> (Response<Body>, String) {
    let res = app.clone().oneshot(req).await.expect("router is infallible");
    let (parts, body) = res.into_parts();
    let bytes = axum::body::to_bytes(body, usize::MAX).await.expect("body");
    (
        Response::from_parts(parts, Body::empty()),
        String::from_utf8(bytes.to_vec()).expect("utf-8 html"),
    )
}

pub fn get(uri: &str, cookies: &str) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if !cookies.is_empty() {
        builder = builder.header(header::COOKIE, cookies);
    }
    builder.body(Body::empty()).unwrap()
}

pub fn post_form(uri: &str, form: &str, cookies: &str) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
    if !cookies.is_empty() {
        builder = builder.header(header::COOKIE, cookies);
    }
    builder.body(Body::from(form.to_string())).unwrap()
}

/// `name=value` pairs from every `Set-Cookie`, ready for a `Cookie` header.
pub fn cookies_from(res: &Response<Body>) -> String {
    res.headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .filter_map(|v| v.split(';').next())
        .map(str::trim)
        .collect::<Vec<_>>()
        .join("; ")
}

pub fn set_cookie_names(res: &Response<Body>) -> Vec<String> {
    res.headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .filter_map(|v| v.split('=').next())
        .map(|s| s.trim().to_string())
        .collect()
}
