mod helpers;

use helpers::{analyze_response, expected_profile_body, profile_response};
use serde_json::json;
use tara_web::api::{HttpNutritionApi, NutritionApi};
use tara_web::config::ApiConfig;
use tara_web::error::ClientError;
use tara_web::menu::{AnalyzeRequest, MealType};
use tara_web::profile::ProfileForm;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn api(base_url: String) -> HttpNutritionApi {
    HttpNutritionApi::new(&ApiConfig {
        base_url,
        timeout_secs: 5,
    })
    .expect("client builds")
}

fn example_form() -> ProfileForm {
    ProfileForm {
        weight: "70".into(),
        height: "175".into(),
        age: "30".into(),
        sex: "male".into(),
        activity: "moderate".into(),
        deficit: "20".into(),
        meals_per_day: "4".into(),
        body_fat: String::new(),
        lean_mass: String::new(),
    }
}

#[tokio::test]
async fn example_profile_is_posted_with_fractional_deficit() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/profile"))
        .and(header("content-type", "application/json"))
        .and(body_json(expected_profile_body()))
        .respond_with(ResponseTemplate::new(200).set_body_json(profile_response()))
        .expect(1)
        .mount(&server)
        .await;

    let profile = example_form().to_profile().unwrap();
    let targets = api(server.uri()).compute_profile(&profile).await.unwrap();
    assert_eq!(targets.target_calories, 2045);
    assert_eq!(targets.macros.protein_g, 61.0);
    assert_eq!(targets.meals.len(), 4);
}

#[tokio::test]
async fn optional_body_composition_fields_are_sent_when_filled() {
    let server = MockServer::start().await;
    let mut expected = expected_profile_body();
    expected["body_fat_percent"] = json!(18.0);
    Mock::given(method("POST"))
        .and(path("/api/v1/profile"))
        .and(body_json(expected))
        .respond_with(ResponseTemplate::new(200).set_body_json(profile_response()))
        .expect(1)
        .mount(&server)
        .await;

    let mut form = example_form();
    form.body_fat = "18".into();
    let profile = form.to_profile().unwrap();
    api(server.uri()).compute_profile(&profile).await.unwrap();
}

#[tokio::test]
async fn profile_rejection_maps_to_generic_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/profile"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({"detail": "bad"})))
        .expect(1)
        .mount(&server)
        .await;

    let profile = example_form().to_profile().unwrap();
    let err = api(server.uri()).compute_profile(&profile).await.unwrap_err();
    assert!(matches!(err, ClientError::ProfileRequest { status: 422 }));
    assert_eq!(err.to_string(), "Erro ao calcular perfil");
}

#[tokio::test]
async fn analysis_sends_profile_menu_and_meal() {
    let server = MockServer::start().await;
    let menu = "Arroz, feijão, frango grelhado, farofa, salada";
    Mock::given(method("POST"))
        .and(path("/api/v1/analyze"))
        .and(body_json(json!({
            "profile": expected_profile_body(),
            "menu_text": menu,
            "meal_type": "almoco"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(analyze_response(true)))
        .expect(1)
        .mount(&server)
        .await;

    let request = AnalyzeRequest {
        profile: example_form().to_profile().unwrap(),
        menu_text: menu.into(),
        meal_type: MealType::Almoco,
    };
    let rec = api(server.uri()).analyze_menu(&request).await.unwrap();
    let names: Vec<_> = rec.escolhas.iter().map(|c| c.alimento.as_str()).collect();
    assert_eq!(names, ["Frango grelhado", "Arroz branco", "Salada verde"]);
    assert_eq!(rec.total.calorias, 417.0);
    assert!(rec.tip().unwrap().starts_with("Se quiser mais arroz"));
}

#[tokio::test]
async fn analysis_rejection_maps_to_user_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/analyze"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let request = AnalyzeRequest {
        profile: example_form().to_profile().unwrap(),
        menu_text: "pão".into(),
        meal_type: MealType::CafeDaManha,
    };
    let err = api(server.uri()).analyze_menu(&request).await.unwrap_err();
    assert_eq!(err.to_string(), "Erro ao analisar cardápio");
}

#[tokio::test]
async fn unreachable_backend_is_a_transport_error() {
    let port = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();
    let uri = format!("http://127.0.0.1:{port}");

    let profile = example_form().to_profile().unwrap();
    let err = api(uri).compute_profile(&profile).await.unwrap_err();
    assert!(matches!(err, ClientError::Transport(_)));
}

#[tokio::test]
async fn malformed_success_body_is_a_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/profile"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let profile = example_form().to_profile().unwrap();
    let err = api(server.uri()).compute_profile(&profile).await.unwrap_err();
    assert!(matches!(err, ClientError::Decode(_)));
}
