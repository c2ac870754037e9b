use crate::shell::config::Config;
use crate::shell::http::router;
use crate::shell::state::AppState;
use crate::tests::fixtures::http::read_json;
use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
};
use rstest::rstest;
use tower::ServiceExt;

fn config(api_token: Option<&str>) -> Config {
    Config {
        bind_addr: "127.0.0.1:0".parse().unwrap(),
        api_token: api_token.map(Into::into),
        seed_sample_data: true,
    }
}

#[rstest]
#[case(Method::GET, "/v1/eventos")]
#[case(Method::POST, "/v1/eventos")]
#[case(Method::GET, "/v1/eventos/42")]
#[case(Method::PATCH, "/v1/eventos/42")]
#[case(Method::DELETE, "/v1/eventos/42")]
#[case(Method::GET, "/v1/eventos/42/asistentes")]
#[case(Method::POST, "/v1/eventos/42/asistentes")]
#[case(Method::GET, "/v1/eventos/42/comentarios")]
#[case(Method::POST, "/v1/eventos/42/comentarios")]
#[tokio::test]
async fn the_default_gate_rejects_every_route(#[case] method: Method, #[case] uri: &'static str) {
    let app = router(AppState::from_config(&config(None)));

    // A malformed body must not get past the gate either.
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .header("authorization", "Bearer anything")
        .body(Body::from("not-json"))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = read_json(response).await;
    assert_eq!(
        json,
        serde_json::json!({
            "error": { "code": "UNAUTHORIZED", "message": "Token de autenticación requerido" }
        })
    );
}

#[tokio::test]
async fn the_default_gate_leaves_the_store_untouched() {
    let state = AppState::from_config(&config(None));
    let app = router(state.clone());

    let request = Request::delete("/v1/eventos/42").body(Body::empty()).unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert!(state.repository.get_event(42).await.is_ok());
}

#[tokio::test]
async fn a_configured_token_opens_the_api() {
    let app = router(AppState::from_config(&config(Some("s3cret"))));

    let authorized = app
        .clone()
        .oneshot(
            Request::get("/v1/eventos/42")
                .header("authorization", "Bearer s3cret")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let wrong = app
        .oneshot(
            Request::get("/v1/eventos/42")
                .header("authorization", "Bearer guess")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(authorized.status(), StatusCode::OK);
    assert_eq!(wrong.status(), StatusCode::UNAUTHORIZED);
    let json = read_json(wrong).await;
    assert_eq!(json["error"]["message"], "Token de autenticación inválido");
}

#[tokio::test]
async fn unknown_routes_are_not_gated() {
    let app = router(AppState::from_config(&config(None)));

    let response = app
        .oneshot(Request::get("/v1/nada").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
