use crate::shell::http::router;
use crate::tests::fixtures::http::read_json;
use crate::tests::fixtures::state::make_test_state;
use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode},
    response::Response,
};
use serde_json::{Value, json};
use tower::ServiceExt;

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> Response {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.clone().oneshot(request).await.unwrap()
}

#[tokio::test]
async fn creates_reads_updates_and_deletes_an_event() {
    let app = router(make_test_state());

    let created = send(
        &app,
        Method::POST,
        "/v1/eventos",
        Some(json!({ "nombre": "RustConf", "fecha": "2025-01-01", "ubicacion": "Rosario" })),
    )
    .await;
    assert_eq!(created.status(), StatusCode::CREATED);
    let created = read_json(created).await;
    assert_eq!(created["id"], 43);

    let updated = send(&app, Method::PATCH, "/v1/eventos/43", Some(json!({ "nombre": "X" }))).await;
    assert_eq!(updated.status(), StatusCode::OK);
    let updated = read_json(updated).await;
    assert_eq!(updated["nombre"], "X");
    assert_eq!(updated["fecha"], "2025-01-01");

    let fetched = read_json(send(&app, Method::GET, "/v1/eventos/43", None).await).await;
    assert_eq!(fetched, updated);

    let listed = read_json(send(&app, Method::GET, "/v1/eventos?ubicacion=Rosario", None).await).await;
    assert_eq!(listed["meta"]["total"], 1);
    assert_eq!(listed["data"][0], updated);

    let deleted = send(&app, Method::DELETE, "/v1/eventos/43", None).await;
    assert_eq!(deleted.status(), StatusCode::NO_CONTENT);

    let gone = send(&app, Method::GET, "/v1/eventos/43", None).await;
    assert_eq!(gone.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn deleting_an_event_cascades_to_its_attendees_and_comments() {
    let app = router(make_test_state());

    let deleted = send(&app, Method::DELETE, "/v1/eventos/42", None).await;
    assert_eq!(deleted.status(), StatusCode::NO_CONTENT);

    for uri in [
        "/v1/eventos/42",
        "/v1/eventos/42/asistentes",
        "/v1/eventos/42/comentarios",
    ] {
        let response = send(&app, Method::GET, uri, None).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{uri}");
        let json = read_json(response).await;
        assert_eq!(
            json,
            json!({ "error": { "code": "NOT_FOUND", "message": "Evento no encontrado" } })
        );
    }
}

#[tokio::test]
async fn new_ids_follow_the_highest_id_even_after_deletes() {
    let app = router(make_test_state());
    let body = json!({ "nombre": "Meetup", "fecha": "2025-01-01" });

    let first = read_json(send(&app, Method::POST, "/v1/eventos", Some(body.clone())).await).await;
    let second = read_json(send(&app, Method::POST, "/v1/eventos", Some(body.clone())).await).await;
    assert_eq!(first["id"], 43);
    assert_eq!(second["id"], 44);

    send(&app, Method::DELETE, "/v1/eventos/43", None).await;
    let third = read_json(send(&app, Method::POST, "/v1/eventos", Some(body)).await).await;
    assert_eq!(third["id"], 45);
}

#[tokio::test]
async fn attendee_and_comment_ids_are_scoped_per_event() {
    let app = router(make_test_state());
    let event = read_json(
        send(
            &app,
            Method::POST,
            "/v1/eventos",
            Some(json!({ "nombre": "Meetup", "fecha": "2025-01-01" })),
        )
        .await,
    )
    .await;
    let event_id = event["id"].as_i64().unwrap();

    let attendee = read_json(
        send(
            &app,
            Method::POST,
            &format!("/v1/eventos/{event_id}/asistentes"),
            Some(json!({ "nombre": "Ana Gómez", "email": "ana@example.com" })),
        )
        .await,
    )
    .await;
    let comment = read_json(
        send(
            &app,
            Method::POST,
            &format!("/v1/eventos/{event_id}/comentarios"),
            Some(json!({ "usuario": "Ana", "texto": "Bien", "puntuacion": 3 })),
        )
        .await,
    )
    .await;

    assert_eq!(attendee["id"], 1);
    assert_eq!(comment["id"], 1);

    let sample_attendees = read_json(send(&app, Method::GET, "/v1/eventos/42/asistentes", None).await).await;
    assert_eq!(sample_attendees[0]["id"], 1);
    assert_eq!(sample_attendees.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn lists_the_alphabetically_first_attendee_of_the_sample_event() {
    let app = router(make_test_state());

    let response = send(
        &app,
        Method::GET,
        "/v1/eventos/42/asistentes?order=nombre&limit=1&offset=0",
        None,
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = read_json(response).await;
    assert_eq!(
        json,
        json!([{ "id": 1, "nombre": "Ana Gómez", "email": "ana@example.com" }])
    );
}

#[tokio::test]
async fn rejects_an_event_without_a_date() {
    let app = router(make_test_state());

    let response = send(&app, Method::POST, "/v1/eventos", Some(json!({ "nombre": "Meetup" }))).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = read_json(response).await;
    assert_eq!(json["error"]["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn tags_every_response_with_a_request_id() {
    let app = router(make_test_state());

    let generated = send(&app, Method::GET, "/v1/eventos/9999", None).await;
    assert!(generated.headers().contains_key("x-request-id"));

    let request = Request::get("/v1/eventos")
        .header("x-request-id", "abc-123")
        .body(Body::empty())
        .unwrap();
    let propagated = app.oneshot(request).await.unwrap();
    assert_eq!(propagated.headers()["x-request-id"], "abc-123");
}
