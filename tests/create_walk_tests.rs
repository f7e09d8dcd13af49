// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Create-walk form tests.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use ns_walk::config::Config;
use serde_json::{json, Value};
use tower::ServiceExt;

mod common;

fn post_walk(body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/create-walk")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn valid_walk() -> Value {
    json!({
        "direction": "coworking-to-marina",
        "meetup_spot": "NS-Coworking Lobby",
        "date_time": "2025-05-05T09:00",
        "time_flexibility": "flexible",
        "discussion_topic": "Rust in production",
        "max_participants": 5,
        "participants_at_location": 2,
        "pickup_location": "Lobby"
    })
}

fn field_kinds(body: &Value) -> Vec<(String, String)> {
    body["fields"]
        .as_array()
        .unwrap()
        .iter()
        .map(|f| {
            (
                f["field"].as_str().unwrap().to_string(),
                f["kind"].as_str().unwrap().to_string(),
            )
        })
        .collect()
}

#[tokio::test]
async fn test_form_defaults() {
    let (app, _) = common::create_test_app();

    let response = app
        .oneshot(Request::builder().uri("/create-walk").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = common::body_json(response).await;
    assert_eq!(body["directions"][0]["value"], "marina-to-coworking");
    assert_eq!(body["directions"][0]["selected"], true);
    assert_eq!(body["meetup_spots"][0]["value"], "NS Cafe");
    assert_eq!(body["meetup_spots"][0]["selected"], true);
    assert_eq!(body["meetup_spots"][2]["value"], "custom");
    assert_eq!(body["show_custom_field"], false);
    assert_eq!(body["default_date_time"], "2025-05-03T00:00");
    assert_eq!(body["default_max_participants"], 5);
    assert_eq!(body["max_participants_limit"], 20);
    assert_eq!(body["time_flexibility"][0]["value"], "on-time");
}

#[tokio::test]
async fn test_direction_switch_offers_its_own_spots() {
    let (app, _) = common::create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/create-walk?direction=coworking-to-marina")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let body = common::body_json(response).await;
    assert_eq!(body["directions"][1]["selected"], true);
    assert_eq!(body["meetup_spots"][0]["value"], "Near Entrance NS-Coworking");
    assert_eq!(body["meetup_spots"][0]["selected"], true);
}

#[tokio::test]
async fn test_create_walk_accepted() {
    let ((app, _), sink) = common::create_test_app_with_config(Config::test_default());

    let response = app.oneshot(post_walk(valid_walk())).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = common::body_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Walk created successfully!");
    assert_eq!(body["preview"]["id"], 4);
    assert_eq!(body["preview"]["when"], "Mon, May 5, 2025, 9:00 AM");
    assert_eq!(body["preview"]["participants"], "2/5 participants");
    assert_eq!(body["preview"]["organizer"], "You");

    let walks = sink.walks.lock().unwrap();
    assert_eq!(walks.len(), 1);
    assert_eq!(walks[0].meetup_spot, "NS-Coworking Lobby");
    assert_eq!(
        walks[0].date_time.to_rfc3339(),
        "2025-05-05T01:00:00+00:00"
    );
}

#[tokio::test]
async fn test_custom_spot_requires_text() {
    let mut walk = valid_walk();
    walk["meetup_spot"] = json!("custom");
    walk["custom_meetup_spot"] = json!("   ");

    let ((app, _), sink) = common::create_test_app_with_config(Config::test_default());
    let response = app.oneshot(post_walk(walk)).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = common::body_json(response).await;
    assert_eq!(
        field_kinds(&body),
        vec![(
            "custom_meetup_spot".to_string(),
            "missing_required_field".to_string()
        )]
    );
    assert!(sink.walks.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_custom_spot_with_text_succeeds() {
    let mut walk = valid_walk();
    walk["meetup_spot"] = json!("custom");
    walk["custom_meetup_spot"] = json!("Bus stop outside");

    let ((app, _), sink) = common::create_test_app_with_config(Config::test_default());
    let response = app.oneshot(post_walk(walk)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(sink.walks.lock().unwrap()[0].meetup_spot, "Bus stop outside");
}

#[tokio::test]
async fn test_missing_fields_reported_together() {
    let (app, _) = common::create_test_app();

    let response = app
        .oneshot(post_walk(json!({ "direction": "marina-to-coworking" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = common::body_json(response).await;
    let fields: Vec<String> = field_kinds(&body).into_iter().map(|(f, _)| f).collect();
    for expected in [
        "date_time",
        "max_participants",
        "participants_at_location",
        "pickup_location",
    ] {
        assert!(fields.contains(&expected.to_string()), "{expected}: {fields:?}");
    }
}

#[tokio::test]
async fn test_out_of_range_participants() {
    let mut walk = valid_walk();
    walk["max_participants"] = json!(21);

    let (app, _) = common::create_test_app();
    let response = app.oneshot(post_walk(walk)).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = common::body_json(response).await;
    assert_eq!(
        field_kinds(&body),
        vec![("max_participants".to_string(), "out_of_range".to_string())]
    );
    assert_eq!(
        body["fields"][0]["message"],
        "Please enter a valid number between 1 and 20"
    );
}

#[tokio::test]
async fn test_bad_date_is_invalid_format() {
    let mut walk = valid_walk();
    walk["date_time"] = json!("next tuesday");

    let (app, _) = common::create_test_app();
    let response = app.oneshot(post_walk(walk)).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = common::body_json(response).await;
    assert_eq!(
        field_kinds(&body),
        vec![("date_time".to_string(), "invalid_format".to_string())]
    );
}

#[tokio::test]
async fn test_spot_from_other_direction_rejected() {
    let mut walk = valid_walk();
    walk["meetup_spot"] = json!("NS Cafe");

    let (app, _) = common::create_test_app();
    let response = app.oneshot(post_walk(walk)).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = common::body_json(response).await;
    assert_eq!(
        field_kinds(&body),
        vec![("meetup_spot".to_string(), "invalid_format".to_string())]
    );
}

#[tokio::test]
async fn test_unknown_direction_is_field_error() {
    let mut walk = valid_walk();
    walk["direction"] = json!("sideways");

    let (app, _) = common::create_test_app();
    let response = app.oneshot(post_walk(walk)).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "application/json"
    );
    let body = common::body_json(response).await;
    assert_eq!(
        field_kinds(&body),
        vec![("direction".to_string(), "invalid_format".to_string())]
    );
}

#[tokio::test]
async fn test_unknown_time_flexibility_is_field_error() {
    let mut walk = valid_walk();
    walk["time_flexibility"] = json!("whenever");

    let (app, _) = common::create_test_app();
    let response = app.oneshot(post_walk(walk)).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = common::body_json(response).await;
    assert_eq!(
        field_kinds(&body),
        vec![("time_flexibility".to_string(), "invalid_format".to_string())]
    );
}

#[tokio::test]
async fn test_counts_accepted_as_text() {
    let mut walk = valid_walk();
    walk["max_participants"] = json!("5");
    walk["participants_at_location"] = json!("2");

    let ((app, _), sink) = common::create_test_app_with_config(Config::test_default());
    let response = app.oneshot(post_walk(walk)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let walks = sink.walks.lock().unwrap();
    assert_eq!(walks[0].max_participants, 5);
    assert_eq!(walks[0].participants_at_location, 2);
}

#[tokio::test]
async fn test_non_numeric_count_is_field_error() {
    let mut walk = valid_walk();
    walk["max_participants"] = json!("five");

    let (app, _) = common::create_test_app();
    let response = app.oneshot(post_walk(walk)).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = common::body_json(response).await;
    assert_eq!(
        field_kinds(&body),
        vec![("max_participants".to_string(), "invalid_format".to_string())]
    );
}

#[tokio::test]
async fn test_missing_direction_reports_only_direction() {
    let mut walk = valid_walk();
    walk.as_object_mut().unwrap().remove("direction");

    let (app, _) = common::create_test_app();
    let response = app.oneshot(post_walk(walk)).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = common::body_json(response).await;
    assert_eq!(
        field_kinds(&body),
        vec![(
            "direction".to_string(),
            "missing_required_field".to_string()
        )]
    );
}

#[tokio::test]
async fn test_malformed_body_is_json_error() {
    let (app, _) = common::create_test_app();
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/create-walk")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = common::body_json(response).await;
    assert_eq!(body["error"], "bad_request");
}
