//! Drives [`ClubsClient`] against an axum stub of the club API.

use std::collections::HashMap;

use api::{ApiError, ClubBackend, ClubsClient, Credentials, NewClub, Signup};
use axum::extract::{Path, Query};
use axum::http::header::{COOKIE, SET_COOKIE};
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use reqwest::Url;
use serde_json::{json, Value};

fn session_user(headers: &HeaderMap) -> Option<String> {
    headers
        .get(COOKIE)?
        .to_str()
        .ok()?
        .split(';')
        .find_map(|pair| pair.trim().strip_prefix("session="))
        .filter(|user| !user.is_empty())
        .map(str::to_string)
}

fn stub_router() -> Router {
    Router::new()
        .route(
            "/api/clubs",
            get(|Query(params): Query<HashMap<String, String>>| async move {
                let search = params.get("search").cloned().unwrap_or_default();
                Json(json!({ "clubs": [
                    { "name": "Chess", "description": search, "tags": ["Games"] }
                ] }))
            })
            .post(|headers: HeaderMap, Json(body): Json<Value>| async move {
                if session_user(&headers).is_none() {
                    return StatusCode::UNAUTHORIZED.into_response();
                }
                if body["name"] == "Dup" {
                    return (StatusCode::BAD_REQUEST, Json(json!({ "status": "Duplicate fields" })))
                        .into_response();
                }
                Json(json!({ "status": "success" })).into_response()
            }),
        )
        .route(
            "/api/clubs/{tag}",
            get(|Path(tag): Path<String>| async move {
                Json(json!({ "clubs": [
                    { "name": "Tagged", "description": "", "tags": [tag] }
                ] }))
            }),
        )
        .route("/api/all_tags", get(|| async { Json(json!(["Arts", "Games"])) }))
        .route(
            "/api/tag_count",
            get(|| async { Json(json!([{ "tag": "Games", "count": 2 }])) }),
        )
        .route(
            "/api/{club}/comment",
            get(|Path(club): Path<String>| async move {
                Json(json!([{ "author": "ann", "text": club }]))
            })
            .post(
                |headers: HeaderMap, Json(body): Json<Value>| async move {
                    let Some(user) = session_user(&headers) else {
                        return StatusCode::UNAUTHORIZED.into_response();
                    };
                    if body["text"].as_str().unwrap_or_default().is_empty() {
                        return StatusCode::BAD_REQUEST.into_response();
                    }
                    Json(json!({ "author": user })).into_response()
                },
            ),
        )
        .route(
            "/api/{club}/favorite",
            get(|| async { Json(json!({ "favorite count": 3 })) })
                .post(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
        )
        .route(
            "/api/login",
            axum::routing::post(|Json(creds): Json<Credentials>| async move {
                if creds.password != "pw" {
                    return StatusCode::UNAUTHORIZED.into_response();
                }
                let cookie = format!("session={}; Path=/", creds.username);
                ([(SET_COOKIE, cookie)], Json(json!({ "status": "success" }))).into_response()
            }),
        )
        .route(
            "/api/signup",
            axum::routing::post(|Json(signup): Json<Signup>| async move {
                if signup.username == "taken" {
                    return (
                        StatusCode::BAD_REQUEST,
                        Json(json!({ "message": "Username taken" })),
                    )
                        .into_response();
                }
                Json(json!({ "status": "success" })).into_response()
            }),
        )
        .route(
            "/api/logout",
            get(|headers: HeaderMap| async move {
                let body = match session_user(&headers) {
                    Some(_) => json!({ "message": "Logged out, bye" }),
                    None => json!({}),
                };
                ([(SET_COOKIE, "session=; Path=/")], Json(body))
            }),
        )
}

async fn spawn_stub() -> ClubsClient {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind");
    let addr = listener.local_addr().expect("Failed to get addr");

    tokio::spawn(async move {
        axum::serve(listener, stub_router()).await.unwrap();
    });

    let base = Url::parse(&format!("http://{addr}/")).unwrap();
    ClubsClient::new(base).unwrap()
}

#[tokio::test]
async fn test_list_search_and_tag() {
    let client = spawn_stub().await;

    let clubs = client.list_clubs().await.unwrap();
    assert_eq!(clubs.len(), 1);
    assert_eq!(clubs[0].tags, ["Games"]);

    let found = client.search_clubs("chess & go").await.unwrap();
    assert_eq!(found[0].description, "chess & go");

    let tagged = client.clubs_with_tag("Arts & Crafts").await.unwrap();
    assert_eq!(tagged[0].tags, ["Arts & Crafts"]);
}

#[tokio::test]
async fn test_tags() {
    let client = spawn_stub().await;
    assert_eq!(client.all_tags().await.unwrap(), ["Arts", "Games"]);

    let counts = client.tag_counts().await.unwrap();
    assert_eq!(counts[0].tag, "Games");
    assert_eq!(counts[0].count, 2);
}

#[tokio::test]
async fn test_comments_use_session_cookie() {
    let client = spawn_stub().await;

    let comments = client.comments("Penn Chess Club").await.unwrap();
    assert_eq!(comments[0].text, "Penn Chess Club");

    let err = client.post_comment("Penn Chess Club", "hello").await.unwrap_err();
    assert!(err.is_unauthorized());

    let err = client
        .login(&Credentials {
            username: "ann".into(),
            password: "wrong".into(),
        })
        .await
        .unwrap_err();
    assert!(err.is_unauthorized());

    client
        .login(&Credentials {
            username: "ann".into(),
            password: "pw".into(),
        })
        .await
        .unwrap();

    let posted = client.post_comment("Penn Chess Club", "hello").await.unwrap();
    assert_eq!(posted.author, "ann");

    let message = client.logout().await.unwrap();
    assert_eq!(message, "Logged out, bye");

    let err = client.post_comment("Penn Chess Club", "again").await.unwrap_err();
    assert!(err.is_unauthorized());
}

#[tokio::test]
async fn test_create_club_status_mapping() {
    let client = spawn_stub().await;
    let club = NewClub {
        name: "Dup".into(),
        ..Default::default()
    };

    assert!(client.create_club(&club).await.unwrap_err().is_unauthorized());

    client
        .login(&Credentials {
            username: "ann".into(),
            password: "pw".into(),
        })
        .await
        .unwrap();

    let err = client.create_club(&club).await.unwrap_err();
    assert_eq!(err.server_message(), Some("Duplicate fields"));

    let club = NewClub {
        name: "Film Society".into(),
        ..Default::default()
    };
    client.create_club(&club).await.unwrap();
}

#[tokio::test]
async fn test_signup_message_and_favorites() {
    let client = spawn_stub().await;
    let signup = Signup {
        username: "taken".into(),
        name: "T".into(),
        password: "pw".into(),
        email: "t@example.edu".into(),
        year: Some(2026),
        major: None,
    };
    let err = client.signup(&signup).await.unwrap_err();
    assert_eq!(err.to_string(), "Username taken");

    assert_eq!(client.favorite_count("Chess").await.unwrap(), 3);
    let err = client.toggle_favorite("Chess").await.unwrap_err();
    assert!(matches!(err, ApiError::Status(500)));
}

#[tokio::test]
async fn test_logout_without_message_falls_back() {
    let client = spawn_stub().await;
    assert_eq!(client.logout().await.unwrap(), "Logged out");
}
