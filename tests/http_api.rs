//! HTTP client tests: drive `HttpApi` and the controllers against a real
//! axum server bound to a random local port.

use std::sync::Arc;

use axum::Json;
use axum::Router;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use parking_lot::Mutex;
use serde_json::{Value, json};

use social_gui::app::navigation::Route;
use social_gui::domain::config::ApiConfig;
use social_gui::domain::registration::{RegistrationField, RegistrationInput};
use social_gui::domain::relationship::FollowLabel;
use social_gui::domain::user::UserId;
use social_gui::error::Error;
use social_gui::eventing::app_event::AppEvent;
use social_gui::features::profile::controller::ProfileController;
use social_gui::features::register::controller::RegisterController;
use social_gui::i18n::keys;
use social_gui::services::{HttpApi, SocialApi};
use social_gui::state::profile_state::ProfileState;
use social_gui::state::registration_state::RegistrationState;
use social_gui::state::session_state::Session;

// =====================================================================
// Test server
// =====================================================================

#[derive(Clone, Default)]
struct Recorder {
    hits: Arc<Mutex<Vec<String>>>,
    bodies: Arc<Mutex<Vec<Value>>>,
}

impl Recorder {
    fn hit(&self, line: String) {
        self.hits.lock().push(line);
    }

    fn hits(&self) -> Vec<String> {
        self.hits.lock().clone()
    }
}

async fn get_user(State(rec): State<Recorder>, Path(id): Path<String>) -> Response {
    rec.hit(format!("GET /api/user/{id}"));
    if id == "missing" {
        return (StatusCode::NOT_FOUND, Json(json!({ "message": "not found" }))).into_response();
    }
    Json(json!({
        "_id": id,
        "id": id,
        "name": "Ana",
        "profilePicture": null,
        "postsCount": 4.0,
        "followers": ["viewer", "other"],
        "following": []
    }))
    .into_response()
}

async fn follow(State(rec): State<Recorder>, Path(id): Path<String>) -> StatusCode {
    rec.hit(format!("POST /api/followers/seguir/{id}"));
    StatusCode::OK
}

async fn unfollow(State(rec): State<Recorder>, Path(id): Path<String>) -> StatusCode {
    rec.hit(format!("POST /api/followers/dejar-seguir/{id}"));
    if id == "locked" {
        StatusCode::INTERNAL_SERVER_ERROR
    } else {
        StatusCode::OK
    }
}

async fn register(State(rec): State<Recorder>, Json(body): Json<Value>) -> Response {
    rec.hit("POST /api/auth/register/user".to_string());
    rec.bodies.lock().push(body.clone());
    if body["email"] == "taken@x.com" {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "message": "Email already registered" })),
        )
            .into_response();
    }
    (StatusCode::CREATED, Json(json!({ "message": "User registered" }))).into_response()
}

struct TestServer {
    base_url: String,
    recorder: Recorder,
}

impl TestServer {
    fn api(&self) -> Arc<HttpApi> {
        Arc::new(
            HttpApi::new(&ApiConfig {
                base_url: self.base_url.clone(),
                timeout_secs: Some(5),
            })
            .expect("valid base url"),
        )
    }
}

async fn start_test_server() -> TestServer {
    let recorder = Recorder::default();
    let app = Router::new()
        .route("/api/user/{id}", get(get_user))
        .route("/api/followers/seguir/{id}", post(follow))
        .route("/api/followers/dejar-seguir/{id}", post(unfollow))
        .route("/api/auth/register/user", post(register))
        .with_state(recorder.clone());

    // Bind to random port; connections queue until serve() starts accepting.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test listener");
    let addr = listener.local_addr().expect("listener address");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("test server");
    });

    TestServer {
        base_url: format!("http://{addr}"),
        recorder,
    }
}

// =====================================================================
// HttpApi
// =====================================================================

#[tokio::test]
async fn fetch_user_decodes_profile() {
    let server = start_test_server().await;
    let profile = server
        .api()
        .fetch_user(&UserId::from("u1"))
        .await
        .expect("profile");

    assert_eq!(profile.id, Some(UserId::from("u1")));
    assert_eq!(profile.display_name(), Some("Ana"));
    assert_eq!(profile.posts_count(), 4);
    assert_eq!(profile.followers_count(), 2);
    assert_eq!(server.recorder.hits(), vec!["GET /api/user/u1"]);
}

#[tokio::test]
async fn non_success_status_is_an_error() {
    let server = start_test_server().await;
    let err = server
        .api()
        .fetch_user(&UserId::from("missing"))
        .await
        .expect_err("404 must fail");

    match err {
        Error::Status { status, body, .. } => {
            assert_eq!(status, 404);
            assert!(body.contains("not found"));
        }
        other => panic!("expected status error, got {other}"),
    }
}

#[tokio::test]
async fn follow_and_unfollow_hit_their_endpoints() {
    let server = start_test_server().await;
    let api = server.api();

    api.follow(&UserId::from("u2")).await.expect("follow");
    api.unfollow(&UserId::from("u2")).await.expect("unfollow");
    let err = api
        .unfollow(&UserId::from("locked"))
        .await
        .expect_err("500 must fail");

    assert!(matches!(err, Error::Status { status: 500, .. }));
    assert_eq!(
        server.recorder.hits(),
        vec![
            "POST /api/followers/seguir/u2",
            "POST /api/followers/dejar-seguir/u2",
            "POST /api/followers/dejar-seguir/locked",
        ]
    );
}

#[tokio::test]
async fn register_posts_exact_body() {
    let server = start_test_server().await;
    let response = server
        .api()
        .register(&RegistrationInput::new("Ana", "ana@x.com", "pw123"))
        .await
        .expect("registered");

    assert_eq!(response, json!({ "message": "User registered" }));
    assert_eq!(
        server.recorder.bodies.lock().clone(),
        vec![json!({ "name": "Ana", "email": "ana@x.com", "password": "pw123" })]
    );
}

#[tokio::test]
async fn truncated_register_body_is_a_transport_error() {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    // Promises 100 bytes, sends 4, then hangs up
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind raw listener");
    let addr = listener.local_addr().expect("listener address");
    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.expect("accept");
        let mut buf = [0u8; 4096];
        let _ = socket.read(&mut buf).await;
        let _ = socket
            .write_all(b"HTTP/1.1 201 Created\r\nContent-Length: 100\r\n\r\n{\"a\"")
            .await;
        let _ = socket.shutdown().await;
    });

    let api = HttpApi::new(&ApiConfig {
        base_url: format!("http://{addr}"),
        timeout_secs: Some(5),
    })
    .expect("valid base url");
    let err = api
        .register(&RegistrationInput::new("Ana", "ana@x.com", "pw123"))
        .await
        .expect_err("truncated body must fail");

    assert!(matches!(err, Error::Http { .. }), "{err}");
}

// =====================================================================
// Controllers over HTTP
// =====================================================================

#[tokio::test]
async fn profile_header_end_to_end() {
    let server = start_test_server().await;
    let (tx, rx) = flume::unbounded();
    let controller = ProfileController::new(
        server.api(),
        Session::signed_in(UserId::from("viewer")),
        tx,
    );
    let mut state = ProfileState::default();

    controller.load(&mut state, UserId::from("u1")).await;
    assert_eq!(state.follow_label(), FollowLabel::Following);

    assert!(controller.toggle_follow(&mut state).await);
    assert!(!state.is_following());
    assert_eq!(state.follow_label(), FollowLabel::Follow);
    assert_eq!(rx.try_recv().ok(), Some(AppEvent::success(keys::TOAST_UNFOLLOWED)));
    assert_eq!(
        server.recorder.hits(),
        vec!["GET /api/user/u1", "POST /api/followers/dejar-seguir/u1"]
    );
}

#[tokio::test]
async fn registration_end_to_end() {
    let server = start_test_server().await;
    let (tx, rx) = flume::unbounded();
    let controller = RegisterController::new(server.api(), tx);

    let mut state = RegistrationState::default();
    state.set_field(RegistrationField::Name, "Ana");
    state.set_field(RegistrationField::Email, "taken@x.com");
    state.set_field(RegistrationField::Password, "pw123");

    assert!(controller.submit(&mut state).await);
    assert_eq!(state.input().email, "taken@x.com");
    assert_eq!(
        rx.drain().collect::<Vec<_>>(),
        vec![AppEvent::error(keys::TOAST_REGISTER_FAILED)]
    );

    state.set_field(RegistrationField::Email, "ana@x.com");
    assert!(controller.submit(&mut state).await);
    assert_eq!(
        rx.drain().collect::<Vec<_>>(),
        vec![
            AppEvent::success(keys::TOAST_REGISTERED),
            AppEvent::navigate(Route::SignIn),
        ]
    );
}
