#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use edusync::router::init_router;
use edusync::state::AppState;
use edusync_db::{MemoryStore, Store};
use fake::Fake;
use fake::faker::address::en::CountryName;
use fake::faker::internet::en::Username;
use fake::faker::name::en::{FirstName, LastName};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;
use uuid::Uuid;

pub const TEST_PASSWORD: &str = "testpass123";

pub struct TestApp {
    pub router: Router,
    pub store: Store,
}

pub fn setup_test_app() -> TestApp {
    let store: Store = Arc::new(MemoryStore::new());
    let router = init_router(AppState::new(store.clone()));
    TestApp { router, store }
}

pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
    pub text: String,
    /// `name=value` part of the session cookie, if one was set.
    pub cookie: Option<String>,
    pub location: Option<String>,
}

pub fn request(method: &str, uri: &str, body: Option<Value>, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);

    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }

    match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

pub async fn send(app: &TestApp, request: Request<Body>) -> TestResponse {
    let response = app.router.clone().oneshot(request).await.unwrap();

    let status = response.status();
    let cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .map(str::to_string);
    let location = response
        .headers()
        .get(header::LOCATION)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let text = String::from_utf8_lossy(&bytes).to_string();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    TestResponse {
        status,
        body,
        text,
        cookie,
        location,
    }
}

pub async fn get(app: &TestApp, uri: &str) -> TestResponse {
    send(app, request("GET", uri, None, None)).await
}

pub fn generate_unique_email() -> String {
    format!("test-{}@test.com", Uuid::new_v4())
}

pub fn generate_username() -> String {
    Username().fake()
}

pub async fn register(app: &TestApp, username: &str, email: &str, password: &str) -> TestResponse {
    send(
        app,
        request(
            "POST",
            "/register",
            Some(json!({ "username": username, "email": email, "password": password })),
            None,
        ),
    )
    .await
}

pub async fn login(app: &TestApp, email: &str, password: &str) -> TestResponse {
    send(
        app,
        request(
            "POST",
            "/login",
            Some(json!({ "email": email, "password": password })),
            None,
        ),
    )
    .await
}

/// Registers a fresh user, logs in and returns the session cookie.
pub async fn authenticated_cookie(app: &TestApp) -> String {
    let email = generate_unique_email();
    let registered = register(app, &generate_username(), &email, TEST_PASSWORD).await;
    assert_eq!(registered.status, StatusCode::CREATED);

    let logged_in = login(app, &email, TEST_PASSWORD).await;
    assert_eq!(logged_in.status, StatusCode::OK);
    logged_in.cookie.expect("login sets a session cookie")
}

pub fn student_body() -> Value {
    let first_name: String = FirstName().fake();
    let last_name: String = LastName().fake();
    let country: String = CountryName().fake();

    json!({
        "firstName": first_name,
        "lastName": last_name,
        "email": generate_unique_email(),
        "birthDate": "2001-04-12",
        "country": country,
        "enrolledCourse": "Software Development"
    })
}

pub fn course_body() -> Value {
    json!({
        "courseName": "Web Backend Development",
        "description": "Servers, databases and APIs",
        "programLength": "2 years",
        "creditsRequired": 60,
        "deliveryMode": "Online",
        "careerPath": "Backend Developer",
        "isActive": true
    })
}

pub fn enrollment_body(student_id: &str, course_id: &str) -> Value {
    json!({
        "studentId": student_id,
        "courseId": course_id,
        "enrollmentDate": "2025-01-06",
        "status": "Enrolled",
        "finalGrade": "N/A",
        "semester": "Winter 2025",
        "creditsEarned": 0
    })
}

/// Creates a document through the API and returns its id.
pub async fn create(app: &TestApp, collection: &str, id_key: &str, body: Value, cookie: &str) -> String {
    let response = send(
        app,
        request("POST", &format!("/{collection}"), Some(body), Some(cookie)),
    )
    .await;
    assert_eq!(response.status, StatusCode::CREATED, "{}", response.text);
    response.body[id_key].as_str().unwrap().to_string()
}
