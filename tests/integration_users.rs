mod common;

use axum::http::StatusCode;
use common::{
    TEST_PASSWORD, authenticated_cookie, generate_unique_email, get, login, register, request,
    send, setup_test_app,
};
use edusync_db::ObjectId;
use edusync_models::users::USERS_COLLECTION;
use serde_json::json;

#[tokio::test]
async fn test_list_users_hides_password() {
    let app = setup_test_app();
    let email = generate_unique_email();
    register(&app, "ada", &email, TEST_PASSWORD).await;

    let response = get(&app, "/users").await;

    assert_eq!(response.status, StatusCode::OK);
    let users = response.body.as_array().unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0]["email"], email.as_str());
    assert_eq!(users[0]["username"], "ada");
    assert!(users[0].get("password").is_none());
}

#[tokio::test]
async fn test_get_user() {
    let app = setup_test_app();
    let registered = register(&app, "ada", &generate_unique_email(), TEST_PASSWORD).await;
    let id = registered.body["userId"].as_str().unwrap();

    let response = get(&app, &format!("/users/{id}")).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["_id"], id);
    assert!(response.body.get("password").is_none());

    let malformed = get(&app, "/users/not-an-id").await;
    assert_eq!(malformed.status, StatusCode::BAD_REQUEST);
    assert_eq!(malformed.body["error"], "Invalid user ID format.");

    let unknown = get(&app, &format!("/users/{}", ObjectId::new().to_hex())).await;
    assert_eq!(unknown.status, StatusCode::NOT_FOUND);
    assert_eq!(unknown.body["error"], "User not found.");
}

#[tokio::test]
async fn test_update_user_requires_login() {
    let app = setup_test_app();
    let email = generate_unique_email();
    let registered = register(&app, "ada", &email, TEST_PASSWORD).await;
    let id = registered.body["userId"].as_str().unwrap();

    let response = send(
        &app,
        request(
            "PUT",
            &format!("/users/{id}"),
            Some(json!({ "username": "ada", "email": email, "password": TEST_PASSWORD })),
            None,
        ),
    )
    .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_update_user_identical_payload_is_unchanged() {
    let app = setup_test_app();
    let cookie = authenticated_cookie(&app).await;
    let email = generate_unique_email();
    let registered = register(&app, "ada", &email, TEST_PASSWORD).await;
    let id = registered.body["userId"].as_str().unwrap();

    let response = send(
        &app,
        request(
            "PUT",
            &format!("/users/{id}"),
            Some(json!({ "username": "ada", "email": email, "password": TEST_PASSWORD })),
            Some(&cookie),
        ),
    )
    .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["message"], "User data is unchanged.");
}

#[tokio::test]
async fn test_update_user_password_is_rehashed() {
    let app = setup_test_app();
    let cookie = authenticated_cookie(&app).await;
    let email = generate_unique_email();
    let registered = register(&app, "ada", &email, TEST_PASSWORD).await;
    let id = registered.body["userId"].as_str().unwrap();

    let response = send(
        &app,
        request(
            "PUT",
            &format!("/users/{id}"),
            Some(json!({ "username": "ada", "email": email, "password": "newpass456" })),
            Some(&cookie),
        ),
    )
    .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["message"], "User updated successfully.");

    let stored = app
        .store
        .find_by_id(USERS_COLLECTION, ObjectId::parse_str(id).unwrap())
        .await
        .unwrap()
        .unwrap();
    let hash = stored.get_str("password").unwrap();
    assert_ne!(hash, "newpass456");
    assert!(hash.starts_with("$2"));

    assert_eq!(login(&app, &email, TEST_PASSWORD).await.status, StatusCode::BAD_REQUEST);
    assert_eq!(login(&app, &email, "newpass456").await.status, StatusCode::OK);
}

#[tokio::test]
async fn test_update_user_email_taken_by_another_user() {
    let app = setup_test_app();
    let cookie = authenticated_cookie(&app).await;
    let taken = generate_unique_email();
    register(&app, "grace", &taken, TEST_PASSWORD).await;
    let registered = register(&app, "ada", &generate_unique_email(), TEST_PASSWORD).await;
    let id = registered.body["userId"].as_str().unwrap();

    let response = send(
        &app,
        request(
            "PUT",
            &format!("/users/{id}"),
            Some(json!({ "username": "ada", "email": taken, "password": TEST_PASSWORD })),
            Some(&cookie),
        ),
    )
    .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "User with this email already exists.");
}

#[tokio::test]
async fn test_update_user_runs_registration_validation() {
    let app = setup_test_app();
    let cookie = authenticated_cookie(&app).await;
    let registered = register(&app, "ada", &generate_unique_email(), TEST_PASSWORD).await;
    let id = registered.body["userId"].as_str().unwrap();

    let response = send(
        &app,
        request(
            "PUT",
            &format!("/users/{id}"),
            Some(json!({ "username": "ada", "email": "not-an-email", "password": TEST_PASSWORD })),
            Some(&cookie),
        ),
    )
    .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "Invalid email format.");
}

#[tokio::test]
async fn test_update_user_malformed_id_before_body() {
    let app = setup_test_app();
    let cookie = authenticated_cookie(&app).await;

    let response = send(
        &app,
        request(
            "PUT",
            "/users/bad-id",
            Some(json!({ "username": "ada", "email": "ada@example.com", "password": "123" })),
            Some(&cookie),
        ),
    )
    .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "Invalid user ID format.");
}

#[tokio::test]
async fn test_delete_user_twice() {
    let app = setup_test_app();
    let cookie = authenticated_cookie(&app).await;
    let registered = register(&app, "ada", &generate_unique_email(), TEST_PASSWORD).await;
    let uri = format!("/users/{}", registered.body["userId"].as_str().unwrap());

    let first = send(&app, request("DELETE", &uri, None, Some(&cookie))).await;
    assert_eq!(first.status, StatusCode::OK);
    assert_eq!(first.body["message"], "User deleted successfully.");

    let second = send(&app, request("DELETE", &uri, None, Some(&cookie))).await;
    assert_eq!(second.status, StatusCode::NOT_FOUND);
}
