use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::{json, Value};
use std::collections::HashSet;

use user_store_api::{
    app::users::{
        model::{EmailResponse, User},
        service::UserService,
    },
    build_app,
    core::response::MessageResponse,
    infrastructure::config::HttpConfig,
};

fn test_server() -> TestServer {
    let app = build_app(UserService::new(), &HttpConfig::default());
    TestServer::new(app).unwrap()
}

async fn create(server: &TestServer, name: &str, email: &str, age: i64) -> User {
    let response = server
        .post("/users")
        .json(&json!({ "name": name, "email": email, "age": age }))
        .await;
    response.assert_status_ok();
    response.json::<User>()
}

#[tokio::test]
async fn test_welcome() {
    let server = test_server();

    let response = server.get("/").await;
    response.assert_status_ok();

    let body: MessageResponse = response.json();
    assert!(!body.message.is_empty());
}

#[tokio::test]
async fn test_create_user() {
    let server = test_server();

    let user = create(&server, "Ann", "ann@x.com", 30).await;

    assert!(!user.id.is_empty());
    assert_eq!(user.name, "Ann");
    assert_eq!(user.email, "ann@x.com");
    assert_eq!(user.age, 30);
}

#[tokio::test]
async fn test_create_serializes_all_four_fields() {
    let server = test_server();

    let response = server
        .post("/users")
        .json(&json!({ "name": "Ann", "email": "ann@x.com", "age": 30 }))
        .await;
    let body: Value = response.json();
    let object = body.as_object().unwrap();

    let keys: HashSet<&str> = object.keys().map(|k| k.as_str()).collect();
    assert_eq!(keys, HashSet::from(["id", "name", "email", "age"]));
}

#[tokio::test]
async fn test_duplicate_email() {
    let server = test_server();
    create(&server, "Ann", "ann@x.com", 30).await;

    let response = server
        .post("/users")
        .json(&json!({ "name": "Someone", "email": "ann@x.com", "age": 50 }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["detail"], "Email already exists");

    let users: Vec<User> = server.get("/users").await.json();
    assert_eq!(users.len(), 1);
}

#[tokio::test]
async fn test_validation_error() {
    let server = test_server();

    let response = server
        .post("/users")
        .json(&json!({ "name": "", "email": "invalid-email", "age": 20 }))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = response.json();
    let fields: Vec<&str> = body["fields"]
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["field"].as_str().unwrap())
        .collect();
    assert_eq!(fields, vec!["email", "name"]);

    for email in ["ann@x", "ann@localhost", "ann@x.test"] {
        let response = server
            .post("/users")
            .json(&json!({ "name": "Ann", "email": email, "age": 1 }))
            .await;
        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        let body: Value = response.json();
        assert_eq!(body["fields"][0]["field"], "email", "{email}");
    }

    let users: Vec<User> = server.get("/users").await.json();
    assert!(users.is_empty());
}

#[tokio::test]
async fn test_missing_field_and_wrong_type() {
    let server = test_server();

    let response = server
        .post("/users")
        .json(&json!({ "name": "Ann", "email": "ann@x.com" }))
        .await;
    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);

    let response = server
        .post("/users")
        .json(&json!({ "name": "Ann", "email": "ann@x.com", "age": "thirty" }))
        .await;
    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = response.json();
    assert_eq!(body["fields"][0]["field"], "body");
}

#[tokio::test]
async fn test_list_users_and_emails() {
    let server = test_server();

    let response = server.get("/users").await;
    response.assert_status_ok();
    assert!(response.json::<Vec<User>>().is_empty());

    let mut created = Vec::new();
    for i in 0..5 {
        created.push(create(&server, "user", &format!("u{}@x.com", i), i).await);
    }

    let users: Vec<User> = server.get("/users").await.json();
    assert_eq!(users, created);

    let response = server.get("/emails").await;
    response.assert_status_ok();
    let emails: Vec<EmailResponse> = response.json();
    let expected: Vec<EmailResponse> = created.iter().map(EmailResponse::from).collect();
    assert_eq!(emails, expected);
}

#[tokio::test]
async fn test_get_user() {
    let server = test_server();
    let user = create(&server, "Ann", "ann@x.com", 30).await;

    let response = server.get(&format!("/users/{}", user.id)).await;
    response.assert_status_ok();
    assert_eq!(response.json::<User>(), user);
}

#[tokio::test]
async fn test_update_user() {
    let server = test_server();
    let user = create(&server, "Ann", "ann@x.com", 30).await;

    let response = server
        .put(&format!("/users/{}", user.id))
        .json(&json!({ "name": "Anna", "email": "anna@x.com", "age": 31 }))
        .await;
    response.assert_status_ok();

    let updated: User = response.json();
    assert_eq!(updated.id, user.id);
    assert_eq!(updated.name, "Anna");
    assert_eq!(updated.email, "anna@x.com");
    assert_eq!(updated.age, 31);

    let fetched: User = server.get(&format!("/users/{}", user.id)).await.json();
    assert_eq!(fetched, updated);
}

#[tokio::test]
async fn test_update_validates_body() {
    let server = test_server();
    let user = create(&server, "Ann", "ann@x.com", 30).await;

    let response = server
        .put(&format!("/users/{}", user.id))
        .json(&json!({ "name": "Ann", "email": "nope", "age": 30 }))
        .await;
    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);

    let fetched: User = server.get(&format!("/users/{}", user.id)).await.json();
    assert_eq!(fetched, user);
}

#[tokio::test]
async fn test_update_allows_duplicate_email() {
    let server = test_server();
    create(&server, "Ann", "ann@x.com", 30).await;
    let bob = create(&server, "Bob", "bob@x.com", 40).await;

    let response = server
        .put(&format!("/users/{}", bob.id))
        .json(&json!({ "name": "Bob", "email": "ann@x.com", "age": 40 }))
        .await;
    response.assert_status_ok();

    let emails: Vec<EmailResponse> = server.get("/emails").await.json();
    assert!(emails.iter().all(|e| e.email == "ann@x.com"));
    assert_eq!(emails.len(), 2);
}

#[tokio::test]
async fn test_delete_user() {
    let server = test_server();
    let user = create(&server, "Ann", "ann@x.com", 30).await;

    let response = server.delete(&format!("/users/{}", user.id)).await;
    response.assert_status_ok();
    let body: MessageResponse = response.json();
    assert_eq!(body.message, "User deleted");

    let response = server.get(&format!("/users/{}", user.id)).await;
    response.assert_status(StatusCode::NOT_FOUND);

    let response = server.delete(&format!("/users/{}", user.id)).await;
    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_unknown_id_is_not_found() {
    let server = test_server();

    let response = server.delete("/users/doesnotexist").await;
    response.assert_status(StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["detail"], "User not found");

    let response = server.get("/users/doesnotexist").await;
    response.assert_status(StatusCode::NOT_FOUND);

    let response = server
        .put("/users/doesnotexist")
        .json(&json!({ "name": "Ann", "email": "ann@x.com", "age": 30 }))
        .await;
    response.assert_status(StatusCode::NOT_FOUND);

    let users: Vec<User> = server.get("/users").await.json();
    assert!(users.is_empty());
}
