use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, Profile, UserEnvelope};
use tower::ServiceExt;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(String::new())
        .unwrap()
}

const ANN: &str = r#"{"username":"ann","age":"30","email":"a@x.com","password":"pw"}"#;

// --- create ---

#[tokio::test]
async fn create_user_returns_201_with_empty_body() {
    let resp = app().oneshot(json_request("POST", "/user/", ANN)).await.unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    assert!(body_bytes(resp).await.is_empty());
}

#[tokio::test]
async fn create_user_missing_field_returns_422() {
    let resp = app()
        .oneshot(json_request("POST", "/user/", r#"{"username":"ann"}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn create_user_invalid_json_returns_400() {
    let resp = app()
        .oneshot(json_request("POST", "/user/", "{not json"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

// --- get ---

#[tokio::test]
async fn get_user_not_found() {
    let resp = app().oneshot(empty_request("GET", "/users/nobody")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// --- delete ---

#[tokio::test]
async fn delete_user_not_found() {
    let resp = app().oneshot(empty_request("DELETE", "/user/nobody")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// --- full lifecycle ---

#[tokio::test]
async fn create_get_delete_lifecycle() {
    use tower::Service;

    let mut app = app().into_service();

    // create
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request("POST", "/user/", ANN))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);

    // create again: username taken
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request("POST", "/user/", ANN))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    // get: profile is wrapped in an envelope, name mirrors username
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(empty_request("GET", "/users/ann"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let envelope: UserEnvelope = body_json(resp).await;
    assert_eq!(
        envelope.profile,
        Profile {
            age: "30".to_string(),
            name: "ann".to_string(),
            email: "a@x.com".to_string(),
        }
    );

    // delete
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(empty_request("DELETE", "/user/ann"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    assert!(body_bytes(resp).await.is_empty());

    // get after delete: 404
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(empty_request("GET", "/users/ann"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn password_is_never_returned() {
    use tower::Service;

    let mut app = app().into_service();
    ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request("POST", "/user/", ANN))
        .await
        .unwrap();

    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(empty_request("GET", "/users/ann"))
        .await
        .unwrap();
    let body: serde_json::Value = body_json(resp).await;
    assert!(body["profile"].get("password").is_none());
    assert!(body.get("password").is_none());
}
