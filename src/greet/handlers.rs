use axum::{
    extract::{Path, Query},
    routing::{get, post},
    Form, Json, Router,
};
use tracing::instrument;

use crate::{error::ApiError, greet::dto::{GreetForm, Greeting, NameQuery}, state::AppState};

pub fn greet_routes() -> Router<AppState> {
    Router::new()
        .route("/greet", get(greet))
        .route("/greetWithPathVariable/:name", get(greet_with_path))
        .route("/greetWithQueryVariable", get(greet_with_query))
        .route("/greetWithPost", post(greet))
        .route("/greetWithPostAndFormData", post(greet_with_form))
}

pub async fn greet() -> Json<Greeting> {
    Json(Greeting::hello(1, None))
}

#[instrument]
pub async fn greet_with_path(Path(name): Path<String>) -> Json<Greeting> {
    Json(Greeting::hello(1, Some(&name)))
}

#[instrument]
pub async fn greet_with_query(Query(q): Query<NameQuery>) -> Json<Greeting> {
    Json(Greeting::hello(1, Some(&q.name)))
}

#[instrument]
pub async fn greet_with_form(Form(form): Form<GreetForm>) -> Result<Json<Greeting>, ApiError> {
    let id = form
        .id
        .trim()
        .parse::<i64>()
        .map_err(|_| ApiError::InvalidId(form.id.clone()))?;
    Ok(Json(Greeting::hello(id, Some(&form.name))))
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::util::ServiceExt;

    use crate::{app::build_app, state::AppState};

    async fn call(req: Request<Body>) -> (StatusCode, Option<String>, Value) {
        let res = build_app(AppState::fake()).oneshot(req).await.unwrap();
        let status = res.status();
        let content_type = res
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let bytes = axum::body::to_bytes(res.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, content_type, body)
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn plain_greeting() {
        let (status, content_type, body) = call(get("/greet")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(content_type.as_deref(), Some("application/json"));
        assert_eq!(body, json!({"id": 1, "message": "Hello World!!!"}));
    }

    #[tokio::test]
    async fn greeting_from_path() {
        let (status, _, body) = call(get("/greetWithPathVariable/John")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Hello World John!!!");
    }

    #[tokio::test]
    async fn greeting_from_query() {
        let (status, _, body) = call(get("/greetWithQueryVariable?name=John%20Doe")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Hello World John Doe!!!");

        let (status, _, _) = call(get("/greetWithQueryVariable")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn greeting_from_post() {
        let req = Request::builder()
            .method("POST")
            .uri("/greetWithPost")
            .body(Body::empty())
            .unwrap();
        let (status, _, body) = call(req).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"id": 1, "message": "Hello World!!!"}));
    }

    fn form(body: &'static str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/greetWithPostAndFormData")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn greeting_from_form() {
        let (status, _, body) = call(form("id=1&name=John+Doe")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"id": 1, "message": "Hello World John Doe!!!"}));
    }

    #[tokio::test]
    async fn form_with_bad_id_is_400() {
        let (status, _, body) = call(form("id=one&name=John")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());
    }
}
