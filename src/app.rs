use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/add", post(handlers::add))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::Credentials;
    use crate::models::{RecordFields, StoredRecord};
    use crate::store::ReadingStore;
    use crate::store::memory::MemoryStore;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
        response::Response,
    };
    use base64::{Engine, engine::general_purpose::STANDARD};
    use std::sync::Arc;
    use tower::ServiceExt;

    const FORM: &str = "date=2025-04-02&time=19%3A00&p_upper=130&p_lower=84&heart_beat_rate=102&comment=";

    fn app(store: Arc<MemoryStore>) -> Router {
        router(AppState::new(store, Credentials::new("me", "pw")))
    }

    fn basic(user: &str, password: &str) -> String {
        format!("Basic {}", STANDARD.encode(format!("{user}:{password}")))
    }

    fn get_index(auth: Option<String>) -> Request<Body> {
        let mut builder = Request::get("/");
        if let Some(auth) = auth {
            builder = builder.header(header::AUTHORIZATION, auth);
        }
        builder.body(Body::empty()).unwrap()
    }

    fn post_add(auth: Option<String>, body: &str) -> Request<Body> {
        let mut builder = Request::post("/add")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
        if let Some(auth) = auth {
            builder = builder.header(header::AUTHORIZATION, auth);
        }
        builder.body(Body::from(body.to_string())).unwrap()
    }

    async fn body_text(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn stored(id: &str, date: &str, systolic: Option<f64>) -> StoredRecord {
        StoredRecord {
            id: id.to_string(),
            fields: RecordFields {
                date: Some(date.to_string()),
                time: Some("08:00".to_string()),
                systolic,
                diastolic: Some(80.0),
                heart_rate: Some(70.0),
                notes: Some(format!("note-{id}")),
            },
        }
    }

    #[tokio::test]
    async fn requests_without_credentials_never_reach_the_store() {
        let store = Arc::new(MemoryStore::default());

        let response = app(store.clone()).oneshot(get_index(None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(response.headers()[header::WWW_AUTHENTICATE], "Basic");

        let response = app(store.clone())
            .oneshot(post_add(Some(basic("me", "wrong")), FORM))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(response.headers()[header::WWW_AUTHENTICATE], "Basic");

        assert_eq!(store.calls(), 0);
    }

    #[tokio::test]
    async fn non_numeric_measure_is_unprocessable() {
        let store = Arc::new(MemoryStore::default());
        let body = FORM.replace("p_upper=130", "p_upper=high");

        let response = app(store.clone())
            .oneshot(post_add(Some(basic("me", "pw")), &body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(store.calls(), 0);
    }

    #[tokio::test]
    async fn missing_required_field_is_unprocessable() {
        let store = Arc::new(MemoryStore::default());
        let body = FORM.replace("&heart_beat_rate=102", "");

        let response = app(store.clone())
            .oneshot(post_add(Some(basic("me", "pw")), &body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(store.calls(), 0);
    }

    #[tokio::test]
    async fn added_reading_shows_up_in_history() {
        let store = Arc::new(MemoryStore::default());

        let response = app(store.clone())
            .oneshot(post_add(Some(basic("me", "pw")), FORM))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, r#"{"added":"ok"}"#);

        let response = app(store.clone())
            .oneshot(get_index(Some(basic("me", "pw"))))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let page = body_text(response).await;
        assert!(page.contains("<b>2025-04-02 19:00</b> <b>130</b> / <b>84</b>. 102. </div>"));
    }

    #[tokio::test]
    async fn comment_may_be_omitted() {
        let store = Arc::new(MemoryStore::default());
        let body = FORM.replace("&comment=", "");

        let response = app(store.clone())
            .oneshot(post_add(Some(basic("me", "pw")), &body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(store.calls(), 1);

        let records = store.list_all().await.unwrap();
        assert_eq!(records[0].fields.notes.as_deref(), Some(""));
    }

    #[tokio::test]
    async fn history_is_ordered_and_filtered() {
        let store = Arc::new(MemoryStore::with_records(vec![
            stored("late", "2025-05-01", Some(125.0)),
            stored("partial", "2025-04-15", None),
            stored("early", "2025-04-01", Some(118.0)),
        ]));

        let response = app(store).oneshot(get_index(Some(basic("me", "pw")))).await.unwrap();
        let page = body_text(response).await;

        let early = page.find("note-early").expect("early row");
        let late = page.find("note-late").expect("late row");
        assert!(early < late);
        assert!(!page.contains("note-partial"));
    }

    #[tokio::test]
    async fn store_failures_surface_as_bad_gateway() {
        let store = Arc::new(MemoryStore::failing());

        let response = app(store.clone())
            .oneshot(get_index(Some(basic("me", "pw"))))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        let page = body_text(response).await;
        assert!(page.contains("quota&#32;exceeded"));
        assert!(page.contains(r#"<form action="/add""#));

        let response = app(store)
            .oneshot(post_add(Some(basic("me", "pw")), FORM))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }
}
