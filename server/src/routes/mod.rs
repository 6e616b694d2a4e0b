use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::config::{create_cors_layer, create_security_headers_layer, Config};
use crate::handlers::{events, health_check, route_not_found};
use crate::state::AppState;

pub fn create_routes(state: AppState, config: &Config) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .nest("/api/events", event_routes())
        .fallback(route_not_found)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(create_security_headers_layer(config.production))
        .layer(create_cors_layer(&config.cors_allowed_origins))
}

// Static segments are matched before `/:id`, so they must not be used as ids.
fn event_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(events::list_events).post(events::create_event))
        .route("/search", get(events::search_events))
        .route("/categories", get(events::list_categories))
        .route("/upcoming", get(events::upcoming_events))
        .route("/past", get(events::past_events))
        .route("/range", get(events::events_by_date_range))
        .route("/category/:category", get(events::events_by_category))
        .route(
            "/:id",
            get(events::get_event)
                .put(events::update_event)
                .delete(events::delete_event),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Method, Request, StatusCode};
    use serde_json::{json, Value};
    use std::time::Duration;
    use tower::ServiceExt;

    use crate::store::MockEventStore;

    fn app() -> Router {
        let state = AppState::new(MockEventStore::seeded(Duration::ZERO));
        create_routes(state, &Config::default())
    }

    async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        send_raw(app, method, uri, body.map(|json| json.to_string())).await
    }

    async fn send_raw(
        app: &Router,
        method: Method,
        uri: &str,
        body: Option<String>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(raw) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(raw)
            }
            None => Body::empty(),
        };
        let response = app
            .clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    fn new_event_body() -> Value {
        json!({
            "title": "Mentor Meetup",
            "description": "Monthly meetup for volunteer mentors",
            "date": "2031-03-01T18:00:00Z",
            "location": {
                "name": "Library Annex",
                "address": "5 Oak Ave",
                "city": "Oakland",
                "state": "CA",
                "zip": "94607"
            },
            "imageUrl": "/images/mentors.jpg",
            "category": "Mentorship",
            "tags": ["mentors", "networking"],
            "capacity": 20,
            "registered": 2,
            "organizer": { "name": "Jo Park", "email": "jo@example.org" },
            "schedule": [{ "time": "6:00 PM", "activity": "Introductions" }]
        })
    }

    #[tokio::test]
    async fn test_health_reports_event_count() {
        let app = app();
        let (status, body) = send(&app, Method::GET, "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["status"], "ok");
        assert!(body["data"]["events"].as_u64().unwrap() > 0);
    }

    #[tokio::test]
    async fn test_responses_carry_security_headers() {
        let response = app()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let headers = response.headers();
        assert_eq!(headers["x-content-type-options"], "nosniff");
        assert_eq!(headers["cache-control"], "no-store");
        assert!(headers.get("strict-transport-security").is_none());
    }

    #[tokio::test]
    async fn test_create_get_update_delete_flow() {
        let app = app();

        let (status, body) = send(&app, Method::POST, "/api/events", Some(new_event_body())).await;
        assert_eq!(status, StatusCode::CREATED);
        let id = body["data"]["id"].as_str().unwrap().to_string();
        assert!(body["data"]["createdAt"].is_string());

        let (status, body) = send(&app, Method::GET, &format!("/api/events/{}", id), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["title"], "Mentor Meetup");

        let (status, body) = send(
            &app,
            Method::PUT,
            &format!("/api/events/{}", id),
            Some(json!({ "id": "hijacked", "registered": 5 })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["id"], id.as_str());
        assert_eq!(body["data"]["registered"], 5);

        let (status, _) = send(&app, Method::DELETE, &format!("/api/events/{}", id), None).await;
        assert_eq!(status, StatusCode::OK);

        let (status, body) = send(&app, Method::GET, &format!("/api/events/{}", id), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["success"], false);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_missing_ids_are_not_found() {
        let app = app();
        let (status, _) = send(&app, Method::DELETE, "/api/events/nope", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = send(&app, Method::PUT, "/api/events/nope", Some(json!({}))).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_overbooked_create_is_rejected() {
        let app = app();
        let mut body = new_event_body();
        body["registered"] = json!(21);

        let (status, body) = send(&app, Method::POST, "/api/events", Some(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_category_all_matches_full_listing() {
        let app = app();
        let (_, all) = send(&app, Method::GET, "/api/events", None).await;
        let (status, by_all) = send(&app, Method::GET, "/api/events/category/All", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            all["data"].as_array().unwrap().len(),
            by_all["data"].as_array().unwrap().len()
        );
    }

    #[tokio::test]
    async fn test_search_and_categories() {
        let app = app();
        let (status, body) = send(&app, Method::GET, "/api/events/search?q=CONCERT", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"].as_array().unwrap().len(), 1);

        let (_, body) = send(&app, Method::GET, "/api/events/search", None).await;
        assert!(!body["data"].as_array().unwrap().is_empty());

        let (_, body) = send(&app, Method::GET, "/api/events/categories", None).await;
        let categories: Vec<&str> = body["data"]
            .as_array()
            .unwrap()
            .iter()
            .map(|c| c.as_str().unwrap())
            .collect();
        assert_eq!(categories, vec!["Arts", "Education", "Fundraising", "Volunteering"]);
    }

    #[tokio::test]
    async fn test_upcoming_past_and_range() {
        let app = app();
        let (status, body) = send(&app, Method::GET, "/api/events/upcoming?limit=2", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"].as_array().unwrap().len(), 2);

        let (_, body) = send(&app, Method::GET, "/api/events/past", None).await;
        let past = body["data"].as_array().unwrap();
        assert_eq!(past.len(), 3);
        assert_eq!(past[0]["title"], "Adult Literacy Tutor Training");

        let (status, body) = send(
            &app,
            Method::GET,
            "/api/events/range?start=1970-01-01T00:00:00Z&end=2999-01-01T00:00:00Z",
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"].as_array().unwrap().len(), 6);

        let (status, body) =
            send(&app, Method::GET, "/api/events/range?start=yesterday", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    fn assert_validation_envelope(status: StatusCode, body: &Value) {
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert!(!body["error"]["message"].as_str().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_malformed_bodies_get_error_envelope() {
        let app = app();

        let (status, body) =
            send(&app, Method::POST, "/api/events", Some(json!({ "title": "x" }))).await;
        assert_validation_envelope(status, &body);
        assert!(body["error"]["message"]
            .as_str()
            .unwrap()
            .contains("description"));

        let (status, body) =
            send_raw(&app, Method::POST, "/api/events", Some("not json".to_string())).await;
        assert_validation_envelope(status, &body);

        let (status, body) = send(
            &app,
            Method::PUT,
            "/api/events/evt_seed_1",
            Some(json!({ "capacity": "lots" })),
        )
        .await;
        assert_validation_envelope(status, &body);
    }

    #[tokio::test]
    async fn test_bad_query_strings_get_error_envelope() {
        let app = app();
        let (status, body) = send(&app, Method::GET, "/api/events/upcoming?limit=-1", None).await;
        assert_validation_envelope(status, &body);

        let (status, body) = send(&app, Method::GET, "/api/events/past?limit=many", None).await;
        assert_validation_envelope(status, &body);
    }

    #[tokio::test]
    async fn test_unknown_route_gets_not_found_envelope() {
        let app = app();
        let (status, body) = send(&app, Method::GET, "/api/nothing-here", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["success"], false);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }
}
