use std::sync::{Arc, Mutex};

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::routing::{get, post};
use axum::Router;
use tower::ServiceExt;

use slotbook::config::AppConfig;
use slotbook::handlers;
use slotbook::models::BusinessHours;
use slotbook::services::ledger::BookingLedger;
use slotbook::state::AppState;
use slotbook::storage::SqliteStore;

// ── Helpers ──

fn test_config() -> AppConfig {
    AppConfig {
        port: 3000,
        database_url: ":memory:".to_string(),
        admin_passphrase: "test-pass".to_string(),
        business_name: "Test Studio".to_string(),
        location: "Via Esempio 12, Milano".to_string(),
        hours: BusinessHours {
            start_hour: 9,
            end_hour: 18,
            slot_minutes: 30,
            breaks: vec![],
        },
    }
}

fn test_state() -> Arc<AppState> {
    let store = SqliteStore::open(":memory:").unwrap();
    Arc::new(AppState {
        ledger: Mutex::new(BookingLedger::new(Box::new(store))),
        config: test_config(),
    })
}

fn test_app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(handlers::health::health))
        .route(
            "/api/availability",
            get(handlers::availability::get_availability),
        )
        .route("/api/bookings", post(handlers::bookings::create_booking))
        .route("/api/admin/bookings", get(handlers::admin::list_bookings))
        .route("/calendar/:date/:time", get(handlers::calendar::download_ics))
        .with_state(state)
}

fn booking_body(name: &str, date: &str, time: &str, duration: i32) -> String {
    serde_json::json!({
        "name": name,
        "email": "alice@example.com",
        "phone": "+15551110000",
        "date": date,
        "time": time,
        "service": "Physio session",
        "duration": duration,
    })
    .to_string()
}

async fn post_booking(app: Router, body: String) -> (StatusCode, serde_json::Value) {
    let res = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/bookings")
                .header("Content-Type", "application/json")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = res.status();
    let body = axum::body::to_bytes(res.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}

// ── Health ──

#[tokio::test]
async fn test_health() {
    let res = test_app(test_state())
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}

// ── Availability ──

#[tokio::test]
async fn test_availability_covers_business_hours() {
    let res = test_app(test_state())
        .oneshot(
            Request::builder()
                .uri("/api/availability?date=2025-09-20&duration=30")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let body = axum::body::to_bytes(res.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    let slots = json.as_array().unwrap();
    assert_eq!(slots.len(), 18);
    assert_eq!(slots[0]["time"], "09:00");
    assert_eq!(slots[17]["time"], "17:30");
    assert!(slots.iter().all(|s| s["free"] == true));
}

#[tokio::test]
async fn test_availability_reflects_existing_booking() {
    let state = test_state();
    let (status, _) = post_booking(
        test_app(state.clone()),
        booking_body("Alice", "2025-09-20", "10:00", 60),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let res = test_app(state)
        .oneshot(
            Request::builder()
                .uri("/api/availability?date=2025-09-20&duration=30")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let body = axum::body::to_bytes(res.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    let slots = json.as_array().unwrap();

    let free_at = |t: &str| {
        slots
            .iter()
            .find(|s| s["time"] == t)
            .map(|s| s["free"] == true)
            .unwrap()
    };
    assert!(!free_at("10:00"));
    assert!(!free_at("10:30"));
    assert!(free_at("09:30"));
    assert!(free_at("11:00"));
}

#[tokio::test]
async fn test_availability_rejects_bad_date() {
    let res = test_app(test_state())
        .oneshot(
            Request::builder()
                .uri("/api/availability?date=not-a-date&duration=30")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

// ── Booking ──

#[tokio::test]
async fn test_booking_flow_conflict_and_adjacent() {
    let state = test_state();

    let (status, json) = post_booking(
        test_app(state.clone()),
        booking_body("Alice", "2025-09-20", "10:00", 30),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(json["time"], "10:00");
    assert_eq!(json["calendar"], "/calendar/2025-09-20/10:00.ics");

    // Same slot again: conflict, ledger unchanged.
    let (status, json) = post_booking(
        test_app(state.clone()),
        booking_body("Bob", "2025-09-20", "10:00", 30),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert!(json["error"].as_str().unwrap().contains("slot conflict"));

    // Touching boundary at 10:30 is fine.
    let (status, _) = post_booking(
        test_app(state.clone()),
        booking_body("Carol", "2025-09-20", "10:30", 30),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    assert_eq!(state.ledger.lock().unwrap().load_all().unwrap().len(), 2);
}

#[tokio::test]
async fn test_booking_rejects_empty_name() {
    let state = test_state();
    let (status, json) = post_booking(
        test_app(state.clone()),
        booking_body("", "2025-09-20", "10:00", 30),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(json["error"].as_str().unwrap().contains("validation"));
    assert!(state.ledger.lock().unwrap().load_all().unwrap().is_empty());
}

#[tokio::test]
async fn test_booking_rejects_missing_slot() {
    let state = test_state();
    let body = serde_json::json!({
        "name": "Alice",
        "email": "alice@example.com",
        "phone": "+15551110000",
        "date": "2025-09-20",
        "time": null,
        "service": "Physio session",
        "duration": 30,
    })
    .to_string();

    let (status, _) = post_booking(test_app(state.clone()), body).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(state.ledger.lock().unwrap().load_all().unwrap().is_empty());
}

// ── Calendar invite ──

#[tokio::test]
async fn test_calendar_download() {
    let state = test_state();
    post_booking(
        test_app(state.clone()),
        booking_body("Alice", "2025-09-20", "10:00", 30),
    )
    .await;

    let res = test_app(state)
        .oneshot(
            Request::builder()
                .uri("/calendar/2025-09-20/10:00.ics")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(
        res.headers()["content-type"],
        "text/calendar; charset=utf-8"
    );
    let body = axum::body::to_bytes(res.into_body(), usize::MAX)
        .await
        .unwrap();
    let ics = String::from_utf8(body.to_vec()).unwrap();
    assert!(ics.contains("BEGIN:VCALENDAR"));
    assert!(ics.contains("DTSTART:20250920T100000Z"));
    assert!(ics.contains("DTEND:20250920T103000Z"));
    assert!(ics.contains("SUMMARY:Physio session - Alice"));
    assert!(ics.contains("LOCATION:Via Esempio 12, Milano"));
}

#[tokio::test]
async fn test_calendar_unknown_booking() {
    let res = test_app(test_state())
        .oneshot(
            Request::builder()
                .uri("/calendar/2025-09-20/10:00.ics")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

// ── Admin ──

#[tokio::test]
async fn test_admin_requires_passphrase() {
    let res = test_app(test_state())
        .oneshot(
            Request::builder()
                .uri("/api/admin/bookings")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_admin_wrong_passphrase_returns_no_data() {
    let state = test_state();
    post_booking(
        test_app(state.clone()),
        booking_body("Alice", "2025-09-20", "10:00", 30),
    )
    .await;

    let res = test_app(state)
        .oneshot(
            Request::builder()
                .uri("/api/admin/bookings")
                .header("Authorization", "Bearer wrong-pass")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    let body = axum::body::to_bytes(res.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json, serde_json::json!({"error": "unauthorized"}));
}

#[tokio::test]
async fn test_admin_listing_sorted_by_date_and_time() {
    let state = test_state();
    post_booking(
        test_app(state.clone()),
        booking_body("Alice", "2025-09-20", "10:00", 30),
    )
    .await;
    post_booking(
        test_app(state.clone()),
        booking_body("Bob", "2025-09-20", "09:30", 30),
    )
    .await;

    let res = test_app(state)
        .oneshot(
            Request::builder()
                .uri("/api/admin/bookings")
                .header("Authorization", "Bearer test-pass")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let body = axum::body::to_bytes(res.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    let bookings = json.as_array().unwrap();
    assert_eq!(bookings.len(), 2);
    assert_eq!(bookings[0]["time"], "09:30");
    assert_eq!(bookings[0]["name"], "Bob");
    assert_eq!(bookings[1]["time"], "10:00");
    assert_eq!(bookings[1]["name"], "Alice");
}
