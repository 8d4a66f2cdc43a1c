use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use chrono::DateTime;
use nearby::{Category, GeoPoint, Item, ItemType, MemoryItemStore, NearbySearch};
use nearby_server::{router, run_server};
use serde_json::Value;
use std::sync::Arc;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tower::ServiceExt;
use uuid::Uuid;

const MAJESTIC: &str = "0b6c3f0e-52a3-4a61-8b52-0f7c5c4d8e01";
const OWNER: &str = "3b7f2a4e-1c1d-4f5e-9a2b-7d6c5e4f3a21";

fn listing(id: &str, title: &str, item_type: ItemType, category: Category, lat: f64, lng: f64) -> Item {
    let ts = DateTime::parse_from_rfc3339("2025-03-10T10:00:00+05:30").unwrap();
    Item {
        id: Uuid::parse_str(id).unwrap(),
        item_type,
        title: title.to_string(),
        description: format!("{} description", title),
        category,
        start_date: ts,
        end_date: ts,
        address: "Bangalore".to_string(),
        location: GeoPoint::new(lat, lng),
        image: None,
        owner: Uuid::parse_str(OWNER).unwrap(),
        created_at: ts,
        updated_at: ts,
        count: 0,
    }
}

fn search() -> NearbySearch {
    let store = MemoryItemStore::with_items(vec![
        listing(MAJESTIC, "Majestic meetup", ItemType::Event, Category::CommunityMeetup, 12.9767, 77.5713),
        listing(
            &Uuid::new_v4().to_string(),
            "Banhalli sale",
            ItemType::Deal,
            Category::GarageSale,
            13.05,
            77.77,
        ),
    ]);
    NearbySearch::builder().store(Arc::new(store)).build().unwrap()
}

async fn get(uri: &str) -> (StatusCode, Value) {
    let response = router(search())
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_banner() {
    let (status, body) = get("/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["app_name"], "Nearby");
    assert!(body["version"].is_string());
    assert!(body["status"].is_string());
}

#[tokio::test]
async fn test_list_all_items() {
    let (status, body) = get("/api/items").await;
    assert_eq!(status, StatusCode::OK);
    let items = body.as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert!(items.iter().all(|item| item.get("distance").is_none()));
}

#[tokio::test]
async fn test_proximity_query() {
    let (status, body) = get("/api/items?lat=12.9767&lng=77.5713&radius=10").await;
    assert_eq!(status, StatusCode::OK);
    let items = body.as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["id"], MAJESTIC);
    assert_eq!(items[0]["distance"], 0.0);
    assert_eq!(items[0]["location"]["lat"], 12.9767);
    assert_eq!(items[0]["createdBy"], OWNER);
}

#[tokio::test]
async fn test_label_filters() {
    let (status, body) = get("/api/items?category=Garage%20Sale&type=deal").await;
    assert_eq!(status, StatusCode::OK);
    let items = body.as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["category"], "Garage Sale");
    assert_eq!(items[0]["type"], "deal");
}

#[tokio::test]
async fn test_invalid_created_by_is_empty_ok() {
    let (status, body) = get("/api/items?created_by=not-a-uuid").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!([]));
}

#[tokio::test]
async fn test_bad_requests() {
    for uri in [
        "/api/items?category=Karaoke",
        "/api/items?lat=12.97",
        "/api/items?lat=12.97&lng=77.57&radius=-5",
        "/api/items?lat=120&lng=77.57",
        "/api/items?start_date=yesterday",
        "/api/items?lat=north&lng=77.57",
    ] {
        let (status, body) = get(uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{}", uri);
        assert!(body["detail"].is_string(), "{}", uri);
    }
}

#[tokio::test]
async fn test_get_item() {
    let (status, body) = get(&format!("/api/items/{}", MAJESTIC)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "Majestic meetup");

    let (status, body) = get(&format!("/api/items/{}", Uuid::new_v4())).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Item not found");

    let (status, _) = get("/api/items/not-an-id").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_server_lifecycle() -> anyhow::Result<()> {
    tracing_subscriber::fmt::try_init().ok();

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    let (stop_tx, stop_rx) = tokio::sync::oneshot::channel::<()>();

    let server = tokio::spawn(run_server(listener, search(), async {
        stop_rx.await.ok();
    }));

    let mut stream = tokio::net::TcpStream::connect(addr).await?;
    stream
        .write_all(b"GET / HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n")
        .await?;
    let mut response = String::new();
    stream.read_to_string(&mut response).await?;
    assert!(response.starts_with("HTTP/1.1 200"));
    assert!(response.contains("\"app_name\":\"Nearby\""));

    stop_tx.send(()).ok();
    server.await??;
    Ok(())
}
