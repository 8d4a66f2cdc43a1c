use chrono::{TimeZone, Utc};
use nearby::{
    BoundsError, Category, Distance, EARTH_RADIUS_KM, FilterCriteria, GeoPoint, Item, ItemType,
    MemoryItemStore, NearbySearch, Predicate, PredicateBuilder, bounding_box,
};
use std::sync::Arc;
use uuid::Uuid;

fn at(title: &str, lat: f64, lng: f64) -> Item {
    let ts = Utc
        .with_ymd_and_hms(2025, 6, 1, 12, 0, 0)
        .unwrap()
        .fixed_offset();
    Item {
        id: Uuid::new_v4(),
        item_type: ItemType::Event,
        title: title.to_string(),
        description: String::new(),
        category: Category::CommunityMeetup,
        start_date: ts,
        end_date: ts,
        address: String::new(),
        location: GeoPoint::new(lat, lng),
        image: None,
        owner: Uuid::nil(),
        created_at: ts,
        updated_at: ts,
        count: 0,
    }
}

fn search_over(items: Vec<Item>) -> NearbySearch {
    NearbySearch::builder()
        .store(Arc::new(MemoryItemStore::with_items(items)))
        .build()
        .expect("Failed to build search")
}

/// Test 1: Query circle reaching over the north pole
#[tokio::test]
async fn test_polar_query_stays_exact() {
    let center = GeoPoint::new(89.95, 0.0);
    assert!(matches!(
        bounding_box(&center, 50.0),
        Err(BoundsError::PolarRegion { .. })
    ));

    let predicates = PredicateBuilder::build(&FilterCriteria::new().near(center, 50.0))
        .expect("predicates should build without a bounding box");
    assert!(predicates.bounds().is_none());

    // Across the pole from the center, about 11 km away.
    let search = search_over(vec![
        at("over the pole", 89.95, 180.0),
        at("svalbard", 78.22, 15.65),
    ]);
    let results = search
        .search(FilterCriteria::new().near(center, 50.0))
        .await
        .expect("Polar search failed");

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].title, "over the pole");
    let km = results[0].distance.expect("distance attached");
    assert!((km - 11.1).abs() < 0.5, "got {}", km);
}

/// Test 2: Query circle crossing the antimeridian
#[tokio::test]
async fn test_antimeridian_query_stays_exact() {
    let center = GeoPoint::new(0.0, 179.95);
    assert!(matches!(
        bounding_box(&center, 30.0),
        Err(BoundsError::AntimeridianWrap { .. })
    ));

    let search = search_over(vec![
        at("east of the line", 0.0, -179.95),
        at("fiji", -17.71, 178.06),
    ]);
    let results = search
        .search(FilterCriteria::new().near(center, 30.0))
        .await
        .expect("Antimeridian search failed");

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].title, "east of the line");
    let km = results[0].distance.expect("distance attached");
    assert!((km - 11.1).abs() < 0.5, "got {}", km);
}

/// Test 3: Malformed stored coordinates are kept with an unknown distance
#[tokio::test]
async fn test_malformed_rows_get_sentinel_distance() {
    // A polar query skips the bounding-box prefilter, so every row reaches
    // the exact distance check.
    let center = GeoPoint::new(89.95, 0.0);
    let search = search_over(vec![
        at("camp", 89.95, 0.0),
        at("nan", f64::NAN, 10.0),
        at("off the map", 89.9, 400.0),
        at("far", 10.0, 10.0),
    ]);

    let results = search
        .search(FilterCriteria::new().near(center, 50.0))
        .await
        .expect("Search with malformed rows failed");

    let titles: Vec<&str> = results.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, vec!["camp", "nan", "off the map"]);
    assert_eq!(results[0].distance, Some(0.0));
    assert_eq!(results[1].distance, Some(Distance::UNKNOWN_SENTINEL));
    assert_eq!(results[2].distance, Some(-1.0));

    let json = serde_json::to_value(&results[1]).expect("Failed to serialize");
    assert_eq!(json["distance"], -1.0);
}

/// Test 4: Malformed rows without a center pass through unannotated
#[tokio::test]
async fn test_malformed_rows_without_center() {
    let search = search_over(vec![at("nan", f64::NAN, f64::NAN)]);
    let results = search
        .search(FilterCriteria::new())
        .await
        .expect("Search failed");
    assert_eq!(results.len(), 1);
    assert!(results[0].distance.is_none());
}

/// Test 5: Bounding box is a superset of the exact circle
#[test]
fn test_bounding_box_contains_circle() {
    for &lat in &[-60.0, -12.5, 0.0, 12.9767, 45.0, 70.0] {
        let center = GeoPoint::new(lat, 10.0);
        let bbox = bounding_box(&center, 25.0).expect("Failed to compute bounding box");
        for bearing in 0..72 {
            let theta = (bearing as f64 * 5.0).to_radians();
            // Step slightly inside the radius along each bearing.
            let d = 24.99 / EARTH_RADIUS_KM;
            let lat1 = center.lat().to_radians();
            let lng1 = center.lng().to_radians();
            let lat2 = (lat1.sin() * d.cos() + lat1.cos() * d.sin() * theta.cos()).asin();
            let lng2 = lng1
                + (theta.sin() * d.sin() * lat1.cos()).atan2(d.cos() - lat1.sin() * lat2.sin());
            let p = GeoPoint::new(lat2.to_degrees(), lng2.to_degrees());
            assert!(bbox.contains(&p), "{} escaped {}", p, bbox);
        }
    }
}

/// Test 6: Prefilter predicate set shape
#[test]
fn test_full_criteria_compose_in_order() {
    let criteria = FilterCriteria::new()
        .category(Category::Food)
        .item_type(ItemType::Deal)
        .search("dosa")
        .created_by(Uuid::nil().to_string())
        .near(GeoPoint::new(12.9767, 77.5713), 2.0);
    let set = PredicateBuilder::build(&criteria).expect("Failed to build predicates");

    assert_eq!(set.len(), 5);
    assert!(matches!(set.iter().last(), Some(Predicate::WithinBounds(_))));
    assert!(set.bounds().is_some());
}
