//! Integration tests for the climate snapshot store.

use test_utils::{
    memory_store, sample_store, seed_measurement, seed_station, MOST_OBSERVED_STATION,
};

#[tokio::test]
async fn test_precipitation_since_filters_by_date() {
    let store = sample_store().await;

    let rows = store.precipitation_since("2016-08-23").await.unwrap();

    assert_eq!(rows.len(), 4);
    for row in &rows {
        assert!(row.date.as_str() >= "2016-08-23");
    }
}

#[tokio::test]
async fn test_precipitation_since_is_inclusive_of_boundary() {
    let store = memory_store().await;
    seed_measurement(&store, "S1", "2017-03-01", Some(0.1), 70.0).await;

    let rows = store.precipitation_since("2017-03-01").await.unwrap();

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].date, "2017-03-01");
}

#[tokio::test]
async fn test_precipitation_since_spans_all_stations() {
    let store = sample_store().await;

    let rows = store.precipitation_since("2017-01-01").await.unwrap();

    // Rows from both stations land in the result.
    assert_eq!(rows.len(), 3);
}

#[tokio::test]
async fn test_precipitation_preserves_null_readings() {
    let store = sample_store().await;

    let rows = store.precipitation_since("2017-08-23").await.unwrap();

    assert_eq!(rows.len(), 1);
    assert!(rows[0].prcp.is_none());
}

#[tokio::test]
async fn test_list_stations_returns_each_station_once() {
    let store = sample_store().await;

    let stations = store.list_stations().await.unwrap();

    let mut codes: Vec<&str> = stations.iter().map(|s| s.station.as_str()).collect();
    codes.sort();
    assert_eq!(codes, vec!["USC00511918", MOST_OBSERVED_STATION]);
}

#[tokio::test]
async fn test_list_stations_populates_all_fields() {
    let store = memory_store().await;
    seed_station(&store, "ST001", "Station A", 21.3, -157.8, 10.0).await;

    let stations = store.list_stations().await.unwrap();

    assert_eq!(stations.len(), 1);
    let s = &stations[0];
    assert_eq!(s.station, "ST001");
    assert_eq!(s.name, "Station A");
    assert_eq!(s.latitude, 21.3);
    assert_eq!(s.longitude, -157.8);
    assert_eq!(s.elevation, 10.0);
}

#[tokio::test]
async fn test_temperatures_filtered_to_one_station() {
    let store = sample_store().await;

    let rows = store
        .temperatures_for_station_since(MOST_OBSERVED_STATION, "2016-08-23")
        .await
        .unwrap();

    assert_eq!(rows.len(), 3);
    // The other station's 2017-05-10 reading must not appear.
    assert!(rows.iter().all(|r| r.date != "2017-05-10"));
}

#[tokio::test]
async fn test_temperatures_empty_for_unknown_station() {
    let store = sample_store().await;

    let rows = store
        .temperatures_for_station_since("USC00000000", "2016-08-23")
        .await
        .unwrap();

    assert!(rows.is_empty());
}

#[tokio::test]
async fn test_temperature_stats_open_ended() {
    let store = memory_store().await;
    seed_measurement(&store, "S1", "2017-01-01", None, 10.0).await;
    seed_measurement(&store, "S1", "2017-01-02", None, 20.0).await;
    seed_measurement(&store, "S2", "2017-01-02", None, 30.0).await;

    let stats = store.temperature_stats("2017-01-01", None).await.unwrap();

    assert_eq!(stats.min, Some(10.0));
    assert_eq!(stats.avg, Some(20.0));
    assert_eq!(stats.max, Some(30.0));
}

#[tokio::test]
async fn test_temperature_stats_bounded_excludes_later_rows() {
    let store = memory_store().await;
    seed_measurement(&store, "S1", "2017-01-01", None, 10.0).await;
    seed_measurement(&store, "S1", "2017-01-02", None, 20.0).await;
    seed_measurement(&store, "S1", "2017-01-03", None, 90.0).await;

    let stats = store
        .temperature_stats("2017-01-01", Some("2017-01-02"))
        .await
        .unwrap();

    assert_eq!(stats.min, Some(10.0));
    assert_eq!(stats.avg, Some(15.0));
    assert_eq!(stats.max, Some(20.0));
}

#[tokio::test]
async fn test_temperature_stats_ordering_invariant() {
    let store = sample_store().await;

    let stats = store.temperature_stats("2010-01-01", None).await.unwrap();

    let (min, avg, max) = (
        stats.min.unwrap(),
        stats.avg.unwrap(),
        stats.max.unwrap(),
    );
    assert!(min <= avg);
    assert!(avg <= max);
}

#[tokio::test]
async fn test_temperature_stats_empty_range_is_all_null() {
    let store = sample_store().await;

    let stats = store.temperature_stats("2099-01-01", None).await.unwrap();

    assert!(stats.min.is_none());
    assert!(stats.avg.is_none());
    assert!(stats.max.is_none());
}

#[tokio::test]
async fn test_temperature_stats_malformed_date_matches_nothing() {
    let store = sample_store().await;

    // Unparseable input is passed through as literal text; nothing in the
    // snapshot compares >= "not-a-date".
    let stats = store.temperature_stats("not-a-date", None).await.unwrap();

    // "not-a-date" sorts after every "2xxx-..." string, so the range is empty.
    assert!(stats.min.is_none());
    assert!(stats.avg.is_none());
    assert!(stats.max.is_none());
}

#[tokio::test]
async fn test_ping_succeeds_on_open_store() {
    let store = memory_store().await;
    store.ping().await.unwrap();
}
