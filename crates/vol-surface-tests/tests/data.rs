//! Filtered-data endpoint tests.

use vol_surface_client::{DataQuery, Error};
use vol_surface_tests::{SCENARIO_CSV, spawn_server};

const CHAIN_CSV: &str = "\
strike,days_to_expiration,implied_volatility,option_type,bid
2000,50,0.42,call,310.5
2500,50,0.38,call,180.25
3000,120,0.33,put,160.0
4000,300,0.31,call,205.5
10000,300,0.27,put,4100.0
";

fn wide_open() -> DataQuery {
    DataQuery {
        strike_min: 0.0,
        strike_max: 1.0e9,
        days_min: 0,
        days_max: 10_000,
        iv_min: 0.0,
        iv_max: 10.0,
    }
}

const SCENARIO_QUERY: &str =
    "/data/?strike_min=100&strike_max=120&days_min=0&days_max=100&iv_min=0&iv_max=1";

#[tokio::test]
async fn test_data_scenario() {
    let server = spawn_server(Some(SCENARIO_CSV)).await;

    let body: serde_json::Value = reqwest::get(server.url(SCENARIO_QUERY))
        .await
        .expect("Request failed")
        .json()
        .await
        .expect("Invalid JSON");

    assert_eq!(
        body,
        serde_json::json!([{
            "strike": 100,
            "days_to_expiration": 30,
            "implied_volatility": 0.25,
            "option_type": "call"
        }])
    );
}

#[tokio::test]
async fn test_data_preserves_column_order() {
    let server = spawn_server(Some(SCENARIO_CSV)).await;

    let text = reqwest::get(server.url(SCENARIO_QUERY))
        .await
        .expect("Request failed")
        .text()
        .await
        .expect("Invalid body");

    assert_eq!(
        text,
        r#"[{"strike":100,"days_to_expiration":30,"implied_volatility":0.25,"option_type":"call"}]"#
    );
}

#[tokio::test]
async fn test_data_wide_open_returns_all_rows_in_order() {
    let server = spawn_server(Some(CHAIN_CSV)).await;

    let rows = server
        .client
        .get_filtered_data(&wide_open())
        .await
        .expect("Failed to get data");

    let strikes: Vec<f64> = rows
        .iter()
        .map(|r| r["strike"].as_f64().unwrap())
        .collect();
    assert_eq!(strikes, vec![2000.0, 2500.0, 3000.0, 4000.0, 10000.0]);
    assert_eq!(rows[4]["option_type"], "put");
    assert_eq!(rows[4]["bid"], 4100.0);
}

#[tokio::test]
async fn test_data_column_types_are_uniform() {
    let server = spawn_server(Some(
        "\
strike,days_to_expiration,implied_volatility,symbol
100,30,0.25,123
150.5,45,0.30,ABC
",
    ))
    .await;

    let text = reqwest::get(server.url(
        "/data/?strike_min=0&strike_max=1000&days_min=0&days_max=100&iv_min=0&iv_max=1",
    ))
    .await
    .expect("Request failed")
    .text()
    .await
    .expect("Invalid body");

    assert_eq!(
        text,
        concat!(
            r#"[{"strike":100.0,"days_to_expiration":30,"implied_volatility":0.25,"symbol":"123"},"#,
            r#"{"strike":150.5,"days_to_expiration":45,"implied_volatility":0.3,"symbol":"ABC"}]"#
        )
    );
}

#[tokio::test]
async fn test_data_applies_all_three_ranges() {
    let server = spawn_server(Some(CHAIN_CSV)).await;
    let query = DataQuery {
        strike_min: 2000.0,
        strike_max: 4000.0,
        days_min: 50,
        days_max: 300,
        iv_min: 0.32,
        iv_max: 0.40,
    };

    let rows = server.client.get_filtered_data(&query).await.unwrap();

    let strikes: Vec<f64> = rows
        .iter()
        .map(|r| r["strike"].as_f64().unwrap())
        .collect();
    assert_eq!(strikes, vec![2500.0, 3000.0]);
}

#[tokio::test]
async fn test_data_metadata_bounds_select_everything() {
    let server = spawn_server(Some(CHAIN_CSV)).await;

    let meta = server.client.get_metadata().await.unwrap();
    let rows = server
        .client
        .get_filtered_data(&DataQuery::from(&meta))
        .await
        .unwrap();

    assert_eq!(rows.len(), 5);
}

#[tokio::test]
async fn test_data_inverted_range_is_empty() {
    let server = spawn_server(Some(CHAIN_CSV)).await;
    let query = DataQuery {
        days_min: 300,
        days_max: 50,
        ..wide_open()
    };

    let rows = server.client.get_filtered_data(&query).await.unwrap();
    assert!(rows.is_empty());
}

#[tokio::test]
async fn test_data_missing_parameter() {
    let server = spawn_server(Some(SCENARIO_CSV)).await;

    let resp = reqwest::get(server.url(
        "/data/?strike_min=100&strike_max=120&days_min=0&days_max=100&iv_min=0",
    ))
    .await
    .expect("Request failed");

    assert_eq!(resp.status().as_u16(), 400);
    let body: serde_json::Value = resp.json().await.expect("Invalid JSON");
    assert_eq!(body["error"], "Missing parameter: iv_max");
}

#[tokio::test]
async fn test_data_no_parameters() {
    let server = spawn_server(Some(SCENARIO_CSV)).await;

    let resp = reqwest::get(server.url("/data/")).await.expect("Request failed");

    assert_eq!(resp.status().as_u16(), 400);
    let body: serde_json::Value = resp.json().await.expect("Invalid JSON");
    assert_eq!(body["error"], "Missing parameter: strike_min");
}

#[tokio::test]
async fn test_data_non_numeric_parameter() {
    let server = spawn_server(Some(SCENARIO_CSV)).await;

    let resp = reqwest::get(server.url(
        "/data/?strike_min=abc&strike_max=120&days_min=0&days_max=100&iv_min=0&iv_max=1",
    ))
    .await
    .expect("Request failed");

    assert_eq!(resp.status().as_u16(), 400);
    let body: serde_json::Value = resp.json().await.expect("Invalid JSON");
    assert!(body["error"].as_str().unwrap().contains("strike_min"));
}

#[tokio::test]
async fn test_data_missing_file() {
    let server = spawn_server(None).await;

    let err = server
        .client
        .get_filtered_data(&wide_open())
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Api { status: 500, .. }));
}

#[tokio::test]
async fn test_data_served_under_api_prefix() {
    let server = spawn_server(Some(SCENARIO_CSV)).await;

    let resp = reqwest::get(server.url(&SCENARIO_QUERY.replacen("/data/", "/api/data/", 1)))
        .await
        .expect("Request failed");
    assert_eq!(resp.status().as_u16(), 200);
}
