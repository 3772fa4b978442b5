use httpmock::prelude::*;
use recipe_aggregator::core::RecipeFetcher;
use recipe_aggregator::{FetchError, HttpRecipeFetcher};
use std::time::Duration;

fn fetcher_for(server: &MockServer) -> HttpRecipeFetcher {
    HttpRecipeFetcher::new(&server.url("/recipes/"), "hellofresh", Duration::from_secs(2)).unwrap()
}

#[tokio::test]
async fn test_fetch_decodes_successful_response() {
    let server = MockServer::start_async().await;
    let api_mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/recipes/1");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({
                    "id": "1",
                    "name": "Crispy Cheese-Crusted Fish Fillet",
                    "headline": "with Baked Potato",
                    "description": "Quick and easy",
                    "difficulty": 1,
                    "prepTime": "PT35M",
                    "imageLink": "https://img/1.jpg",
                    "ingredients": [{"name": "Fish", "imageLink": "https://img/fish.png"}]
                }));
        })
        .await;

    let recipe = fetcher_for(&server).fetch("1").await.unwrap();

    api_mock.assert_async().await;
    assert_eq!(recipe.id, "1");
    assert_eq!(recipe.prep_time, "PT35M");
    assert_eq!(recipe.ingredients[0].name, "Fish");
}

#[tokio::test]
async fn test_fetch_non_2xx_is_a_status_failure() {
    let server = MockServer::start_async().await;
    let api_mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/recipes/404");
            then.status(403);
        })
        .await;

    let err = fetcher_for(&server).fetch("404").await.unwrap_err();

    api_mock.assert_async().await;
    assert!(matches!(err, FetchError::Status { status: 403, .. }));
}

#[tokio::test]
async fn test_fetch_malformed_body_is_a_decode_failure() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/recipes/2");
            then.status(200).body("<xml>not json</xml>");
        })
        .await;

    let err = fetcher_for(&server).fetch("2").await.unwrap_err();

    assert!(matches!(err, FetchError::Decode { .. }));
}

#[tokio::test]
async fn test_fetch_document_without_id_is_rejected() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/recipes/3");
            then.status(200)
                .json_body(serde_json::json!({"name": "Ghost", "prepTime": "PT5M"}));
        })
        .await;

    let err = fetcher_for(&server).fetch("3").await.unwrap_err();

    assert!(matches!(err, FetchError::MissingId { .. }));
}

#[tokio::test]
async fn test_fetch_unreachable_upstream_is_a_transport_failure() {
    let fetcher =
        HttpRecipeFetcher::new("http://127.0.0.1:1/", "hellofresh", Duration::from_secs(1))
            .unwrap();

    let err = fetcher.fetch("1").await.unwrap_err();

    assert!(matches!(err, FetchError::Transport { .. }));
}
