//! Client for the AWS Location Service places API (suggestions and place lookup).

mod client;
mod config;
mod error;
mod types;

pub use client::PlacesClient;
pub use config::PlacesConfig;
pub use error::PlacesError;
pub use types::*;

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_config(mock_server: &MockServer) -> PlacesConfig {
        let mut config = PlacesConfig::new("test-api-key");
        config.index_name = "test-index".into();
        config.base_url = Some(mock_server.uri());
        config.timeout = Duration::from_secs(5);
        config
    }

    fn create_test_client(mock_server: &MockServer) -> PlacesClient {
        PlacesClient::new(&test_config(mock_server)).unwrap()
    }

    fn suggestions_body() -> serde_json::Value {
        serde_json::json!({
            "Summary": {
                "Text": "123 Main",
                "MaxResults": 10,
                "DataSource": "Esri"
            },
            "Results": [
                { "Text": "123 Main St, City B", "PlaceId": "place-b" },
                { "Text": "123 Main St, City A", "PlaceId": "place-a" },
                { "Text": "123 Main St, City C", "PlaceId": "place-c" }
            ]
        })
    }

    #[tokio::test]
    async fn test_search_suggestions_success() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/places/v0/indexes/test-index/search/suggestions"))
            .and(query_param("key", "test-api-key"))
            .and(body_json(serde_json::json!({ "Text": "123 Main", "MaxResults": 10 })))
            .respond_with(ResponseTemplate::new(200).set_body_json(suggestions_body()))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server);
        let result = client.search_suggestions("123 Main").await.unwrap();

        assert_eq!(result.summary.text, "123 Main");
        assert_eq!(result.summary.max_results, Some(10));
        assert_eq!(result.summary.data_source, "Esri");

        // Provider order is kept as-is
        let ids: Vec<_> = result
            .candidates
            .iter()
            .map(|c| c.place_id.as_deref().unwrap())
            .collect();
        assert_eq!(ids, vec!["place-b", "place-a", "place-c"]);
    }

    #[tokio::test]
    async fn test_search_suggestions_is_repeatable() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/places/v0/indexes/test-index/search/suggestions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(suggestions_body()))
            .expect(2)
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server);
        let first = client.search_suggestions("123 Main").await.unwrap();
        let second = client.search_suggestions("123 Main").await.unwrap();
        assert_eq!(first.candidates, second.candidates);
    }

    #[tokio::test]
    async fn test_search_suggestions_provider_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/places/v0/indexes/test-index/search/suggestions"))
            .respond_with(ResponseTemplate::new(503).set_body_string("unavailable"))
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server);
        let err = client.search_suggestions("123 Main").await.unwrap_err();

        assert_eq!(err.provider_status(), Some(503));
        assert!(matches!(err, PlacesError::Api { ref message, .. } if message == "unavailable"));
    }

    #[tokio::test]
    async fn test_search_suggestions_malformed_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/places/v0/indexes/test-index/search/suggestions"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server);
        let err = client.search_suggestions("123 Main").await.unwrap_err();
        assert!(matches!(err, PlacesError::Json(_)));
        assert_eq!(err.provider_status(), None);
    }

    #[tokio::test]
    async fn test_search_suggestions_timeout() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/places/v0/indexes/test-index/search/suggestions"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(suggestions_body())
                    .set_delay(Duration::from_secs(2)),
            )
            .mount(&mock_server)
            .await;

        let mut config = test_config(&mock_server);
        config.timeout = Duration::from_millis(100);
        let client = PlacesClient::new(&config).unwrap();

        let err = client.search_suggestions("123 Main").await.unwrap_err();
        assert!(matches!(err, PlacesError::Timeout));
    }

    #[tokio::test]
    async fn test_get_place_success() {
        let mock_server = MockServer::start().await;

        let response_body = serde_json::json!({
            "Place": {
                "Label": "123 Main St, City B, NSW 2000, AUS",
                "Street": "Main St",
                "Municipality": "City B",
                "SubRegion": "Sydney",
                "PostalCode": "2000",
                "Country": "AUS"
            }
        });

        Mock::given(method("GET"))
            .and(path("/places/v0/indexes/test-index/places/place-b"))
            .and(query_param("key", "test-api-key"))
            .and(query_param("language", "en"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&response_body))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server);
        let detail = client.get_place("place-b").await.unwrap();

        assert_eq!(detail.place.municipality.as_deref(), Some("City B"));
        assert_eq!(detail.place.postal_code.as_deref(), Some("2000"));
        assert_eq!(detail.place.country.as_deref(), Some("AUS"));
    }

    #[tokio::test]
    async fn test_get_place_not_found() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/places/v0/indexes/test-index/places/missing"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server);
        let err = client.get_place("missing").await.unwrap_err();
        assert_eq!(err.provider_status(), Some(404));
    }

    #[tokio::test]
    async fn test_unreachable_provider() {
        let mut config = PlacesConfig::new("test-api-key");
        config.base_url = Some("http://127.0.0.1:1".into());
        let client = PlacesClient::new(&config).unwrap();

        let err = client.get_place("anything").await.unwrap_err();
        assert!(matches!(err, PlacesError::Http(_)));
    }

    #[test]
    fn test_empty_api_key_rejected() {
        let config = PlacesConfig::new("  ");
        assert!(matches!(
            PlacesClient::new(&config),
            Err(PlacesError::Config(_))
        ));
    }

    #[test]
    fn test_index_name_getter() {
        let config = PlacesConfig::new("key");
        let client = PlacesClient::new(&config).unwrap();
        assert_eq!(client.index_name(), "z-location-index");
    }
}
