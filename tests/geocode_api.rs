use skycast::data::{DataError, geocode::GeocodeClient};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

#[tokio::test]
async fn search_returns_the_candidates_in_feed_order() {
    let server = MockServer::start().await;

    let body = r#"
    {
      "results": [
        {
          "name": "Sheffield",
          "latitude": 53.38297,
          "longitude": -1.4659,
          "country": "United Kingdom",
          "country_code": "GB",
          "admin1": "England",
          "timezone": "Europe/London",
          "population": 685368
        },
        {
          "name": "Sheffield",
          "latitude": 41.42109,
          "longitude": -82.09452,
          "country": "United States",
          "admin1": "Ohio"
        }
      ]
    }
    "#;

    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .and(query_param("name", "Sheffield"))
        .and(query_param("count", "5"))
        .and(query_param("language", "en"))
        .and(query_param("format", "json"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(body, "application/json"))
        .mount(&server)
        .await;

    let client = GeocodeClient::with_base_url(format!("{}/v1/search", server.uri()));
    let results = client.search("Sheffield", 5, None).await.expect("search");

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].name, "Sheffield");
    assert_eq!(results[0].country.as_deref(), Some("United Kingdom"));
    assert_eq!(results[1].admin1.as_deref(), Some("Ohio"));
    assert_eq!(
        results[0].suggestion_line(),
        "Sheffield, England, United Kingdom"
    );
}

#[tokio::test]
async fn lookup_with_no_results_is_city_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("{}", "application/json"))
        .mount(&server)
        .await;

    let client = GeocodeClient::with_base_url(format!("{}/v1/search", server.uri()));
    let err = client.lookup("Atlantis", None).await.expect_err("lookup");

    assert!(matches!(err, DataError::CityNotFound));
    assert!(!err.is_retryable());
    assert_eq!(err.to_string(), "City not found");
}

#[tokio::test]
async fn lookup_takes_the_best_match() {
    let server = MockServer::start().await;

    let body = r#"{"results": [{"name": "Oslo", "latitude": 59.91, "longitude": 10.75, "country": "Norway"}]}"#;
    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .and(query_param("count", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(body, "application/json"))
        .mount(&server)
        .await;

    let client = GeocodeClient::with_base_url(format!("{}/v1/search", server.uri()));
    let location = client.lookup("Oslo", None).await.expect("lookup");

    assert_eq!(location.name, "Oslo");
    assert_eq!(location.label(), "Oslo, Norway");
}

#[tokio::test]
async fn country_filter_is_forwarded_to_the_api() {
    let server = MockServer::start().await;

    let body = r#"{"results": [{"name": "Sheffield", "latitude": 53.38297, "longitude": -1.4659, "country": "United Kingdom"}]}"#;
    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .and(query_param("name", "Sheffield"))
        .and(query_param("countryCode", "GB"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(body, "application/json"))
        .expect(1)
        .mount(&server)
        .await;

    let client = GeocodeClient::with_base_url(format!("{}/v1/search", server.uri()));
    let location = client.lookup("Sheffield", Some("GB")).await.expect("lookup");

    assert_eq!(location.country.as_deref(), Some("United Kingdom"));
}

#[tokio::test]
async fn server_errors_keep_the_friendly_message() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = GeocodeClient::with_base_url(format!("{}/v1/search", server.uri()));
    let err = client
        .search("Sheffield", 5, None)
        .await
        .expect_err("search");

    assert!(matches!(err, DataError::Geocode(_)));
    assert!(err.is_retryable());
    assert_eq!(err.to_string(), "Could not look up that city");
}
