//! Integration tests for the SiteClient using mockito for HTTP mocking.

use folio_palette::{SiteApiError, SiteClient};
use mockito::{Matcher, Server};

#[test]
fn test_search_success() {
    let mut server = Server::new();

    let mock = server
        .mock("GET", "/api/search")
        .match_query(Matcher::UrlEncoded("q".into(), "motion".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"[{
                "id": 3,
                "title": "Motion",
                "short": "Resolutions suck.",
                "full": "eat real food is the goal",
                "category": "experience",
                "tag": "EXPERIENCE.003",
                "date": "2025-01-04"
            }]"#,
        )
        .create();

    let client = SiteClient::with_base_url(server.url());
    let posts = client.search("motion").unwrap();

    mock.assert();
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].title, "Motion");
    assert_eq!(posts[0].tag, "EXPERIENCE.003");
}

#[test]
fn test_search_urlencodes_query() {
    let mut server = Server::new();

    let mock = server
        .mock("GET", "/api/search")
        .match_query(Matcher::UrlEncoded("q".into(), "real food & more".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("[]")
        .create();

    let client = SiteClient::with_base_url(server.url());
    let posts = client.search("real food & more").unwrap();

    mock.assert();
    assert!(posts.is_empty());
}

#[test]
fn test_search_server_error() {
    let mut server = Server::new();

    let mock = server
        .mock("GET", "/api/search")
        .match_query(Matcher::Any)
        .with_status(500)
        .with_body("internal error")
        .create();

    let client = SiteClient::with_base_url(server.url());
    let result = client.search("motion");

    mock.assert();
    match result {
        Err(SiteApiError::ApiError { status, message }) => {
            assert_eq!(status, 500);
            assert!(message.contains("internal error"));
        }
        other => panic!("Expected ApiError, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_search_malformed_json() {
    let mut server = Server::new();

    let mock = server
        .mock("GET", "/api/search")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("{not json")
        .create();

    let client = SiteClient::with_base_url(server.url());
    let result = client.search("motion");

    mock.assert();
    assert!(matches!(result, Err(SiteApiError::JsonError(_))));
}

#[test]
fn test_search_connection_refused() {
    // Nothing listens on this port
    let client = SiteClient::with_base_url("http://127.0.0.1:1".to_string());
    let result = client.search("motion");
    assert!(result.is_err());
}
