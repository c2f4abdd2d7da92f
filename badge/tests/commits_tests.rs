/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Tests for the commit connector, against a canned local endpoint.

use badge::commits::get_branch_head;
use badge::page::append_to_element;
use badge::{Badge, BadgeError, RequestConfig, TARGET_ELEMENT_ID};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

async fn mock_api(
    status_line: &'static str,
    body: &'static str,
) -> (String, oneshot::Receiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = oneshot::channel();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();

        let mut buf = [0u8; 4096];
        let n = socket.read(&mut buf).await.unwrap();
        let _ = tx.send(String::from_utf8_lossy(&buf[..n]).to_string());

        let response = format!(
            "HTTP/1.1 {}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
            status_line,
            body.len(),
            body
        );
        socket.write_all(response.as_bytes()).await.unwrap();
    });

    (format!("http://{}", addr), rx)
}

fn request_config(api_url: String) -> RequestConfig {
    RequestConfig {
        api_url,
        repository: "wavelens/website".to_string(),
    }
}

#[tokio::test]
async fn test_fetches_branch_head() {
    let (api_url, request) = mock_api(
        "200 OK",
        r#"{"sha": "a1b2c3d4e5f60718293a4b5c6d7e8f9001122334", "node_id": "abc"}"#,
    )
    .await;

    let hash = get_branch_head(&request_config(api_url)).await.unwrap();
    assert_eq!(hash.as_str(), "a1b2c3d4e5f60718293a4b5c6d7e8f9001122334");

    let request = request.await.unwrap();
    assert!(request.starts_with("GET /repos/wavelens/website/commits/master HTTP/1.1"));
    assert!(request.to_lowercase().contains("user-agent: commit-badge/"));
}

#[tokio::test]
async fn test_missing_field_is_decode_error() {
    let (api_url, _request) = mock_api("200 OK", r#"{"node_id": "abc"}"#).await;

    let err = get_branch_head(&request_config(api_url)).await.unwrap_err();
    assert!(matches!(err, BadgeError::Decode(_)));
}

#[tokio::test]
async fn test_http_error_is_reported() {
    let (api_url, _request) = mock_api("404 Not Found", r#"{"message": "Not Found"}"#).await;

    let err = get_branch_head(&request_config(api_url)).await.unwrap_err();
    assert!(matches!(err, BadgeError::Status { .. }));
}

#[tokio::test]
async fn test_non_hex_identifier_rejected() {
    let (api_url, _request) = mock_api("200 OK", r#"{"sha": "refs/heads/master"}"#).await;

    let err = get_branch_head(&request_config(api_url)).await.unwrap_err();
    assert!(matches!(err, BadgeError::InvalidHash(_)));
}

#[tokio::test]
async fn test_unreachable_endpoint_is_request_error() {
    let err = get_branch_head(&request_config("http://127.0.0.1:1".to_string()))
        .await
        .unwrap_err();
    assert!(matches!(err, BadgeError::Request(_)));
}

#[tokio::test]
async fn test_badge_lands_in_page() {
    let (api_url, _request) =
        mock_api("200 OK", r#"{"sha": "1234567abcdef000000000000000000000000"}"#).await;

    let config = request_config(api_url);
    let repository = config.repository.clone();
    let hash = get_branch_head(&config).await.unwrap();
    let badge = Badge::new(hash, repository);

    let page = r#"<body><p id="last_update">Last updated: 2026-08-06</p></body>"#;
    let updated = append_to_element(page, TARGET_ELEMENT_ID, &badge.html()).unwrap();

    assert_eq!(
        updated,
        "<body><p id=\"last_update\">Last updated: 2026-08-06 \
         (<a href=\"https://github.com/wavelens/website/commit/1234567abcdef000000000000000000000000\">1234567</a>)\
         </p></body>"
    );
}
