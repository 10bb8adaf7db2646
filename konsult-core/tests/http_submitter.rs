//! HttpSubmitter against a throwaway local endpoint

use std::time::Duration;

use konsult_core::contact::{ContactPayload, ContactSubmitter, HttpSubmitter};
use konsult_core::CoreError;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use url::Url;

/// Accept one connection, answer with `status_line`, return the raw request
async fn serve_once(status_line: &'static str) -> (Url, tokio::task::JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut request = Vec::new();
        let mut buf = [0u8; 4096];
        loop {
            let n = socket.read(&mut buf).await.unwrap();
            request.extend_from_slice(&buf[..n]);
            if n == 0 || request_complete(&request) {
                break;
            }
        }
        let response =
            format!("HTTP/1.1 {status_line}\r\ncontent-length: 0\r\nconnection: close\r\n\r\n");
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.ok();
        String::from_utf8_lossy(&request).into_owned()
    });

    let url = Url::parse(&format!("http://{addr}/f/test")).unwrap();
    (url, handle)
}

fn request_complete(raw: &[u8]) -> bool {
    let text = String::from_utf8_lossy(raw);
    let Some((head, body)) = text.split_once("\r\n\r\n") else {
        return false;
    };
    let length = head
        .lines()
        .find_map(|line| {
            let (name, value) = line.split_once(':')?;
            name.eq_ignore_ascii_case("content-length")
                .then(|| value.trim().parse::<usize>().ok())
                .flatten()
        })
        .unwrap_or(0);
    body.len() >= length
}

fn payload() -> ContactPayload {
    ContactPayload {
        name: "Ada".into(),
        email: "ada@x.com".into(),
        company: String::new(),
        message: "Hello".into(),
    }
}

#[tokio::test]
async fn posts_json_payload() {
    let (url, server) = serve_once("200 OK").await;
    let submitter = HttpSubmitter::new(url).unwrap();

    tokio::time::timeout(Duration::from_secs(10), submitter.submit(&payload()))
        .await
        .unwrap()
        .unwrap();

    let request = server.await.unwrap();
    assert!(request.starts_with("POST /f/test"));
    assert!(request.to_ascii_lowercase().contains("content-type: application/json"));
    assert!(request.contains(r#""email":"ada@x.com""#));
    assert!(!request.contains("honeypot"));
}

#[tokio::test]
async fn non_success_status_is_failure() {
    let (url, server) = serve_once("422 Unprocessable Entity").await;
    let submitter = HttpSubmitter::new(url).unwrap();

    let err = submitter.submit(&payload()).await.unwrap_err();

    assert!(matches!(err, CoreError::SubmissionFailed(ref detail) if detail == "HTTP 422"));
    server.await.unwrap();
}
