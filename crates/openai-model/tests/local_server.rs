use banter_model::{
    ErrorKind, ModelMessage, ModelProvider, ModelProviderError, ModelRequest,
    Role,
};
use banter_openai_model::{OpenAIConfigBuilder, OpenAIProvider};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::oneshot;

const COMPLETION: &str = include_str!("../fixtures/chat_completion.json");

/// Answers exactly one HTTP request with the given status line, content
/// type and body. Returns the base URL and the raw request it received.
async fn serve_once(
    status: &str,
    content_type: &str,
    body: &str,
) -> (String, oneshot::Receiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let response = format!(
        "HTTP/1.1 {status}\r\n\
         Content-Type: {content_type}\r\n\
         Content-Length: {}\r\n\
         Connection: close\r\n\
         \r\n\
         {body}",
        body.len()
    );
    let (request_tx, request_rx) = oneshot::channel();

    tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.unwrap();
        let request = read_request(&mut stream).await;
        stream.write_all(response.as_bytes()).await.unwrap();
        stream.shutdown().await.ok();
        request_tx.send(request).ok();
    });

    (format!("http://{addr}/v1"), request_rx)
}

async fn read_request(stream: &mut TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];
    loop {
        let n = stream.read(&mut chunk).await.unwrap();
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);

        let Some(head_end) = buf.windows(4).position(|w| w == b"\r\n\r\n")
        else {
            continue;
        };
        let head = String::from_utf8_lossy(&buf[..head_end]).to_lowercase();
        let content_length = head
            .lines()
            .find_map(|line| line.strip_prefix("content-length:"))
            .and_then(|v| v.trim().parse::<usize>().ok())
            .unwrap_or(0);
        if buf.len() >= head_end + 4 + content_length {
            break;
        }
    }
    String::from_utf8(buf).unwrap()
}

fn provider(base_url: &str) -> OpenAIProvider {
    let config = OpenAIConfigBuilder::with_api_key("sk-test")
        .with_model("gpt-test")
        .with_base_url(base_url)
        .build();
    OpenAIProvider::new(config)
}

fn request() -> ModelRequest {
    ModelRequest {
        messages: vec![
            ModelMessage::system("You are Dana."),
            ModelMessage::user(Some("Sam".to_owned()), "Remember that summer?"),
        ],
    }
}

#[tokio::test]
async fn test_successful_completion() {
    let (base_url, request_rx) =
        serve_once("200 OK", "application/json", COMPLETION).await;

    let reply = provider(&base_url).send_request(&request()).await.unwrap();
    assert_eq!(reply.role, Role::Assistant);
    assert_eq!(
        reply.content,
        "Vividly. You sang off-key the whole way to the lake.\n"
    );

    let raw = request_rx.await.unwrap();
    assert!(raw.starts_with("POST /v1/chat/completions HTTP/1.1\r\n"));
    let lowered = raw.to_lowercase();
    assert!(lowered.contains("authorization: bearer sk-test\r\n"));
    assert!(raw.contains(r#""model":"gpt-test""#));
    assert!(raw.contains(r#""name":"Sam""#));
}

#[tokio::test]
async fn test_unauthorized() {
    let (base_url, _request_rx) = serve_once(
        "401 Unauthorized",
        "application/json",
        r#"{ "error": { "message": "bad key" } }"#,
    )
    .await;

    let err = provider(&base_url)
        .send_request(&request())
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Unauthorized);
    assert_eq!(err.message(), "401 Unauthorized: bad key");
}

#[tokio::test]
async fn test_unexpected_content_type() {
    let (base_url, _request_rx) =
        serve_once("200 OK", "text/html; charset=utf-8", "<html></html>")
            .await;

    let err = provider(&base_url)
        .send_request(&request())
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidResponse);
    assert!(err.message().starts_with("Unexpected content type"));
}

#[tokio::test]
async fn test_connection_refused() {
    // Nothing listens on the port once the listener is dropped.
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = provider(&format!("http://{addr}/v1"))
        .send_request(&request())
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Network);
}
