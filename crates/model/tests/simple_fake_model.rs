use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::time::Duration;

use banter_model::{
    ErrorKind, ModelMessage, ModelProvider, ModelProviderError, ModelRequest,
    Role,
};
use tokio::time::sleep;

#[derive(Debug)]
struct FakeModelProviderError(ErrorKind);

impl Display for FakeModelProviderError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

impl Error for FakeModelProviderError {}

impl ModelProviderError for FakeModelProviderError {
    fn kind(&self) -> ErrorKind {
        self.0
    }
}

/// Parrots the last message back, addressing its speaker.
struct FakeModelProvider;

impl ModelProvider for FakeModelProvider {
    type Error = FakeModelProviderError;

    fn send_request(
        &self,
        req: &ModelRequest,
    ) -> impl Future<Output = Result<ModelMessage, Self::Error>> + Send + 'static
    {
        let last = req.messages.last().cloned();
        async move {
            sleep(Duration::from_millis(1)).await;
            let Some(last) = last else {
                return Err(FakeModelProviderError(ErrorKind::InvalidResponse));
            };
            let speaker = last.name.as_deref().unwrap_or("stranger");
            Ok(ModelMessage::assistant(format!(
                "{speaker}, you said {}\n",
                last.content
            )))
        }
    }
}

mod tests {
    use super::*;

    #[tokio::test]
    async fn test_completion() {
        let provider = FakeModelProvider;
        let req = ModelRequest {
            messages: vec![
                ModelMessage::system("Be polite."),
                ModelMessage::user(Some("Sam".to_owned()), "Good morning"),
            ],
        };
        let reply = provider.send_request(&req).await.unwrap();
        assert_eq!(reply.role, Role::Assistant);
        assert_eq!(reply.content, "Sam, you said Good morning\n");
    }

    #[tokio::test]
    async fn test_future_outlives_request() {
        let provider = FakeModelProvider;
        let fut = {
            let req = ModelRequest {
                messages: vec![ModelMessage::user(None, "Hello")],
            };
            provider.send_request(&req)
        };
        let reply = fut.await.unwrap();
        assert_eq!(reply.content, "stranger, you said Hello\n");
    }

    #[tokio::test]
    async fn test_error() {
        let provider = FakeModelProvider;
        let result = provider.send_request(&ModelRequest::default()).await;
        let err = result.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidResponse);
    }
}
