use std::fmt::{self, Debug};
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use banter_model::{ModelMessage, ModelProvider, ModelRequest};
use tracing::Instrument;

use crate::error::Error;

type SendRequestResult = Result<ModelMessage, Error>;
type BoxedSendRequestFuture =
    Pin<Box<dyn Future<Output = SendRequestResult> + Send>>;
type HandlerFn = Arc<dyn Fn(ModelRequest) -> BoxedSendRequestFuture + Send + Sync>;

/// A wrapper around a model provider that provides a type-erased,
/// cloneable interface for the personas.
///
/// Clones share the same provider, so both sides of a conversation can
/// talk to one endpoint.
#[derive(Clone)]
pub struct ModelClient {
    handler_fn: HandlerFn,
    timeout: Option<Duration>,
}

impl ModelClient {
    /// Wraps `provider`. Calls never time out unless
    /// [`with_timeout`](Self::with_timeout) is used.
    pub fn new<P: ModelProvider + 'static>(provider: P) -> Self {
        // We have to erase the type `P`, since `Persona` doesn't have a
        // generic parameter and we don't want it either.
        let handler_fn: HandlerFn = Arc::new(move |req: ModelRequest| {
            let fut = provider.send_request(&req);
            Box::pin(
                async move {
                    trace!("got a request: {:?}", req);
                    match fut.await {
                        Ok(msg) => {
                            trace!("got a reply: {:?}", msg);
                            Ok(msg)
                        }
                        Err(err) => {
                            debug!("got an error: {err}");
                            Err(Error::provider(err))
                        }
                    }
                }
                .instrument(trace_span!("model client req")),
            ) as BoxedSendRequestFuture
        });
        Self {
            handler_fn,
            timeout: None,
        }
    }

    /// Bounds every call made through this client.
    #[inline]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Returns the per-call timeout, if any.
    #[inline]
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Sends a request and waits for the complete reply.
    pub async fn send_request(
        &self,
        req: ModelRequest,
    ) -> Result<ModelMessage, Error> {
        let fut = (self.handler_fn)(req);
        let Some(timeout) = self.timeout else {
            return fut.await;
        };
        match tokio::time::timeout(timeout, fut).await {
            Ok(result) => result,
            Err(_) => {
                debug!("no reply within {timeout:?}");
                Err(Error::timeout(timeout))
            }
        }
    }
}

impl Debug for ModelClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModelClient")
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}
