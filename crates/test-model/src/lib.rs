//! A local fake model for testing purpose.

mod preset;

use std::collections::VecDeque;
use std::error::Error as StdError;
use std::fmt::{self, Display, Formatter};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use banter_model::{
    ErrorKind, ModelMessage, ModelProvider, ModelProviderError, ModelRequest,
};
use tokio::time::sleep;

pub use preset::*;

#[derive(Debug)]
pub struct Error {
    message: &'static str,
    kind: ErrorKind,
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.message, self.kind)
    }
}

impl StdError for Error {}

impl ModelProviderError for Error {
    #[inline]
    fn kind(&self) -> ErrorKind {
        self.kind
    }
}

#[derive(Default)]
struct State {
    script: VecDeque<PresetStep>,
    requests: Vec<ModelRequest>,
    delay: Option<Duration>,
}

/// A local fake model for testing purpose.
///
/// Before sending requests, you need to setup the conversation script, which
/// is how the model should respond to each request, in order. Every request
/// consumes one step; if there are no steps left, an error is returned.
///
/// Clones share the same script and request log, so a test can keep one
/// clone for inspection after handing another to the code under test.
#[derive(Clone, Default)]
pub struct TestModelProvider {
    state: Arc<Mutex<State>>,
}

impl TestModelProvider {
    /// Creates a provider that plays `steps` in order.
    pub fn with_script(steps: impl IntoIterator<Item = PresetStep>) -> Self {
        let provider = Self::default();
        provider.lock().script.extend(steps);
        provider
    }

    #[inline]
    pub fn add_step(&self, step: PresetStep) {
        self.lock().script.push_back(step);
    }

    #[inline]
    pub fn add_reply_step<S: Into<String>>(&self, content: S) {
        self.add_step(PresetStep::assistant(content));
    }

    #[inline]
    pub fn add_failure_step(&self, kind: ErrorKind) {
        self.add_step(PresetStep::Failure(kind));
    }

    /// Delays every answer by `duration`.
    #[inline]
    pub fn set_delay(&self, duration: Duration) {
        self.lock().delay = Some(duration);
    }

    /// Returns every request received so far, oldest first.
    #[inline]
    pub fn requests(&self) -> Vec<ModelRequest> {
        self.lock().requests.clone()
    }

    /// Returns the number of steps not consumed yet.
    #[inline]
    pub fn remaining_steps(&self) -> usize {
        self.lock().script.len()
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        // A panicking test thread is the only way to poison this lock.
        self.state.lock().unwrap_or_else(|err| err.into_inner())
    }
}

impl ModelProvider for TestModelProvider {
    type Error = crate::Error;

    fn send_request(
        &self,
        req: &ModelRequest,
    ) -> impl Future<Output = Result<ModelMessage, Self::Error>> + Send + 'static
    {
        let (step, delay) = {
            let mut state = self.lock();
            state.requests.push(req.clone());
            (state.script.pop_front(), state.delay)
        };
        async move {
            if let Some(delay) = delay {
                sleep(delay).await;
            }
            match step {
                Some(PresetStep::Reply(msg)) => Ok(msg),
                Some(PresetStep::Failure(kind)) => Err(Error {
                    message: "scripted failure",
                    kind,
                }),
                None => Err(Error {
                    message: "no enough steps",
                    kind: ErrorKind::Other,
                }),
            }
        }
    }
}
