use banter_model::{ErrorKind, ModelMessage, ModelRequest, Role};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use crate::{Error, OpenAIConfig};

// ------------------------------
// Types received from the server
// ------------------------------

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ChatCompletion {
    pub id: String,
    pub choices: Vec<Choice>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Choice {
    pub message: ResponseMessage,
    pub finish_reason: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ResponseMessage {
    pub role: Role,
    pub content: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
struct ErrorDetail {
    message: String,
}

// ------------------------
// Types sent to the server
// ------------------------

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Message {
    role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    content: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ChatCompletionRequest {
    model: String,
    messages: Vec<Message>,
}

// -----------
// Conversions
// -----------

#[inline]
pub fn create_request(
    req: &ModelRequest,
    config: &OpenAIConfig,
) -> ChatCompletionRequest {
    ChatCompletionRequest {
        model: config.model.clone(),
        messages: req.messages.iter().map(create_message).collect(),
    }
}

#[inline]
fn create_message(msg: &ModelMessage) -> Message {
    Message {
        role: msg.role,
        name: msg.name.clone(),
        content: msg.content.clone(),
    }
}

/// Extracts the first choice of a successful completion body.
pub fn parse_completion(body: &str) -> Result<ModelMessage, Error> {
    let mut completion = serde_json::from_str::<ChatCompletion>(body)
        .map_err(|err| Error::new(format!("{err}"), ErrorKind::InvalidResponse))?;
    if completion.choices.is_empty() {
        return Err(Error::new(
            format!("completion {} has no choices", completion.id),
            ErrorKind::InvalidResponse,
        ));
    }
    let choice = completion.choices.swap_remove(0);
    trace!(
        "completion {} finished: {:?}",
        completion.id, choice.finish_reason
    );
    Ok(ModelMessage {
        role: choice.message.role,
        name: None,
        content: choice.message.content.unwrap_or_default(),
    })
}

/// Builds the error for a non-success HTTP status.
///
/// The service's own message is preferred when the body carries one.
pub fn status_error(status: StatusCode, body: &str) -> Error {
    let kind = match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            ErrorKind::Unauthorized
        }
        StatusCode::TOO_MANY_REQUESTS => ErrorKind::RateLimitExceeded,
        _ => ErrorKind::Other,
    };
    let message = match serde_json::from_str::<ErrorBody>(body) {
        Ok(body) => format!("{status}: {}", body.error.message),
        Err(_) => format!("{status}"),
    };
    Error::new(message, kind)
}
