use serde::{Deserialize, Serialize};

/// The role of a message author, as understood by chat completion services.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Instructions and background that frame the conversation.
    System,
    /// Something said to the model.
    User,
    /// Something the model said.
    Assistant,
}

/// A complete message.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ModelMessage {
    /// Who authored the message.
    pub role: Role,
    /// Optional speaker attribution.
    ///
    /// Most services only accept a restricted alphabet here (no spaces),
    /// callers are responsible for normalizing it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// The text content.
    pub content: String,
}

impl ModelMessage {
    /// Creates a system message.
    #[inline]
    pub fn system<S: Into<String>>(content: S) -> Self {
        Self {
            role: Role::System,
            name: None,
            content: content.into(),
        }
    }

    /// Creates a user message attributed to `name`, if any.
    #[inline]
    pub fn user<S: Into<String>>(name: Option<String>, content: S) -> Self {
        Self {
            role: Role::User,
            name,
            content: content.into(),
        }
    }

    /// Creates an assistant message.
    #[inline]
    pub fn assistant<S: Into<String>>(content: S) -> Self {
        Self {
            role: Role::Assistant,
            name: None,
            content: content.into(),
        }
    }
}

/// A request to be sent to the model provider.
///
/// The model identifier is not part of the request; it belongs to the
/// provider's configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ModelRequest {
    /// The input messages, oldest first.
    pub messages: Vec<ModelMessage>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_is_optional_on_the_wire() {
        let msg = ModelMessage::system("Be brief.");
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "role": "system", "content": "Be brief." })
        );

        let msg: ModelMessage = serde_json::from_str(
            r#"{ "role": "user", "name": "AnnLee", "content": "Hi" }"#,
        )
        .unwrap();
        assert_eq!(msg, ModelMessage::user(Some("AnnLee".to_owned()), "Hi"));
    }
}
