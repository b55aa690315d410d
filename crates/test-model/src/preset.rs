use banter_model::{ErrorKind, ModelMessage};
use serde::{Deserialize, Serialize};

/// One scripted answer of a [`TestModelProvider`](crate::TestModelProvider).
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum PresetStep {
    /// The request succeeds with this message.
    #[serde(rename = "reply")]
    Reply(ModelMessage),
    /// The request fails with an error of this kind.
    #[serde(rename = "failure")]
    Failure(ErrorKind),
}

impl PresetStep {
    /// Creates a step that replies with an assistant message.
    #[inline]
    pub fn assistant<S: Into<String>>(content: S) -> Self {
        Self::Reply(ModelMessage::assistant(content))
    }
}

#[cfg(test)]
mod tests {
    use banter_model::Role;

    use super::*;

    #[test]
    fn test_deserialize_script() {
        let script: Vec<PresetStep> = serde_json::from_str(
            r#"[
                { "type": "reply", "data": { "role": "assistant", "content": "Vividly.\n" } },
                { "type": "failure", "data": "rate_limit_exceeded" }
            ]"#,
        )
        .unwrap();

        assert_eq!(script.len(), 2);
        let PresetStep::Reply(msg) = &script[0] else {
            panic!("unexpected step: {:?}", script[0]);
        };
        assert_eq!(msg.role, Role::Assistant);
        assert_eq!(msg.content, "Vividly.\n");
        assert_eq!(script[1], PresetStep::Failure(ErrorKind::RateLimitExceeded));
    }
}
