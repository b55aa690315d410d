//! Transcript-related types.

use banter_model::{ModelMessage, ModelRequest};

/// What a transcript entry is for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EntryKind {
    /// Context or instructions rather than turn content.
    Framing,
    /// A message said to the persona by the other side.
    Incoming,
    /// A message the persona said.
    Reply,
}

/// An entry in a transcript.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    pub(crate) kind: EntryKind,
    pub(crate) message: ModelMessage,
}

impl Entry {
    pub(crate) fn framing<S: Into<String>>(text: S) -> Self {
        Self {
            kind: EntryKind::Framing,
            message: ModelMessage::system(text),
        }
    }

    pub(crate) fn incoming<S: Into<String>>(from: &str, text: S) -> Self {
        Self {
            kind: EntryKind::Incoming,
            message: ModelMessage::user(speaker_tag(from), text),
        }
    }

    /// Wraps a message returned by the model, keeping its role and content.
    pub(crate) fn reply(message: ModelMessage) -> Self {
        Self {
            kind: EntryKind::Reply,
            message,
        }
    }

    /// Returns the kind of this entry.
    #[inline]
    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    /// Returns the message as it is sent to the model.
    #[inline]
    pub fn message(&self) -> &ModelMessage {
        &self.message
    }

    /// Returns the text content of this entry.
    #[inline]
    pub fn content(&self) -> &str {
        &self.message.content
    }
}

/// The ordered prompt history of a persona.
///
/// Entries are only ever appended.
#[derive(Clone, Default, Debug)]
pub struct Transcript {
    pub(crate) entries: Vec<Entry>,
}

impl Transcript {
    /// Returns the number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if there are no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the entries, oldest first.
    #[inline]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    #[inline]
    pub(crate) fn push(&mut self, entry: Entry) {
        self.entries.push(entry);
    }

    /// Builds a request out of the whole history followed by `incoming`,
    /// without recording `incoming`.
    pub(crate) fn request_with(&self, incoming: Entry) -> ModelRequest {
        let messages = self
            .entries
            .iter()
            .map(|entry| entry.message.clone())
            .chain([incoming.message])
            .collect();
        ModelRequest { messages }
    }
}

const MAX_SPEAKER_TAG_LEN: usize = 64;

/// Turns a display name into a speaker tag accepted by completion
/// services, whose name field only allows `[a-zA-Z0-9_-]{1,64}`.
///
/// Whitespace is dropped, any other character outside that alphabet becomes
/// `_`, and the tag is cut at 64 characters. Returns `None` if nothing is
/// left.
pub fn speaker_tag(name: &str) -> Option<String> {
    let tag: String = name
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
                c
            } else {
                '_'
            }
        })
        .take(MAX_SPEAKER_TAG_LEN)
        .collect();
    if tag.is_empty() { None } else { Some(tag) }
}

#[cfg(test)]
mod tests {
    use banter_model::Role;

    use super::*;

    #[test]
    fn test_speaker_tag() {
        assert_eq!(speaker_tag("Ann Lee").as_deref(), Some("AnnLee"));
        assert_eq!(speaker_tag(" Mary\tJo Ann ").as_deref(), Some("MaryJoAnn"));
        assert_eq!(speaker_tag("Dana").as_deref(), Some("Dana"));
        assert_eq!(speaker_tag("O'Brien").as_deref(), Some("O_Brien"));
        assert_eq!(speaker_tag("José").as_deref(), Some("Jos_"));
        assert_eq!(speaker_tag("Jean-Luc_2").as_deref(), Some("Jean-Luc_2"));
        assert_eq!(speaker_tag(&"x".repeat(80)).map(|t| t.len()), Some(64));
        assert_eq!(speaker_tag("  "), None);
        assert_eq!(speaker_tag(""), None);
    }

    #[test]
    fn test_request_with_does_not_record() {
        let mut transcript = Transcript::default();
        transcript.push(Entry::framing("Be nice."));

        let req = transcript.request_with(Entry::incoming("Ann Lee", "Hey"));
        assert_eq!(req.messages.len(), 2);
        assert_eq!(req.messages[0].role, Role::System);
        assert_eq!(req.messages[1].role, Role::User);
        assert_eq!(req.messages[1].name.as_deref(), Some("AnnLee"));
        assert_eq!(req.messages[1].content, "Hey");
        assert_eq!(transcript.len(), 1);
    }
}
