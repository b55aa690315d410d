//! The two-party turn protocol.

use crate::error::Error;
use crate::persona::Persona;

/// The outcome of one successful turn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Turn {
    /// Name of the persona that replied.
    pub speaker: String,
    /// The reply, without trailing newlines.
    pub text: String,
}

/// Drives a conversation between two personas.
///
/// The first persona is treated as having just said the opening line, so
/// the second one replies first. Each successful turn swaps the roles of
/// asker and replier and makes the reply the next message to answer.
#[derive(Debug)]
pub struct Conversation {
    personas: [Persona; 2],
    // Index of the persona that spoke last.
    turn: usize,
    last_message: String,
    turns_taken: u64,
}

impl Conversation {
    /// Starts a conversation where `first` opens with `opening_line`.
    pub fn new(
        first: Persona,
        second: Persona,
        opening_line: impl Into<String>,
    ) -> Self {
        Self {
            personas: [first, second],
            turn: 0,
            last_message: opening_line.into(),
            turns_taken: 0,
        }
    }

    /// Returns the persona that said the last message.
    #[inline]
    pub fn asker(&self) -> &Persona {
        &self.personas[self.turn]
    }

    /// Returns the persona that answers next.
    #[inline]
    pub fn replier(&self) -> &Persona {
        &self.personas[1 - self.turn]
    }

    /// Returns both personas in creation order.
    #[inline]
    pub fn personas(&self) -> &[Persona; 2] {
        &self.personas
    }

    /// Returns the message the replier is going to answer.
    #[inline]
    pub fn last_message(&self) -> &str {
        &self.last_message
    }

    /// Returns the number of successful turns so far.
    #[inline]
    pub fn turns_taken(&self) -> u64 {
        self.turns_taken
    }

    /// Has the replier answer the last message.
    ///
    /// On error nothing changes: the same replier is still due to answer the
    /// same message. The conversation has no way to go on without the
    /// reply, so callers should stop.
    pub async fn take_turn(&mut self) -> Result<Turn, Error> {
        let asker_name = self.asker().name().to_owned();
        let replier = &mut self.personas[1 - self.turn];

        let text = replier.reply(&asker_name, &self.last_message).await?;
        let speaker = replier.name().to_owned();

        self.turn = 1 - self.turn;
        self.turns_taken += 1;
        self.last_message.clone_from(&text);
        debug!("turn {} taken by {speaker}", self.turns_taken);

        Ok(Turn { speaker, text })
    }

    /// Injects `text` into both personas.
    pub fn inject_context(&mut self, text: &str) {
        for persona in &mut self.personas {
            persona.inject_context(text);
        }
    }
}
