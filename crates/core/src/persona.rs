use crate::error::Error;
use crate::model_client::ModelClient;
use crate::transcript::{Entry, Transcript};

const SINGLE_PERSON_INSTRUCTION: &str = "All of your replies should be from \
    your perspective and should be a single person's response as though you \
    are actually having a conversation with another individual.";

/// One simulated participant of a conversation.
///
/// A persona owns its transcript, which is the literal prompt history sent
/// to the model. The transcript always starts with three framing entries:
/// the shared context, the persona's identity and style, and an instruction
/// to answer as a single person.
#[derive(Debug)]
pub struct Persona {
    name: String,
    style: String,
    shared_context: String,
    transcript: Transcript,
    model_client: ModelClient,
}

impl Persona {
    /// Creates a persona. Empty strings are taken as they are.
    pub fn new(
        model_client: ModelClient,
        shared_context: impl Into<String>,
        name: impl Into<String>,
        style: impl Into<String>,
    ) -> Self {
        let shared_context = shared_context.into();
        let name = name.into();
        let style = style.into();

        let mut transcript = Transcript::default();
        transcript.push(Entry::framing(format!(
            "You are about to have a conversation. To prepare you, here is an \
             overview of what that conversation is expected to entail: \
             {shared_context}."
        )));
        transcript.push(Entry::framing(format!(
            "You have a personality. Your name is {name}, and you have the \
             following key personal, background, and stylistic traits which \
             your responses should be consistent with: {style}"
        )));
        transcript.push(Entry::framing(SINGLE_PERSON_INSTRUCTION));

        Self {
            name,
            style,
            shared_context,
            transcript,
            model_client,
        }
    }

    /// Returns the persona's display name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the personal, background and stylistic description.
    #[inline]
    pub fn style(&self) -> &str {
        &self.style
    }

    /// Returns the conversation background given at creation.
    #[inline]
    pub fn shared_context(&self) -> &str {
        &self.shared_context
    }

    /// Returns the prompt history.
    #[inline]
    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Asks the persona to answer `message`, said by `from`.
    ///
    /// The incoming message is sent along with the transcript but is not
    /// recorded. Only a successful reply is appended, exactly as the model
    /// returned it; the returned text has its trailing line breaks removed.
    /// On error the transcript is left untouched.
    pub async fn reply(
        &mut self,
        from: &str,
        message: &str,
    ) -> Result<String, Error> {
        let req = self
            .transcript
            .request_with(Entry::incoming(from, message));
        debug!(
            "{} replies to {from} with {} messages of history",
            self.name,
            self.transcript.len()
        );

        let reply = self.model_client.send_request(req).await?;
        let text = reply.content.trim_end_matches(['\r', '\n']).to_owned();
        self.transcript.push(Entry::reply(reply));
        Ok(text)
    }

    /// Asks the persona to keep `text` in mind from now on.
    pub fn inject_context(&mut self, text: &str) {
        self.transcript.push(Entry::framing(format!(
            "From this point onwards in the conversation, please keep this \
             information in mind: {text}"
        )));
    }
}
