use std::io::{self, Write};

use banter_core::{Conversation, ModelClient, Persona, Turn};
use owo_colors::OwoColorize;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::progress::Spinner;

const SEPARATOR: &str = "--------------------------------------------------";

/// The reason a session stopped early.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// Reading from the operator or writing to the terminal failed.
    #[error("terminal i/o failed")]
    Io(#[from] io::Error),
    /// A persona could not get its reply.
    #[error("conversation stopped")]
    Reply(#[from] banter_core::Error),
}

/// An interactive session with the operator.
///
/// The operator sets up the shared context, both personas and the opening
/// line, then the personas take turns until the operator input ends. In
/// between turns the operator may add context, which both personas receive.
pub struct Session<R, W> {
    model_client: ModelClient,
    reader: R,
    writer: W,
    colored: bool,
    progress: bool,
}

impl<R, W> Session<R, W>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    /// Creates a session that reads operator lines from `reader` and
    /// writes the conversation to `writer`.
    pub fn new(model_client: ModelClient, reader: R, writer: W) -> Self {
        Self {
            model_client,
            reader,
            writer,
            colored: false,
            progress: false,
        }
    }

    /// Highlights persona names.
    #[inline]
    pub fn with_colors(mut self, colored: bool) -> Self {
        self.colored = colored;
        self
    }

    /// Shows a spinner while a persona is thinking.
    #[inline]
    pub fn with_progress(mut self, progress: bool) -> Self {
        self.progress = progress;
        self
    }

    /// Runs the session until the operator input ends.
    ///
    /// A failed remote call ends the session with an error; there is no way
    /// to continue the conversation without the reply.
    pub async fn run(&mut self) -> Result<(), SessionError> {
        let Some(conversation) = self.setup().await? else {
            info!("operator input ended during setup");
            return Ok(());
        };
        self.converse(conversation).await
    }

    async fn setup(&mut self) -> Result<Option<Conversation>, SessionError> {
        writeln!(
            self.writer,
            "Enter the background/context about this ensuing conversation:"
        )?;
        let Some(shared_context) = self.read_line().await? else {
            return Ok(None);
        };

        let Some(first) = self.ask_persona(1, &shared_context).await? else {
            return Ok(None);
        };
        let Some(second) = self.ask_persona(2, &shared_context).await? else {
            return Ok(None);
        };

        writeln!(self.writer, "{SEPARATOR}")?;
        writeln!(self.writer, "Let's start the conversation!")?;
        let prompt = format!("{}: ", self.paint(first.name()));
        let Some(opening_line) = self.prompt(&prompt).await? else {
            return Ok(None);
        };

        Ok(Some(Conversation::new(first, second, opening_line)))
    }

    async fn ask_persona(
        &mut self,
        number: usize,
        shared_context: &str,
    ) -> Result<Option<Persona>, SessionError> {
        let Some(name) = self
            .prompt(&format!("Tell me Persona #{number}'s name: "))
            .await?
        else {
            return Ok(None);
        };
        writeln!(
            self.writer,
            "Tell me key personal, background, or stylistic information about {name}:"
        )?;
        let Some(style) = self.read_line().await? else {
            return Ok(None);
        };
        Ok(Some(Persona::new(
            self.model_client.clone(),
            shared_context,
            name,
            style,
        )))
    }

    async fn converse(
        &mut self,
        mut conversation: Conversation,
    ) -> Result<(), SessionError> {
        loop {
            writeln!(self.writer, "{SEPARATOR}")?;
            let turn = self.take_turn(&mut conversation).await?;
            let speaker = self.paint(&turn.speaker);
            writeln!(self.writer, "{speaker}: {}", turn.text)?;

            writeln!(self.writer)?;
            writeln!(self.writer, "[<ENTER> to continue; ^C to quit]")?;
            let Some(context) = self
                .prompt("[Press <ENTER> to continue, or provide additional context: ")
                .await?
            else {
                info!(
                    "operator input ended after {} turns",
                    conversation.turns_taken()
                );
                return Ok(());
            };
            if !context.is_empty() {
                debug!("injecting context into both personas");
                conversation.inject_context(&context);
            }
        }
    }

    async fn take_turn(
        &self,
        conversation: &mut Conversation,
    ) -> Result<Turn, banter_core::Error> {
        let _spinner = self
            .progress
            .then(|| Spinner::start(conversation.replier().name()));
        conversation.take_turn().await.inspect_err(|err| {
            debug!("{} could not reply: {err}", conversation.replier().name());
        })
    }

    async fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.writer, "{text}")?;
        self.read_line().await
    }

    /// Reads one line without its line ending, or `None` at end of input.
    async fn read_line(&mut self) -> io::Result<Option<String>> {
        self.writer.flush()?;
        let mut line = String::new();
        if self.reader.read_line(&mut line).await? == 0 {
            return Ok(None);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }

    fn paint(&self, name: &str) -> String {
        if self.colored {
            name.bright_cyan().bold().to_string()
        } else {
            name.to_owned()
        }
    }
}
