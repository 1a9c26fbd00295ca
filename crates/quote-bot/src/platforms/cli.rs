//! Console bot
//!
//! A REPL transport for running the bot locally without a chat service.
//! Keyboards are printed as numbered buttons; typing `#n` presses button `n`
//! of the most recent keyboard.

use crate::bot::QuoteBot;
use crate::interface::{BotResponse, Keyboard, ResponseType};
use crate::router::InboundEvent;
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

/// One line of console input, interpreted
#[derive(Debug, Clone, PartialEq, Eq)]
enum ConsoleInput {
    Exit,
    Empty,
    Event(InboundEvent),
    NoSuchButton(String),
}

/// Console bot
pub struct ConsoleBot {
    quote_bot: Arc<QuoteBot>,
    prompt: String,
}

impl ConsoleBot {
    pub fn new(quote_bot: Arc<QuoteBot>) -> Self {
        Self {
            quote_bot,
            prompt: "> ".to_string(),
        }
    }

    /// Run on stdin/stdout until EOF or `/exit`
    pub async fn run(&self) -> std::io::Result<()> {
        let stdin = tokio::io::BufReader::new(tokio::io::stdin());
        self.run_with(stdin, tokio::io::stdout()).await
    }

    /// Run against any line source and sink
    pub async fn run_with<R, W>(&self, reader: R, mut writer: W) -> std::io::Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut keyboard = self.respond(InboundEvent::Start, &mut writer, None).await?;
        let mut lines = reader.lines();

        loop {
            writer.write_all(self.prompt.as_bytes()).await?;
            writer.flush().await?;

            let Some(line) = lines.next_line().await? else {
                break;
            };

            match interpret(&line, keyboard.as_ref()) {
                ConsoleInput::Exit => break,
                ConsoleInput::Empty => {}
                ConsoleInput::NoSuchButton(raw) => {
                    writer
                        .write_all(format!("No button {raw} on the current menu\n").as_bytes())
                        .await?;
                }
                ConsoleInput::Event(event) => {
                    keyboard = self.respond(event, &mut writer, keyboard).await?;
                }
            }
        }

        writer.write_all(b"Goodbye!\n").await?;
        writer.flush().await
    }

    /// Print the responses to `event`; returns the keyboard now in effect
    async fn respond<W>(
        &self,
        event: InboundEvent,
        writer: &mut W,
        current: Option<Keyboard>,
    ) -> std::io::Result<Option<Keyboard>>
    where
        W: AsyncWrite + Unpin,
    {
        let mut keyboard = current;
        for response in self.quote_bot.handle(event).await {
            writer.write_all(render(&response).as_bytes()).await?;
            if response.keyboard.is_some() {
                keyboard = response.keyboard;
            }
        }
        Ok(keyboard)
    }
}

fn interpret(line: &str, keyboard: Option<&Keyboard>) -> ConsoleInput {
    let line = line.trim();
    if line.is_empty() {
        return ConsoleInput::Empty;
    }
    if matches!(line, "/exit" | "/quit") {
        return ConsoleInput::Exit;
    }

    let Some(number) = line.strip_prefix('#') else {
        return ConsoleInput::Event(InboundEvent::from_text(line));
    };

    number
        .trim()
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|index| keyboard?.buttons().nth(index))
        .map_or_else(
            || ConsoleInput::NoSuchButton(line.to_string()),
            |button| ConsoleInput::Event(InboundEvent::Callback(button.payload.clone())),
        )
}

fn render(response: &BotResponse) -> String {
    let mut output = match response.response_type {
        ResponseType::Error => format!("! {}\n", response.content),
        ResponseType::Text | ResponseType::Quote => format!("{}\n", response.content),
    };

    if let Some(keyboard) = &response.keyboard {
        let mut number = 0;
        for row in &keyboard.rows {
            let cells: Vec<String> = row
                .iter()
                .map(|button| {
                    number += 1;
                    format!("[{number}] {}", button.label)
                })
                .collect();
            output.push_str("  ");
            output.push_str(&cells.join("  "));
            output.push('\n');
        }
    }
    output
}
