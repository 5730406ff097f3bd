use std::io::{self, Write};

use crate::{
    action::{Action, EXIT_TOKEN, Outcome, Selection},
    client::ApiClient,
    input::{LineSource, ask},
    transport::Transport,
};

/// The interactive menu loop.
///
/// Reads one token per iteration, runs at most one action, and stops on the
/// exit token or when input runs out.
#[derive(Debug)]
pub struct Dispatcher<T> {
    client: ApiClient<T>,
}

impl<T: Transport> Dispatcher<T> {
    pub fn new(client: ApiClient<T>) -> Self {
        Self { client }
    }

    pub async fn run<S, W>(&self, input: &mut S, out: &mut W) -> io::Result<()>
    where
        S: LineSource + ?Sized,
        W: Write + ?Sized,
    {
        tracing::info!("session started");
        write_banner(out)?;

        loop {
            write_menu(out)?;

            let Some(token) = ask(input, out, &format!("\nEnter choice (1-{EXIT_TOKEN}): "))? else {
                tracing::info!("input exhausted, leaving menu");
                break;
            };

            match Selection::from_token(&token) {
                Some(Selection::Exit) => {
                    writeln!(out, "\nGoodbye!")?;
                    break;
                }
                Some(Selection::Run(action)) => {
                    tracing::debug!(?action, "running action");
                    if action.execute(&self.client, input, out).await? == Outcome::InputClosed {
                        tracing::info!(?action, "input exhausted mid-action, leaving menu");
                        break;
                    }
                }
                None => writeln!(out, "Invalid choice. Please try again.")?,
            }
        }

        tracing::info!("session ended");
        out.flush()
    }
}

fn write_banner<W: Write + ?Sized>(out: &mut W) -> io::Result<()> {
    let rule = "=".repeat(40);
    writeln!(out, "{rule}")?;
    writeln!(out, "  Dynamic API Query Demo")?;
    writeln!(out, "{rule}")
}

fn write_menu<W: Write + ?Sized>(out: &mut W) -> io::Result<()> {
    writeln!(out, "\nChoose an option:")?;
    for action in Action::all() {
        writeln!(out, "{}. {}", action.token(), action.label())?;
    }
    writeln!(out, "{EXIT_TOKEN}. Exit")
}
