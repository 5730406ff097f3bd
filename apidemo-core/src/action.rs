//! The fixed set of menu actions and what each one does.

use std::io::{self, Write};

use crate::{
    client::ApiClient,
    error::ApiError,
    input::{LineSource, ask},
    model::{Todo, UserId},
    render,
    transport::Transport,
};

pub const EXIT_TOKEN: &str = "7";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    UserInfo,
    PostsByUser,
    CryptoPrice,
    Weather,
    TodosByStatus,
    TodosByUser,
}

/// What a typed token resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Run(Action),
    Exit,
}

/// How an action ended, as far as the menu loop cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Done,
    /// Input ran out while the action was asking for a parameter.
    InputClosed,
}

impl Action {
    pub const fn all() -> &'static [Action] {
        &[
            Action::UserInfo,
            Action::PostsByUser,
            Action::CryptoPrice,
            Action::Weather,
            Action::TodosByStatus,
            Action::TodosByUser,
        ]
    }

    pub fn token(&self) -> &'static str {
        match self {
            Action::UserInfo => "1",
            Action::PostsByUser => "2",
            Action::CryptoPrice => "3",
            Action::Weather => "4",
            Action::TodosByStatus => "5",
            Action::TodosByUser => "6",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Action::UserInfo => "Look up user info",
            Action::PostsByUser => "Search posts by user",
            Action::CryptoPrice => "Check crypto price",
            Action::Weather => "Find current weather",
            Action::TodosByStatus => "Search todos by status",
            Action::TodosByUser => "Search todos by user",
        }
    }

    /// Run the action to completion, prompting on `input` and printing to `out`.
    ///
    /// API failures are rendered, never returned; only output errors escape.
    pub async fn execute<T, S, W>(
        self,
        client: &ApiClient<T>,
        input: &mut S,
        out: &mut W,
    ) -> io::Result<Outcome>
    where
        T: Transport,
        S: LineSource + ?Sized,
        W: Write + ?Sized,
    {
        match self {
            Action::UserInfo => user_info(client, input, out).await,
            Action::PostsByUser => posts_by_user(client, input, out).await,
            Action::CryptoPrice => crypto_price(client, input, out).await,
            Action::Weather => weather(client, input, out).await,
            Action::TodosByStatus => {
                todos_by_status(client, out).await?;
                Ok(Outcome::Done)
            }
            Action::TodosByUser => todos_by_user(client, input, out).await,
        }
    }
}

impl Selection {
    /// Exact match against the menu tokens; anything else is `None`.
    pub fn from_token(token: &str) -> Option<Self> {
        if token == EXIT_TOKEN {
            return Some(Selection::Exit);
        }
        Action::all().iter().find(|a| a.token() == token).copied().map(Selection::Run)
    }
}

async fn user_info<T, S, W>(client: &ApiClient<T>, input: &mut S, out: &mut W) -> io::Result<Outcome>
where
    T: Transport,
    S: LineSource + ?Sized,
    W: Write + ?Sized,
{
    writeln!(out, "=== User Information Lookup ===\n")?;
    let Some(id) = ask(input, out, "Enter user ID (1-10): ")? else {
        return Ok(Outcome::InputClosed);
    };

    match client.user(&id).await {
        Ok(user) => render::user(out, &id, &user)?,
        Err(err) if err.is_not_found() => render::user_not_found(out, &id)?,
        Err(err) => render::failure(out, &err)?,
    }
    Ok(Outcome::Done)
}

async fn posts_by_user<T, S, W>(
    client: &ApiClient<T>,
    input: &mut S,
    out: &mut W,
) -> io::Result<Outcome>
where
    T: Transport,
    S: LineSource + ?Sized,
    W: Write + ?Sized,
{
    writeln!(out, "\n=== Post Search ===\n")?;
    let Some(user_id) = ask(input, out, "Enter user ID to see their posts (1-10): ")? else {
        return Ok(Outcome::InputClosed);
    };

    match client.posts_by_user(&user_id).await {
        Ok(posts) => render::posts(out, &user_id, &posts)?,
        Err(err) if err.is_not_found() => render::posts_not_found(out, &user_id)?,
        Err(err) => render::failure(out, &err)?,
    }
    Ok(Outcome::Done)
}

async fn crypto_price<T, S, W>(
    client: &ApiClient<T>,
    input: &mut S,
    out: &mut W,
) -> io::Result<Outcome>
where
    T: Transport,
    S: LineSource + ?Sized,
    W: Write + ?Sized,
{
    writeln!(out, "\n=== Cryptocurrency Price Checker ===\n")?;
    writeln!(out, "Available coins: {}", render::COIN_SUGGESTIONS)?;
    let Some(raw) = ask(input, out, "Enter coin ID (e.g., btc-bitcoin): ")? else {
        return Ok(Outcome::InputClosed);
    };
    let coin_id = raw.trim().to_lowercase();

    match client.ticker(&coin_id).await {
        Ok(ticker) => render::ticker(out, &ticker)?,
        Err(err) if err.is_not_found() => render::coin_not_found(out, &coin_id)?,
        Err(err) => render::failure(out, &err)?,
    }
    Ok(Outcome::Done)
}

async fn weather<T, S, W>(client: &ApiClient<T>, input: &mut S, out: &mut W) -> io::Result<Outcome>
where
    T: Transport,
    S: LineSource + ?Sized,
    W: Write + ?Sized,
{
    let Some(city) = ask(input, out, "Enter city name: ")? else {
        return Ok(Outcome::InputClosed);
    };

    // The forecast call depends on the geocoding result; no match means no second call.
    let coords = match client.geocode(&city).await {
        Ok(Some(coords)) => coords,
        Ok(None) => {
            render::city_not_found(out)?;
            return Ok(Outcome::Done);
        }
        Err(err) if err.is_not_found() => {
            render::city_not_found(out)?;
            return Ok(Outcome::Done);
        }
        Err(err) => {
            render::failure(out, &err)?;
            return Ok(Outcome::Done);
        }
    };

    let place = coords.name.clone().unwrap_or_else(|| render::title_case(&city));
    match client.current_weather(&coords).await {
        Ok(current) => render::weather(out, &place, &current)?,
        Err(err) => render::failure(out, &err)?,
    }
    Ok(Outcome::Done)
}

async fn todos_by_status<T, W>(client: &ApiClient<T>, out: &mut W) -> io::Result<()>
where
    T: Transport,
    W: Write + ?Sized,
{
    for completed in [true, false] {
        let heading = format!("Todos with completed = {completed}");
        render_todos(out, &heading, client.todos_by_status(completed).await)?;
    }
    Ok(())
}

async fn todos_by_user<T, S, W>(
    client: &ApiClient<T>,
    input: &mut S,
    out: &mut W,
) -> io::Result<Outcome>
where
    T: Transport,
    S: LineSource + ?Sized,
    W: Write + ?Sized,
{
    let Some(raw) = ask(input, out, "Enter user ID: ")? else {
        return Ok(Outcome::InputClosed);
    };

    let Some(user_id) = UserId::parse(&raw) else {
        tracing::debug!(input = %raw, "rejected non-numeric user id");
        render::invalid_user_id(out)?;
        return Ok(Outcome::Done);
    };

    let heading = format!("Todos for user_id = {user_id}");
    render_todos(out, &heading, client.todos_by_user(&user_id).await)?;
    Ok(Outcome::Done)
}

fn render_todos<W: Write + ?Sized>(
    out: &mut W,
    heading: &str,
    result: Result<Vec<Todo>, ApiError>,
) -> io::Result<()> {
    match result {
        Ok(todos) => render::todos(out, heading, &todos),
        Err(err) if err.is_not_found() => render::todos_not_found(out, heading),
        Err(err) => render::failure(out, &err),
    }
}
