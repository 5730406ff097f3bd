//! Human-readable console output for every action.

use std::io::{self, Write};

use crate::{
    error::ApiError,
    model::{CurrentWeather, Post, Ticker, Todo, User},
    transport::HttpResponse,
};

/// Lists are cut to this many entries on screen; the total is printed separately.
pub const DISPLAY_LIMIT: usize = 10;

pub const COIN_SUGGESTIONS: &str = "btc-bitcoin, eth-ethereum, doge-dogecoin";

pub fn user<W: Write + ?Sized>(out: &mut W, id: &str, user: &User) -> io::Result<()> {
    writeln!(out, "\n--- User #{id} Info ---")?;
    writeln!(out, "Name: {}", user.name)?;
    writeln!(out, "Email: {}", user.email)?;
    writeln!(out, "Phone: {}", user.phone)?;
    writeln!(out, "Website: {}", user.website)
}

pub fn user_not_found<W: Write + ?Sized>(out: &mut W, id: &str) -> io::Result<()> {
    writeln!(out, "\nUser with ID {id} not found!")
}

pub fn posts<W: Write + ?Sized>(out: &mut W, user_id: &str, posts: &[Post]) -> io::Result<()> {
    if posts.is_empty() {
        return writeln!(out, "No results: user {user_id} has no posts.");
    }

    writeln!(out, "\n--- Posts by User #{user_id} ---")?;
    for (i, post) in posts.iter().take(DISPLAY_LIMIT).enumerate() {
        writeln!(out, "{}. {}", i + 1, post.title)?;
    }
    total(out, posts.len())
}

pub fn posts_not_found<W: Write + ?Sized>(out: &mut W, user_id: &str) -> io::Result<()> {
    writeln!(out, "\nPosts for user {user_id} not found!")
}

pub fn todos<W: Write + ?Sized>(out: &mut W, heading: &str, todos: &[Todo]) -> io::Result<()> {
    writeln!(out, "\n📋 {heading}\n")?;

    if todos.is_empty() {
        return writeln!(out, "No results.");
    }

    for todo in todos.iter().take(DISPLAY_LIMIT) {
        let mark = if todo.completed { '✔' } else { '✘' };
        writeln!(out, "- [{mark}] {}", todo.title)?;
    }
    total(out, todos.len())
}

pub fn todos_not_found<W: Write + ?Sized>(out: &mut W, heading: &str) -> io::Result<()> {
    writeln!(out, "\n{heading}: not found!")
}

pub fn ticker<W: Write + ?Sized>(out: &mut W, ticker: &Ticker) -> io::Result<()> {
    writeln!(out, "\n--- {} ({}) ---", ticker.name, ticker.symbol)?;
    writeln!(out, "Price: ${}", group_thousands(ticker.price_usd))?;
    writeln!(out, "24h Change: {:+.2}%", ticker.percent_change_24h)
}

pub fn coin_not_found<W: Write + ?Sized>(out: &mut W, coin_id: &str) -> io::Result<()> {
    writeln!(out, "\nCoin '{coin_id}' not found!")?;
    writeln!(out, "Try: {COIN_SUGGESTIONS}")
}

/// `place` is printed as given; callers pick the geocoder's name or a title-cased input.
pub fn weather<W: Write + ?Sized>(
    out: &mut W,
    place: &str,
    w: &CurrentWeather,
) -> io::Result<()> {
    writeln!(out, "\n🌍 Weather in {place}")?;
    writeln!(out, "🌡 Temperature: {}°C", w.temperature)?;
    writeln!(out, "💨 Wind Speed: {} km/h", w.windspeed)?;
    writeln!(out, "🧭 Wind Direction: {}°", w.winddirection)?;
    writeln!(out, "⏰ Time: {}", w.time.format("%Y-%m-%d %H:%M"))
}

pub fn city_not_found<W: Write + ?Sized>(out: &mut W) -> io::Result<()> {
    writeln!(out, "City not found")
}

pub fn invalid_user_id<W: Write + ?Sized>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Invalid input: user_id must be a number")
}

/// Anything that is not a plain "not found".
pub fn failure<W: Write + ?Sized>(out: &mut W, err: &ApiError) -> io::Result<()> {
    match err {
        ApiError::Transport(msg) => writeln!(out, "\nRequest failed: {msg}"),
        ApiError::Malformed(msg) => writeln!(out, "\nMalformed response: {msg}"),
        other => writeln!(out, "\nError: {other}"),
    }
}

/// Status and body of an unchecked fetch; JSON bodies are pretty-printed.
pub fn raw_response<W: Write + ?Sized>(
    out: &mut W,
    url: &str,
    response: &HttpResponse,
) -> io::Result<()> {
    writeln!(out, "URL: {url}")?;
    writeln!(out, "Status Code: {}", response.status)?;
    writeln!(out, "\nResponse Data:")?;

    match serde_json::from_str::<serde_json::Value>(&response.body) {
        Ok(value) => writeln!(out, "{value:#}"),
        Err(_) => writeln!(out, "{}", response.body),
    }
}

fn total<W: Write + ?Sized>(out: &mut W, count: usize) -> io::Result<()> {
    writeln!(out, "\nTotal results: {count}")
}

/// `1234567.891` -> `1,234,567.89`
pub fn group_thousands(value: f64) -> String {
    let fixed = format!("{:.2}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(fixed.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if value < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{sign}{grouped}.{frac_part}")
}

/// Uppercase the first letter of every word, lowercase the rest.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;

    for ch in text.chars() {
        if ch.is_alphabetic() {
            if at_word_start {
                out.extend(ch.to_uppercase());
            } else {
                out.extend(ch.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(ch);
            at_word_start = true;
        }
    }

    out
}
