//! Typed resources returned by the remote APIs.
//!
//! Bodies are first read into `Wire*` structs where every field is optional,
//! then checked into the public types. A missing field becomes
//! [`ApiError::Malformed`] instead of a panic.

use chrono::NaiveDateTime;
use serde::{Deserialize, de::DeserializeOwned};

use crate::error::ApiError;

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub website: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Post {
    pub id: u64,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Todo {
    pub id: u64,
    pub title: String,
    pub completed: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Ticker {
    pub name: String,
    pub symbol: String,
    pub price_usd: f64,
    pub percent_change_24h: f64,
}

/// First geocoding match for a free-text place name.
#[derive(Debug, Clone, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
    /// Place name as the geocoder resolved it, when it reports one.
    pub name: Option<String>,
}

/// A user id that has passed the digits-only check.
///
/// Kept as text so ids wider than any integer type still go out as typed,
/// minus leading zeros.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserId(String);

impl UserId {
    /// `None` unless `raw` is a non-empty run of ASCII digits.
    pub fn parse(raw: &str) -> Option<Self> {
        if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let trimmed = raw.trim_start_matches('0');
        Some(UserId(if trimmed.is_empty() { "0" } else { trimmed }.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CurrentWeather {
    /// Degrees Celsius.
    pub temperature: f64,
    /// km/h.
    pub windspeed: f64,
    /// Degrees.
    pub winddirection: f64,
    /// Observation time in the location's local time.
    pub time: NaiveDateTime,
}

/// Parse a JSON body into `T`, mapping any serde failure to `Malformed`.
pub(crate) fn parse_body<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    Ok(serde_json::from_str(body)?)
}

fn required<T>(value: Option<T>, field: &str) -> Result<T, ApiError> {
    value.ok_or_else(|| ApiError::missing(field))
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireUser {
    name: Option<String>,
    email: Option<String>,
    phone: Option<String>,
    website: Option<String>,
}

impl TryFrom<WireUser> for User {
    type Error = ApiError;

    fn try_from(w: WireUser) -> Result<Self, Self::Error> {
        Ok(User {
            name: required(w.name, "name")?,
            email: required(w.email, "email")?,
            phone: required(w.phone, "phone")?,
            website: required(w.website, "website")?,
        })
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct WirePost {
    id: Option<u64>,
    title: Option<String>,
}

impl TryFrom<WirePost> for Post {
    type Error = ApiError;

    fn try_from(w: WirePost) -> Result<Self, Self::Error> {
        Ok(Post { id: required(w.id, "id")?, title: required(w.title, "title")? })
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireTodo {
    id: Option<u64>,
    title: Option<String>,
    completed: Option<bool>,
}

impl TryFrom<WireTodo> for Todo {
    type Error = ApiError;

    fn try_from(w: WireTodo) -> Result<Self, Self::Error> {
        Ok(Todo {
            id: required(w.id, "id")?,
            title: required(w.title, "title")?,
            completed: required(w.completed, "completed")?,
        })
    }
}

#[derive(Debug, Deserialize)]
struct WireUsdQuote {
    price: Option<f64>,
    percent_change_24h: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct WireQuotes {
    #[serde(rename = "USD")]
    usd: Option<WireUsdQuote>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireTicker {
    name: Option<String>,
    symbol: Option<String>,
    quotes: Option<WireQuotes>,
}

impl TryFrom<WireTicker> for Ticker {
    type Error = ApiError;

    fn try_from(w: WireTicker) -> Result<Self, Self::Error> {
        let usd = required(w.quotes.and_then(|q| q.usd), "quotes.USD")?;

        Ok(Ticker {
            name: required(w.name, "name")?,
            symbol: required(w.symbol, "symbol")?,
            price_usd: required(usd.price, "quotes.USD.price")?,
            percent_change_24h: required(usd.percent_change_24h, "quotes.USD.percent_change_24h")?,
        })
    }
}

#[derive(Debug, Deserialize)]
struct WireGeoResult {
    name: Option<String>,
    latitude: Option<f64>,
    longitude: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireGeocoding {
    results: Option<Vec<WireGeoResult>>,
}

impl WireGeocoding {
    /// `Ok(None)` when the service found no match for the name.
    pub(crate) fn first_match(self) -> Result<Option<Coordinates>, ApiError> {
        let Some(first) = self.results.and_then(|r| r.into_iter().next()) else {
            return Ok(None);
        };

        Ok(Some(Coordinates {
            latitude: required(first.latitude, "results[0].latitude")?,
            longitude: required(first.longitude, "results[0].longitude")?,
            name: first.name,
        }))
    }
}

#[derive(Debug, Deserialize)]
struct WireCurrent {
    temperature: Option<f64>,
    windspeed: Option<f64>,
    winddirection: Option<f64>,
    time: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireForecast {
    current_weather: Option<WireCurrent>,
}

impl TryFrom<WireForecast> for CurrentWeather {
    type Error = ApiError;

    fn try_from(w: WireForecast) -> Result<Self, Self::Error> {
        let current = required(w.current_weather, "current_weather")?;
        let raw_time = required(current.time, "current_weather.time")?;

        Ok(CurrentWeather {
            temperature: required(current.temperature, "current_weather.temperature")?,
            windspeed: required(current.windspeed, "current_weather.windspeed")?,
            winddirection: required(current.winddirection, "current_weather.winddirection")?,
            time: parse_local_time(&raw_time)?,
        })
    }
}

fn parse_local_time(raw: &str) -> Result<NaiveDateTime, ApiError> {
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S"))
        .map_err(|e| ApiError::Malformed(format!("bad timestamp '{raw}': {e}")))
}
