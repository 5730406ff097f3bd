//! Core library for the `apidemo` console.
//!
//! This crate defines:
//! - Configuration of the remote endpoints
//! - A transport seam over single HTTP GETs, with a `reqwest` implementation
//! - A typed client for the fake-data, ticker, geocoding and forecast APIs
//! - The closed set of menu actions and the dispatcher loop that runs them
//!
//! It is used by `apidemo-cli`, but the dispatcher runs over any line source
//! and output sink, which is how the tests drive it.

pub mod action;
pub mod client;
pub mod config;
pub mod dispatcher;
pub mod error;
pub mod input;
pub mod model;
pub mod render;
pub mod transport;

pub use action::{Action, Outcome, Selection};
pub use client::ApiClient;
pub use config::{Config, Endpoints};
pub use dispatcher::Dispatcher;
pub use error::ApiError;
pub use input::{LineSource, ReaderSource};
pub use model::{Coordinates, CurrentWeather, Post, Ticker, Todo, User, UserId};
pub use transport::{HttpRequest, HttpResponse, ReqwestTransport, Transport};
