//! Client for the Timeular time-tracking API.
//!
//! Wraps the v4 REST API: sign in once with an API key/secret pair, then
//! call one method per endpoint (activities, time entries, tracking, tags,
//! mentions, reports). Responses are returned as decoded
//! [`serde_json::Value`]s without any domain modeling on top of the wire
//! format, so the JSON you get is exactly the JSON the API sent.
//!
//! ```no_run
//! use timeular::Client;
//!
//! # async fn example() -> Result<(), timeular::Error> {
//! let client = Client::sign_in("my-api-key", "my-api-secret").await?;
//! let activities = client.activities().await?;
//! println!("{activities}");
//! # Ok(())
//! # }
//! ```

mod activities;
mod client;
mod error;
mod labels;
mod reports;
mod time_entries;
mod tracking;

pub use client::{Client, ClientBuilder, DEFAULT_BASE_URL};
pub use error::Error;
