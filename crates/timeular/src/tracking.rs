//! Tracking endpoints.
//!
//! Tracking is the currently running, unfinished timed interval. At most one
//! exists per account; the API reports it under `/tracking`.

use reqwest::Method;
use serde::Serialize;
use serde_json::Value;

use crate::client::Client;
use crate::error::Error;
use crate::time_entries::TimeSpan;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StartTracking<'a> {
    activity_id: &'a str,
}

impl Client {
    /// Returns the currently running tracking, if any (`GET /tracking`).
    pub async fn current_tracking(&self) -> Result<Value, Error> {
        self.call(Method::GET, "/tracking").await
    }

    /// Starts tracking time against an activity (`POST /tracking`).
    pub async fn start_tracking(&self, activity_id: &str) -> Result<Value, Error> {
        self.call_with(Method::POST, "/tracking", &StartTracking { activity_id }).await
    }

    /// Rewrites the interval of a running tracking
    /// (`PATCH /tracking/{id}`).
    pub async fn edit_tracking(
        &self,
        id: &str,
        started_at: &str,
        stopped_at: &str,
    ) -> Result<Value, Error> {
        let body = TimeSpan { started_at, stopped_at };
        self.call_with(Method::PATCH, &format!("/tracking/{id}"), &body).await
    }

    /// Stops or cancels the currently running tracking
    /// (`DELETE /tracking`).
    pub async fn stop_tracking(&self) -> Result<Value, Error> {
        self.call(Method::DELETE, "/tracking").await
    }

    /// Removes a tracking by id (`DELETE /tracking/{id}`).
    pub async fn remove_tracking(&self, id: &str) -> Result<Value, Error> {
        self.call(Method::DELETE, &format!("/tracking/{id}")).await
    }
}
