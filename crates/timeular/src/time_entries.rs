//! Time-entry endpoints.
//!
//! A time entry is a completed interval of tracked time associated with an
//! activity. Timestamps cross the wire exactly as the caller supplies them;
//! the format is the vendor's contract, not this library's.

use reqwest::Method;
use serde::Serialize;
use serde_json::Value;

use crate::client::Client;
use crate::error::Error;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct NewTimeEntry<'a> {
    activity_id: &'a str,
    started_at: &'a str,
    stopped_at: &'a str,
}

/// Shared PATCH body for rewriting an interval, also used by the tracking
/// endpoints.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct TimeSpan<'a> {
    pub(crate) started_at: &'a str,
    pub(crate) stopped_at: &'a str,
}

impl Client {
    /// Lists all time entries (`GET /time-entries`).
    pub async fn time_entries(&self) -> Result<Value, Error> {
        self.call(Method::GET, "/time-entries").await
    }

    /// Fetches a single time entry (`GET /time-entries/{id}`).
    pub async fn time_entry(&self, id: &str) -> Result<Value, Error> {
        self.call(Method::GET, &format!("/time-entries/{id}")).await
    }

    /// Creates a completed time entry for an activity
    /// (`POST /time-entries`).
    pub async fn create_time_entry(
        &self,
        activity_id: &str,
        started_at: &str,
        stopped_at: &str,
    ) -> Result<Value, Error> {
        let body = NewTimeEntry { activity_id, started_at, stopped_at };
        self.call_with(Method::POST, "/time-entries", &body).await
    }

    /// Rewrites the interval of a time entry (`PATCH /time-entries/{id}`).
    pub async fn edit_time_entry(
        &self,
        id: &str,
        started_at: &str,
        stopped_at: &str,
    ) -> Result<Value, Error> {
        let body = TimeSpan { started_at, stopped_at };
        self.call_with(Method::PATCH, &format!("/time-entries/{id}"), &body).await
    }

    /// Deletes a time entry (`DELETE /time-entries/{id}`).
    pub async fn delete_time_entry(&self, id: &str) -> Result<Value, Error> {
        self.call(Method::DELETE, &format!("/time-entries/{id}")).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_time_entry_serializes_to_wire_field_names() {
        let body = serde_json::to_value(NewTimeEntry {
            activity_id: "123",
            started_at: "2026-01-01T09:00:00.000",
            stopped_at: "2026-01-01T10:00:00.000",
        })
        .unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "activityId": "123",
                "startedAt": "2026-01-01T09:00:00.000",
                "stoppedAt": "2026-01-01T10:00:00.000",
            })
        );
    }

    #[test]
    fn time_span_serializes_to_wire_field_names() {
        let body = serde_json::to_value(TimeSpan {
            started_at: "a",
            stopped_at: "b",
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({"startedAt": "a", "stoppedAt": "b"}));
    }
}
