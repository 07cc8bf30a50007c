//! Report generation.

use reqwest::Method;
use serde::Serialize;
use serde_json::Value;

use crate::client::Client;
use crate::error::Error;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ReportRange<'a> {
    start_date: &'a str,
    end_date: &'a str,
}

impl Client {
    /// Generates a time-entry report for the given date range
    /// (`POST /reports/time-entries`).
    pub async fn time_entries_report(
        &self,
        start_date: &str,
        end_date: &str,
    ) -> Result<Value, Error> {
        let body = ReportRange { start_date, end_date };
        self.call_with(Method::POST, "/reports/time-entries", &body).await
    }
}
