//! Activity endpoints.
//!
//! An activity is a named, colored category that time is tracked against.

use reqwest::Method;
use serde::Serialize;
use serde_json::Value;

use crate::client::Client;
use crate::error::Error;

#[derive(Serialize)]
struct ActivityBody<'a> {
    name: &'a str,
    color: &'a str,
}

impl Client {
    /// Lists all activities (`GET /activities`).
    pub async fn activities(&self) -> Result<Value, Error> {
        self.call(Method::GET, "/activities").await
    }

    /// Creates an activity with the given name and color
    /// (`POST /activities`).
    pub async fn create_activity(&self, name: &str, color: &str) -> Result<Value, Error> {
        self.call_with(Method::POST, "/activities", &ActivityBody { name, color }).await
    }

    /// Renames or recolors an activity (`PATCH /activities/{id}`).
    pub async fn edit_activity(&self, id: &str, name: &str, color: &str) -> Result<Value, Error> {
        self.call_with(Method::PATCH, &format!("/activities/{id}"), &ActivityBody { name, color })
            .await
    }

    /// Archives an activity (`DELETE /activities/{id}`).
    pub async fn archive_activity(&self, id: &str) -> Result<Value, Error> {
        self.call(Method::DELETE, &format!("/activities/{id}")).await
    }
}
