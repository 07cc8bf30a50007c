//! Tag and mention endpoints.
//!
//! Tags and mentions are both labeled annotations attachable to time
//! entries; they differ only in path, so they share one module and one write
//! body.

use reqwest::Method;
use serde::Serialize;
use serde_json::Value;

use crate::client::Client;
use crate::error::Error;

#[derive(Serialize)]
struct LabelBody<'a> {
    label: &'a str,
}

impl Client {
    /// Lists all tags (`GET /tags`).
    pub async fn tags(&self) -> Result<Value, Error> {
        self.call(Method::GET, "/tags").await
    }

    /// Creates a tag (`POST /tags`).
    pub async fn create_tag(&self, label: &str) -> Result<Value, Error> {
        self.call_with(Method::POST, "/tags", &LabelBody { label }).await
    }

    /// Relabels a tag (`PATCH /tags/{id}`).
    pub async fn edit_tag(&self, id: &str, label: &str) -> Result<Value, Error> {
        self.call_with(Method::PATCH, &format!("/tags/{id}"), &LabelBody { label }).await
    }

    /// Deletes a tag (`DELETE /tags/{id}`).
    pub async fn delete_tag(&self, id: &str) -> Result<Value, Error> {
        self.call(Method::DELETE, &format!("/tags/{id}")).await
    }

    /// Lists all mentions (`GET /mentions`).
    pub async fn mentions(&self) -> Result<Value, Error> {
        self.call(Method::GET, "/mentions").await
    }

    /// Creates a mention (`POST /mentions`).
    pub async fn create_mention(&self, label: &str) -> Result<Value, Error> {
        self.call_with(Method::POST, "/mentions", &LabelBody { label }).await
    }

    /// Relabels a mention (`PATCH /mentions/{id}`).
    pub async fn edit_mention(&self, id: &str, label: &str) -> Result<Value, Error> {
        self.call_with(Method::PATCH, &format!("/mentions/{id}"), &LabelBody { label }).await
    }

    /// Deletes a mention (`DELETE /mentions/{id}`).
    pub async fn delete_mention(&self, id: &str) -> Result<Value, Error> {
        self.call(Method::DELETE, &format!("/mentions/{id}")).await
    }
}
