/*
[INPUT]:  TaskdeskClient reference and a fixed endpoint path
[OUTPUT]: JSON POST helper bound to that path
[POS]:    HTTP layer - single-endpoint request helper
[UPDATE]: When endpoint helpers need more verbs or headers
*/

use crate::http::{Result, TaskdeskClient};
use reqwest::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

/// Request helper bound to one endpoint path
#[derive(Debug, Clone)]
pub struct Endpoint<'a> {
    client: &'a TaskdeskClient,
    path: String,
}

impl<'a> Endpoint<'a> {
    pub(crate) fn new(client: &'a TaskdeskClient, path: impl Into<String>) -> Self {
        Self {
            client,
            path: path.into(),
        }
    }

    /// POST `body` as JSON and decode the response body
    pub async fn post<B, R>(&self, body: &B) -> Result<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        debug!(endpoint = %self.path, "POST");
        let builder = self.client.request(Method::POST, &self.path)?.json(body);
        self.client.send_json(builder).await
    }

    /// POST `body` as JSON, only checking the response status
    pub async fn post_ignore_body<B>(&self, body: &B) -> Result<()>
    where
        B: Serialize + ?Sized,
    {
        debug!(endpoint = %self.path, "POST");
        let builder = self.client.request(Method::POST, &self.path)?.json(body);
        self.client.send_discard(builder).await
    }
}
