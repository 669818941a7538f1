//! Client for the hosted store.
//!
//! Paths come from `common::store`; this module adds the project key headers
//! and turns failed responses into [`StoreError`]s.

use common::requests::ClientConfig;
use common::store::{row_path, Query, StoreError, Table, API_KEY_HEADER};
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq)]
pub struct StoreClient {
    base_url: String,
    anon_key: String,
}

impl StoreClient {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            base_url: config.store_url.trim_end_matches('/').to_string(),
            anon_key: config.store_anon_key.clone(),
        }
    }

    pub async fn select<T: DeserializeOwned>(&self, query: &Query) -> Result<Vec<T>, StoreError> {
        let response = self
            .with_keys(Request::get(&self.url(&query.to_path())))
            .send()
            .await
            .map_err(transport)?;
        check(response).await?.json().await.map_err(transport)
    }

    pub async fn insert<T: Serialize>(&self, table: Table, row: &T) -> Result<(), StoreError> {
        let path = Query::table(table).to_path();
        let response = self
            .with_keys(Request::post(&self.url(&path)))
            .header("Prefer", "return=minimal")
            .json(row)
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        check(response).await.map(drop)
    }

    pub async fn update<T: Serialize>(
        &self,
        table: Table,
        id: &str,
        patch: &T,
    ) -> Result<(), StoreError> {
        let response = self
            .with_keys(Request::patch(&self.url(&row_path(table, id))))
            .header("Prefer", "return=minimal")
            .json(patch)
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        check(response).await.map(drop)
    }

    pub async fn delete(&self, table: Table, id: &str) -> Result<(), StoreError> {
        let response = self
            .with_keys(Request::delete(&self.url(&row_path(table, id))))
            .send()
            .await
            .map_err(transport)?;
        check(response).await.map(drop)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn with_keys(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header(API_KEY_HEADER, &self.anon_key)
            .header("Authorization", &format!("Bearer {}", self.anon_key))
    }
}

async fn check(response: Response) -> Result<Response, StoreError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    let error = StoreError::from_response(status, &body);
    gloo_console::error!(format!("store request failed ({status}): {error}"));
    Err(error)
}

fn transport(error: gloo_net::Error) -> StoreError {
    StoreError::new(error.to_string())
}
