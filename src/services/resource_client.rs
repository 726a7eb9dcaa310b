// ============================================================================
// RESOURCE CLIENT - typed HTTP access to one collection (stateless)
// ============================================================================
// No business logic here, only requests and outcome classification.
// ============================================================================

use std::marker::PhantomData;

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use crate::config::BACKEND_URL;
use crate::error::RequestError;
use crate::models::{Record, RecordDraft};
use crate::services::ResourceApi;
use crate::state::SessionStore;

use async_trait::async_trait;

/// Whether requests to this collection carry the bearer token. The employees
/// endpoints are open while inventory requires the token; the asymmetry is the
/// backend's contract, so each client states its mode explicitly.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum AuthMode {
    Public,
    Bearer,
}

pub struct HttpResourceClient<T> {
    base_url: String,
    collection: &'static str,
    auth: AuthMode,
    session: SessionStore,
    _record: PhantomData<T>,
}

impl<T> HttpResourceClient<T> {
    pub fn new(collection: &'static str, auth: AuthMode, session: SessionStore) -> Self {
        Self {
            base_url: BACKEND_URL.to_string(),
            collection,
            auth,
            session,
            _record: PhantomData,
        }
    }

    fn collection_url(&self) -> String {
        format!("{}/api/{}", self.base_url, self.collection)
    }

    fn record_url(&self, id: i64) -> String {
        format!("{}/api/{}/{}", self.base_url, self.collection, id)
    }

    /// Attach `Authorization: Bearer <token>` in bearer mode when a token is
    /// present. A missing token is not an error here - the server enforces it.
    fn with_auth(&self, builder: RequestBuilder) -> RequestBuilder {
        match (self.auth, self.session.token()) {
            (AuthMode::Bearer, Some(token)) if !token.is_empty() => {
                builder.header("Authorization", &format!("Bearer {}", token))
            }
            _ => builder,
        }
    }
}

async fn classify(response: Response) -> Result<Response, RequestError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.ok();
    Err(RequestError::from_status(status, body.as_deref()))
}

async fn parse_json<U: DeserializeOwned>(response: Response) -> Result<U, RequestError> {
    response
        .json::<U>()
        .await
        .map_err(|e| RequestError::Network(format!("Parse error: {}", e)))
}

fn network(e: gloo_net::Error) -> RequestError {
    RequestError::Network(e.to_string())
}

#[async_trait(?Send)]
impl<T> ResourceApi<T> for HttpResourceClient<T>
where
    T: Record + DeserializeOwned,
{
    async fn list(&self) -> Result<Vec<T>, RequestError> {
        let response = self
            .with_auth(Request::get(&self.collection_url()))
            .send()
            .await
            .map_err(network)?;
        parse_json(classify(response).await?).await
    }

    async fn create(
        &self,
        payload: &<T::Draft as RecordDraft>::Payload,
    ) -> Result<T, RequestError> {
        let response = self
            .with_auth(Request::post(&self.collection_url()))
            .json(payload)
            .map_err(network)?
            .send()
            .await
            .map_err(network)?;
        parse_json(classify(response).await?).await
    }

    async fn update(
        &self,
        id: i64,
        payload: &<T::Draft as RecordDraft>::Payload,
    ) -> Result<T, RequestError> {
        let response = self
            .with_auth(Request::put(&self.record_url(id)))
            .json(payload)
            .map_err(network)?
            .send()
            .await
            .map_err(network)?;
        parse_json(classify(response).await?).await
    }

    async fn remove(&self, id: i64) -> Result<(), RequestError> {
        let response = self
            .with_auth(Request::delete(&self.record_url(id)))
            .send()
            .await
            .map_err(network)?;
        // 200 or 204, body ignored either way
        classify(response).await.map(|_| ())
    }
}
