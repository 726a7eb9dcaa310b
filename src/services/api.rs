use async_trait::async_trait;

use crate::error::RequestError;
use crate::models::{Record, RecordDraft};

/// Typed request seam for one resource collection. The browser implementation
/// lives in `resource_client`; tests script this trait directly.
///
/// Futures are `?Send`: everything runs on the single browser thread.
#[async_trait(?Send)]
pub trait ResourceApi<T: Record> {
    /// GET the whole collection, in server order.
    async fn list(&self) -> Result<Vec<T>, RequestError>;

    /// POST a new record; the server answers with the assigned `id`.
    async fn create(
        &self,
        payload: &<T::Draft as RecordDraft>::Payload,
    ) -> Result<T, RequestError>;

    /// PUT the editable fields of an existing record. `id` travels in the
    /// path only, never in the body.
    async fn update(
        &self,
        id: i64,
        payload: &<T::Draft as RecordDraft>::Payload,
    ) -> Result<T, RequestError>;

    /// DELETE one record.
    async fn remove(&self, id: i64) -> Result<(), RequestError>;
}
