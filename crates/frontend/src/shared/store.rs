//! Generic REST entity store.
//!
//! Every call resolves to a [`StoreResponse`]; transport and decoding
//! problems are logged and folded into the response instead of being
//! returned as errors. Success is a closed set: 200 for reads and updates,
//! 201 for creates, 204 for deletes.

use crate::shared::api_utils::api_url;
use contracts::domain::common::AggregateRoot;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::marker::PhantomData;

/// Status reported when no HTTP response was received at all.
pub const STATUS_TRANSPORT_FAILURE: u16 = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreOp {
    List,
    Get,
    Create,
    Update,
    Delete,
}

impl StoreOp {
    pub fn success_status(self) -> u16 {
        match self {
            StoreOp::List | StoreOp::Get | StoreOp::Update => 200,
            StoreOp::Create => 201,
            StoreOp::Delete => 204,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StoreResponse<T> {
    pub op: StoreOp,
    pub status: u16,
    pub data: Option<T>,
}

impl<T> StoreResponse<T> {
    pub fn new(op: StoreOp, status: u16, data: Option<T>) -> Self {
        Self { op, status, data }
    }

    pub fn failed(op: StoreOp, status: u16) -> Self {
        Self::new(op, status, None)
    }

    pub fn is_success(&self) -> bool {
        self.status == self.op.success_status()
    }

    /// Payload of a successful response.
    pub fn ok_data(self) -> Option<T> {
        if self.is_success() {
            self.data
        } else {
            None
        }
    }
}

/// Turns a status and raw body into a response. Failure statuses never carry
/// data; an empty success body yields `data: None`.
pub fn decode_response<T: DeserializeOwned>(op: StoreOp, status: u16, body: &str) -> StoreResponse<T> {
    if status != op.success_status() {
        log::warn!("{:?} answered with status {}", op, status);
        return StoreResponse::failed(op, status);
    }
    if body.trim().is_empty() {
        return StoreResponse::new(op, status, None);
    }
    match serde_json::from_str(body) {
        Ok(data) => StoreResponse::new(op, status, Some(data)),
        Err(e) => {
            log::error!("{:?}: cannot decode response body: {}", op, e);
            StoreResponse::new(op, status, None)
        }
    }
}

/// REST store for aggregate `T`, written through DTO `D`.
pub struct RestStore<T, D> {
    api_base: String,
    _marker: PhantomData<fn() -> (T, D)>,
}

impl<T, D> Clone for RestStore<T, D> {
    fn clone(&self) -> Self {
        Self {
            api_base: self.api_base.clone(),
            _marker: PhantomData,
        }
    }
}

impl<T, D> RestStore<T, D>
where
    T: AggregateRoot + DeserializeOwned,
    D: Serialize,
{
    pub fn new(api_base: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into(),
            _marker: PhantomData,
        }
    }

    pub fn collection_url(&self) -> String {
        api_url(&self.api_base, T::api_resource())
    }

    pub fn item_url(&self, id: &str) -> String {
        api_url(&self.api_base, &T::item_path(id))
    }

    pub async fn list(&self) -> StoreResponse<Vec<T>> {
        let url = self.collection_url();
        log::debug!("GET {}", url);
        finish(StoreOp::List, Request::get(&url).header("Accept", "application/json").send().await).await
    }

    pub async fn get(&self, id: &str) -> StoreResponse<T> {
        let url = self.item_url(id);
        log::debug!("GET {}", url);
        finish(StoreOp::Get, Request::get(&url).header("Accept", "application/json").send().await).await
    }

    pub async fn create(&self, dto: &D) -> StoreResponse<T> {
        let url = self.collection_url();
        log::debug!("POST {}", url);
        let request = match Request::post(&url).json(dto) {
            Ok(request) => request,
            Err(e) => return transport_failure(StoreOp::Create, e),
        };
        finish(StoreOp::Create, request.send().await).await
    }

    pub async fn update(&self, id: &str, dto: &D) -> StoreResponse<T> {
        let url = self.item_url(id);
        log::debug!("PUT {}", url);
        let request = match Request::put(&url).json(dto) {
            Ok(request) => request,
            Err(e) => return transport_failure(StoreOp::Update, e),
        };
        finish(StoreOp::Update, request.send().await).await
    }

    pub async fn remove(&self, id: &str) -> StoreResponse<()> {
        let url = self.item_url(id);
        log::debug!("DELETE {}", url);
        match Request::delete(&url).send().await {
            Ok(response) => {
                let status = response.status();
                if status != StoreOp::Delete.success_status() {
                    log::warn!("Delete answered with status {}", status);
                }
                StoreResponse::new(StoreOp::Delete, status, None)
            }
            Err(e) => transport_failure(StoreOp::Delete, e),
        }
    }
}

async fn finish<R: DeserializeOwned>(
    op: StoreOp,
    sent: Result<Response, gloo_net::Error>,
) -> StoreResponse<R> {
    let response = match sent {
        Ok(response) => response,
        Err(e) => return transport_failure(op, e),
    };
    let status = response.status();
    match response.text().await {
        Ok(body) => decode_response(op, status, &body),
        Err(e) => {
            log::error!("{:?}: reading response body failed: {}", op, e);
            StoreResponse::failed(op, status)
        }
    }
}

fn transport_failure<R>(op: StoreOp, error: gloo_net::Error) -> StoreResponse<R> {
    log::error!("{:?}: request failed: {}", op, error);
    StoreResponse::failed(op, STATUS_TRANSPORT_FAILURE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_youtube_channel::{YoutubeChannel, YoutubeChannelDto};

    #[test]
    fn test_success_statuses_are_a_closed_set() {
        assert!(StoreResponse::<()>::failed(StoreOp::Create, 201).is_success());
        assert!(!StoreResponse::<()>::failed(StoreOp::Create, 200).is_success());
        assert!(StoreResponse::<()>::failed(StoreOp::Delete, 204).is_success());
        assert!(!StoreResponse::<()>::failed(StoreOp::Delete, 200).is_success());
        assert!(StoreResponse::<()>::failed(StoreOp::Update, 200).is_success());
        assert!(!StoreResponse::<()>::failed(StoreOp::List, STATUS_TRANSPORT_FAILURE).is_success());
    }

    #[test]
    fn test_decode_success_body() {
        let response: StoreResponse<Vec<u32>> = decode_response(StoreOp::List, 200, "[1,2,3]");
        assert!(response.is_success());
        assert_eq!(response.ok_data(), Some(vec![1, 2, 3]));
    }

    #[test]
    fn test_decode_failure_drops_body() {
        let response: StoreResponse<Vec<u32>> = decode_response(StoreOp::List, 500, "[1]");
        assert_eq!(response, StoreResponse::failed(StoreOp::List, 500));
    }

    #[test]
    fn test_decode_empty_or_garbage_body() {
        let empty: StoreResponse<u32> = decode_response(StoreOp::Update, 200, "  ");
        assert!(empty.is_success());
        assert_eq!(empty.data, None);

        let garbage: StoreResponse<u32> = decode_response(StoreOp::Get, 200, "{oops");
        assert!(garbage.is_success());
        assert_eq!(garbage.ok_data(), None);
    }

    #[test]
    fn test_urls_follow_aggregate_resource() {
        let store: RestStore<YoutubeChannel, YoutubeChannelDto> = RestStore::new("http://h:3000");
        assert_eq!(store.collection_url(), "http://h:3000/api/youtube/channels");
        assert_eq!(store.item_url("7"), "http://h:3000/api/youtube/channels/7");
    }
}
