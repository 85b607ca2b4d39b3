//! HTTP client for the gallery REST API.
//!
//! One [`RestClient`] is shared by every entity store. All requests resolve
//! the resource path from the [`Entity`] type, so the same six operations
//! serve albums, photos, and tags.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use reqwest::header::{HeaderValue, CONTENT_TYPE, LINK};
use reqwest::{Client, Response, StatusCode};

use crate::config::ApiConfig;
use crate::model::{Entity, EntityId};
use crate::rest::error::{ProblemDetails, RestError};
use crate::rest::page::{Page, PageLinks, PageQuery};

const TOTAL_COUNT_HEADER: &str = "x-total-count";
/// The backend expects merge-patch semantics for partial updates.
const MERGE_PATCH: &str = "application/merge-patch+json";

pub struct RestClient {
    http: Client,
    base_url: String,
}

impl RestClient {
    /// Build a client from API configuration.
    ///
    /// # Errors
    /// Returns an error if the underlying HTTP client cannot be constructed.
    pub fn new(api: &ApiConfig) -> Result<Self, RestError> {
        let http = Client::builder()
            .connect_timeout(Duration::from_secs(u64::from(api.connect_timeout_seconds)))
            .timeout(Duration::from_secs(u64::from(api.timeout_seconds)))
            .build()?;

        Ok(Self {
            http,
            base_url: api.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn resource_url<T: Entity>(&self) -> String {
        format!("{}/{}", self.base_url, T::RESOURCE)
    }

    fn entity_url<T: Entity>(&self, id: EntityId) -> String {
        format!("{}/{}/{}", self.base_url, T::RESOURCE, id)
    }

    /// Fetch one page of entities.
    ///
    /// Sends `page`, `size`, and optional `sort` parameters plus a
    /// `cacheBuster` timestamp so intermediaries never serve a stale list.
    pub async fn list<T: Entity>(&self, query: &PageQuery) -> Result<Page<T>, RestError> {
        let mut request = self
            .http
            .get(self.resource_url::<T>())
            .query(&[("page", query.page), ("size", query.size)]);
        if let Some(sort) = &query.sort {
            request = request.query(&[("sort", sort.render())]);
        }
        request = request.query(&[("cacheBuster", cache_buster())]);

        let response = request.send().await?;
        let response = check_status(response, T::RESOURCE, None).await?;

        let total_count = response
            .headers()
            .get(TOTAL_COUNT_HEADER)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse().ok());
        let links = response
            .headers()
            .get(LINK)
            .and_then(|v| v.to_str().ok())
            .map(PageLinks::parse)
            .unwrap_or_default();

        let body = response.bytes().await?;
        let items: Vec<T> = serde_json::from_slice(&body)?;

        Ok(Page {
            items,
            total_count,
            links,
        })
    }

    /// Fetch a single entity by identity key.
    pub async fn get_one<T: Entity>(&self, id: EntityId) -> Result<T, RestError> {
        let response = self.http.get(self.entity_url::<T>(id)).send().await?;
        let response = check_status(response, T::RESOURCE, Some(id)).await?;
        decode(response).await
    }

    /// Create an entity; the response carries the server-assigned key.
    pub async fn create<T: Entity>(&self, entity: &T) -> Result<T, RestError> {
        let response = self
            .http
            .post(self.resource_url::<T>())
            .json(entity)
            .send()
            .await?;
        let response = check_status(response, T::RESOURCE, None).await?;
        decode(response).await
    }

    /// Full-replace update.
    pub async fn update<T: Entity>(&self, entity: &T) -> Result<T, RestError> {
        let id = entity.id().ok_or(RestError::MissingId { operation: "update" })?;
        let response = self
            .http
            .put(self.entity_url::<T>(id))
            .json(entity)
            .send()
            .await?;
        let response = check_status(response, T::RESOURCE, Some(id)).await?;
        decode(response).await
    }

    /// Partial update; merge semantics are the server's responsibility.
    pub async fn partial_update<T: Entity>(&self, entity: &T) -> Result<T, RestError> {
        let id = entity.id().ok_or(RestError::MissingId {
            operation: "partial update",
        })?;
        let response = self
            .http
            .patch(self.entity_url::<T>(id))
            .header(CONTENT_TYPE, HeaderValue::from_static(MERGE_PATCH))
            .json(entity)
            .send()
            .await?;
        let response = check_status(response, T::RESOURCE, Some(id)).await?;
        decode(response).await
    }

    /// Delete an entity by identity key.
    pub async fn delete<T: Entity>(&self, id: EntityId) -> Result<(), RestError> {
        let response = self.http.delete(self.entity_url::<T>(id)).send().await?;
        check_status(response, T::RESOURCE, Some(id)).await?;
        Ok(())
    }
}

fn cache_buster() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_millis() as u64)
}

async fn decode<T: Entity>(response: Response) -> Result<T, RestError> {
    let body = response.bytes().await?;
    Ok(serde_json::from_slice(&body)?)
}

/// Classify non-success responses into the error taxonomy.
///
/// The body is parsed as problem-details when possible; an unreadable body
/// still yields a usable error with just the status.
async fn check_status(
    response: Response,
    resource: &'static str,
    id: Option<EntityId>,
) -> Result<Response, RestError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    if status == StatusCode::NOT_FOUND {
        if let Some(id) = id {
            return Err(RestError::NotFound { resource, id });
        }
    }

    let body = response.bytes().await.unwrap_or_default();
    let problem: Option<ProblemDetails> = serde_json::from_slice(&body).ok();
    let message = problem
        .as_ref()
        .map(ProblemDetails::message)
        .unwrap_or_else(|| status.canonical_reason().unwrap_or("Request failed").to_string());

    if status.is_client_error() {
        Err(RestError::Validation {
            status: status.as_u16(),
            message,
            field_errors: problem.map(|p| p.field_errors).unwrap_or_default(),
        })
    } else {
        Err(RestError::Server {
            status: status.as_u16(),
            message,
        })
    }
}
