//! Stateless HTTP request builder and response parser for the clientes API.
//!
//! # Design
//! `ClientesClient` holds only a `base_url`. Each operation is split into a
//! `build_*` method that produces an `HttpRequest` and a `parse_*` method
//! that consumes an `HttpResponse`; `ClientesApi` glues the two together
//! around a `Transport`. All parse methods share the same status check and
//! content-type normalization (`normalize::normalize`).

use url::form_urlencoded;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::normalize::{normalize, Normalized};
use crate::types::{ClienteId, Customer, CustomerUpdate, ListQuery, NewCustomer};

/// Address of the backend when nothing else is configured.
pub const DEFAULT_API_BASE: &str = "http://localhost:8080";

const RESOURCE: &str = "clientes";

/// Synchronous, stateless client for the clientes API.
#[derive(Debug, Clone)]
pub struct ClientesClient {
    base_url: String,
}

impl ClientesClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn collection_url(&self) -> String {
        format!("{}/{RESOURCE}", self.base_url)
    }

    fn item_url(&self, id: ClienteId) -> String {
        format!("{}/{RESOURCE}/{id}", self.base_url)
    }

    pub fn build_list_customers(&self) -> HttpRequest {
        HttpRequest::get(self.collection_url())
    }

    pub fn build_list_customers_page(&self, query: &ListQuery) -> HttpRequest {
        let mut params = form_urlencoded::Serializer::new(String::new());
        if let Some(name) = &query.name {
            params.append_pair("nome", name);
        }
        if let Some(page) = query.page {
            params.append_pair("page", &page.to_string());
        }
        if let Some(limit) = query.limit {
            params.append_pair("limit", &limit.to_string());
        }
        let params = params.finish();
        let url = if params.is_empty() {
            self.collection_url()
        } else {
            format!("{}?{params}", self.collection_url())
        };
        HttpRequest::get(url)
    }

    pub fn build_get_customer(&self, id: ClienteId) -> HttpRequest {
        HttpRequest::get(self.item_url(id))
    }

    pub fn build_create_customer(&self, input: &NewCustomer) -> Result<HttpRequest, ApiError> {
        json_request(HttpMethod::Post, self.collection_url(), input)
    }

    pub fn build_update_customer(
        &self,
        id: ClienteId,
        input: &CustomerUpdate,
    ) -> Result<HttpRequest, ApiError> {
        json_request(HttpMethod::Put, self.item_url(id), input)
    }

    pub fn build_delete_customer(&self, id: ClienteId) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            url: self.item_url(id),
            headers: Vec::new(),
            body: None,
        }
    }

    /// A JSON `null` list (what the backend sends for an empty table) is
    /// treated as an empty list.
    pub fn parse_list_customers(&self, response: HttpResponse) -> Result<Vec<Customer>, ApiError> {
        match normalize(response)? {
            Normalized::Json(serde_json::Value::Null) => Ok(Vec::new()),
            other => other.into_json(),
        }
    }

    pub fn parse_get_customer(&self, response: HttpResponse) -> Result<Customer, ApiError> {
        normalize(response)?.into_json()
    }

    pub fn parse_create_customer(&self, response: HttpResponse) -> Result<Customer, ApiError> {
        normalize(response)?.into_json()
    }

    pub fn parse_update_customer(&self, response: HttpResponse) -> Result<Customer, ApiError> {
        normalize(response)?.into_json()
    }

    /// Delete answers 204 or a JSON body; both come back normalized.
    pub fn parse_delete_customer(&self, response: HttpResponse) -> Result<Normalized, ApiError> {
        normalize(response)
    }
}

fn json_request<T: serde::Serialize>(
    method: HttpMethod,
    url: String,
    input: &T,
) -> Result<HttpRequest, ApiError> {
    let body = serde_json::to_string(input).map_err(|e| ApiError::Serialization(e.to_string()))?;
    Ok(HttpRequest {
        method,
        url,
        headers: vec![("content-type".to_string(), "application/json".to_string())],
        body: Some(body),
    })
}
