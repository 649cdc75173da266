//! Async round-trips for the clientes resource.
//!
//! `ClientesApi` pairs a `ClientesClient` (pure request building and response
//! parsing) with a `Transport`. Every failure, whether the transport's or the
//! backend's, is logged against the URL that was requested and then handed
//! back to the caller unchanged.

use tracing::{debug, error};

use crate::client::ClientesClient;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::normalize::{normalize, Normalized};
use crate::transport::Transport;
use crate::types::{ClienteId, Customer, CustomerUpdate, ListQuery, NewCustomer};

#[derive(Debug, Clone)]
pub struct ClientesApi<T> {
    client: ClientesClient,
    transport: T,
}

impl<T: Transport> ClientesApi<T> {
    pub fn new(client: ClientesClient, transport: T) -> Self {
        Self { client, transport }
    }

    pub fn client(&self) -> &ClientesClient {
        &self.client
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// The request helper: perform `request` and return the normalized body.
    pub async fn fetch(&self, request: HttpRequest) -> Result<Normalized, ApiError> {
        let url = request.url.clone();
        let response = self.send(request).await?;
        logged(&url, normalize(response))
    }

    pub async fn list_customers(&self) -> Result<Vec<Customer>, ApiError> {
        let request = self.client.build_list_customers();
        let url = request.url.clone();
        let response = self.send(request).await?;
        logged(&url, self.client.parse_list_customers(response))
    }

    pub async fn list_customers_page(&self, query: &ListQuery) -> Result<Vec<Customer>, ApiError> {
        let request = self.client.build_list_customers_page(query);
        let url = request.url.clone();
        let response = self.send(request).await?;
        logged(&url, self.client.parse_list_customers(response))
    }

    pub async fn get_customer(&self, id: ClienteId) -> Result<Customer, ApiError> {
        let request = self.client.build_get_customer(id);
        let url = request.url.clone();
        let response = self.send(request).await?;
        logged(&url, self.client.parse_get_customer(response))
    }

    pub async fn create_customer(&self, input: &NewCustomer) -> Result<Customer, ApiError> {
        let request = self.client.build_create_customer(input)?;
        let url = request.url.clone();
        let response = self.send(request).await?;
        logged(&url, self.client.parse_create_customer(response))
    }

    pub async fn update_customer(
        &self,
        id: ClienteId,
        input: &CustomerUpdate,
    ) -> Result<Customer, ApiError> {
        let request = self.client.build_update_customer(id, input)?;
        let url = request.url.clone();
        let response = self.send(request).await?;
        logged(&url, self.client.parse_update_customer(response))
    }

    pub async fn delete_customer(&self, id: ClienteId) -> Result<Normalized, ApiError> {
        let request = self.client.build_delete_customer(id);
        let url = request.url.clone();
        let response = self.send(request).await?;
        logged(&url, self.client.parse_delete_customer(response))
    }

    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        debug!(method = %request.method, url = %request.url, "sending request");
        let url = request.url.clone();
        let result = self
            .transport
            .execute(request)
            .await
            .map_err(|source| ApiError::Transport {
                url: url.clone(),
                source,
            });
        logged(&url, result)
    }
}

fn logged<V>(url: &str, result: Result<V, ApiError>) -> Result<V, ApiError> {
    if let Err(e) = &result {
        error!(url, error = %e, "request failed");
    }
    result
}
