//! Domain DTOs for the clientes API.
//!
//! # Design
//! Wire names are the backend's Portuguese field names; Rust fields use
//! English names with serde renames. These types are defined independently
//! of the mock-server crate and the integration tests catch schema drift.

use serde::{Deserialize, Serialize};

/// Backend-assigned customer identifier.
pub type ClienteId = i64;

/// A customer record as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Customer {
    pub id: ClienteId,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "telefone")]
    pub phone: String,
    /// Registration date (`YYYY-MM-DD`), filled in by the backend.
    #[serde(
        rename = "data_cadastro",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub registered_on: Option<String>,
}

impl Customer {
    /// Case-insensitive substring match on name or phone.
    ///
    /// `needle` must already be lowercased.
    pub fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle) || self.phone.to_lowercase().contains(needle)
    }
}

/// Request payload for creating a customer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewCustomer {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "telefone")]
    pub phone: String,
}

/// Request payload for updating a customer. Only the fields present in the
/// JSON are applied; omitted fields remain unchanged on the server.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CustomerUpdate {
    #[serde(rename = "nome", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "telefone", skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl CustomerUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.phone.is_none()
    }
}

/// Optional query parameters of the list endpoint: a name filter applied
/// server-side plus pagination (the backend defaults to page 1, limit 10).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQuery {
    pub name: Option<String>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}
