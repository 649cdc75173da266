//! Client core for the clientes (customer) management API.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern); `ClientesApi` drives the
//! round-trip through a `Transport`. `ListView` is the customer list screen
//! expressed as data, so any front-end can draw it.
//!
//! # Design
//! - `ClientesClient` is stateless; it holds only `base_url`.
//! - Each operation is split into `build_*` (produces request) and
//!   `parse_*` (consumes response), so the I/O boundary is explicit.
//! - Every successful response is normalized to `Null`, JSON or text before
//!   typed decoding; every non-2xx becomes `ApiError::Status`.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod api;
pub mod client;
pub mod error;
pub mod http;
pub mod normalize;
pub mod sidebar;
pub mod transport;
pub mod types;
pub mod view;

pub use api::ClientesApi;
pub use client::{ClientesClient, DEFAULT_API_BASE};
pub use error::{ApiError, TransportError};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use normalize::{normalize, Normalized};
pub use sidebar::load_sidebar;
pub use transport::{Transport, UreqTransport};
pub use types::{ClienteId, Customer, CustomerUpdate, ListQuery, NewCustomer};
pub use view::{Action, DeleteOutcome, ListView, Navigation, Prompt, Row, Table, ViewState};
