//! Navigation chrome loaded from the frontend's static partials.
//!
//! The fragment is opaque: whatever the server returns is shown as-is. Any
//! failure degrades to a placeholder instead of propagating.

use tracing::warn;

use crate::http::HttpRequest;
use crate::normalize::{normalize, Normalized};
use crate::transport::Transport;

pub const SIDEBAR_PATH: &str = "/partials/sidebar.html";

/// Shown in place of the sidebar when it cannot be fetched.
pub const SIDEBAR_PLACEHOLDER: &str = "Menu não disponível";

pub async fn load_sidebar<T: Transport>(transport: &T, frontend_base: &str) -> String {
    let url = format!("{}{SIDEBAR_PATH}", frontend_base.trim_end_matches('/'));
    let response = match transport.execute(HttpRequest::get(url.clone())).await {
        Ok(response) => response,
        Err(e) => {
            warn!(url, error = %e, "failed to load sidebar");
            return SIDEBAR_PLACEHOLDER.to_string();
        }
    };
    match normalize(response) {
        Ok(Normalized::Text(html)) => html,
        Ok(Normalized::Json(value)) => value.to_string(),
        Ok(Normalized::Null) => String::new(),
        Err(e) => {
            warn!(url, error = %e, "failed to load sidebar");
            SIDEBAR_PLACEHOLDER.to_string()
        }
    }
}
