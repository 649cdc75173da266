//! The customer list screen, independent of how it is drawn.
//!
//! # Design
//! `ListView` owns the last fetched list and the table derived from it; the
//! API handle and the user prompt are passed into each call rather than
//! captured. Rendering produces a `Table` value that a front-end draws, and
//! user input arrives as one `Action` per event through `dispatch`.
//!
//! Calls are not sequenced: if a reload overlaps another action, whichever
//! response is applied last wins.

use tracing::{error, info};

use crate::api::ClientesApi;
use crate::error::ApiError;
use crate::transport::Transport;
use crate::types::{ClienteId, Customer};

pub const EMPTY_MESSAGE: &str = "Nenhum cliente encontrado";
pub const LOAD_ERROR_MESSAGE: &str = "Erro ao carregar dados. Verifique se o servidor está rodando.";
pub const DELETE_CONFIRMATION: &str = "Confirma a exclusão?";
pub const DELETE_ERROR_MESSAGE: &str = "Erro ao deletar cliente. Verifique se o servidor está rodando.";
pub const FORM_PAGE: &str = "/partials/cliente_form.html";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ViewState {
    #[default]
    Idle,
    Loading,
    Rendered,
    Error,
}

/// One table row. Customer rows expose edit and delete actions keyed by id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Row {
    Customer {
        id: ClienteId,
        name: String,
        phone: String,
    },
    Message(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    pub rows: Vec<Row>,
}

impl Table {
    fn message(text: &str) -> Self {
        Self {
            rows: vec![Row::Message(text.to_string())],
        }
    }

    /// Customer rows only, in display order.
    pub fn customer_ids(&self) -> Vec<ClienteId> {
        self.rows
            .iter()
            .filter_map(|row| match row {
                Row::Customer { id, .. } => Some(*id),
                Row::Message(_) => None,
            })
            .collect()
    }

    pub fn is_empty_notice(&self) -> bool {
        self.rows == [Row::Message(EMPTY_MESSAGE.to_string())]
    }
}

/// Where the list screen wants the user to go next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    /// The create/edit form; `id` is present when editing.
    Form { id: Option<ClienteId> },
}

impl Navigation {
    pub fn location(&self) -> String {
        match self {
            Navigation::Form { id: Some(id) } => format!("{FORM_PAGE}?id={id}"),
            Navigation::Form { id: None } => FORM_PAGE.to_string(),
        }
    }
}

/// User events the list screen reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Reload,
    Search(String),
    New,
    Edit(ClienteId),
    Delete(ClienteId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Cancelled,
    Deleted,
    Failed,
}

/// Blocking user interaction used by destructive actions.
pub trait Prompt {
    fn confirm(&mut self, message: &str) -> bool;
    fn alert(&mut self, message: &str);
}

#[derive(Debug, Default)]
pub struct ListView {
    state: ViewState,
    customers: Vec<Customer>,
    table: Table,
}

impl ListView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ViewState {
        self.state
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    /// The list as last fetched.
    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    /// Fetch the list, replace the cache and render it. On failure the cache
    /// is kept and the table shows a single error row.
    pub async fn load<T: Transport>(&mut self, api: &ClientesApi<T>) -> Result<(), ApiError> {
        self.state = ViewState::Loading;
        match api.list_customers().await {
            Ok(customers) => {
                info!(count = customers.len(), "customers loaded");
                self.customers = customers;
                self.table = render(&self.customers);
                self.state = ViewState::Rendered;
                Ok(())
            }
            Err(e) => {
                error!(error = %e, "failed to load customers");
                self.table = Table::message(LOAD_ERROR_MESSAGE);
                self.state = ViewState::Error;
                Err(e)
            }
        }
    }

    /// Re-render the cached list keeping entries whose name or phone
    /// contains `term`, ignoring case. Never touches the network.
    pub fn search(&mut self, term: &str) {
        let filtered = filter(&self.customers, term);
        self.table = render(&filtered);
        self.state = ViewState::Rendered;
    }

    pub fn edit(&self, id: ClienteId) -> Navigation {
        Navigation::Form { id: Some(id) }
    }

    pub fn new_customer(&self) -> Navigation {
        Navigation::Form { id: None }
    }

    /// Ask for confirmation, delete, and reload once on success. A failed
    /// delete raises an alert and leaves cache and table untouched.
    pub async fn delete<T: Transport, P: Prompt>(
        &mut self,
        api: &ClientesApi<T>,
        id: ClienteId,
        prompt: &mut P,
    ) -> DeleteOutcome {
        if !prompt.confirm(DELETE_CONFIRMATION) {
            return DeleteOutcome::Cancelled;
        }
        match api.delete_customer(id).await {
            Ok(_) => {
                info!(id, "customer deleted");
                // The reload reports its own failure in the table.
                let _ = self.load(api).await;
                DeleteOutcome::Deleted
            }
            Err(e) => {
                error!(id, error = %e, "failed to delete customer");
                prompt.alert(DELETE_ERROR_MESSAGE);
                DeleteOutcome::Failed
            }
        }
    }

    /// Route one user event. Returns a navigation when the event leaves the
    /// list screen.
    pub async fn dispatch<T: Transport, P: Prompt>(
        &mut self,
        action: Action,
        api: &ClientesApi<T>,
        prompt: &mut P,
    ) -> Option<Navigation> {
        match action {
            Action::Reload => {
                let _ = self.load(api).await;
                None
            }
            Action::Search(term) => {
                self.search(&term);
                None
            }
            Action::New => Some(self.new_customer()),
            Action::Edit(id) => Some(self.edit(id)),
            Action::Delete(id) => {
                self.delete(api, id, prompt).await;
                None
            }
        }
    }
}

/// Case-insensitive name-or-phone substring filter.
pub fn filter(customers: &[Customer], term: &str) -> Vec<Customer> {
    let needle = term.to_lowercase();
    customers
        .iter()
        .filter(|c| c.matches(&needle))
        .cloned()
        .collect()
}

pub fn render(customers: &[Customer]) -> Table {
    if customers.is_empty() {
        return Table::message(EMPTY_MESSAGE);
    }
    Table {
        rows: customers
            .iter()
            .map(|c| Row::Customer {
                id: c.id,
                name: c.name.clone(),
                phone: c.phone.clone(),
            })
            .collect(),
    }
}
