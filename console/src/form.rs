//! Create/edit form for a single customer.
//!
//! With an id the record is fetched first and each prompt shows the current
//! value; a blank answer keeps it and only changed fields are sent. Without
//! an id both fields are asked for and a new record is created.

use std::io::{self, BufRead, Write};

use clientes_core::{
    ApiError, ClienteId, ClientesApi, Customer, CustomerUpdate, NewCustomer, Prompt, Transport,
};
use tracing::info;

use crate::terminal::Terminal;

#[derive(Debug)]
pub enum FormOutcome {
    Created(Customer),
    Updated(Customer),
    Unchanged,
    Cancelled,
    /// The record to edit does not exist.
    NotFound(ClienteId, ApiError),
    /// The record to edit could not be fetched.
    LoadFailed(ApiError),
    /// Create or update was rejected or never reached the backend.
    Failed(ApiError),
}

const LOAD_ERROR: &str = "Erro ao carregar cliente. Verifique se o servidor está rodando.";
const SAVE_ERROR: &str = "Erro ao salvar cliente. Verifique se o servidor está rodando.";

pub async fn run<T: Transport, R: BufRead, W: Write>(
    api: &ClientesApi<T>,
    terminal: &mut Terminal<R, W>,
    id: Option<ClienteId>,
) -> io::Result<FormOutcome> {
    let outcome = match id {
        Some(id) => edit(api, terminal, id).await?,
        None => create(api, terminal).await?,
    };
    match &outcome {
        FormOutcome::Created(c) => {
            info!(id = c.id, "customer created");
            terminal.say(&format!("Cliente {} cadastrado.", c.id))?;
        }
        FormOutcome::Updated(c) => {
            info!(id = c.id, "customer updated");
            terminal.say(&format!("Cliente {} atualizado.", c.id))?;
        }
        FormOutcome::Unchanged => terminal.say("Nenhuma alteração.")?,
        FormOutcome::Cancelled => terminal.say("Operação cancelada.")?,
        FormOutcome::NotFound(id, e) => {
            let fallback = format!("Cliente {id} não encontrado.");
            terminal.alert(e.backend_message().unwrap_or(fallback.as_str()));
        }
        FormOutcome::LoadFailed(e) => terminal.alert(&with_detail(LOAD_ERROR, e)),
        FormOutcome::Failed(e) => terminal.alert(&with_detail(SAVE_ERROR, e)),
    }
    Ok(outcome)
}

async fn create<T: Transport, R: BufRead, W: Write>(
    api: &ClientesApi<T>,
    terminal: &mut Terminal<R, W>,
) -> io::Result<FormOutcome> {
    let Some(name) = terminal.read_line("Nome: ")? else {
        return Ok(FormOutcome::Cancelled);
    };
    let name = name.trim().to_string();
    if name.is_empty() {
        terminal.alert("O nome é obrigatório.");
        return Ok(FormOutcome::Cancelled);
    }
    let Some(phone) = terminal.read_line("Telefone: ")? else {
        return Ok(FormOutcome::Cancelled);
    };
    let input = NewCustomer {
        name,
        phone: phone.trim().to_string(),
    };
    Ok(match api.create_customer(&input).await {
        Ok(customer) => FormOutcome::Created(customer),
        Err(e) => FormOutcome::Failed(e),
    })
}

async fn edit<T: Transport, R: BufRead, W: Write>(
    api: &ClientesApi<T>,
    terminal: &mut Terminal<R, W>,
    id: ClienteId,
) -> io::Result<FormOutcome> {
    let current = match api.get_customer(id).await {
        Ok(customer) => customer,
        Err(e) if e.is_not_found() => return Ok(FormOutcome::NotFound(id, e)),
        Err(e) => return Ok(FormOutcome::LoadFailed(e)),
    };
    let Some(name) = terminal.read_line(&format!("Nome [{}]: ", current.name))? else {
        return Ok(FormOutcome::Cancelled);
    };
    let Some(phone) = terminal.read_line(&format!("Telefone [{}]: ", current.phone))? else {
        return Ok(FormOutcome::Cancelled);
    };
    let update = CustomerUpdate {
        name: changed(&current.name, &name),
        phone: changed(&current.phone, &phone),
    };
    if update.is_empty() {
        return Ok(FormOutcome::Unchanged);
    }
    Ok(match api.update_customer(id, &update).await {
        Ok(customer) => FormOutcome::Updated(customer),
        Err(e) => FormOutcome::Failed(e),
    })
}

fn with_detail(text: &str, error: &ApiError) -> String {
    match error.backend_message() {
        Some(detail) => format!("{text} ({detail})"),
        None => text.to_string(),
    }
}

/// The new value when it is non-blank and differs from the current one.
fn changed(current: &str, answer: &str) -> Option<String> {
    let answer = answer.trim();
    (!answer.is_empty() && answer != current).then(|| answer.to_string())
}
