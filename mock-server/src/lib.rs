use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{rejection::JsonRejection, rejection::PathRejection, Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tokio::{net::TcpListener, sync::RwLock};

pub const SIDEBAR_HTML: &str = r#"<nav><a href="/index.html">Início</a> <a href="/clientes.html">Clientes</a></nav>"#;

const DEFAULT_PAGE: usize = 1;
const DEFAULT_LIMIT: usize = 10;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Cliente {
    pub id: i64,
    pub nome: String,
    pub telefone: String,
    pub data_cadastro: String,
}

#[derive(Deserialize)]
pub struct NovoCliente {
    pub nome: String,
    pub telefone: String,
}

#[derive(Deserialize)]
pub struct AtualizaCliente {
    pub nome: Option<String>,
    pub telefone: Option<String>,
}

#[derive(Deserialize, Default)]
pub struct ListParams {
    pub nome: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
}

#[derive(Debug, Default)]
pub struct Store {
    next_id: i64,
    clientes: BTreeMap<i64, Cliente>,
}

impl Store {
    fn insert(&mut self, nome: String, telefone: String) -> Cliente {
        self.next_id += 1;
        let cliente = Cliente {
            id: self.next_id,
            nome,
            telefone,
            data_cadastro: chrono::Local::now().format("%Y-%m-%d").to_string(),
        };
        self.clientes.insert(cliente.id, cliente.clone());
        cliente
    }
}

pub type Db = Arc<RwLock<Store>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Store::default()));
    Router::new()
        .route("/clientes", get(list_clientes).post(create_cliente))
        .route(
            "/clientes/{id}",
            get(get_cliente)
                .put(update_cliente)
                .patch(update_cliente)
                .delete(delete_cliente),
        )
        .route("/partials/sidebar.html", get(sidebar))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

/// Error body in the backend's `{"error": "..."}` shape.
fn error(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}

fn parse_positive(raw: Option<&str>, default: usize) -> usize {
    raw.and_then(|s| s.parse::<usize>().ok())
        .filter(|n| *n >= 1)
        .unwrap_or(default)
}

async fn list_clientes(
    State(db): State<Db>,
    Query(params): Query<ListParams>,
) -> Json<Vec<Cliente>> {
    let page = parse_positive(params.page.as_deref(), DEFAULT_PAGE);
    let limit = parse_positive(params.limit.as_deref(), DEFAULT_LIMIT);
    let needle = params.nome.filter(|n| !n.is_empty()).map(|n| n.to_lowercase());

    let offset = (page - 1).saturating_mul(limit);

    let store = db.read().await;
    let clientes = store
        .clientes
        .values()
        .filter(|c| {
            needle
                .as_ref()
                .map_or(true, |n| c.nome.to_lowercase().contains(n))
        })
        .skip(offset)
        .take(limit)
        .cloned()
        .collect();
    Json(clientes)
}

async fn create_cliente(
    State(db): State<Db>,
    input: Result<Json<NovoCliente>, JsonRejection>,
) -> Response {
    let Ok(Json(input)) = input else {
        return error(StatusCode::BAD_REQUEST, "Erro ao decodificar JSON");
    };
    let cliente = db.write().await.insert(input.nome, input.telefone);
    tracing::info!(id = cliente.id, "cliente criado");
    (StatusCode::CREATED, Json(cliente)).into_response()
}

async fn get_cliente(
    State(db): State<Db>,
    id: Result<Path<i64>, PathRejection>,
) -> Response {
    let Ok(Path(id)) = id else {
        return error(StatusCode::BAD_REQUEST, "ID inválido");
    };
    match db.read().await.clientes.get(&id) {
        Some(cliente) => Json(cliente.clone()).into_response(),
        None => error(StatusCode::NOT_FOUND, "Cliente não encontrado"),
    }
}

async fn update_cliente(
    State(db): State<Db>,
    id: Result<Path<i64>, PathRejection>,
    input: Result<Json<AtualizaCliente>, JsonRejection>,
) -> Response {
    let Ok(Path(id)) = id else {
        return error(StatusCode::BAD_REQUEST, "ID inválido");
    };
    let Ok(Json(input)) = input else {
        return error(StatusCode::BAD_REQUEST, "JSON inválido");
    };
    if input.nome.is_none() && input.telefone.is_none() {
        return error(StatusCode::BAD_REQUEST, "Nada para atualizar");
    }

    let mut store = db.write().await;
    let Some(cliente) = store.clientes.get_mut(&id) else {
        return error(StatusCode::NOT_FOUND, "Cliente não encontrado");
    };
    if let Some(nome) = input.nome {
        cliente.nome = nome;
    }
    if let Some(telefone) = input.telefone {
        cliente.telefone = telefone;
    }
    Json(cliente.clone()).into_response()
}

async fn delete_cliente(
    State(db): State<Db>,
    id: Result<Path<i64>, PathRejection>,
) -> Response {
    let Ok(Path(id)) = id else {
        return error(StatusCode::BAD_REQUEST, "ID inválido");
    };
    match db.write().await.clientes.remove(&id) {
        Some(_) => StatusCode::NO_CONTENT.into_response(),
        None => error(StatusCode::NOT_FOUND, "Cliente não encontrado"),
    }
}

async fn sidebar() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/html; charset=utf-8")], SIDEBAR_HTML)
}
