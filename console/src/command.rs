use clientes_core::{Action, ClienteId};

pub const HELP: &str = "\
Comandos:
  listar                recarrega a lista de clientes
  buscar <termo>        filtra por nome ou telefone
  novo                  cadastra um cliente
  editar <id>           edita um cliente
  deletar <id>          exclui um cliente
  menu                  mostra o menu de navegação
  ajuda                 mostra esta ajuda
  sair                  encerra";

/// One line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    View(Action),
    Menu,
    Help,
    Quit,
    Empty,
    Invalid(String),
}

fn parse_id(verb: &str, arg: &str) -> Result<ClienteId, String> {
    arg.trim()
        .parse()
        .map_err(|_| format!("uso: {verb} <id> (id numérico)"))
}

impl Command {
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        let (verb, arg) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let result = match verb.to_lowercase().as_str() {
            "" => return Command::Empty,
            "listar" | "list" => Ok(Action::Reload),
            // A bare search clears the filter.
            "buscar" | "search" => Ok(Action::Search(arg.trim().to_string())),
            "novo" | "new" => Ok(Action::New),
            "editar" | "edit" => parse_id(verb, arg).map(Action::Edit),
            "deletar" | "delete" => parse_id(verb, arg).map(Action::Delete),
            "menu" => return Command::Menu,
            "ajuda" | "help" | "?" => return Command::Help,
            "sair" | "quit" | "exit" => return Command::Quit,
            other => Err(format!("comando desconhecido: {other} (digite 'ajuda')")),
        };
        match result {
            Ok(action) => Command::View(action),
            Err(message) => Command::Invalid(message),
        }
    }
}
