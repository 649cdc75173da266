use std::io::{BufRead, Write};

use anyhow::Result;
use clientes_core::{load_sidebar, Action, ClientesApi, ListView, Navigation, Transport};
use tracing::{debug, info};

use crate::command::{Command, HELP};
use crate::form;
use crate::terminal::Terminal;

/// Show the menu and the list, then serve commands until `sair` or end of
/// input.
pub async fn run<T: Transport, R: BufRead, W: Write>(
    api: &ClientesApi<T>,
    frontend_base: &str,
    terminal: &mut Terminal<R, W>,
) -> Result<()> {
    terminal.say(&load_sidebar(api.transport(), frontend_base).await)?;

    let mut view = ListView::new();
    view.dispatch(Action::Reload, api, terminal).await;
    terminal.show_table(view.table())?;

    while let Some(line) = terminal.read_line("> ")? {
        match Command::parse(&line) {
            Command::Quit => break,
            Command::Empty => {}
            Command::Help => terminal.say(HELP)?,
            Command::Invalid(message) => terminal.say(&message)?,
            Command::Menu => terminal.say(&load_sidebar(api.transport(), frontend_base).await)?,
            Command::View(action) => {
                debug!(?action, "dispatching");
                if let Some(Navigation::Form { id }) = view.dispatch(action, api, terminal).await {
                    info!(location = %Navigation::Form { id }.location(), "opening form");
                    form::run(api, terminal, id).await?;
                    view.dispatch(Action::Reload, api, terminal).await;
                }
                terminal.show_table(view.table())?;
            }
        }
    }
    Ok(())
}
