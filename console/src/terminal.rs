//! Line-oriented terminal I/O.
//!
//! Generic over reader and writer so prompts and the command loop can be
//! driven from in-memory buffers in tests.

use std::io::{self, BufRead, Write};

use clientes_core::{Prompt, Table};
use tracing::warn;

use crate::table;

pub struct Terminal<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    /// Print `prompt` and read one line without its terminator. `None` on
    /// end of input.
    pub fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    pub fn say(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.output, "{message}")
    }

    pub fn show_table(&mut self, table: &Table) -> io::Result<()> {
        write!(self.output, "{}", table::draw(table))
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(
        answer.trim().to_lowercase().as_str(),
        "s" | "sim" | "y" | "yes"
    )
}

impl<R: BufRead, W: Write> Prompt for Terminal<R, W> {
    fn confirm(&mut self, message: &str) -> bool {
        match self.read_line(&format!("{message} [s/N] ")) {
            Ok(Some(answer)) => is_yes(&answer),
            Ok(None) => false,
            Err(e) => {
                warn!(error = %e, "failed to read confirmation");
                false
            }
        }
    }

    fn alert(&mut self, message: &str) {
        if let Err(e) = self.say(&format!("! {message}")) {
            warn!(error = %e, "failed to show alert");
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn terminal(input: &str) -> Terminal<Cursor<Vec<u8>>, Vec<u8>> {
        Terminal::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn written(t: &Terminal<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(t.output().clone()).unwrap()
    }

    #[test]
    fn read_line_strips_terminator() {
        let mut t = terminal("listar\r\n");
        assert_eq!(t.read_line("> ").unwrap().as_deref(), Some("listar"));
        assert_eq!(t.read_line("> ").unwrap(), None);
        assert_eq!(written(&t), "> > ");
    }

    #[test]
    fn confirm_accepts_portuguese_and_english_yes() {
        for answer in ["s\n", "SIM\n", "y\n", "yes\n"] {
            assert!(terminal(answer).confirm("Confirma a exclusão?"), "{answer:?}");
        }
    }

    #[test]
    fn confirm_defaults_to_no() {
        assert!(!terminal("\n").confirm("Confirma?"));
        assert!(!terminal("n\n").confirm("Confirma?"));
        assert!(!terminal("").confirm("Confirma?"));
    }

    #[test]
    fn alert_is_written() {
        let mut t = terminal("");
        t.alert("Erro ao deletar cliente.");
        assert_eq!(written(&t), "! Erro ao deletar cliente.\n");
    }
}
