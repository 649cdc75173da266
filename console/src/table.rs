//! Plain-text drawing of the list screen's `Table`.

use clientes_core::{Row, Table};

const HEADERS: [&str; 3] = ["Nome", "Telefone", "Ações"];

fn actions(id: i64) -> String {
    format!("[editar {id}] [deletar {id}]")
}

fn width(s: &str) -> usize {
    s.chars().count()
}

fn pad(s: &str, w: usize) -> String {
    format!("{s}{}", " ".repeat(w.saturating_sub(width(s))))
}

pub fn draw(table: &Table) -> String {
    let mut widths = HEADERS.map(width);
    for row in &table.rows {
        if let Row::Customer { id, name, phone } = row {
            widths[0] = widths[0].max(width(name));
            widths[1] = widths[1].max(width(phone));
            widths[2] = widths[2].max(width(&actions(*id)));
        }
    }
    let total = widths.iter().sum::<usize>() + 2 * (widths.len() - 1);

    let mut out = String::new();
    let header: Vec<String> = HEADERS.iter().zip(widths).map(|(h, w)| pad(h, w)).collect();
    out.push_str(header.join("  ").trim_end());
    out.push('\n');
    out.push_str(&"-".repeat(total));
    out.push('\n');

    for row in &table.rows {
        let line = match row {
            Row::Customer { id, name, phone } => [
                pad(name, widths[0]),
                pad(phone, widths[1]),
                actions(*id),
            ]
            .join("  "),
            Row::Message(text) => text.clone(),
        };
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}
