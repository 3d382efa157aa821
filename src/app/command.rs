//! Console command parsing.
//!
//! Each input line is one command: a verb followed by arguments. Values may
//! contain spaces; everything after the key is taken verbatim (trimmed).
//!
//! | Command                     | Event                |
//! |-----------------------------|----------------------|
//! | `espacios`/`cursos`/`reportes` | `ShowPage`        |
//! | `buscar [texto]`            | `Search`             |
//! | `nuevo`                     | `OpenCreate`         |
//! | `editar <id>`               | `OpenEdit`           |
//! | `set <campo> [valor]`       | `SetField`           |
//! | `guardar`                   | `Submit`             |
//! | `cancelar`, `cerrar`        | `CloseModal`         |
//! | `eliminar <id>`             | `RequestDelete`      |
//! | `si` / `no`                 | `ConfirmDelete` / `CancelDelete` |
//! | `filtros`                   | `ToggleFilters`      |
//! | `filtro <clave> [valor]`    | `SetFilter`          |
//! | `aplicar` / `limpiar`       | `ApplyFilters` / `ClearFilters` |
//! | `recargar`                  | `Reload`             |
//! | `ok`                        | `DismissStatus`      |
//! | `salir`, `q`                | `Quit`               |
//!
//! # Example
//!
//! ```rust
//! use horarios_admin::app::{parse_command, Event};
//!
//! assert_eq!(parse_command("editar 7"), Ok(Some(Event::OpenEdit(7))));
//! assert_eq!(
//!     parse_command("set nombre Lab 101"),
//!     Ok(Some(Event::SetField { key: "nombre".into(), value: "Lab 101".into() }))
//! );
//! assert_eq!(parse_command("   "), Ok(None));
//! ```

use super::handler::Event;
use super::modes::Page;

fn split_word(input: &str) -> (&str, &str) {
    let input = input.trim();
    match input.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (input, ""),
    }
}

fn parse_id(verb: &str, arg: &str) -> Result<i64, String> {
    arg.parse()
        .map_err(|_| format!("Uso: {verb} <id> (id numerico)"))
}

fn key_value(verb: &str, args: &str) -> Result<(String, String), String> {
    let (key, value) = split_word(args);
    if key.is_empty() {
        return Err(format!("Uso: {verb} <clave> [valor]"));
    }
    Ok((key.to_string(), value.to_string()))
}

/// Parses one console line.
///
/// Blank lines yield `Ok(None)` (re-render only).
///
/// # Errors
///
/// Returns a user-facing message for unknown verbs or malformed arguments.
pub fn parse_command(line: &str) -> Result<Option<Event>, String> {
    let (verb, args) = split_word(line);
    if verb.is_empty() {
        return Ok(None);
    }

    if let Some(page) = Page::parse(verb) {
        return Ok(Some(Event::ShowPage(page)));
    }

    let event = match verb {
        "salir" | "q" | "quit" => Event::Quit,
        "recargar" => Event::Reload,
        "buscar" => Event::Search(args.to_string()),
        "nuevo" => Event::OpenCreate,
        "editar" => Event::OpenEdit(parse_id(verb, args)?),
        "set" => {
            let (key, value) = key_value(verb, args)?;
            Event::SetField { key, value }
        }
        "guardar" => Event::Submit,
        "cancelar" | "cerrar" => Event::CloseModal,
        "eliminar" => Event::RequestDelete(parse_id(verb, args)?),
        "si" | "s" => Event::ConfirmDelete,
        "no" | "n" => Event::CancelDelete,
        "filtros" => Event::ToggleFilters,
        "filtro" => {
            let (key, value) = key_value(verb, args)?;
            Event::SetFilter { key, value }
        }
        "aplicar" => Event::ApplyFilters,
        "limpiar" => Event::ClearFilters,
        "ok" => Event::DismissStatus,
        _ => return Err(format!("Comando desconocido: {verb}")),
    };
    Ok(Some(event))
}
