//! Console entry point.
//!
//! Thin wrapper around the library: parses arguments, resolves the
//! configuration, picks a backend and runs the command loop.
//!
//! # Loop
//!
//! ```text
//! stdin line → parse_command → Event → dispatch → render → stdout
//! ```
//!
//! Each rendered frame clears the screen and redraws the current page.
//! The loop ends on `salir` or end of input.
//!
//! # Usage
//!
//! ```text
//! horarios-admin [--config <file>] [--set key=value]... [--offline <dir>]
//! ```

use horarios_admin::observability::init_tracing;
use horarios_admin::service::Services;
use horarios_admin::ui::render;
use horarios_admin::{dispatch, load_theme, parse_command, AppState, Config, Event, Page, Result};
use std::collections::BTreeMap;
use std::path::PathBuf;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

const USAGE: &str = "\
Uso: horarios-admin [opciones]

Opciones:
  --config <archivo>   Archivo de configuracion TOML
  --set clave=valor    Sobrescribe una clave de configuracion
  --offline <dir>      Usa archivos JSON en <dir> en lugar del backend REST
  -h, --help           Muestra esta ayuda

Comandos: espacios, cursos, reportes, buscar, nuevo, editar <id>, set <campo> <valor>,
guardar, cancelar, eliminar <id>, si, no, filtros, filtro <clave> <valor>, aplicar,
limpiar, recargar, ok, salir";

const CLEAR_SCREEN: &str = "\u{1b}[2J\u{1b}[H";
const DEFAULT_COLUMNS: usize = 100;

#[derive(Debug, Default)]
struct Args {
    config: Option<PathBuf>,
    overrides: BTreeMap<String, String>,
    offline: Option<PathBuf>,
    help: bool,
}

fn parse_args<I: Iterator<Item = String>>(mut args: I) -> std::result::Result<Args, String> {
    let mut parsed = Args::default();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                parsed.config = Some(args.next().ok_or("--config requiere un archivo")?.into());
            }
            "--offline" => {
                parsed.offline = Some(args.next().ok_or("--offline requiere un directorio")?.into());
            }
            "--set" => {
                let pair = args.next().ok_or("--set requiere clave=valor")?;
                let (key, value) = pair
                    .split_once('=')
                    .ok_or_else(|| format!("--set espera clave=valor, se recibio '{pair}'"))?;
                parsed.overrides.insert(key.trim().to_string(), value.to_string());
            }
            "-h" | "--help" => parsed.help = true,
            other => return Err(format!("Argumento desconocido: {other}")),
        }
    }
    Ok(parsed)
}

fn columns() -> usize {
    std::env::var("COLUMNS")
        .ok()
        .and_then(|cols| cols.trim().parse().ok())
        .filter(|cols| *cols > 0)
        .unwrap_or(DEFAULT_COLUMNS)
}

async fn run(args: Args) -> Result<()> {
    let mut overrides = Config::env_overrides(std::env::vars());
    overrides.extend(args.overrides);
    let config = Config::load(args.config.as_deref(), &overrides)?;

    init_tracing(&config);
    tracing::info!(offline = args.offline.is_some(), "starting horarios-admin");

    let theme = load_theme(&config);
    let services = match &args.offline {
        Some(dir) => Services::offline(dir)?,
        None => Services::http(&config)?,
    };

    let mut state = AppState::new(&services);
    let cols = columns();
    let mut stdout = tokio::io::stdout();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    dispatch(&mut state, Event::ShowPage(Page::Espacios)).await;

    while state.running {
        let frame = render(&state, &theme, cols);
        stdout.write_all(format!("{CLEAR_SCREEN}{frame}\n> ").as_bytes()).await?;
        stdout.flush().await?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        match parse_command(&line) {
            Ok(Some(event)) => {
                dispatch(&mut state, event).await;
            }
            Ok(None) => {}
            Err(message) => {
                tracing::debug!(line = %line, "rejected command");
                state.status = Some(horarios_admin::app::StatusMessage::error(message));
            }
        }
    }

    stdout.write_all(b"\n").await?;
    tracing::info!("horarios-admin finished");
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let args = match parse_args(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(message) => {
            eprintln!("{message}\n\n{USAGE}");
            std::process::exit(2);
        }
    };
    if args.help {
        println!("{USAGE}");
        return;
    }

    if let Err(e) = run(args).await {
        tracing::error!(error = %e, "horarios-admin failed");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> std::result::Result<Args, String> {
        parse_args(list.iter().map(ToString::to_string))
    }

    #[test]
    fn parses_every_option() {
        let parsed = args(&["--config", "c.toml", "--set", "timeout_secs=5", "--offline", "datos"]).unwrap();
        assert_eq!(parsed.config, Some(PathBuf::from("c.toml")));
        assert_eq!(parsed.overrides.get("timeout_secs").map(String::as_str), Some("5"));
        assert_eq!(parsed.offline, Some(PathBuf::from("datos")));
    }

    #[test]
    fn rejects_malformed_arguments() {
        assert!(args(&["--set", "timeout_secs"]).is_err());
        assert!(args(&["--offline"]).is_err());
        assert!(args(&["--verbose"]).is_err());
    }
}
