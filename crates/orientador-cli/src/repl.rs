//! Interactive chat with the counselor.

use crate::commands;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use orientador_agent::{Agent, WELCOME_MESSAGE};
use orientador_domain::ChatModel;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::path::PathBuf;
use tracing::debug;

/// Something typed at the prompt.
#[derive(Debug, PartialEq, Eq)]
pub enum ReplCommand {
    /// Leave the chat
    Exit,
    /// Show the slash commands
    Help,
    /// Start a new conversation
    Reset,
    /// Re-read the document on the next query
    Reload,
    /// Show the tool table
    Tools,
    /// Show document statistics
    Stats,
    /// A message for the counselor
    Message(String),
}

/// Run the interactive chat.
pub async fn run_repl<M: ChatModel>(
    agent: &mut Agent<M>,
    history_size: usize,
    formatter: &Formatter,
) -> Result<()> {
    println!("{}", formatter.assistant(WELCOME_MESSAGE));
    println!("{}", formatter.info("Escribí /ayuda para ver los comandos, /salir para terminar"));
    println!();

    let editor_config = rustyline::Config::builder()
        .max_history_size(history_size)?
        .auto_add_history(false)
        .build();
    let mut editor = DefaultEditor::with_config(editor_config)?;

    let history_path = get_history_path()?;
    let _ = editor.load_history(&history_path);

    loop {
        match editor.readline("vos> ") {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }

                editor.add_history_entry(line).ok();

                match parse_repl_line(line) {
                    Ok(ReplCommand::Exit) => {
                        println!("{}", formatter.info("¡Éxitos con tu elección!"));
                        break;
                    }
                    Ok(ReplCommand::Help) => print_help(formatter),
                    Ok(ReplCommand::Reset) => {
                        agent.reset();
                        println!("{}", formatter.success("Conversación reiniciada"));
                    }
                    Ok(ReplCommand::Reload) => {
                        agent.tools_mut().catalog_mut().invalidate();
                        println!(
                            "{}",
                            formatter.success("El documento se volverá a leer en la próxima consulta")
                        );
                    }
                    Ok(ReplCommand::Tools) => {
                        if let Err(e) = commands::execute_tools(agent.tools(), formatter) {
                            eprintln!("{}", formatter.error(&e.to_string()));
                        }
                    }
                    Ok(ReplCommand::Stats) => {
                        if let Err(e) = commands::execute_stats(agent.tools().catalog(), formatter) {
                            eprintln!("{}", formatter.error(&e.to_string()));
                        }
                    }
                    Ok(ReplCommand::Message(message)) => {
                        debug!("Sending message to {}", agent.model_name());
                        match agent.send(&message).await {
                            Ok(reply) => {
                                println!("{}", formatter.assistant(&reply));
                                println!();
                            }
                            Err(e) => eprintln!("{}", formatter.error(&e.to_string())),
                        }
                    }
                    Err(e) => eprintln!("{}", formatter.error(&e.to_string())),
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", formatter.info("Usá /salir para terminar"));
            }
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                eprintln!("{}", formatter.error(&format!("Error: {}", err)));
                break;
            }
        }
    }

    editor.save_history(&history_path).ok();

    Ok(())
}

/// Parse a line typed at the prompt.
///
/// Lines starting with `/` are chat commands; anything else goes to the counselor.
pub fn parse_repl_line(line: &str) -> Result<ReplCommand> {
    let line = line.trim();
    if line.is_empty() {
        return Err(CliError::InvalidInput("Empty message".to_string()));
    }

    let Some(command) = line.strip_prefix('/') else {
        return Ok(ReplCommand::Message(line.to_string()));
    };

    match command.trim().to_lowercase().as_str() {
        "salir" | "exit" | "quit" | "q" => Ok(ReplCommand::Exit),
        "ayuda" | "help" | "?" => Ok(ReplCommand::Help),
        "reiniciar" => Ok(ReplCommand::Reset),
        "recargar" => Ok(ReplCommand::Reload),
        "herramientas" => Ok(ReplCommand::Tools),
        "estado" => Ok(ReplCommand::Stats),
        other => Err(CliError::InvalidInput(format!(
            "Comando desconocido: /{}. Escribí /ayuda para ver los comandos.",
            other
        ))),
    }
}

fn get_history_path() -> Result<PathBuf> {
    let dir = Config::dir()?;
    std::fs::create_dir_all(&dir)?;
    Ok(dir.join("history.txt"))
}

fn print_help(formatter: &Formatter) {
    println!("{}", formatter.info("Comandos disponibles:"));
    println!();
    println!("  /ayuda          - Muestra esta ayuda");
    println!("  /reiniciar      - Empieza una conversación nueva");
    println!("  /recargar       - Vuelve a leer el documento de universidades");
    println!("  /herramientas   - Lista las herramientas de consulta");
    println!("  /estado         - Muestra datos del documento cargado");
    println!("  /salir          - Termina la conversación");
    println!();
    println!("  Cualquier otro texto se envía al orientador.");
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_is_message() {
        assert_eq!(
            parse_repl_line("  me gusta la biología ").unwrap(),
            ReplCommand::Message("me gusta la biología".to_string())
        );
    }

    #[test]
    fn test_slash_commands() {
        assert_eq!(parse_repl_line("/salir").unwrap(), ReplCommand::Exit);
        assert_eq!(parse_repl_line("/AYUDA").unwrap(), ReplCommand::Help);
        assert_eq!(parse_repl_line("/reiniciar").unwrap(), ReplCommand::Reset);
        assert_eq!(parse_repl_line("/recargar").unwrap(), ReplCommand::Reload);
        assert_eq!(parse_repl_line("/herramientas").unwrap(), ReplCommand::Tools);
        assert_eq!(parse_repl_line("/estado").unwrap(), ReplCommand::Stats);
    }

    #[test]
    fn test_unknown_slash_command() {
        let err = parse_repl_line("/inscribirme").unwrap_err();
        assert!(err.to_string().contains("/inscribirme"));
    }

    #[test]
    fn test_blank_line_rejected() {
        assert!(parse_repl_line("   ").is_err());
    }
}
