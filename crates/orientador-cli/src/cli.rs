//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Orientador - vocational guidance assistant for university and career choices.
#[derive(Debug, Parser)]
#[command(name = "orientador")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Universities document (PDF or text)
    #[arg(short, long, global = true, env = "ORIENTADOR_DOCUMENT")]
    pub document: Option<PathBuf>,

    /// Ollama model identifier
    #[arg(short, long, global = true, env = "ORIENTADOR_MODEL")]
    pub model: Option<String>,

    /// Show debug logs on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CliFormat {
    /// Human-readable tables and text (default)
    Table,
    /// JSON format
    Json,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Talk with the counselor (default)
    Chat,

    /// Ask a single question and exit
    Ask(AskArgs),

    /// Run a catalog tool directly, without the language model
    Tool(ToolArgs),

    /// List the tools available to the counselor
    Tools,

    /// Show document and index statistics
    Stats,
}

/// Arguments for the ask command.
#[derive(Debug, Parser)]
pub struct AskArgs {
    /// The question, in free text
    #[arg(required = true, num_args = 1..)]
    pub question: Vec<String>,
}

/// Arguments for the tool command.
#[derive(Debug, Parser)]
pub struct ToolArgs {
    /// Tool name (e.g. buscarPorCarrera)
    pub name: String,

    /// Parameters as clave=valor pairs
    pub params: Vec<String>,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_means_chat() {
        let cli = Cli::try_parse_from(["orientador"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn test_ask_joins_words() {
        let cli = Cli::try_parse_from(["orientador", "ask", "¿Dónde", "estudio", "medicina?"]).unwrap();
        match cli.command {
            Some(Command::Ask(args)) => assert_eq!(args.question.join(" "), "¿Dónde estudio medicina?"),
            _ => panic!("Expected Ask command"),
        }
    }

    #[test]
    fn test_ask_requires_question() {
        assert!(Cli::try_parse_from(["orientador", "ask"]).is_err());
    }

    #[test]
    fn test_tool_command_with_params() {
        let cli = Cli::try_parse_from([
            "orientador",
            "--format",
            "json",
            "tool",
            "buscarPorCarrera",
            "carrera=Medicina",
        ])
        .unwrap();
        assert_eq!(cli.format, Some(CliFormat::Json));
        match cli.command {
            Some(Command::Tool(args)) => {
                assert_eq!(args.name, "buscarPorCarrera");
                assert_eq!(args.params, vec!["carrera=Medicina"]);
            }
            _ => panic!("Expected Tool command"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["orientador", "stats", "--document", "guia.txt", "-v"]).unwrap();
        assert_eq!(cli.document, Some(PathBuf::from("guia.txt")));
        assert!(cli.verbose);
        assert!(matches!(cli.command, Some(Command::Stats)));
    }
}
