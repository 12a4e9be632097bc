//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use orientador_catalog::CatalogStats;
use orientador_domain::ToolSpec;
use orientador_tools::input_schema;
use serde_json::json;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Selected output format.
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Format tool declarations.
    pub fn format_tools(&self, specs: &[ToolSpec]) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let tools: Vec<serde_json::Value> = specs
                    .iter()
                    .map(|spec| {
                        json!({
                            "name": spec.name,
                            "description": spec.description,
                            "inputSchema": input_schema(spec),
                        })
                    })
                    .collect();
                Ok(serde_json::to_string_pretty(&tools)?)
            }
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["Herramienta", "Parámetros", "Descripción"]);
                for spec in specs {
                    builder.push_record([
                        spec.name.to_string(),
                        spec.param_names().collect::<Vec<_>>().join(", "),
                        spec.description.to_string(),
                    ]);
                }
                Ok(self.render(builder))
            }
        }
    }

    /// Format document statistics.
    pub fn format_stats(&self, stats: &CatalogStats) -> Result<String> {
        if self.format == OutputFormat::Json {
            return Ok(serde_json::to_string_pretty(stats)?);
        }

        let mut builder = Builder::default();
        builder.push_record(["Dato", "Valor"]);
        builder.push_record(["Documento".to_string(), stats.source.clone()]);
        builder.push_record(["Caracteres".to_string(), stats.characters.to_string()]);
        builder.push_record(["Líneas".to_string(), stats.lines.to_string()]);
        builder.push_record(["Universidades".to_string(), stats.universities.to_string()]);
        builder.push_record(["Carreras".to_string(), stats.careers.to_string()]);
        builder.push_record(["Asociaciones".to_string(), stats.associations.to_string()]);

        let mut out = self.render(builder);
        if let Some(error) = &stats.load_error {
            out.push('\n');
            out.push_str(&self.warning(&format!("No se pudo leer el documento: {}", error)));
        }
        Ok(out)
    }

    /// Format the plain text answer of a tool.
    pub fn format_tool_output(&self, tool: &str, output: &str) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&json!({
                "tool": tool,
                "output": output,
            }))?),
            OutputFormat::Table => Ok(output.to_string()),
        }
    }

    /// Format the counselor's answer to a question.
    pub fn format_reply(&self, question: &str, reply: &str) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&json!({
                "question": question,
                "answer": reply,
            }))?),
            OutputFormat::Table => Ok(self.assistant(reply)),
        }
    }

    /// Format a message from the counselor.
    pub fn assistant(&self, message: &str) -> String {
        self.colorize(message, "cyan")
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    fn render(&self, builder: Builder) -> String {
        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));
        table.to_string()
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            _ => text.to_string(),
        }
    }
}
