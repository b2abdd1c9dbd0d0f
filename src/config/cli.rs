use crate::utils::error::Result;
use clap::Parser;
use std::io::Read;

#[derive(Debug, Clone, Parser)]
#[command(name = "request-params")]
#[command(about = "Normalize list-endpoint query parameters into filters, sortBy, limit and offset")]
pub struct CliConfig {
    /// Query string, request target (/path?query) or URL; read from stdin when omitted
    pub input: Option<String>,

    /// Treat the input as a JSON object body instead of a query string
    #[arg(long)]
    pub json: bool,

    /// Path to a TOML file overriding parameter names and the row cap
    #[arg(short, long)]
    pub config: Option<String>,

    /// Pretty-print the normalized output
    #[arg(long)]
    pub pretty: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    /// Emit logs as JSON lines on stderr
    #[arg(long)]
    pub json_logs: bool,
}

impl CliConfig {
    /// The positional input, or everything `reader` yields when it was omitted.
    pub fn read_input<R: Read>(&self, mut reader: R) -> Result<String> {
        match &self.input {
            Some(input) => Ok(input.clone()),
            None => {
                let mut buffer = String::new();
                reader.read_to_string(&mut buffer)?;
                Ok(buffer)
            }
        }
    }
}
