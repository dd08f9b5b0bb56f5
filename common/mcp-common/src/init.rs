//! Tracing setup shared by MCP server binaries
//!
//! Logs always go to stderr: stdout carries the MCP stdio transport and a
//! stray log line there corrupts the protocol stream.

use std::str::FromStr;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Output format for the stderr log layer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable lines without ANSI colors
    #[default]
    Text,
    /// One JSON object per event, for log aggregation
    Json,
}

impl FromStr for LogFormat {
    type Err = std::convert::Infallible;

    /// Anything other than `json` (case-insensitive) falls back to text.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("json") {
            Ok(LogFormat::Json)
        } else {
            Ok(LogFormat::Text)
        }
    }
}

impl LogFormat {
    /// Read the format from the `LOG_FORMAT` environment variable
    pub fn from_env() -> Self {
        std::env::var("LOG_FORMAT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_default()
    }
}

/// Build the default filter directive for a crate (`<crate>=info`)
fn default_directive(crate_name: &str) -> String {
    format!("{}=info", crate_name.replace('-', "_"))
}

/// Initialize tracing for an MCP server
///
/// `RUST_LOG` directives are honoured; `<crate_name>=info` is always added so
/// the server's own startup lines show up without any configuration. The
/// format comes from `LOG_FORMAT` (see [`LogFormat::from_env`]).
///
/// ```rust,ignore
/// mcp_common::init_tracing("todoist_mcp")?;
/// ```
pub fn init_tracing(crate_name: &str) -> anyhow::Result<()> {
    let filter =
        EnvFilter::from_default_env().add_directive(default_directive(crate_name).parse()?);
    let registry = tracing_subscriber::registry().with(filter);

    match LogFormat::from_env() {
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .try_init()?,
        LogFormat::Text => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .try_init()?,
    }

    Ok(())
}
