//! Configuration command handler.
//!
//! This module implements the `cfg` command, which displays the current
//! Showdown configuration settings with their sources (default,
//! environment, or configuration file).
//!
//! # Example Output
//!
//! ```json
//! {
//!   "format": {
//!     "value": "text",
//!     "source": "default"
//!   },
//!   "log": {
//!     "value": null,
//!     "source": "default"
//!   }
//! }
//! ```

use crate::config;
use crate::error::CliError;
use crate::ui;
use std::io::Write;

/// Handle the cfg command.
///
/// Loads the current configuration with source tracking and displays it
/// as formatted JSON to the output stream.
///
/// # Errors
///
/// Returns `CliError::Config` if configuration loading fails.
/// Returns `CliError::Io` if writing to the output stream fails.
pub fn handle_cfg_command(out: &mut dyn Write, err: &mut dyn Write) -> Result<(), CliError> {
    let resolved = match config::load_with_sources() {
        Ok(r) => r,
        Err(e) => {
            ui::write_error(err, &format!("Invalid configuration: {}", e))?;
            return Err(CliError::Config(format!("Invalid configuration: {}", e)));
        }
    };

    let config::ConfigResolved { config, sources } = resolved;
    let display = serde_json::json!({
        "format": {
            "value": config.format,
            "source": sources.format,
        },
        "log": {
            "value": config.log,
            "source": sources.log,
        }
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}
