// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Writes the C header declaring the ckd exports.
//!
//! ```text
//! ckd-header --output include/ckd_checked.h
//! RUST_LOG=debug ckd-header --guard RT_CHECKED_H --no-compat
//! ```

use anyhow::{Context, Result};
use ckd_ffi::header::{self, HeaderOptions};
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "ckd-header")]
#[command(about = "Write the C header for the ckd checked-arithmetic exports")]
#[command(version)]
struct Cli {
    /// File to write the header to. Writes to stdout when omitted.
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Include guard macro name.
    #[arg(short, long, value_name = "NAME", default_value = header::DEFAULT_GUARD)]
    guard: String,

    /// Leave out the unsigned-to-signed and legacy 32-bit helpers.
    #[arg(long)]
    no_compat: bool,

    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .try_init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let options = HeaderOptions::new(cli.guard, !cli.no_compat)?;
    let text = header::render(&options);

    match cli.output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("failed to create {}", parent.display()))?;
            }
            std::fs::write(&path, &text)
                .with_context(|| format!("failed to write header to {}", path.display()))?;
            info!(path = %path.display(), bytes = text.len(), "wrote header");
        }
        None => {
            std::io::stdout()
                .lock()
                .write_all(text.as_bytes())
                .context("failed to write header to stdout")?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_defaults() {
        let cli = Cli::try_parse_from(["ckd-header"]).unwrap();
        assert_eq!(cli.output, None);
        assert_eq!(cli.guard, header::DEFAULT_GUARD);
        assert!(!cli.no_compat);
        assert!(!cli.verbose);
    }

    #[test]
    fn test_parse_no_compat_and_guard() {
        let cli = Cli::try_parse_from(["ckd-header", "--no-compat", "--guard", "X"]).unwrap();
        assert!(cli.no_compat);
        assert_eq!(cli.guard, "X");

        let options = HeaderOptions::new(cli.guard, !cli.no_compat).unwrap();
        let text = header::render(&options);
        assert!(text.contains("#ifndef X\n"));
        assert!(!text.contains("ckd_utos_"));
    }

    #[test]
    fn test_parse_output_and_verbose() {
        let cli = Cli::try_parse_from(["ckd-header", "-o", "include/ckd.h", "-v"]).unwrap();
        assert_eq!(cli.output, Some(PathBuf::from("include/ckd.h")));
        assert!(cli.verbose);
    }
}
