//! Recast CLI — the failure adapters applied to everyday operations.
//!
//! Usage:
//!   recast read <path> [--or text] [--json]
//!   recast port <value> [--json]

use clap::{Parser, Subcommand};
use recast::{ignores, io_kind, of_type, reraises, BoxError, FromMessage, Intercept, Report};
use std::io::{self, Write};
use std::num::ParseIntError;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "recast",
    version,
    about = "Suppress or translate failures in call chains"
)]
struct Cli {
    /// Print failures as JSON reports
    #[arg(long, global = true)]
    json: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a file, falling back to a default when it doesn't exist
    Read {
        /// Path to the file
        path: PathBuf,
        /// Text printed when the file is missing
        #[arg(long = "or", default_value = "")]
        fallback: String,
    },
    /// Parse a TCP port number
    Port {
        /// The value to parse
        value: String,
    },
}

/// Raised when a port argument can't be used.
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
struct InvalidPort {
    message: String,
    #[source]
    cause: BoxError,
}

impl FromMessage for InvalidPort {
    fn from_message(message: String, cause: BoxError) -> Self {
        Self { message, cause }
    }
}

/// Read `path`, returning `fallback` if it doesn't exist.
fn read_or(path: &Path, fallback: &str) -> Result<String, BoxError> {
    ignores(io_kind(io::ErrorKind::NotFound), fallback.to_owned())
        .named("read")
        .call(|| std::fs::read_to_string(path))
}

fn parse_port(value: &str) -> Result<u16, BoxError> {
    reraises(of_type::<ParseIntError>(), of_type::<InvalidPort>())
        .make_message(|m| format!("invalid port '{}': {}", value, m))
        .named("port")
        .call(|| value.parse::<u16>())
}

/// Write the failure to `out` as JSON or to `errs` as text. Returns the exit code.
fn report_failure(err: &BoxError, json: bool, out: &mut dyn Write, errs: &mut dyn Write) -> i32 {
    let report = Report::new(&**err);
    let written = if json {
        match report.to_json() {
            Ok(line) => writeln!(out, "{}", line),
            Err(e) => writeln!(errs, "Error: {}", e),
        }
    } else {
        writeln!(errs, "Error: {}", report)
    };
    if let Err(e) = written {
        tracing::warn!(error = %e, "failed to write failure report");
    }
    1
}

fn cmd_read(
    path: &Path,
    fallback: &str,
    json: bool,
    out: &mut dyn Write,
    errs: &mut dyn Write,
) -> i32 {
    match read_or(path, fallback) {
        Ok(text) => match write!(out, "{}", text) {
            Ok(()) => 0,
            Err(e) => report_failure(&e.into(), json, out, errs),
        },
        Err(e) => report_failure(&e, json, out, errs),
    }
}

fn cmd_port(value: &str, json: bool, out: &mut dyn Write, errs: &mut dyn Write) -> i32 {
    match parse_port(value) {
        Ok(port) => match writeln!(out, "{}", port) {
            Ok(()) => 0,
            Err(e) => report_failure(&e.into(), json, out, errs),
        },
        Err(e) => report_failure(&e, json, out, errs),
    }
}

/// Log filter comes from `RECAST_LOG`, defaulting to `warn`.
fn init_tracing() {
    let filter = EnvFilter::try_from_env("RECAST_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() {
    init_tracing();
    let cli = Cli::parse();
    let mut out = io::stdout();
    let mut errs = io::stderr();
    let code = match cli.command {
        Commands::Read { path, fallback } => {
            cmd_read(&path, &fallback, cli.json, &mut out, &mut errs)
        }
        Commands::Port { value } => cmd_port(&value, cli.json, &mut out, &mut errs),
    };
    let _ = out.flush();
    std::process::exit(code);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(cmd: impl FnOnce(&mut Vec<u8>, &mut Vec<u8>) -> i32) -> (i32, String, String) {
        let mut out = Vec::new();
        let mut errs = Vec::new();
        let code = cmd(&mut out, &mut errs);
        (
            code,
            String::from_utf8(out).unwrap(),
            String::from_utf8(errs).unwrap(),
        )
    }

    #[test]
    fn read_returns_file_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("motd.txt");
        std::fs::write(&path, "hello").unwrap();

        assert_eq!(read_or(&path, "fallback").unwrap(), "hello");
    }

    #[test]
    fn read_missing_file_returns_fallback() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.txt");

        assert_eq!(read_or(&path, "fallback").unwrap(), "fallback");
    }

    #[test]
    fn read_directory_is_still_an_error() {
        let dir = tempfile::tempdir().unwrap();

        let err = read_or(dir.path(), "fallback").unwrap_err();
        let io_err = err.downcast_ref::<io::Error>().expect("io error propagates");
        assert_ne!(io_err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn parse_port_accepts_valid_port() {
        assert_eq!(parse_port("8080").unwrap(), 8080);
    }

    #[test]
    fn parse_port_translates_parse_failure() {
        let err = parse_port("http").unwrap_err();
        assert!(err.is::<InvalidPort>());
        assert_eq!(
            err.to_string(),
            "invalid port 'http': invalid digit found in string"
        );
        assert!(err.source().unwrap().is::<ParseIntError>());
    }

    #[test]
    fn report_lists_parse_failure_as_cause() {
        let err = parse_port("70000").unwrap_err();
        let report = Report::new(&*err);
        assert_eq!(report.causes, vec!["number too large to fit in target type"]);
    }

    #[test]
    fn cmd_port_prints_port_and_exits_zero() {
        let (code, out, errs) = run(|out, errs| cmd_port("8080", false, out, errs));
        assert_eq!(code, 0);
        assert_eq!(out, "8080\n");
        assert!(errs.is_empty());
    }

    #[test]
    fn cmd_port_text_failure_lists_cause_chain() {
        let (code, out, errs) = run(|out, errs| cmd_port("http", false, out, errs));
        assert_eq!(code, 1);
        assert!(out.is_empty());
        assert_eq!(
            errs,
            "Error: invalid port 'http': invalid digit found in string\n\
             caused by: invalid digit found in string\n"
        );
    }

    #[test]
    fn cmd_port_json_failure_prints_report_line() {
        let (code, out, errs) = run(|out, errs| cmd_port("http", true, out, errs));
        assert_eq!(code, 1);
        assert!(errs.is_empty());
        assert_eq!(
            out,
            "{\"message\":\"invalid port 'http': invalid digit found in string\",\
             \"causes\":[\"invalid digit found in string\"]}\n"
        );
    }

    #[test]
    fn cmd_read_missing_file_prints_fallback() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.txt");

        let (code, out, errs) = run(|out, errs| cmd_read(&path, "nothing here", false, out, errs));
        assert_eq!(code, 0);
        assert_eq!(out, "nothing here");
        assert!(errs.is_empty());
    }

    #[test]
    fn cmd_read_directory_exits_one() {
        let dir = tempfile::tempdir().unwrap();

        let (code, out, errs) = run(|out, errs| cmd_read(dir.path(), "", false, out, errs));
        assert_eq!(code, 1);
        assert!(out.is_empty());
        assert!(errs.starts_with("Error: "));
    }

    #[test]
    fn cmd_read_directory_json_report_parses() {
        let dir = tempfile::tempdir().unwrap();

        let (code, out, _) = run(|out, errs| cmd_read(dir.path(), "", true, out, errs));
        assert_eq!(code, 1);
        let report: Report = serde_json::from_str(out.trim_end()).unwrap();
        assert!(!report.message.is_empty());
    }
}
