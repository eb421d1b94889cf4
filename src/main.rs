//! Purpose: `confjson` CLI entry point: decode one configuration string as JSON.
//! Role: Binary crate root; parses args, decodes via `confjson::Json`, emits JSON on stdout.
//! Invariants: Stdout carries only the decoded value; diagnostics go to stderr.
//! Invariants: Non-interactive errors are emitted as JSON on stderr.
//! Invariants: Process exit code is derived from `confjson::to_exit_code`.
use std::error::Error as StdError;
use std::io::{self, IsTerminal, Read, Write};

use clap::{Parser, ValueEnum, error::ErrorKind as ClapErrorKind};
use serde_json::{Map, Value, json};
use tracing_subscriber::EnvFilter;

mod render;

use confjson::{Error, ErrorKind, Json, to_exit_code};
use render::{RenderStyle, render_value};

#[derive(Parser, Debug)]
#[command(name = "confjson", version, about = "Decode a configuration string as JSON")]
struct Cli {
    /// Color output for --pretty and interactive errors.
    #[arg(long, value_enum, default_value_t = ColorMode::Auto)]
    color: ColorMode,

    /// Pretty-print the decoded value.
    #[arg(long)]
    pretty: bool,

    /// Raw value to decode. Read from stdin when omitted.
    #[arg(allow_negative_numbers = true)]
    value: Option<String>,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum ColorMode {
    Auto,
    Always,
    Never,
}

impl ColorMode {
    fn use_color(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

fn main() {
    init_tracing();
    let exit_code = match run() {
        Ok(code) => code,
        Err((err, color_mode)) => {
            emit_error(&err, color_mode);
            to_exit_code(err.kind())
        }
    };
    std::process::exit(exit_code);
}

fn run() -> Result<i32, (Error, ColorMode)> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => match err.kind() {
            ClapErrorKind::DisplayHelp | ClapErrorKind::DisplayVersion => {
                err.print().map_err(|io_err| {
                    (
                        Error::new(ErrorKind::Io)
                            .with_message("failed to write help")
                            .with_source(io_err),
                        ColorMode::Auto,
                    )
                })?;
                return Ok(0);
            }
            _ => {
                return Err((
                    Error::new(ErrorKind::Usage)
                        .with_message(clap_error_summary(&err))
                        .with_hint("Try `confjson --help`."),
                    ColorMode::Auto,
                ));
            }
        },
    };

    let color_mode = cli.color;
    decode_command(cli).map_err(|err| (err, color_mode))?;
    Ok(0)
}

fn decode_command(cli: Cli) -> Result<(), Error> {
    let raw = match cli.value {
        Some(value) => value,
        None => read_stdin()?,
    };
    tracing::debug!(bytes = raw.len(), "decoding value");

    let mut holder = Json::new();
    holder.decode(&raw).inspect_err(|err| {
        tracing::debug!(line = ?err.line(), column = ?err.column(), "decode failed");
    })?;
    if raw.is_empty() {
        tracing::info!("empty input; value left unset");
    }

    let style = if cli.pretty {
        RenderStyle::Pretty {
            color: cli.color.use_color(io::stdout().is_terminal()),
        }
    } else {
        RenderStyle::Compact
    };
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", render_value(holder.data(), style)).map_err(|err| {
        Error::new(ErrorKind::Io)
            .with_message("failed to write output")
            .with_source(err)
    })
}

fn read_stdin() -> Result<String, Error> {
    let mut raw = String::new();
    io::stdin().read_to_string(&mut raw).map_err(|err| {
        Error::new(ErrorKind::Io)
            .with_message("failed to read stdin")
            .with_hint("Stdin must be UTF-8 text.")
            .with_source(err)
    })?;
    strip_trailing_newline(&mut raw);
    Ok(raw)
}

fn strip_trailing_newline(raw: &mut String) {
    if raw.ends_with('\n') {
        raw.pop();
        if raw.ends_with('\r') {
            raw.pop();
        }
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

fn emit_error(err: &Error, color_mode: ColorMode) {
    let is_tty = io::stderr().is_terminal();
    if is_tty {
        eprintln!("{}", error_text(err, color_mode.use_color(is_tty)));
        return;
    }

    let value = error_json(err);
    let json = serde_json::to_string(&value).unwrap_or_else(|_| {
        "{\"error\":{\"kind\":\"Internal\",\"message\":\"json encode failed\"}}".to_string()
    });
    eprintln!("{json}");
}

fn error_message(err: &Error) -> String {
    err.message()
        .map(str::to_string)
        .unwrap_or_else(|| format!("{:?}", err.kind()))
}

fn error_text(err: &Error, use_color: bool) -> String {
    let label = if use_color {
        "\u{1b}[31merror:\u{1b}[0m"
    } else {
        "error:"
    };
    let mut text = format!("{label} {}", error_message(err));
    if let (Some(line), Some(column)) = (err.line(), err.column()) {
        text.push_str(&format!(" (line {line}, column {column})"));
    }
    if let Some(hint) = err.hint() {
        text.push_str(&format!("\nhint: {hint}"));
    }
    text
}

fn error_json(err: &Error) -> Value {
    let mut inner = Map::new();
    inner.insert("kind".to_string(), json!(format!("{:?}", err.kind())));
    inner.insert("message".to_string(), json!(error_message(err)));
    if let Some(hint) = err.hint() {
        inner.insert("hint".to_string(), json!(hint));
    }
    if let Some(line) = err.line() {
        inner.insert("line".to_string(), json!(line));
    }
    if let Some(column) = err.column() {
        inner.insert("column".to_string(), json!(column));
    }
    let causes = error_causes(err);
    if !causes.is_empty() {
        inner.insert("causes".to_string(), json!(causes));
    }

    let mut outer = Map::new();
    outer.insert("error".to_string(), Value::Object(inner));
    Value::Object(outer)
}

fn error_causes(err: &Error) -> Vec<String> {
    let mut causes = Vec::new();
    let mut current = err.source();
    while let Some(source) = current {
        causes.push(source.to_string());
        current = source.source();
    }
    causes
}

fn clap_error_summary(err: &clap::Error) -> String {
    for line in err.to_string().lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if let Some(rest) = trimmed.strip_prefix("error:") {
            return rest.trim().to_string();
        }
        return trimmed.to_string();
    }
    "invalid arguments".to_string()
}

#[cfg(test)]
mod tests {
    use super::{Cli, ColorMode, error_json, strip_trailing_newline};
    use clap::Parser;
    use confjson::{Error, ErrorKind};

    #[test]
    fn strips_one_trailing_newline() {
        let mut raw = "{\"a\":1}\r\n".to_string();
        strip_trailing_newline(&mut raw);
        assert_eq!(raw, "{\"a\":1}");

        let mut blank = "\n".to_string();
        strip_trailing_newline(&mut blank);
        assert!(blank.is_empty());

        let mut double = "1\n\n".to_string();
        strip_trailing_newline(&mut double);
        assert_eq!(double, "1\n");
    }

    #[test]
    fn error_envelope_has_stable_keys() {
        let err = Error::new(ErrorKind::Malformed)
            .with_message("invalid JSON value")
            .with_hint("h")
            .with_position(2, 5);
        let value = error_json(&err);
        assert_eq!(value["error"]["kind"], "Malformed");
        assert_eq!(value["error"]["message"], "invalid JSON value");
        assert_eq!(value["error"]["hint"], "h");
        assert_eq!(value["error"]["line"], 2);
        assert_eq!(value["error"]["column"], 5);
        assert!(value["error"].get("causes").is_none());
    }

    #[test]
    fn color_defaults_to_auto() {
        let cli = Cli::try_parse_from(["confjson", "42"]).expect("parse");
        assert_eq!(cli.color, ColorMode::Auto);
        assert_eq!(cli.value.as_deref(), Some("42"));
        assert!(!cli.pretty);
        assert!(ColorMode::Always.use_color(false));
        assert!(!ColorMode::Never.use_color(true));
    }
}
