//! Output → human/json/raw string formatting.
//!
//! Three modes:
//! - **Human** (default): labelled, e.g. `Partial: 2`, `Final: 6`, `true`
//! - **JSON** (`--json`): `serde_json::to_string_pretty`
//! - **Raw** (`--raw`): Bare values, no labels

use tokenmngr_executor::{Error, Output, TokenInfo};

/// Output formatting mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Human,
    Json,
    Raw,
}

/// Format a successful output.
pub fn format_output(output: &Output, mode: OutputMode) -> String {
    match mode {
        OutputMode::Json => serde_json::to_string_pretty(output)
            .unwrap_or_else(|e| format!("{{\"error\": \"{}\"}}", e)),
        OutputMode::Raw => format_raw(output),
        OutputMode::Human => format_human(output),
    }
}

/// Format an error.
pub fn format_error(err: &Error, mode: OutputMode) -> String {
    match mode {
        OutputMode::Json => serde_json::to_string_pretty(&serde_json::json!({
            "error": format!("{}", err)
        }))
        .unwrap_or_else(|_| format!("{{\"error\": \"{}\"}}", err)),
        OutputMode::Raw => format!("{}", err),
        OutputMode::Human => format!("(error) {}", err),
    }
}

fn format_human(output: &Output) -> String {
    match output {
        Output::Bool(b) => b.to_string(),
        Output::Partial(n) => format!("Partial: {}", n),
        Output::Final(n) => format!("Final: {}", n),
        Output::Token(info) => format_token(info),
        Output::Ids(ids) if ids.is_empty() => "(empty list)".to_string(),
        Output::Ids(ids) => ids
            .iter()
            .enumerate()
            .map(|(i, id)| format!("{}) {}", i + 1, id))
            .collect::<Vec<_>>()
            .join("\n"),
        Output::Pong { version } => format!("PONG {}", version),
    }
}

fn format_token(info: &TokenInfo) -> String {
    format!(
        "Token Id: {}\nName: {}\nLow: {}\nMid: {}\nHigh: {}\nPartial: {}\nFinal: {}",
        info.id, info.name, info.low, info.mid, info.high, info.partial, info.final_
    )
}

fn format_raw(output: &Output) -> String {
    match output {
        Output::Bool(b) => b.to_string(),
        Output::Partial(n) | Output::Final(n) => n.to_string(),
        Output::Token(info) => format!(
            "{} {} {} {} {} {} {}",
            info.id, info.name, info.low, info.mid, info.high, info.partial, info.final_
        ),
        Output::Ids(ids) => ids.join("\n"),
        Output::Pong { version } => version.clone(),
    }
}
