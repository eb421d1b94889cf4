//! Purpose: Provide the runtime JSON decode entrypoint and failure classification.
//! Exports: `from_str`, `ParseFailureCategory`, `categorize_error`, `categorize_message`, `hint_for_error`.
//! Role: Parser boundary that centralizes serde_json usage details.
//! Invariants: Category labels are stable kebab-case strings.
//! Invariants: Hints never echo the input payload.
//! Invariants: serde_json defaults apply: nesting capped at 128, lone surrogate escapes rejected.
//! Notes: Error mapping into the crate `Error` is done by callsites so domain context stays explicit.

use serde::de::DeserializeOwned;
use serde_json::error::Category;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ParseFailureCategory {
    Syntax,
    Truncated,
    NumericRange,
    DepthLimit,
    Unknown,
}

impl ParseFailureCategory {
    pub fn label(self) -> &'static str {
        match self {
            ParseFailureCategory::Syntax => "syntax",
            ParseFailureCategory::Truncated => "truncated",
            ParseFailureCategory::NumericRange => "numeric-range",
            ParseFailureCategory::DepthLimit => "depth-limit",
            ParseFailureCategory::Unknown => "unknown",
        }
    }
}

pub fn from_str<T: DeserializeOwned>(input: &str) -> Result<T, serde_json::Error> {
    serde_json::from_str(input)
}

pub fn categorize_error(err: &serde_json::Error) -> ParseFailureCategory {
    if err.classify() == Category::Eof {
        return ParseFailureCategory::Truncated;
    }
    match categorize_message(&err.to_string()) {
        ParseFailureCategory::Unknown if err.is_syntax() => ParseFailureCategory::Syntax,
        category => category,
    }
}

pub fn categorize_message(message: &str) -> ParseFailureCategory {
    let message = message.to_ascii_lowercase();
    if message.contains("recursion limit") {
        ParseFailureCategory::DepthLimit
    } else if message.contains("number out of range") {
        ParseFailureCategory::NumericRange
    } else if message.contains("eof while parsing") {
        ParseFailureCategory::Truncated
    } else {
        ParseFailureCategory::Unknown
    }
}

pub fn hint_for_error(err: &serde_json::Error, context: &str) -> String {
    let category = categorize_error(err);
    let advice = match category {
        ParseFailureCategory::Syntax => "check quoting, commas, and brackets",
        ParseFailureCategory::Truncated => "input ended before the JSON value was complete",
        ParseFailureCategory::NumericRange => "number does not fit a 64-bit float",
        ParseFailureCategory::DepthLimit => "reduce nesting depth",
        ParseFailureCategory::Unknown => "input is not valid JSON",
    };
    format!(
        "{advice} (parse category: {}; context: {context})",
        category.label()
    )
}

#[cfg(test)]
mod tests {
    use super::{ParseFailureCategory, categorize_error, from_str};
    use serde_json::Value;

    #[test]
    fn whitespace_only_is_truncated() {
        let err = from_str::<Value>("   ").unwrap_err();
        assert_eq!(categorize_error(&err), ParseFailureCategory::Truncated);
    }

    #[test]
    fn trailing_garbage_is_syntax() {
        let err = from_str::<Value>("1 2").unwrap_err();
        assert_eq!(categorize_error(&err), ParseFailureCategory::Syntax);
    }
}
