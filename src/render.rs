//! Purpose: Format decoded values for CLI output, optionally with ANSI color.
//! Exports: `render_value`, `RenderStyle`.
//! Role: Pure formatter used by the CLI emission path.
//! Invariants: Uncolored pretty output equals `serde_json::to_string_pretty`.
//! Invariants: Compact output equals `serde_json::to_string`.
use serde_json::{Map, Value};

const INDENT: &str = "  ";

const KEY: &str = "36";
const STRING: &str = "32";
const NUMBER: &str = "33";
const LITERAL: &str = "35";

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RenderStyle {
    Compact,
    Pretty { color: bool },
}

pub fn render_value(value: &Value, style: RenderStyle) -> String {
    match style {
        RenderStyle::Compact => value.to_string(),
        RenderStyle::Pretty { color } => {
            let mut out = String::new();
            Painter { color, out: &mut out }.value(value, 0);
            out
        }
    }
}

struct Painter<'a> {
    color: bool,
    out: &'a mut String,
}

impl Painter<'_> {
    fn value(&mut self, value: &Value, depth: usize) {
        match value {
            Value::Null => self.paint("null", LITERAL),
            Value::Bool(flag) => self.paint(if *flag { "true" } else { "false" }, LITERAL),
            Value::Number(number) => self.paint(&number.to_string(), NUMBER),
            Value::String(text) => self.paint(&quote(text), STRING),
            Value::Array(items) => self.array(items, depth),
            Value::Object(map) => self.object(map, depth),
        }
    }

    fn array(&mut self, items: &[Value], depth: usize) {
        if items.is_empty() {
            self.out.push_str("[]");
            return;
        }
        self.out.push('[');
        for (idx, item) in items.iter().enumerate() {
            self.separator(idx, depth + 1);
            self.value(item, depth + 1);
        }
        self.close(']', depth);
    }

    fn object(&mut self, map: &Map<String, Value>, depth: usize) {
        if map.is_empty() {
            self.out.push_str("{}");
            return;
        }
        self.out.push('{');
        for (idx, (key, item)) in map.iter().enumerate() {
            self.separator(idx, depth + 1);
            self.paint(&quote(key), KEY);
            self.out.push_str(": ");
            self.value(item, depth + 1);
        }
        self.close('}', depth);
    }

    fn separator(&mut self, idx: usize, depth: usize) {
        if idx > 0 {
            self.out.push(',');
        }
        self.newline(depth);
    }

    fn close(&mut self, bracket: char, depth: usize) {
        self.newline(depth);
        self.out.push(bracket);
    }

    fn newline(&mut self, depth: usize) {
        self.out.push('\n');
        for _ in 0..depth {
            self.out.push_str(INDENT);
        }
    }

    fn paint(&mut self, text: &str, code: &str) {
        if self.color {
            self.out.push_str("\u{1b}[");
            self.out.push_str(code);
            self.out.push('m');
            self.out.push_str(text);
            self.out.push_str("\u{1b}[0m");
        } else {
            self.out.push_str(text);
        }
    }
}

fn quote(text: &str) -> String {
    Value::String(text.to_owned()).to_string()
}
