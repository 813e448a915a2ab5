//! Line formatting for log entries
//!
//! A formatter turns one [`LogEntry`] into a newline-terminated line of bytes.
//! Two modes are selected by the configured format string:
//! - `"json"`: one JSON object holding every attribute plus `level`, `dt`
//!   and `message`
//! - anything else: a text template, see [`Template`]

use super::error::{LoggerError, Result};
use super::log_entry::LogEntry;

/// Format string selecting the structured JSON mode
pub const JSON_FORMAT: &str = "json";

/// Template used when no format is configured
///
/// Renders as `[<dt>] <module>.<level> message: <msg> context: [] extra: <json>`.
pub const DEFAULT_TEMPLATE: &str = "[%s] %s.%s message: %s context: %s extra: %s";

/// Fixed value of the `context` slot
const CONTEXT_PLACEHOLDER: &str = "[]";

/// Turns an entry into the bytes written to a sink
pub trait Formatter: Send + Sync {
    fn format(&self, entry: &LogEntry) -> Result<Vec<u8>>;
}

/// A value that can be substituted into a template
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    Datetime,
    Module,
    Level,
    Message,
    Context,
    Extra,
}

impl Token {
    /// Order in which positional `%s` slots are filled
    const POSITIONAL: [Token; 6] = [
        Token::Datetime,
        Token::Module,
        Token::Level,
        Token::Message,
        Token::Context,
        Token::Extra,
    ];

    fn from_name(name: &str) -> Option<Self> {
        match name {
            "dt" => Some(Token::Datetime),
            "module" => Some(Token::Module),
            "level" => Some(Token::Level),
            "message" => Some(Token::Message),
            "context" => Some(Token::Context),
            "extra" => Some(Token::Extra),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Slot(Token),
}

/// Values available to a template for one entry
struct SlotValues<'a> {
    datetime: String,
    module: &'a str,
    level: &'static str,
    message: &'a str,
    extra: String,
}

impl SlotValues<'_> {
    fn get(&self, token: Token) -> &str {
        match token {
            Token::Datetime => &self.datetime,
            Token::Module => self.module,
            Token::Level => self.level,
            Token::Message => self.message,
            Token::Context => CONTEXT_PLACEHOLDER,
            Token::Extra => &self.extra,
        }
    }
}

/// Parsed text template
///
/// Recognized slots:
/// - `%s`: positional, filled in order dt, module, level, message,
///   context, extra; a seventh and later `%s` renders empty
/// - `%%`: a literal percent sign
/// - `{dt}`, `{module}`, `{level}`, `{message}`, `{context}`, `{extra}`
///
/// Everything else is copied verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    segments: Vec<Segment>,
}

impl Template {
    pub fn parse(source: &str) -> Self {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut positional = 0usize;
        let mut chars = source.char_indices().peekable();

        let push_slot = |segments: &mut Vec<Segment>, literal: &mut String, token| {
            if !literal.is_empty() {
                segments.push(Segment::Literal(std::mem::take(literal)));
            }
            segments.push(Segment::Slot(token));
        };

        while let Some((idx, c)) = chars.next() {
            match c {
                '%' => match chars.peek() {
                    Some((_, 's')) => {
                        chars.next();
                        if let Some(token) = Token::POSITIONAL.get(positional) {
                            push_slot(&mut segments, &mut literal, *token);
                        }
                        positional += 1;
                    }
                    Some((_, '%')) => {
                        chars.next();
                        literal.push('%');
                    }
                    _ => literal.push('%'),
                },
                '{' => {
                    let rest = &source[idx + 1..];
                    let token = rest
                        .find('}')
                        .and_then(|end| Token::from_name(&rest[..end]).map(|t| (t, end)));
                    match token {
                        Some((token, end)) => {
                            push_slot(&mut segments, &mut literal, token);
                            // token names are ASCII: skip the name and the closing brace
                            for _ in 0..=end {
                                chars.next();
                            }
                        }
                        None => literal.push('{'),
                    }
                }
                _ => literal.push(c),
            }
        }

        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Self { segments }
    }

    fn render(&self, values: &SlotValues<'_>) -> String {
        let mut line = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => line.push_str(text),
                Segment::Slot(token) => line.push_str(values.get(*token)),
            }
        }
        line
    }
}

impl Default for Template {
    fn default() -> Self {
        Self::parse(DEFAULT_TEMPLATE)
    }
}

/// The formatter built from a format string
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineFormatter {
    Json,
    Template(Template),
}

impl LineFormatter {
    /// `"json"` selects JSON mode, any other string is a template
    pub fn from_config(format: &str) -> Self {
        if format == JSON_FORMAT {
            LineFormatter::Json
        } else {
            LineFormatter::Template(Template::parse(format))
        }
    }

    fn format_json(&self, entry: &LogEntry) -> Result<Vec<u8>> {
        let mut object = match serde_json::to_value(&entry.fields)
            .map_err(|e| LoggerError::formatter(JSON_FORMAT, e.to_string()))?
        {
            serde_json::Value::Object(map) => map,
            _ => serde_json::Map::new(),
        };

        object.insert(
            "level".to_string(),
            serde_json::Value::String(entry.level.to_str().to_string()),
        );
        object.insert("dt".to_string(), serde_json::Value::String(entry.datetime()));
        object.insert(
            "message".to_string(),
            serde_json::Value::String(entry.message.clone()),
        );

        let mut bytes = serde_json::to_vec(&serde_json::Value::Object(object))
            .map_err(|e| LoggerError::formatter(JSON_FORMAT, e.to_string()))?;
        bytes.push(b'\n');
        Ok(bytes)
    }

    fn format_template(&self, template: &Template, entry: &LogEntry) -> Result<Vec<u8>> {
        // attributes must serialize even when the template has no `extra` slot
        let extra = serde_json::to_string(&entry.fields)
            .map_err(|e| LoggerError::formatter("template", e.to_string()))?;

        let values = SlotValues {
            datetime: entry.datetime(),
            module: entry.module(),
            level: entry.level.to_str(),
            message: &entry.message,
            extra,
        };

        let mut bytes = template.render(&values).into_bytes();
        bytes.push(b'\n');
        Ok(bytes)
    }
}

impl Default for LineFormatter {
    fn default() -> Self {
        LineFormatter::Template(Template::default())
    }
}

impl Formatter for LineFormatter {
    fn format(&self, entry: &LogEntry) -> Result<Vec<u8>> {
        match self {
            LineFormatter::Json => self.format_json(entry),
            LineFormatter::Template(template) => self.format_template(template, entry),
        }
    }
}
