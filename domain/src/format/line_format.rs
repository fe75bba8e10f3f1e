//! Line templates for rendered log records
//!
//! A template is literal text with placeholders:
//!
//! | Placeholder | Rendered as |
//! |-------------|-------------|
//! | `{timestamp}` | Record time, formatted with the configured [`TimestampFormat`](super::TimestampFormat) |
//! | `{level}` | Uppercase severity (`INFO`, `WARN`, ...) |
//! | `{name}` | Logger name (`module.a`) |
//! | `{message}` | Message text |
//! | `{fields}` | Extra structured fields as `key=value` pairs |
//!
//! `{{` and `}}` produce literal braces.

use crate::core::error::FormatError;
use crate::core::severity::Severity;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Template used when no configuration file is present.
pub const FALLBACK_TEMPLATE: &str = "{timestamp} {level} [{name}] {message}";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Timestamp,
    Level,
    Name,
    Message,
    Fields,
}

/// A single record as seen by a [`LineFormat`].
#[derive(Debug, Clone, Copy)]
pub struct LineRecord<'a> {
    pub timestamp: &'a str,
    pub level: Severity,
    pub name: &'a str,
    pub message: &'a str,
    pub fields: &'a str,
}

/// Parsed line template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LineFormat {
    template: String,
    segments: Vec<Segment>,
}

impl LineFormat {
    pub fn parse(template: &str) -> Result<Self, FormatError> {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut chars = template.char_indices().peekable();

        while let Some((position, c)) = chars.next() {
            match c {
                '{' if matches!(chars.peek(), Some((_, '{'))) => {
                    chars.next();
                    literal.push('{');
                }
                '{' => {
                    let mut name = String::new();
                    let mut closed = false;
                    for (_, c) in chars.by_ref() {
                        if c == '}' {
                            closed = true;
                            break;
                        }
                        name.push(c);
                    }
                    if !closed {
                        return Err(FormatError::UnclosedPlaceholder { position });
                    }

                    let segment = match name.trim() {
                        "timestamp" => Segment::Timestamp,
                        "level" => Segment::Level,
                        "name" => Segment::Name,
                        "message" => Segment::Message,
                        "fields" => Segment::Fields,
                        _ => return Err(FormatError::UnknownPlaceholder { name, position }),
                    };
                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(segment);
                }
                '}' if matches!(chars.peek(), Some((_, '}'))) => {
                    chars.next();
                    literal.push('}');
                }
                '}' => return Err(FormatError::UnmatchedBrace { position }),
                _ => literal.push(c),
            }
        }

        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Ok(Self {
            template: template.to_string(),
            segments,
        })
    }

    /// The fallback `{timestamp} {level} [{name}] {message}` format.
    pub fn fallback() -> Self {
        Self {
            template: FALLBACK_TEMPLATE.to_string(),
            segments: vec![
                Segment::Timestamp,
                Segment::Literal(" ".to_string()),
                Segment::Level,
                Segment::Literal(" [".to_string()),
                Segment::Name,
                Segment::Literal("] ".to_string()),
                Segment::Message,
            ],
        }
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    /// Whether rendering needs a timestamp. Lets callers skip the clock read.
    pub fn uses_timestamp(&self) -> bool {
        self.segments.contains(&Segment::Timestamp)
    }

    pub fn render(&self, record: &LineRecord<'_>) -> String {
        let mut out = String::with_capacity(self.template.len() + record.message.len() + 32);
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Timestamp => out.push_str(record.timestamp),
                Segment::Level => out.push_str(record.level.as_str()),
                Segment::Name => out.push_str(record.name),
                Segment::Message => out.push_str(record.message),
                Segment::Fields => out.push_str(record.fields),
            }
        }
        out
    }
}

impl Default for LineFormat {
    fn default() -> Self {
        Self::fallback()
    }
}

impl fmt::Display for LineFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.template)
    }
}

impl FromStr for LineFormat {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for LineFormat {
    type Error = FormatError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<LineFormat> for String {
    fn from(format: LineFormat) -> Self {
        format.template
    }
}
