//! Single-pass template tokenizer.
//!
//! Templates are plain text with two kinds of tokens:
//!
//! - `{{name}}` placeholders, where `name` is made of ASCII letters, digits,
//!   `_`, `.` and `-`
//! - the conditional `{{ifClassifier:<literal>}}`, whose literal runs up to
//!   the next `}}` and may not contain `{{`
//!
//! Anything else, including `{{ spaced }}` names and a conditional without
//! its closing `}}`, stays literal text. Parsing never fails.

use crate::constants::{IF_CLASSIFIER_PREFIX, TOKEN_CLOSE, TOKEN_OPEN};

/// One piece of a parsed template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Literal(String),
    Placeholder(String),
    /// `{{ifClassifier:<prefix>}}`
    Conditional(String),
}

impl Segment {
    /// The token exactly as written in the template.
    pub fn source_text(&self) -> String {
        match self {
            Self::Literal(text) => text.clone(),
            Self::Placeholder(name) => format!("{TOKEN_OPEN}{name}{TOKEN_CLOSE}"),
            Self::Conditional(prefix) => {
                format!("{TOKEN_OPEN}{IF_CLASSIFIER_PREFIX}{prefix}{TOKEN_CLOSE}")
            }
        }
    }
}

/// A parsed template, ready to be rendered any number of times.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    segments: Vec<Segment>,
    unterminated_conditional: bool,
}

impl Template {
    pub fn parse(source: &str) -> Self {
        let mut segments = Vec::new();
        let mut unterminated_conditional = false;
        let mut literal_start = 0;
        let mut cursor = 0;

        while let Some(offset) = source[cursor..].find(TOKEN_OPEN) {
            let open = cursor + offset;
            let body_start = open + TOKEN_OPEN.len();
            let body = &source[body_start..];

            let token = match body.strip_prefix(IF_CLASSIFIER_PREFIX) {
                Some(rest) => match rest.find(TOKEN_CLOSE) {
                    Some(close) if !rest[..close].contains(TOKEN_OPEN) => Some((
                        Segment::Conditional(rest[..close].to_string()),
                        IF_CLASSIFIER_PREFIX.len() + close,
                    )),
                    _ => {
                        unterminated_conditional = true;
                        None
                    }
                },
                None => body
                    .find(TOKEN_CLOSE)
                    .filter(|&close| is_placeholder_name(&body[..close]))
                    .map(|close| (Segment::Placeholder(body[..close].to_string()), close)),
            };

            match token {
                Some((segment, body_len)) => {
                    if literal_start < open {
                        segments.push(Segment::Literal(source[literal_start..open].to_string()));
                    }
                    segments.push(segment);
                    cursor = body_start + body_len + TOKEN_CLOSE.len();
                    literal_start = cursor;
                }
                // Step over one brace so `{{{name}}}` still yields `{` + token.
                None => cursor = open + 1,
            }
        }

        if literal_start < source.len() {
            segments.push(Segment::Literal(source[literal_start..].to_string()));
        }

        Self {
            segments,
            unterminated_conditional,
        }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Placeholder names in order of appearance, duplicates included.
    pub fn placeholders(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Placeholder(name) => Some(name.as_str()),
            _ => None,
        })
    }

    /// Conditional prefixes in order of appearance, duplicates included.
    pub fn conditionals(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Conditional(prefix) => Some(prefix.as_str()),
            _ => None,
        })
    }

    /// The prefix of the first conditional token; only tokens with exactly
    /// this prefix are ever resolved.
    pub fn active_conditional(&self) -> Option<&str> {
        self.conditionals().next()
    }

    /// Whether the source contains `{{ifClassifier:` without a usable `}}`.
    pub fn has_unterminated_conditional(&self) -> bool {
        self.unterminated_conditional
    }
}

fn is_placeholder_name(name: &str) -> bool {
    !name.is_empty()
        && name.bytes().all(|b| b.is_ascii_alphanumeric() || matches!(b, b'_' | b'.' | b'-'))
}
