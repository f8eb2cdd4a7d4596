//! Prompt Renderer - brace-placeholder templates
//!
//! Templates use `{name}` placeholders; `{{` and `}}` stand for literal
//! braces. Any text that may contain braces must go through
//! [`escape_braces`](super::escape_braces) before it is spliced into a
//! template, or the final render will misread it as placeholders.

use crate::error::{Result, SelectorError};

/// A brace-placeholder template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptTemplate {
    text: String,
}

impl PromptTemplate {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Raw template text, escapes included
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Render with every placeholder filled.
    ///
    /// Escapes collapse to single braces. Unknown placeholders and stray
    /// braces are errors.
    pub fn render(&self, vars: &[(&str, &str)]) -> Result<String> {
        render_with(&self.text, vars, false)
    }

    /// Substitute only the given variables and return a new template.
    ///
    /// Escapes and unknown placeholders are kept verbatim so the result can
    /// be rendered again later. Substituted values are inserted as-is and
    /// must already be escaped.
    pub fn render_partial(&self, vars: &[(&str, &str)]) -> Result<PromptTemplate> {
        render_with(&self.text, vars, true).map(PromptTemplate::new)
    }

    /// Placeholder names in order of appearance
    pub fn placeholders(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();
        scan(&self.text, |piece| {
            if let Piece::Placeholder(name) = piece {
                names.push(name.to_string());
            }
            Ok(())
        })?;
        Ok(names)
    }
}

enum Piece<'a> {
    Text(&'a str),
    OpenBrace,
    CloseBrace,
    Placeholder(&'a str),
}

fn render_with(text: &str, vars: &[(&str, &str)], partial: bool) -> Result<String> {
    let mut out = String::with_capacity(text.len());
    scan(text, |piece| {
        match piece {
            Piece::Text(s) => out.push_str(s),
            Piece::OpenBrace => out.push_str(if partial { "{{" } else { "{" }),
            Piece::CloseBrace => out.push_str(if partial { "}}" } else { "}" }),
            Piece::Placeholder(name) => match vars.iter().find(|(key, _)| *key == name) {
                Some((_, value)) => out.push_str(value),
                None if partial => {
                    out.push('{');
                    out.push_str(name);
                    out.push('}');
                }
                None => {
                    return Err(SelectorError::Template(format!("No value for placeholder '{}'", name)));
                }
            },
        }
        Ok(())
    })?;
    Ok(out)
}

fn scan<'a, F>(text: &'a str, mut emit: F) -> Result<()>
where
    F: FnMut(Piece<'a>) -> Result<()>,
{
    let bytes = text.as_bytes();
    let mut literal_start = 0;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'{' | b'}' => {
                if literal_start < i {
                    emit(Piece::Text(&text[literal_start..i]))?;
                }
                let brace = bytes[i];
                if bytes.get(i + 1) == Some(&brace) {
                    emit(if brace == b'{' { Piece::OpenBrace } else { Piece::CloseBrace })?;
                    i += 2;
                } else if brace == b'}' {
                    return Err(SelectorError::Template(format!("Single '}}' at byte {}", i)));
                } else {
                    let close = text[i + 1..]
                        .find('}')
                        .map(|offset| i + 1 + offset)
                        .ok_or_else(|| SelectorError::Template(format!("Unclosed '{{' at byte {}", i)))?;
                    let name = &text[i + 1..close];
                    if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
                        return Err(SelectorError::Template(format!("Invalid placeholder '{{{}}}'", name)));
                    }
                    emit(Piece::Placeholder(name))?;
                    i = close + 1;
                }
                literal_start = i;
            }
            _ => i += 1,
        }
    }

    if literal_start < bytes.len() {
        emit(Piece::Text(&text[literal_start..]))?;
    }
    Ok(())
}
