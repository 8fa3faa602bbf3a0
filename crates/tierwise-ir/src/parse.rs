//! Descriptor parsing.
//!
//! Two input forms are accepted:
//! - **JSON**: the serde encoding of [`TypeDesc`] (`{"kind": "scalar", "id": "int"}`).
//! - **Bracket notation**: `dict[str, list[int]] | none`. `|` binds loosest,
//!   parentheses group, `name[]` is a generic with no arguments.

use crate::types::TypeDesc;

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("expected {expected} at offset {offset} in `{input}`, found {found}")]
    Unexpected {
        input: String,
        offset: usize,
        expected: &'static str,
        found: String,
    },
}

pub fn parse_descriptor(json: &str) -> Result<TypeDesc, ParseError> {
    Ok(serde_json::from_str(json)?)
}

pub fn parse_type(text: &str) -> Result<TypeDesc, ParseError> {
    let mut parser = Parser {
        input: text,
        chars: text.char_indices().collect(),
        pos: 0,
    };
    let desc = parser.union()?;
    parser.skip_ws();
    match parser.peek() {
        None => Ok(desc),
        Some(_) => Err(parser.unexpected("end of input")),
    }
}

struct Parser<'a> {
    input: &'a str,
    chars: Vec<(usize, char)>,
    pos: usize,
}

impl Parser<'_> {
    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).map(|&(_, c)| c)
    }

    fn offset(&self) -> usize {
        self.chars
            .get(self.pos)
            .map(|&(i, _)| i)
            .unwrap_or(self.input.len())
    }

    fn skip_ws(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.pos += 1;
        }
    }

    fn eat(&mut self, c: char) -> bool {
        self.skip_ws();
        if self.peek() == Some(c) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn unexpected(&self, expected: &'static str) -> ParseError {
        ParseError::Unexpected {
            input: self.input.to_string(),
            offset: self.offset(),
            expected,
            found: match self.peek() {
                Some(c) => format!("`{c}`"),
                None => "end of input".to_string(),
            },
        }
    }

    fn union(&mut self) -> Result<TypeDesc, ParseError> {
        let mut alternatives = vec![self.term()?];
        while self.eat('|') {
            alternatives.push(self.term()?);
        }
        if alternatives.len() == 1 {
            Ok(alternatives.remove(0))
        } else {
            Ok(TypeDesc::Union { alternatives })
        }
    }

    fn term(&mut self) -> Result<TypeDesc, ParseError> {
        if self.eat('(') {
            let inner = self.union()?;
            if !self.eat(')') {
                return Err(self.unexpected("`)`"));
            }
            return Ok(inner);
        }

        let name = self.ident()?;
        if !self.eat('[') {
            return Ok(TypeDesc::Scalar { id: name });
        }

        let mut args = Vec::new();
        if self.eat(']') {
            return Ok(TypeDesc::Generic { origin: name, args });
        }
        loop {
            args.push(self.union()?);
            if self.eat(',') {
                // trailing comma
                if self.eat(']') {
                    break;
                }
                continue;
            }
            if self.eat(']') {
                break;
            }
            return Err(self.unexpected("`,` or `]`"));
        }
        Ok(TypeDesc::Generic { origin: name, args })
    }

    fn ident(&mut self) -> Result<String, ParseError> {
        self.skip_ws();
        let start = self.pos;
        while self
            .peek()
            .is_some_and(|c| c.is_alphanumeric() || matches!(c, '_' | '.' | ':'))
        {
            self.pos += 1;
        }
        if self.pos == start {
            return Err(self.unexpected("a type name"));
        }
        Ok(self.chars[start..self.pos].iter().map(|&(_, c)| c).collect())
    }
}
