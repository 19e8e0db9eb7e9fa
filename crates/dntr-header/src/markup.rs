//! Minimal markup parser for extracted header fragments
//!
//! The fragment grammar is tiny: one root element that is either
//! self-closing or wraps a sequence of self-closing child elements carrying
//! `name="value"` attributes. Nothing else (text nodes, nesting, entities,
//! comments) is legal, so a char-cursor parser is all that is needed.

use crate::{HeaderError, HeaderResult};

/// A self-closing child element with its attributes in document order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub name: String,
    pub attributes: Vec<(String, String)>,
}

/// A parsed fragment: root element name plus children in document order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub root: String,
    pub children: Vec<Element>,
}

pub fn parse(fragment: &str) -> HeaderResult<Document> {
    MarkupParser::new(fragment).parse_document()
}

struct MarkupParser {
    chars: Vec<char>,
    pos: usize,
}

impl MarkupParser {
    fn new(fragment: &str) -> Self {
        Self {
            chars: fragment.chars().collect(),
            pos: 0,
        }
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn peek_at(&self, offset: usize) -> Option<char> {
        self.chars.get(self.pos + offset).copied()
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.peek();
        if c.is_some() {
            self.pos += 1;
        }
        c
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.pos += 1;
        }
    }

    fn expect(&mut self, expected: char) -> HeaderResult<()> {
        match self.advance() {
            Some(c) if c == expected => Ok(()),
            Some(c) => Err(self.error(format!("expected '{expected}', found '{c}'"))),
            None => Err(self.error(format!("expected '{expected}', found end of header"))),
        }
    }

    fn error(&self, message: String) -> HeaderError {
        HeaderError::Markup(format!("{message} (at offset {})", self.pos))
    }

    fn parse_name(&mut self) -> HeaderResult<String> {
        let mut name = String::new();
        while let Some(c) = self.peek() {
            if !c.is_ascii_alphanumeric() && c != '-' && c != '_' {
                break;
            }
            name.push(c);
            self.pos += 1;
        }
        if name.is_empty() {
            return Err(self.error("expected a name".to_string()));
        }
        Ok(name)
    }

    fn parse_document(&mut self) -> HeaderResult<Document> {
        self.skip_whitespace();
        self.expect('<')?;
        let root = self.parse_name()?;
        self.skip_whitespace();

        let children = match self.peek() {
            Some('/') => {
                self.advance();
                self.expect('>')?;
                Vec::new()
            }
            Some('>') => {
                self.advance();
                self.parse_children(&root)?
            }
            _ => return Err(self.error(format!("unterminated <{root}> tag"))),
        };

        self.skip_whitespace();
        if self.peek().is_some() {
            return Err(self.error("unexpected content after document root".to_string()));
        }
        Ok(Document { root, children })
    }

    fn parse_children(&mut self, root: &str) -> HeaderResult<Vec<Element>> {
        let mut children = Vec::new();
        loop {
            self.skip_whitespace();
            if self.peek() == Some('<') && self.peek_at(1) == Some('/') {
                self.advance();
                self.advance();
                let name = self.parse_name()?;
                if name != root {
                    return Err(
                        self.error(format!("mismatched closing tag </{name}>, expected </{root}>"))
                    );
                }
                self.skip_whitespace();
                self.expect('>')?;
                return Ok(children);
            }
            children.push(self.parse_element()?);
        }
    }

    fn parse_element(&mut self) -> HeaderResult<Element> {
        self.expect('<')?;
        let name = self.parse_name()?;
        let mut attributes = Vec::new();

        loop {
            self.skip_whitespace();
            match self.peek() {
                Some('/') => {
                    self.advance();
                    self.expect('>')?;
                    return Ok(Element { name, attributes });
                }
                Some('>') => {
                    return Err(self.error(format!("element <{name}> must be self-closing")));
                }
                Some(_) => attributes.push(self.parse_attribute()?),
                None => {
                    return Err(self.error(format!("unterminated <{name}> element")));
                }
            }
        }
    }

    fn parse_attribute(&mut self) -> HeaderResult<(String, String)> {
        let name = self.parse_name()?;
        self.skip_whitespace();
        self.expect('=')?;
        self.skip_whitespace();
        self.expect('"')?;

        let mut value = String::new();
        loop {
            match self.advance() {
                Some('"') => return Ok((name, value)),
                Some(c) => value.push(c),
                None => {
                    return Err(self.error(format!("unterminated value for attribute '{name}'")));
                }
            }
        }
    }
}
