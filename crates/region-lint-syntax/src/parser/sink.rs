//! Sink for converting parser events into a Rowan green tree.
//!
//! Trivia placement follows the usual C# convention:
//!
//! - trivia on the same line after a token, up to and including the line
//!   ending, is *trailing* and joins the node that owns that token;
//! - everything else before a token is *leading* and joins the node that is
//!   open when the token is emitted;
//! - trivia after the last token is attached to the root.
//!
//! Preprocessor lines always start their own line, so they are always leading.

use rowan::GreenNodeBuilder;

use crate::lexer::Token;
use crate::parser::event::Event;
use crate::syntax_kind::{SyntaxKind, SyntaxNode};

/// Converts parser events and tokens into a Rowan syntax tree.
pub struct Sink<'t, 'input> {
    builder: GreenNodeBuilder<'static>,
    tokens: &'t [Token<'input>],
    cursor: usize,
    depth: usize,
    events: Vec<Event>,
}

impl<'t, 'input> Sink<'t, 'input> {
    /// Create a new sink over the full (trivia-included) token stream.
    pub fn new(tokens: &'t [Token<'input>], events: Vec<Event>) -> Self {
        Self {
            builder: GreenNodeBuilder::new(),
            tokens,
            cursor: 0,
            depth: 0,
            events,
        }
    }

    /// Consume the sink and build the syntax tree.
    pub fn finish(mut self) -> SyntaxNode {
        for event in std::mem::take(&mut self.events) {
            match event {
                Event::Start { kind } => {
                    self.builder.start_node(kind.into());
                    self.depth += 1;
                }
                Event::Token { kind } => self.token(kind),
                Event::Finish => {
                    // Closing the root: whatever is left belongs to it
                    if self.depth == 1 {
                        self.remaining();
                    }
                    self.builder.finish_node();
                    self.depth = self.depth.saturating_sub(1);
                }
                Event::Placeholder => {}
            }
        }

        SyntaxNode::new_root(self.builder.finish())
    }

    fn token(&mut self, kind: SyntaxKind) {
        self.leading_trivia();
        if let Some(token) = self.tokens.get(self.cursor) {
            self.builder.token(kind.into(), token.text);
            self.cursor += 1;
        }
        self.trailing_trivia();
    }

    fn leading_trivia(&mut self) {
        while let Some(token) = self.tokens.get(self.cursor) {
            if !token.kind.is_trivia() {
                break;
            }
            self.emit_raw();
        }
    }

    fn trailing_trivia(&mut self) {
        while let Some(token) = self.tokens.get(self.cursor) {
            if !token.kind.is_trivia() || token.kind.is_directive() {
                break;
            }
            let kind = token.kind;
            self.emit_raw();
            if kind == SyntaxKind::NEWLINE {
                break;
            }
        }
    }

    fn remaining(&mut self) {
        while self.cursor < self.tokens.len() {
            self.emit_raw();
        }
    }

    fn emit_raw(&mut self) {
        let token = &self.tokens[self.cursor];
        self.builder.token(token.kind.into(), token.text);
        self.cursor += 1;
    }
}
