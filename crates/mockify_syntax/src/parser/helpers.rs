/// Token-stream helpers and error recovery.
///
/// This chunk contains the low-level primitives used throughout parsing:
/// - Peeking/consuming tokens (`peek`, `advance`)
/// - Matching / expecting keywords and punctuation
/// - Skipping balanced groups and GNU extensions
/// - Error recovery (`synchronize`)
impl<'a> Parser<'a> {
    // ========================================================================
    // Helpers
    // ========================================================================

    /// Return `true` if the current token is [`TokenKind::Eof`].
    fn is_at_end(&self) -> bool {
        matches!(self.peek().kind, TokenKind::Eof)
    }

    /// Return the current token without consuming it.
    fn peek(&self) -> &Token {
        &self.tokens[self.pos.min(self.tokens.len() - 1)]
    }

    /// Return the token after the current token without consuming it.
    fn peek_next(&self) -> &Token {
        if self.pos + 1 < self.tokens.len() {
            &self.tokens[self.pos + 1]
        } else {
            &self.tokens[self.tokens.len() - 1]
        }
    }

    /// Advance to the next token and return the token we just consumed.
    fn advance(&mut self) -> &Token {
        if !self.is_at_end() {
            self.pos += 1;
        }
        &self.tokens[self.pos.saturating_sub(1)]
    }

    fn check_punct(&self, id: PunctuationId) -> bool {
        self.peek().kind.is_punctuation(id)
    }

    fn match_punct(&mut self, id: PunctuationId) -> bool {
        if self.check_punct(id) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn expect_punct(&mut self, id: PunctuationId, msg: &str) -> Result<&Token, CompileError> {
        if self.check_punct(id) {
            Ok(self.advance())
        } else {
            Err(CompileError::syntax(
                format!("{}, found {}", msg, self.peek().kind.describe()),
                self.peek().span,
            ))
        }
    }

    fn current_span(&self) -> Span {
        self.peek().span
    }

    /// End offset of the most recently consumed token.
    fn previous_end(&self) -> usize {
        if self.pos == 0 {
            0
        } else {
            self.tokens[self.pos - 1].span.end
        }
    }

    fn is_typedef_name(&self, name: &str) -> bool {
        self.typedefs.contains(name)
    }

    /// Consume a bracketed group starting at the current `open` token, returning its span.
    fn skip_balanced(&mut self, open: PunctuationId, close: PunctuationId) -> Result<Span, CompileError> {
        let start = self.current_span();
        self.expect_punct(open, "Expected opening delimiter")?;
        let mut depth = 1usize;
        while depth > 0 {
            if self.is_at_end() {
                return Err(CompileError::syntax(
                    format!(
                        "Unbalanced `{}`: reached end of input",
                        mockify_core::lang::punctuation::as_str(open)
                    ),
                    start,
                ));
            }
            if self.check_punct(open) {
                depth += 1;
            } else if self.check_punct(close) {
                depth -= 1;
            }
            self.advance();
        }
        Ok(Span::new(start.start, self.previous_end()))
    }

    /// Skip GNU `__attribute__((...))`, `__asm__("...")` and `__extension__` wherever they may appear.
    fn skip_extensions(&mut self) -> Result<(), CompileError> {
        loop {
            let TokenKind::Ident(name) = &self.peek().kind else {
                return Ok(());
            };
            match name.as_str() {
                "__extension__" => {
                    self.advance();
                }
                "__attribute__" | "__attribute" | "__asm__" | "__asm" | "asm" => {
                    self.advance();
                    self.skip_balanced(PunctuationId::LParen, PunctuationId::RParen)?;
                }
                _ => return Ok(()),
            }
        }
    }

    /// Skip to just past the next file-scope `;`.
    ///
    /// Braced groups are skipped whole so a `;` inside a struct body does not end recovery early.
    fn synchronize(&mut self) {
        while !self.is_at_end() {
            if self.match_punct(PunctuationId::Semicolon) {
                return;
            }
            if self.check_punct(PunctuationId::LBrace) {
                if self.skip_balanced(PunctuationId::LBrace, PunctuationId::RBrace).is_err() {
                    return;
                }
                continue;
            }
            self.advance();
        }
    }
}
