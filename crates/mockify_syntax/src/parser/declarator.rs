/// Declarator parsing.
///
/// A declarator is read in three parts:
/// 1. leading `*` groups, each with its own qualifiers
/// 2. the direct declarator: a name, a parenthesized nested declarator, or nothing (abstract)
/// 3. trailing `[dim]` and `(params)` suffixes
///
/// Suffixes bind tighter than leading pointers, and a nested declarator binds tighter than both, which is why the
/// modifier list is assembled as `nested ++ suffixes ++ reversed(pointers)`.
impl<'a> Parser<'a> {
    // ========================================================================
    // Declarators
    // ========================================================================

    /// Parse a declarator. With `abstract_ok` the name may be omitted (parameters).
    ///
    /// Nesting beyond [`MAX_DECLARATOR_DEPTH`] is rejected instead of recursing further.
    fn declarator(&mut self, abstract_ok: bool) -> Result<Declarator, CompileError> {
        if self.depth >= MAX_DECLARATOR_DEPTH {
            return Err(CompileError::syntax(
                "declarator nested too deeply".to_string(),
                self.current_span(),
            ));
        }
        self.depth += 1;
        let result = self.direct_declarator(abstract_ok);
        self.depth -= 1;
        result
    }

    fn direct_declarator(&mut self, abstract_ok: bool) -> Result<Declarator, CompileError> {
        let start = self.current_span();
        let pointers = self.pointer_groups()?;
        self.skip_extensions()?;

        let Declarator { name, mut modifiers } = if self.check_punct(PunctuationId::LParen) && self.starts_nested_declarator()
        {
            self.advance();
            let nested = self.declarator(abstract_ok)?;
            self.expect_punct(PunctuationId::RParen, "Expected ')' after nested declarator")?;
            nested
        } else if let TokenKind::Ident(name) = &self.peek().kind {
            let name = name.clone();
            self.advance();
            Declarator {
                name: Some(name),
                modifiers: Vec::new(),
            }
        } else if abstract_ok {
            Declarator::default()
        } else {
            return Err(CompileError::syntax(
                format!(
                    "Expected identifier or '(' in declarator, found {}",
                    self.peek().kind.describe()
                ),
                self.current_span(),
            ));
        };

        modifiers.extend(self.declarator_suffixes()?);
        modifiers.extend(pointers.into_iter().rev().map(Modifier::Pointer));
        if modifiers.len() > MAX_DECLARATOR_DEPTH {
            return Err(CompileError::syntax("declarator nested too deeply".to_string(), start));
        }

        Ok(Declarator { name, modifiers })
    }

    /// `* const * volatile` -> `[[const], [volatile]]`
    fn pointer_groups(&mut self) -> Result<Vec<Vec<KeywordId>>, CompileError> {
        let mut pointers = Vec::new();
        while self.match_punct(PunctuationId::Star) {
            let mut quals = Vec::new();
            loop {
                self.skip_extensions()?;
                match self.peek().keyword_id() {
                    Some(id) if keywords::category(id) == KeywordCategory::TypeQualifier => {
                        self.advance();
                        quals.push(id);
                    }
                    _ => break,
                }
            }
            pointers.push(quals);
        }
        Ok(pointers)
    }

    /// Decide whether the `(` at the current position opens a nested declarator or a parameter list.
    ///
    /// `int (*cb)(int)` and `int (f)(void)` nest; `int (int)` and `int ()` are parameter lists of an abstract
    /// function declarator.
    fn starts_nested_declarator(&self) -> bool {
        match &self.peek_next().kind {
            TokenKind::Punctuation(PunctuationId::Star | PunctuationId::LParen | PunctuationId::LBracket) => true,
            TokenKind::Ident(name) => !self.is_typedef_name(name) && !is_extension_keyword(name),
            _ => false,
        }
    }

    fn declarator_suffixes(&mut self) -> Result<Vec<Modifier>, CompileError> {
        let mut suffixes = Vec::new();
        loop {
            if self.check_punct(PunctuationId::LBracket) {
                suffixes.push(Modifier::Array(self.array_dimension()?));
            } else if self.match_punct(PunctuationId::LParen) {
                suffixes.push(Modifier::Function(self.parameter_list()?));
            } else {
                return Ok(suffixes);
            }
        }
    }

    /// `[10]`, `[N + 1]`, `[]` -> the dimension as written, or `None` when empty.
    fn array_dimension(&mut self) -> Result<Option<String>, CompileError> {
        let open = self.current_span();
        self.expect_punct(PunctuationId::LBracket, "Expected '['")?;
        let mut parts: Vec<String> = Vec::new();
        let mut depth = 0usize;
        loop {
            if self.is_at_end() {
                return Err(CompileError::syntax(
                    "Unterminated array dimension: expected ']'".to_string(),
                    open,
                ));
            }
            match self.peek().punctuation_id() {
                Some(PunctuationId::RBracket) if depth == 0 => {
                    self.advance();
                    break;
                }
                Some(PunctuationId::LBracket | PunctuationId::LParen) => depth += 1,
                Some(PunctuationId::RBracket | PunctuationId::RParen) => depth = depth.saturating_sub(1),
                _ => {}
            }
            parts.push(self.advance().kind.spelling().to_string());
        }
        Ok(join_dimension(&parts))
    }

    /// Parameters after the opening `(`, through the closing `)`.
    fn parameter_list(&mut self) -> Result<Vec<Param>, CompileError> {
        let mut params = Vec::new();
        if self.match_punct(PunctuationId::RParen) {
            return Ok(params);
        }

        loop {
            if self.check_punct(PunctuationId::Ellipsis) {
                let span = self.advance().span;
                params.push(Param::Ellipsis(span));
                self.expect_punct(PunctuationId::RParen, "Expected ')' after '...'")?;
                return Ok(params);
            }

            let start = self.current_span().start;
            let specs = self.declaration_specifiers()?;
            let declarator = self.declarator(true)?;
            self.skip_extensions()?;
            let decl = build_decl(&specs, declarator);
            params.push(Param::Decl(Spanned::new(decl, Span::new(start, self.previous_end()))));

            if !self.match_punct(PunctuationId::Comma) {
                break;
            }
        }

        self.expect_punct(PunctuationId::RParen, "Expected ')' after parameter list")?;
        Ok(params)
    }
}
