/// Declaration parsing.
///
/// This chunk handles everything up to (but not including) the declarator itself:
/// - External declarations and how they split into one entry per declarator
/// - Declaration specifiers: storage class, qualifiers, function specifiers and the type specifier
/// - `struct` / `union` / `enum` specifiers (bodies are skipped)
/// - Function definitions (bodies are skipped) and initializers
impl<'a> Parser<'a> {
    // ========================================================================
    // External declarations
    // ========================================================================

    fn external_declaration(&mut self) -> Result<Vec<Spanned<ExternalDecl>>, CompileError> {
        let start = self.current_span().start;
        let specs = self.declaration_specifiers()?;
        let is_typedef = specs.storage.contains(&KeywordId::Typedef);

        // `struct point { ... };` declares a tag and no name.
        if self.match_punct(PunctuationId::Semicolon) {
            let decl = Decl {
                name: None,
                storage: specs.storage,
                funcspec: specs.funcspec,
                ty: DeclType::plain(specs.quals, specs.spec),
            };
            let span = Span::new(start, self.previous_end());
            return Ok(vec![Spanned::new(ExternalDecl::Decl(decl), span)]);
        }

        let mut entries = Vec::new();
        let mut entry_start = start;
        loop {
            let declarator = self.declarator(false)?;
            self.skip_extensions()?;
            let decl = build_decl(&specs, declarator);

            if entries.is_empty() && !is_typedef && decl.ty.is_function() && self.check_punct(PunctuationId::LBrace) {
                let body = self.skip_balanced(PunctuationId::LBrace, PunctuationId::RBrace)?;
                let span = Span::new(start, body.end);
                entries.push(Spanned::new(ExternalDecl::FunctionDef(FuncDef { decl, body }), span));
                return Ok(entries);
            }

            if self.match_punct(PunctuationId::Eq) {
                self.skip_initializer()?;
            }

            let span = Span::new(entry_start, self.previous_end());
            if is_typedef {
                if let Some(name) = &decl.name {
                    self.typedefs.insert(name.clone());
                }
                entries.push(Spanned::new(ExternalDecl::Typedef(decl), span));
            } else {
                entries.push(Spanned::new(ExternalDecl::Decl(decl), span));
            }

            if !self.match_punct(PunctuationId::Comma) {
                break;
            }
            entry_start = self.current_span().start;
        }

        self.expect_punct(PunctuationId::Semicolon, "Expected ';' after declaration")?;
        Ok(entries)
    }

    // ========================================================================
    // Specifiers
    // ========================================================================

    fn declaration_specifiers(&mut self) -> Result<Specifiers, CompileError> {
        let mut storage = Vec::new();
        let mut quals = Vec::new();
        let mut funcspec = Vec::new();
        let mut names: Vec<String> = Vec::new();
        let mut tagged: Option<TypeSpec> = None;
        let mut typedef_name = false;

        loop {
            self.skip_extensions()?;
            let token = self.peek().clone();
            match &token.kind {
                TokenKind::Keyword(id) => match keywords::category(*id) {
                    KeywordCategory::StorageClass => {
                        self.advance();
                        storage.push(*id);
                    }
                    KeywordCategory::TypeQualifier => {
                        self.advance();
                        quals.push(*id);
                    }
                    KeywordCategory::FunctionSpecifier => {
                        self.advance();
                        funcspec.push(*id);
                    }
                    KeywordCategory::TypeSpecifier => {
                        if typedef_name || tagged.is_some() {
                            return Err(conflicting_specifiers(&token));
                        }
                        self.advance();
                        names.push(keywords::as_str(*id).to_string());
                    }
                    KeywordCategory::Tag => {
                        if !names.is_empty() || tagged.is_some() {
                            return Err(conflicting_specifiers(&token));
                        }
                        tagged = Some(self.tagged_specifier(*id)?);
                    }
                    KeywordCategory::Other => break,
                },
                TokenKind::Ident(name) if names.is_empty() && tagged.is_none() && self.is_typedef_name(name) => {
                    self.advance();
                    names.push(name.clone());
                    typedef_name = true;
                }
                _ => break,
            }
        }

        let spec = match tagged {
            Some(spec) => spec,
            None if !names.is_empty() => TypeSpec::Identifier(IdentifierType { names }),
            None => return Err(self.missing_type_specifier()),
        };

        Ok(Specifiers {
            storage,
            quals,
            funcspec,
            spec,
        })
    }

    /// `struct tag`, `struct tag { ... }`, `struct { ... }` (and the same for `union` / `enum`).
    fn tagged_specifier(&mut self, keyword: KeywordId) -> Result<TypeSpec, CompileError> {
        let keyword_span = self.advance().span;
        self.skip_extensions()?;

        let tag = match &self.peek().kind {
            TokenKind::Ident(name) => {
                let name = name.clone();
                self.advance();
                Some(name)
            }
            _ => None,
        };

        let has_body = self.check_punct(PunctuationId::LBrace);
        if has_body {
            self.skip_balanced(PunctuationId::LBrace, PunctuationId::RBrace)?;
        }
        if tag.is_none() && !has_body {
            return Err(CompileError::syntax(
                format!(
                    "Expected tag name or body after `{}`, found {}",
                    keywords::as_str(keyword),
                    self.peek().kind.describe()
                ),
                keyword_span.merge(self.current_span()),
            ));
        }

        Ok(match keyword {
            KeywordId::Union => TypeSpec::Union(tag),
            KeywordId::Enum => TypeSpec::Enum(tag),
            _ => TypeSpec::Struct(tag),
        })
    }

    fn missing_type_specifier(&self) -> CompileError {
        let token = self.peek();
        let err = CompileError::syntax(
            format!("Expected type specifier, found {}", token.kind.describe()),
            token.span,
        );
        match &token.kind {
            TokenKind::Ident(name) => {
                err.with_note(format!("`{name}` is not a known type name"))
                    .with_hint(format!("declare it first, e.g. `typedef int {name};`"))
            }
            _ => err,
        }
    }

    /// Skip an initializer expression up to the `,` or `;` that ends it.
    fn skip_initializer(&mut self) -> Result<(), CompileError> {
        let start = self.current_span();
        let mut depth = 0usize;
        loop {
            if self.is_at_end() {
                return Err(CompileError::syntax(
                    "Unterminated initializer: reached end of input".to_string(),
                    start,
                ));
            }
            match self.peek().punctuation_id() {
                Some(PunctuationId::LParen | PunctuationId::LBracket | PunctuationId::LBrace) => depth += 1,
                Some(PunctuationId::RParen | PunctuationId::RBracket | PunctuationId::RBrace) => {
                    depth = depth.saturating_sub(1)
                }
                Some(PunctuationId::Comma | PunctuationId::Semicolon) if depth == 0 => return Ok(()),
                _ => {}
            }
            self.advance();
        }
    }
}

fn conflicting_specifiers(token: &Token) -> CompileError {
    CompileError::syntax(
        format!("Conflicting type specifiers: unexpected {}", token.kind.describe()),
        token.span,
    )
}

/// Fold a declarator around the specifiers' base type.
///
/// Modifiers are stored outermost first, so the fold runs from the innermost one.
fn build_decl(specs: &Specifiers, declarator: Declarator) -> Decl {
    let mut ty = DeclType::plain(specs.quals.clone(), specs.spec.clone());
    for modifier in declarator.modifiers.into_iter().rev() {
        ty = match modifier {
            Modifier::Pointer(quals) => DeclType::Pointer(PtrDecl {
                quals,
                pointee: Box::new(ty),
            }),
            Modifier::Array(dim) => DeclType::Array(ArrayDecl {
                dim,
                elem: Box::new(ty),
            }),
            Modifier::Function(params) => DeclType::Function(FuncDecl {
                params,
                ret: Box::new(ty),
            }),
        };
    }

    Decl {
        name: declarator.name,
        storage: specs.storage.clone(),
        funcspec: specs.funcspec.clone(),
        ty,
    }
}
