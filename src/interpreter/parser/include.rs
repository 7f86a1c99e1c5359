use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{
    ast::Statement,
    error::ParseError,
    interpreter::{parser::core::Parser, token::TokenKind},
};

impl Parser<'_> {
    /// Parses `FRG_Use "file" #` and splices in the included program.
    ///
    /// The file is read and parsed right away by a fresh parser, which
    /// inherits the current inclusion chain. Diagnostics from that parser are
    /// wrapped with the file name and added to ours; on any diagnostic the
    /// statement is dropped.
    ///
    /// # Returns
    /// A [`Statement::Use`] holding the included top-level statements.
    pub(super) fn parse_use(&mut self) -> Option<Statement> {
        let position = self.current.position;

        if !self.expect_peek(TokenKind::String) {
            return None;
        }
        let file = self.current.literal.clone();

        if !self.expect_peek(TokenKind::Hash) {
            return None;
        }

        let path = self.resolve_include(&file);
        let canonical = fs::canonicalize(&path).unwrap_or_else(|_| path.clone());
        if self.including.contains(&canonical) {
            self.errors.push(ParseError::CyclicInclude { file, position });
            return None;
        }

        let source = match fs::read_to_string(&path) {
            Ok(source) => source,
            Err(e) => {
                self.errors.push(ParseError::UnreadableInclude { file,
                                                                 reason: e.to_string(),
                                                                 position });
                return None;
            },
        };

        let mut chain = self.including.clone();
        chain.push(canonical);

        let mut included = Parser::with_chain(&source, Some(path), chain);
        let program = included.parse_program();

        if included.has_errors() {
            for error in included.into_errors() {
                self.errors.push(ParseError::InIncludedFile { file:   file.clone(),
                                                              source: Box::new(error), });
            }
            return None;
        }

        Some(Statement::Use { file,
                              statements: program.statements,
                              position })
    }

    /// Resolves an include path against the directory of the file being
    /// parsed. Without an origin the path is used as written.
    fn resolve_include(&self, file: &str) -> PathBuf {
        let path = Path::new(file);
        if path.is_absolute() {
            return path.to_path_buf();
        }

        match self.origin.as_deref().and_then(Path::parent) {
            Some(dir) => dir.join(path),
            None => path.to_path_buf(),
        }
    }
}
