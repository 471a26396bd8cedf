//! Recursive-descent parser for the expression language.
//!
//! Grammar, loosest binding first:
//!
//! ```text
//! expr     := term (('+' | '-') term)*
//! term     := unary (('*' | '/') unary)*
//! unary    := ('-' | '+') unary | implicit
//! implicit := power power*          -- only while the next token is an identifier or '('
//! power    := atom ('^' exponent)?
//! exponent := ('-' | '+') exponent | power
//! atom     := NUMBER | IDENT '(' expr ')' | IDENT | '(' expr ')'
//! ```

use super::ast::{Expr, Func};
use super::lexer::{tokenize, Token, TokenKind};
use super::ParseError;
use crate::consts::MAX_EXPR_DEPTH;

/// Parse an expression string into an AST.
///
/// Trees deeper than [`MAX_EXPR_DEPTH`] are rejected with
/// [`ParseError::TooDeep`].
pub fn parse(source: &str) -> Result<Expr, ParseError> {
    let tokens = tokenize(source)?;
    let mut parser = Parser {
        tokens,
        cursor: 0,
        nesting: 0,
    };
    let (expr, _) = parser.expr()?;
    match parser.peek() {
        None => Ok(expr),
        Some(token) => Err(ParseError::UnexpectedToken {
            found: token.kind.describe(),
            pos: token.pos,
        }),
    }
}

/// A subtree together with its height in nodes.
type Parsed = (Expr, usize);

struct Parser {
    tokens: Vec<Token>,
    cursor: usize,
    /// Current recursion depth through `unary` and `exponent`.
    nesting: usize,
}

impl Parser {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.cursor)
    }

    fn peek_kind(&self) -> Option<&TokenKind> {
        self.peek().map(|t| &t.kind)
    }

    /// Position of the next token, or of the last one at end of input.
    fn pos(&self) -> usize {
        self.peek()
            .or_else(|| self.tokens.last())
            .map_or(0, |t| t.pos)
    }

    fn next(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.cursor).cloned();
        if token.is_some() {
            self.cursor += 1;
        }
        token
    }

    fn eat(&mut self, kind: &TokenKind) -> bool {
        if self.peek_kind() == Some(kind) {
            self.cursor += 1;
            true
        } else {
            false
        }
    }

    fn expect_rparen(&mut self) -> Result<(), ParseError> {
        match self.next() {
            Some(Token {
                kind: TokenKind::RParen,
                ..
            }) => Ok(()),
            Some(token) => Err(ParseError::UnexpectedToken {
                found: token.kind.describe(),
                pos: token.pos,
            }),
            None => Err(ParseError::UnexpectedEnd),
        }
    }

    /// Height of a node over children of the given heights.
    fn height(children: usize, pos: usize) -> Result<usize, ParseError> {
        let height = children + 1;
        if height > MAX_EXPR_DEPTH {
            return Err(ParseError::TooDeep { pos });
        }
        Ok(height)
    }

    fn enter(&mut self) -> Result<(), ParseError> {
        if self.nesting >= MAX_EXPR_DEPTH {
            return Err(ParseError::TooDeep { pos: self.pos() });
        }
        self.nesting += 1;
        Ok(())
    }

    fn expr(&mut self) -> Result<Parsed, ParseError> {
        let (mut lhs, mut height) = self.term()?;
        loop {
            let pos = self.pos();
            if self.eat(&TokenKind::Plus) {
                let (rhs, h) = self.term()?;
                height = Self::height(height.max(h), pos)?;
                lhs = lhs + rhs;
            } else if self.eat(&TokenKind::Minus) {
                let (rhs, h) = self.term()?;
                height = Self::height(height.max(h), pos)?;
                lhs = lhs - rhs;
            } else {
                return Ok((lhs, height));
            }
        }
    }

    fn term(&mut self) -> Result<Parsed, ParseError> {
        let (mut lhs, mut height) = self.unary()?;
        loop {
            let pos = self.pos();
            if self.eat(&TokenKind::Star) {
                let (rhs, h) = self.unary()?;
                height = Self::height(height.max(h), pos)?;
                lhs = lhs * rhs;
            } else if self.eat(&TokenKind::Slash) {
                let (rhs, h) = self.unary()?;
                height = Self::height(height.max(h), pos)?;
                lhs = lhs / rhs;
            } else {
                return Ok((lhs, height));
            }
        }
    }

    fn unary(&mut self) -> Result<Parsed, ParseError> {
        self.enter()?;
        let result = self.unary_inner();
        self.nesting -= 1;
        result
    }

    fn unary_inner(&mut self) -> Result<Parsed, ParseError> {
        let pos = self.pos();
        if self.eat(&TokenKind::Minus) {
            let (inner, h) = self.unary()?;
            return Ok((-inner, Self::height(h, pos)?));
        }
        if self.eat(&TokenKind::Plus) {
            return self.unary();
        }
        self.implicit()
    }

    fn implicit(&mut self) -> Result<Parsed, ParseError> {
        let (mut lhs, mut height) = self.power()?;
        while matches!(
            self.peek_kind(),
            Some(TokenKind::Ident(_)) | Some(TokenKind::LParen)
        ) {
            let pos = self.pos();
            let (rhs, h) = self.power()?;
            height = Self::height(height.max(h), pos)?;
            lhs = lhs * rhs;
        }
        Ok((lhs, height))
    }

    fn power(&mut self) -> Result<Parsed, ParseError> {
        let (base, height) = self.atom()?;
        let pos = self.pos();
        if self.eat(&TokenKind::Caret) {
            let (exponent, h) = self.exponent()?;
            return Ok((base.pow(exponent), Self::height(height.max(h), pos)?));
        }
        Ok((base, height))
    }

    fn exponent(&mut self) -> Result<Parsed, ParseError> {
        self.enter()?;
        let result = self.exponent_inner();
        self.nesting -= 1;
        result
    }

    fn exponent_inner(&mut self) -> Result<Parsed, ParseError> {
        let pos = self.pos();
        if self.eat(&TokenKind::Minus) {
            let (inner, h) = self.exponent()?;
            return Ok((-inner, Self::height(h, pos)?));
        }
        if self.eat(&TokenKind::Plus) {
            return self.exponent();
        }
        self.power()
    }

    fn atom(&mut self) -> Result<Parsed, ParseError> {
        let token = self.next().ok_or(ParseError::UnexpectedEnd)?;
        match token.kind {
            TokenKind::Num(value) => Ok((Expr::Num(value), 1)),
            TokenKind::LParen => {
                let inner = self.expr()?;
                self.expect_rparen()?;
                Ok(inner)
            }
            TokenKind::Ident(name) => {
                if self.peek_kind() == Some(&TokenKind::LParen) {
                    let func = Func::from_name(&name).ok_or(ParseError::UnknownFunction {
                        name: name.clone(),
                        pos: token.pos,
                    })?;
                    self.cursor += 1;
                    let (arg, h) = self.expr()?;
                    self.expect_rparen()?;
                    Ok((Expr::call(func, arg), Self::height(h, token.pos)?))
                } else if Func::from_name(&name).is_some() {
                    Err(ParseError::MissingArgument {
                        name,
                        pos: token.pos,
                    })
                } else {
                    Ok((Expr::Var(name), 1))
                }
            }
            other => Err(ParseError::UnexpectedToken {
                found: other.describe(),
                pos: token.pos,
            }),
        }
    }
}
