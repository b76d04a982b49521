use super::{ast::*, error::*, lexer::*};
use crate::common::*;
use log::debug;
use logos_iter::LogosIter;

type PResult<T> = Result<T, ParseError>;

pub struct Parser<'a> {
    lexer: Lexer<'a>,
}

impl<'a> Parser<'a> {
    pub fn new(s: &'a str) -> Self {
        Self { lexer: lexer(s) }
    }

    pub fn parse(mut self) -> PResult<Expression> {
        let expr = self.parse_expression()?;
        if self.lexer.next().is_some() {
            return self.error(ParseErrorKind::TrailingInput);
        }
        debug!("parsed roll: {:?}", expr);
        Ok(expr)
    }

    fn matches(&mut self, kind: TokenKind) -> bool {
        self.lexer.peek().map_or(false, |&peeked| peeked == kind)
    }

    fn match_operator(&mut self, options: &[TokenKind]) -> Option<Operator> {
        let peeked = *self.lexer.peek()?;
        if !options.contains(&peeked) {
            return None;
        }
        let op = peeked.as_operator()?;
        self.lexer.next();
        Some(op)
    }

    fn consume(&mut self, expected: TokenKind) -> PResult<()> {
        if self.matches(expected) {
            self.lexer.next();
            Ok(())
        } else {
            let found = self.lexer.next();
            self.unexpected_token(found, vec1![expected])
        }
    }

    fn error<T>(&mut self, kind: ParseErrorKind) -> PResult<T> {
        Err(ParseError {
            kind,
            span: self.lexer.span(),
            slice: self.lexer.slice().to_string(),
        })
    }

    fn unexpected_token<T>(
        &mut self,
        found: Option<TokenKind>,
        expected: NonEmpty<TokenKind>,
    ) -> PResult<T> {
        if found == Some(TokenKind::Error) {
            self.error(ParseErrorKind::UnexpectedString { expected })
        } else {
            self.error(ParseErrorKind::UnexpectedToken { found, expected })
        }
    }

    fn parse_expression(&mut self) -> PResult<Expression> {
        let left = self.parse_term()?;
        let mut right = Vec::new();

        while let Some(op) = self.match_operator(TokenKind::ADDITION_OPS) {
            right.push((op, self.parse_term()?));
        }

        Ok(Expression::new(left, right))
    }

    fn parse_term(&mut self) -> PResult<Term> {
        let left = self.parse_atom()?;
        let mut right = Vec::new();

        while let Some(op) = self.match_operator(TokenKind::MULTIPLICATION_OPS) {
            right.push((op, self.parse_atom()?));
        }

        Ok(Term::new(left, right))
    }

    fn parse_atom(&mut self) -> PResult<Atom> {
        match self.lexer.next() {
            Some(TokenKind::Integer) => match self.lexer.slice().parse() {
                Ok(x) => Ok(Atom::Modifier(x)),
                Err(_) => self.error(ParseErrorKind::InvalidInteger),
            },
            Some(TokenKind::Dice) => Ok(Atom::RollExpr(DiceRoll::new(self.lexer.slice()))),
            Some(TokenKind::LeftParen) => {
                let expr = self.parse_expression()?;
                self.consume(TokenKind::RightParen)?;
                Ok(Atom::SubExpression(Box::new(expr)))
            }
            found => self.unexpected_token(
                found,
                vec1![TokenKind::Integer, TokenKind::Dice, TokenKind::LeftParen],
            ),
        }
    }
}
