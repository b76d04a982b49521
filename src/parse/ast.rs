use crate::common::*;

/// A chain of [Term]s joined by `+` and `-`, folded left to right.
#[derive(Debug, Clone, PartialEq)]
pub struct Expression {
    pub left: Term,
    pub right: Vec<(Operator, Term)>,
}

impl Expression {
    pub fn new(left: Term, right: Vec<(Operator, Term)>) -> Self {
        Self { left, right }
    }
}

impl From<Term> for Expression {
    fn from(left: Term) -> Self {
        Self::new(left, Vec::new())
    }
}

/// A chain of [Atom]s joined by `*` and `/`, folded left to right.
#[derive(Debug, Clone, PartialEq)]
pub struct Term {
    pub left: Atom,
    pub right: Vec<(Operator, Atom)>,
}

impl Term {
    pub fn new(left: Atom, right: Vec<(Operator, Atom)>) -> Self {
        Self { left, right }
    }
}

impl From<Atom> for Term {
    fn from(left: Atom) -> Self {
        Self::new(left, Vec::new())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Atom {
    Modifier(Int),
    RollExpr(DiceRoll),
    SubExpression(Box<Expression>),
}

impl From<Int> for Atom {
    fn from(x: Int) -> Self {
        Self::Modifier(x)
    }
}

impl From<DiceRoll> for Atom {
    fn from(roll: DiceRoll) -> Self {
        Self::RollExpr(roll)
    }
}

impl From<Expression> for Atom {
    fn from(expr: Expression) -> Self {
        Self::SubExpression(Box::new(expr))
    }
}

/// The raw text of a dice leaf, e.g. `3d6` or `mid3d8`.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct DiceRoll(pub String);

impl DiceRoll {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
