use super::{dice::Dice, error::RollError, roller::Roller, RResult, RollContext};
use crate::common::*;
use crate::parse::ast::{Atom, DiceRoll, Expression, Term};
use log::trace;

/// Rolls a node of the tree down to a single integer.
///
/// Every level of the grammar implements this, so any node can be rolled on
/// its own. The context is threaded through each recursive call; a cancelled
/// token stops the roll with [RollError::Cancelled] before any further
/// subtree is visited.
pub trait Roll {
    fn roll<R: Roller>(&self, ctx: &mut RollContext<R>) -> RResult<Int>;
}

// Folds `left op1 x1 op2 x2 ...` strictly left to right.
fn roll_chain<R, T>(left: &T, right: &[(Operator, T)], ctx: &mut RollContext<R>) -> RResult<Int>
where
    R: Roller,
    T: Roll,
{
    ctx.check_cancelled()?;
    let mut acc = left.roll(ctx)?;
    for (op, operand) in right {
        ctx.check_cancelled()?;
        let value = operand.roll(ctx)?;
        trace!("{} {} {}", acc, op, value);
        acc = op.apply(acc, value)?;
    }
    Ok(acc)
}

impl Roll for Expression {
    fn roll<R: Roller>(&self, ctx: &mut RollContext<R>) -> RResult<Int> {
        roll_chain(&self.left, &self.right, ctx)
    }
}

impl Roll for Term {
    fn roll<R: Roller>(&self, ctx: &mut RollContext<R>) -> RResult<Int> {
        roll_chain(&self.left, &self.right, ctx)
    }
}

impl Roll for Atom {
    fn roll<R: Roller>(&self, ctx: &mut RollContext<R>) -> RResult<Int> {
        match self {
            Self::Modifier(x) => Ok(*x),
            Self::RollExpr(dice) => dice.roll(ctx),
            Self::SubExpression(expr) => expr.roll(ctx),
        }
    }
}

impl DiceRoll {
    pub fn dice(&self) -> RResult<Dice> {
        self.as_str()
            .parse()
            .map_err(|source| RollError::InvalidDice {
                text: self.0.clone(),
                source,
            })
    }
}

impl Roll for DiceRoll {
    fn roll<R: Roller>(&self, ctx: &mut RollContext<R>) -> RResult<Int> {
        ctx.check_cancelled()?;
        let dice = self.dice()?;
        ctx.roll_it(dice.mode, dice.count, dice.sides)
    }
}
