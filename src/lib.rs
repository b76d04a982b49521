//! Evaluates dice notation such as `2d6+1d4*3` or `mid3d8-2`.
//!
//! Text is parsed into an [`Expression`] tree, which is then rolled through a
//! [`RollContext`] carrying the random source, the roll budget and a
//! [`CancelToken`].

pub mod common;
pub mod error;
pub mod parse;
pub mod roll;

pub use common::{Int, Operator};
pub use error::Error;
pub use parse::ast::{Atom, DiceRoll, Expression, Term};
pub use parse::{parse, ParseError};
pub use roll::{CancelToken, Dice, ParseDiceError, Roll, RollContext, RollError, RollMode, Roller};

/// Parses `s` and rolls it with a default [`RollContext`].
///
/// ```
/// let total = diceprob::roll("2 + 3 * 4").unwrap();
/// assert_eq!(total, 14);
/// ```
pub fn roll(s: &str) -> Result<Int, Error> {
    roll_with(s, &mut RollContext::default())
}

/// Parses `s` and rolls it with the given context.
pub fn roll_with<R: Roller>(s: &str, ctx: &mut RollContext<R>) -> Result<Int, Error> {
    let expr = parse(s)?;
    Ok(expr.roll(ctx)?)
}
