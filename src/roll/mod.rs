mod cancel;
mod ctx;
mod dice;
mod error;
mod eval;
mod ops;
mod roller;

type RResult<T> = Result<T, RollError>;

pub use cancel::CancelToken;
pub use ctx::{DefaultRoller, RollContext, DEFAULT_MAX_ROLLS};
pub use dice::{Dice, ParseDiceError, RollMode};
pub use error::RollError;
pub use eval::Roll;
pub use roller::Roller;
