use crate::parse::ParseError;
use crate::roll::RollError;

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum Error {
    #[error("{0}")]
    Parse(#[from] ParseError),
    #[error("{0}")]
    Roll(#[from] RollError),
}

impl Error {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Roll(RollError::Cancelled))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{roll_with, CancelToken, RollContext};

    #[test]
    fn test_roll_with_errors() {
        let token = CancelToken::new();
        token.cancel();
        let mut ctx = RollContext::default().with_cancel(token);
        assert!(roll_with("1d6", &mut ctx).unwrap_err().is_cancelled());

        let mut ctx = RollContext::default();
        assert!(matches!(roll_with("1d6 +", &mut ctx), Err(Error::Parse(_))));
        assert_eq!(
            roll_with("4 / (2 - 2)", &mut ctx),
            Err(Error::Roll(RollError::ZeroDivision))
        );
        assert_eq!(roll_with("2 - 3", &mut ctx), Ok(-1));
    }
}
