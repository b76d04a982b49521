use crate::common::Int;
use std::fmt;
use std::num::ParseIntError;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum RollMode {
    /// Sum of every die rolled.
    Standard,
    /// Median of three dice.
    Middle,
}

impl fmt::Display for RollMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Standard => f.write_str("d"),
            Self::Middle => f.write_str("m"),
        }
    }
}

/// A dice leaf once its text has been taken apart.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Dice {
    pub mode: RollMode,
    pub count: Int,
    pub sides: Int,
}

impl Dice {
    /// Middle rolls always throw this many dice.
    pub const MIDDLE_COUNT: Int = 3;

    pub const fn new(count: Int, sides: Int) -> Self {
        Self {
            mode: RollMode::Standard,
            count,
            sides,
        }
    }

    pub const fn middle(sides: Int) -> Self {
        Self {
            mode: RollMode::Middle,
            count: Self::MIDDLE_COUNT,
            sides,
        }
    }
}

impl fmt::Display for Dice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.mode {
            RollMode::Standard => write!(f, "{}d{}", self.count, self.sides),
            RollMode::Middle => write!(f, "mid{}d{}", self.count, self.sides),
        }
    }
}

impl std::str::FromStr for Dice {
    type Err = ParseDiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.to_lowercase();

        // the 'd' in "mid" is not the separator
        if let Some(rest) = s.strip_prefix("mid") {
            let (num, size) = rest.split_once('d').ok_or(ParseDiceError::NoDelimiter)?;
            if !num.is_empty() {
                num.parse::<Int>().map_err(ParseDiceError::InvalidNum)?;
            }
            let size = size.parse().map_err(ParseDiceError::InvalidSize)?;
            return Ok(Self::middle(size));
        }

        let (num, size) = s.split_once('d').ok_or(ParseDiceError::NoDelimiter)?;
        let num = num.parse().map_err(ParseDiceError::InvalidNum)?;
        let size = size.parse().map_err(ParseDiceError::InvalidSize)?;
        Ok(Self::new(num, size))
    }
}

#[derive(thiserror::Error, Debug, Clone, Eq, PartialEq)]
pub enum ParseDiceError {
    #[error("cannot parse string as dice without 'd' delimiter")]
    NoDelimiter,
    #[error("invalid number of dice: {0}")]
    InvalidNum(ParseIntError),
    #[error("invalid number of sides: {0}")]
    InvalidSize(ParseIntError),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn int_err(s: &str) -> ParseIntError {
        s.parse::<Int>().unwrap_err()
    }

    #[test]
    fn test_dice_from_str() {
        assert_eq!("1d20".parse::<Dice>().unwrap(), Dice::new(1, 20));
        assert_eq!("14d4".parse::<Dice>().unwrap(), Dice::new(14, 4));
        assert_eq!("3D6".parse::<Dice>().unwrap(), Dice::new(3, 6));
        assert_eq!("1".parse::<Dice>(), Err(ParseDiceError::NoDelimiter));
        assert_eq!(
            "hd2".parse::<Dice>(),
            Err(ParseDiceError::InvalidNum(int_err("h")))
        );
        assert_eq!(
            "d2".parse::<Dice>(),
            Err(ParseDiceError::InvalidNum(int_err("")))
        );
        assert_eq!(
            "2dx".parse::<Dice>(),
            Err(ParseDiceError::InvalidSize(int_err("x")))
        );
    }

    #[test]
    fn test_middle_from_str() {
        assert_eq!("mid3d8".parse::<Dice>().unwrap(), Dice::middle(8));
        assert_eq!("MiD3D8".parse::<Dice>().unwrap(), Dice::middle(8));
        assert_eq!("midd12".parse::<Dice>().unwrap(), Dice::middle(12));
        // the written count is ignored, three dice are always thrown
        assert_eq!("mid5d6".parse::<Dice>().unwrap().count, 3);
        assert_eq!("mid".parse::<Dice>(), Err(ParseDiceError::NoDelimiter));
        assert_eq!(
            "midxd6".parse::<Dice>(),
            Err(ParseDiceError::InvalidNum(int_err("x")))
        );
    }

    #[test]
    fn test_dice_display() {
        assert_eq!(Dice::new(2, 6).to_string(), "2d6");
        assert_eq!(Dice::middle(20).to_string(), "mid3d20");
        assert_eq!(RollMode::Middle.to_string(), "m");
    }
}
