use super::{error::RollError, RResult};
use crate::common::*;

impl Operator {
    /// Combines two already rolled operands.
    ///
    /// Division truncates toward zero.
    pub fn apply(self, left: Int, right: Int) -> RResult<Int> {
        let result = match self {
            Self::Add => left.checked_add(right),
            Self::Sub => left.checked_sub(right),
            Self::Mul => left.checked_mul(right),
            Self::Div => {
                if right == 0 {
                    return Err(RollError::ZeroDivision);
                }
                left.checked_div(right)
            }
        };
        result.ok_or(RollError::Overflow)
    }
}
