use super::{cancel::CancelToken, dice::RollMode, error::RollError, roller::Roller, RResult};
use crate::common::*;
use log::{debug, trace};

pub type DefaultRoller = rand::prelude::ThreadRng;

pub const DEFAULT_MAX_ROLLS: usize = 1000;

// how many dice are rolled between two cancellation checks
const CANCEL_CHECK_INTERVAL: usize = 256;

/// Everything a roll needs besides the tree itself: the random source, the
/// roll budget and the cancellation token.
pub struct RollContext<R = DefaultRoller> {
    max_rolls: Option<usize>,
    rolls: usize,
    roller: R,
    cancel: CancelToken,
}

impl<R: Roller> RollContext<R> {
    pub fn new(max_rolls: Option<usize>, roller: R) -> Self {
        Self {
            max_rolls,
            rolls: 0,
            roller,
            cancel: CancelToken::new(),
        }
    }

    pub fn new_bounded(max_rolls: usize, roller: R) -> Self {
        Self::new(Some(max_rolls), roller)
    }

    pub fn new_unbounded(roller: R) -> Self {
        Self::new(None, roller)
    }

    pub fn with_cancel(mut self, cancel: CancelToken) -> Self {
        self.cancel = cancel;
        self
    }

    pub fn cancel_token(&self) -> &CancelToken {
        &self.cancel
    }

    pub fn roller(&self) -> &R {
        &self.roller
    }

    /// Number of dice rolled so far.
    pub fn rolls(&self) -> usize {
        self.rolls
    }

    pub fn check_cancelled(&self) -> RResult<()> {
        if self.cancel.is_cancelled() {
            trace!("roll cancelled after {} dice", self.rolls);
            Err(RollError::Cancelled)
        } else {
            Ok(())
        }
    }

    fn count_rolls(&mut self, n: usize) -> RResult<()> {
        let rolls = self.rolls.checked_add(n).ok_or(RollError::TooManyRolls)?;
        if self.max_rolls.map_or(false, |max| rolls > max) {
            Err(RollError::TooManyRolls)
        } else {
            self.rolls = rolls;
            Ok(())
        }
    }

    /// The random-roll primitive.
    ///
    /// [RollMode::Standard] sums `count` dice of `sides` sides.
    /// [RollMode::Middle] ignores `count`, rolls three dice and keeps the
    /// median.
    pub fn roll_it(&mut self, mode: RollMode, count: Int, sides: Int) -> RResult<Int> {
        self.check_cancelled()?;

        let size = UInt::try_from(sides)
            .ok()
            .and_then(NonZeroUInt::new)
            .ok_or(RollError::InvalidSides(sides))?;

        let total = match mode {
            RollMode::Standard => {
                let num = usize::try_from(count).map_err(|_| RollError::InvalidCount(count))?;
                self.count_rolls(num)?;
                self.sum_dice(num, size)?
            }
            RollMode::Middle => {
                self.count_rolls(3)?;
                let mut dice = [
                    self.roller.roll(size),
                    self.roller.roll(size),
                    self.roller.roll(size),
                ];
                dice.sort_unstable();
                Int::try_from(dice[1]).map_err(|_| RollError::Overflow)?
            }
        };

        debug!("rolled {}{}{} = {}", count, mode, sides, total);
        Ok(total)
    }

    fn sum_dice(&mut self, num: usize, size: NonZeroUInt) -> RResult<Int> {
        let cancel = &self.cancel;
        let mut total: Int = 0;
        for (i, value) in self.roller.roll_iter(num, size).enumerate() {
            if i > 0 && i % CANCEL_CHECK_INTERVAL == 0 && cancel.is_cancelled() {
                trace!("roll cancelled after {} of {} dice", i, num);
                return Err(RollError::Cancelled);
            }
            let value = Int::try_from(value).map_err(|_| RollError::Overflow)?;
            total = total.checked_add(value).ok_or(RollError::Overflow)?;
        }
        Ok(total)
    }
}

impl Default for RollContext {
    fn default() -> Self {
        Self::new(Some(DEFAULT_MAX_ROLLS), rand::thread_rng())
    }
}
