use cosmwasm_schema::cw_serde;
use cosmwasm_std::{StdError, StdResult, Uint128};

/// Linear unlock schedule with an optional cliff.
///
/// All durations are in seconds. `total_amount` unlocks in equal steps, one
/// per `unlock_period`, starting at `start_time`; nothing unlocks before the
/// cliff has passed, after which every whole period elapsed so far counts.
#[cw_serde]
pub struct VestingSchedule {
    pub start_time: u64,
    pub total_duration: u32,
    pub unlock_period: u32,
    pub cliff_duration: u32,
    pub total_amount: Uint128,
}

impl VestingSchedule {
    pub fn validate(&self) -> StdResult<()> {
        if self.unlock_period == 0 {
            return Err(StdError::generic_err("unlock period must be positive"));
        }
        if self.unlock_period > self.total_duration {
            return Err(StdError::generic_err(
                "unlock period cannot exceed the total duration",
            ));
        }
        if self.total_duration % self.unlock_period != 0 {
            return Err(StdError::generic_err(
                "total duration must be a multiple of the unlock period",
            ));
        }
        if self.cliff_duration > self.total_duration {
            return Err(StdError::generic_err(
                "cliff cannot exceed the total duration",
            ));
        }
        if self
            .start_time
            .checked_add(self.total_duration as u64)
            .is_none()
        {
            return Err(StdError::generic_err("vesting end time overflows"));
        }
        Ok(())
    }

    /// First second at which nothing is locked any more
    pub fn end_time(&self) -> u64 {
        self.start_time.saturating_add(self.total_duration as u64)
    }

    pub fn is_expired(&self, now: u64) -> bool {
        now >= self.end_time()
    }

    /// Amount still locked at `now`; integer arithmetic truncating toward zero
    pub fn locked_amount(&self, now: u64) -> Uint128 {
        if now < self.start_time {
            return self.total_amount;
        }
        let elapsed = now - self.start_time;
        if self.cliff_duration > 0 && elapsed < self.cliff_duration as u64 {
            return self.total_amount;
        }
        if elapsed >= self.total_duration as u64 {
            return Uint128::zero();
        }

        // a schedule that never passed `validate` unlocks nothing before the end
        let periods_total = match self.total_duration.checked_div(self.unlock_period) {
            Some(0) | None => return self.total_amount,
            Some(periods) => periods as u64,
        };
        let periods_elapsed = elapsed / self.unlock_period as u64;
        let unlocked = self
            .total_amount
            .multiply_ratio(periods_elapsed, periods_total);
        self.total_amount.saturating_sub(unlocked)
    }

    pub fn unlocked_amount(&self, now: u64) -> Uint128 {
        self.total_amount.saturating_sub(self.locked_amount(now))
    }
}
