//! Million-pound bank balance (MPMP 6).
//!
//! Deposit some amount on day 1 and another on day 2; from day 3 on, each
//! day's balance is the sum of the previous two days' balances, so day n
//! holds `fib(n) * a + fib(n - 1) * b` (with fib(0) = 0, fib(1) = 1). The
//! puzzle wants the deposits that reach the target exactly, as late as
//! possible.
//!
//! Puzzle statement: <https://www.think-maths.co.uk/BankBalance>

use anyhow::{bail, Result};
use serde::Serialize;

/// The two opening deposits and the day the balance hits the target.
#[derive(Debug, Serialize)]
pub struct DepositPlan {
    pub target: u64,
    pub first: u64,
    pub second: u64,
    pub days: u32,
}

/// Fibonacci numbers from 0 up to and one past `limit`.
fn fib_table(limit: u128) -> Vec<u128> {
    let mut fibs = vec![0u128, 1];
    while fibs[fibs.len() - 1] <= limit {
        fibs.push(fibs[fibs.len() - 2] + fibs[fibs.len() - 1]);
    }
    fibs
}

/// Finds the deposits that reach `target` exactly on the latest possible
/// day, preferring the smallest second deposit on that day. Both deposits
/// must be at least 1.
///
/// # Errors
///
/// Fails when no pair of positive deposits can land on the target (only the
/// case for a target of 0).
pub fn find_deposits(target: u64) -> Result<DepositPlan> {
    let total = u128::from(target);
    let fibs = fib_table(total);
    // fib(max) > target, so with unit deposits the balance already overshoots
    // two days earlier; later days are infeasible.
    let max_days = (fibs.len() - 1).saturating_sub(2);

    for days in (1..=max_days).rev() {
        let on_day = fibs[days];
        let day_before = fibs[days - 1];
        let mut second = 1u128;
        loop {
            let from_second = day_before * second;
            if from_second > total {
                break;
            }
            let remainder = total - from_second;
            if remainder % on_day == 0 {
                let first = remainder / on_day;
                if first >= 1 {
                    return Ok(DepositPlan {
                        target,
                        first: first as u64,
                        second: second as u64,
                        days: days as u32,
                    });
                }
                // Exact but zero; increasing the second deposit only shrinks it.
                break;
            }
            if remainder < on_day {
                break;
            }
            second += 1;
        }
    }
    bail!("no pair of deposits reaches a balance of exactly {}", target)
}

/// Balance at the end of each day. Day 1 holds the first deposit, day 2 adds
/// the second, every later day is the sum of the two before it. Always
/// returns at least the first two days.
pub fn daily_balances(first: u64, second: u64, days: u32) -> Vec<u128> {
    let mut balances = vec![u128::from(first), u128::from(first) + u128::from(second)];
    while balances.len() < days as usize {
        balances.push(balances[balances.len() - 2] + balances[balances.len() - 1]);
    }
    balances
}
