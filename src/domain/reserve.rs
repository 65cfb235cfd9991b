use crate::domain::coin::Coin;
use crate::error::{Result, VendingError};
use serde::Serialize;
use std::iter;

/// A counted holding of coins.
///
/// A machine keeps two of these: the coins the current customer has inserted and
/// the machine's own change supply. Counters are unsigned, so a reserve can never
/// hold a negative number of coins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CoinReserve {
    counts: [u32; 3],
}

impl CoinReserve {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a reserve holding the given number of each coin.
    pub fn with_counts(nickels: u32, dimes: u32, quarters: u32) -> Self {
        let mut reserve = Self::new();
        reserve.counts[Coin::Nickel.index()] = nickels;
        reserve.counts[Coin::Dime.index()] = dimes;
        reserve.counts[Coin::Quarter.index()] = quarters;
        reserve
    }

    /// Deposits a single coin given by its value in cents.
    pub fn deposit(&mut self, cents: i64) -> Result<Coin> {
        let coin = Coin::try_from(cents)?;
        self.deposit_coin(coin)?;
        Ok(coin)
    }

    pub fn deposit_coin(&mut self, coin: Coin) -> Result<()> {
        self.deposit_coins(coin, 1)
    }

    /// Deposits `count` coins of one kind at once.
    pub fn deposit_coins(&mut self, coin: Coin, count: u32) -> Result<()> {
        let slot = &mut self.counts[coin.index()];
        *slot = slot.checked_add(count).ok_or_else(|| {
            VendingError::InvalidArgument(format!("too many {coin} coins in one reserve"))
        })?;
        Ok(())
    }

    /// Removes up to `count` coins of one kind and returns how many were actually
    /// removed. Never removes more than the reserve holds; callers compare the
    /// result against what they asked for.
    pub fn withdraw(&mut self, coin: Coin, count: u32) -> u32 {
        let slot = &mut self.counts[coin.index()];
        let removed = count.min(*slot);
        *slot -= removed;
        removed
    }

    pub fn count(&self, coin: Coin) -> u32 {
        self.counts[coin.index()]
    }

    /// Total value held, in cents.
    pub fn total_value(&self) -> u64 {
        Coin::DESCENDING
            .iter()
            .map(|coin| u64::from(self.count(*coin)) * u64::from(coin.cents()))
            .sum()
    }

    pub fn coin_count(&self) -> u64 {
        self.counts.iter().map(|c| u64::from(*c)).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|c| *c == 0)
    }

    pub fn clear(&mut self) {
        self.counts = [0; 3];
    }

    /// Adds every coin of `other` to this reserve. On overflow nothing is added.
    pub fn absorb(&mut self, other: &CoinReserve) -> Result<()> {
        let mut merged = self.clone();
        for coin in Coin::DESCENDING {
            merged.deposit_coins(coin, other.count(coin))?;
        }
        *self = merged;
        Ok(())
    }

    /// Withdraws exactly `amount` cents using a greedy walk from the largest
    /// denomination down, and returns the withdrawn coins.
    ///
    /// The walk never backtracks: it takes as many of each coin as fit and are
    /// available, then moves to the next smaller one. If cents remain once the
    /// smallest coin has been tried the call fails with
    /// [`VendingError::NotEnoughChange`] and the reserve is left untouched.
    pub fn take_change(&mut self, amount: u64) -> Result<CoinReserve> {
        let mut remaining_reserve = self.clone();
        let mut change = CoinReserve::new();
        let mut remaining = amount;

        for coin in Coin::DESCENDING {
            let cents = u64::from(coin.cents());
            let wanted = u32::try_from(remaining / cents).unwrap_or(u32::MAX);
            let taken = remaining_reserve.withdraw(coin, wanted);
            change.counts[coin.index()] = taken;
            remaining -= u64::from(taken) * cents;
        }

        if remaining != 0 {
            return Err(VendingError::NotEnoughChange {
                requested: amount,
                shortfall: remaining,
            });
        }

        *self = remaining_reserve;
        Ok(change)
    }

    /// Every coin held, one item per coin, quarters first then dimes then nickels.
    pub fn coins(&self) -> impl Iterator<Item = Coin> + '_ {
        Coin::DESCENDING
            .into_iter()
            .flat_map(|coin| iter::repeat_n(coin, self.count(coin) as usize))
    }

    pub fn snapshot(&self) -> ReserveSnapshot {
        ReserveSnapshot {
            nickels: self.count(Coin::Nickel),
            dimes: self.count(Coin::Dime),
            quarters: self.count(Coin::Quarter),
            total_cents: self.total_value(),
        }
    }
}

/// Serializable view of a [`CoinReserve`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReserveSnapshot {
    pub nickels: u32,
    pub dimes: u32,
    pub quarters: u32,
    pub total_cents: u64,
}
