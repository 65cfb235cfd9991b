use crate::domain::coin::Coin;
use crate::error::VendingError;
use serde::Serialize;
use std::fmt;

/// Position of a product listing in the machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Slot(u32);

impl Slot {
    pub const fn new(position: u32) -> Self {
        Self(position)
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl TryFrom<i64> for Slot {
    type Error = VendingError;

    fn try_from(position: i64) -> Result<Self, Self::Error> {
        u32::try_from(position).map(Self).map_err(|_| {
            VendingError::InvalidArgument(format!("{position} is not a valid product position"))
        })
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A product price in cents.
///
/// Always positive and a multiple of the smallest coin, so any balance built from
/// coins minus a price is a multiple of that coin as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct Price(u32);

impl Price {
    pub fn new(cents: i64) -> Result<Self, VendingError> {
        let smallest = i64::from(Coin::smallest().cents());
        if cents <= 0 || cents % smallest != 0 {
            return Err(VendingError::InvalidDenomination(format!(
                "price {cents} must be a positive multiple of {smallest} cents"
            )));
        }
        u32::try_from(cents)
            .map(Self)
            .map_err(|_| VendingError::InvalidDenomination(format!("price {cents} is too large")))
    }

    pub fn cents(&self) -> u32 {
        self.0
    }
}

impl TryFrom<i64> for Price {
    type Error = VendingError;

    fn try_from(cents: i64) -> Result<Self, Self::Error> {
        Self::new(cents)
    }
}

/// A missing price is an invalid price.
impl TryFrom<Option<i64>> for Price {
    type Error = VendingError;

    fn try_from(cents: Option<i64>) -> Result<Self, Self::Error> {
        cents
            .ok_or_else(|| VendingError::InvalidDenomination("price is missing".into()))
            .and_then(Self::try_from)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub price: Price,
    /// Display name. Empty names are stored as `None`.
    pub name: Option<String>,
}

impl Product {
    pub fn new(price: Price, name: Option<String>) -> Self {
        Self {
            price,
            name: name.filter(|n| !n.is_empty()),
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}
