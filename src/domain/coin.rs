use crate::error::VendingError;
use serde::Serialize;
use std::fmt;

/// A coin the machine accepts and can hand back as change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Coin {
    Nickel,
    Dime,
    Quarter,
}

impl Coin {
    /// Every denomination, largest first. Change-making and coin dispensing walk
    /// this order.
    pub const DESCENDING: [Coin; 3] = [Coin::Quarter, Coin::Dime, Coin::Nickel];

    pub const fn cents(self) -> u32 {
        match self {
            Coin::Nickel => 5,
            Coin::Dime => 10,
            Coin::Quarter => 25,
        }
    }

    /// The smallest accepted denomination. Every price must be a multiple of it.
    pub fn smallest() -> Coin {
        Coin::DESCENDING[Coin::DESCENDING.len() - 1]
    }

    pub(crate) const fn index(self) -> usize {
        match self {
            Coin::Nickel => 0,
            Coin::Dime => 1,
            Coin::Quarter => 2,
        }
    }
}

impl TryFrom<i64> for Coin {
    type Error = VendingError;

    fn try_from(cents: i64) -> Result<Self, Self::Error> {
        Coin::DESCENDING
            .into_iter()
            .find(|coin| i64::from(coin.cents()) == cents)
            .ok_or_else(|| {
                VendingError::InvalidDenomination(format!("{cents} cents is not an accepted coin"))
            })
    }
}

impl fmt::Display for Coin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} cents", self.cents())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepted_values() {
        assert_eq!(Coin::try_from(5).unwrap(), Coin::Nickel);
        assert_eq!(Coin::try_from(10).unwrap(), Coin::Dime);
        assert_eq!(Coin::try_from(25).unwrap(), Coin::Quarter);
    }

    #[test]
    fn test_rejected_values() {
        for cents in [-5, 0, 1, 9, 15, 50, 100] {
            assert!(matches!(
                Coin::try_from(cents),
                Err(VendingError::InvalidDenomination(_))
            ));
        }
    }

    #[test]
    fn test_descending_order() {
        let values: Vec<u32> = Coin::DESCENDING.iter().map(|c| c.cents()).collect();
        assert_eq!(values, vec![25, 10, 5]);
        assert_eq!(Coin::smallest(), Coin::Nickel);
    }

    #[test]
    fn test_display() {
        assert_eq!(Coin::Quarter.to_string(), "25 cents");
    }
}
