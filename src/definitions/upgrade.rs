//! Rank upgrades sold at the Casting Office.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::cards::Area;

/// How an upgrade is paid for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Currency {
    Dollars,
    Credits,
}

impl Currency {
    pub const ALL: [Currency; 2] = [Currency::Dollars, Currency::Credits];

    /// Short token accepted on the command line.
    #[must_use]
    pub fn token(self) -> &'static str {
        match self {
            Currency::Dollars => "$",
            Currency::Credits => "cr",
        }
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Currency::Dollars => write!(f, "dollars"),
            Currency::Credits => write!(f, "credits"),
        }
    }
}

impl FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "$" | "d" | "dollar" | "dollars" => Ok(Currency::Dollars),
            "cr" | "c" | "credit" | "credits" => Ok(Currency::Credits),
            other => Err(format!("unknown currency {:?}", other)),
        }
    }
}

/// Price of one rank in one currency.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Upgrade {
    pub rank: u8,
    pub currency: Currency,
    pub amount: u32,
    pub area: Area,
}

/// Every upgrade price on offer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpgradeTable {
    upgrades: Vec<Upgrade>,
}

impl UpgradeTable {
    #[must_use]
    pub fn new(upgrades: Vec<Upgrade>) -> Self {
        Self { upgrades }
    }

    /// The standard price list.
    ///
    /// | Rank | Dollars | Credits |
    /// |------|---------|---------|
    /// | 2    | 4       | 5       |
    /// | 3    | 10      | 10      |
    /// | 4    | 18      | 15      |
    /// | 5    | 28      | 20      |
    /// | 6    | 40      | 25      |
    #[must_use]
    pub fn standard() -> Self {
        const PRICES: [(u8, u32, u32); 5] = [(2, 4, 5), (3, 10, 10), (4, 18, 15), (5, 28, 20), (6, 40, 25)];

        let mut upgrades = Vec::with_capacity(PRICES.len() * 2);
        for (i, (rank, dollars, credits)) in PRICES.into_iter().enumerate() {
            let y = 470 + 23 * i as u32;
            upgrades.push(Upgrade {
                rank,
                currency: Currency::Dollars,
                amount: dollars,
                area: Area::new(98, y, 19, 19),
            });
            upgrades.push(Upgrade {
                rank,
                currency: Currency::Credits,
                amount: credits,
                area: Area::new(148, y, 19, 19),
            });
        }
        Self { upgrades }
    }

    /// Price of `rank` in `currency`, if that upgrade is on offer.
    #[must_use]
    pub fn cost(&self, rank: u8, currency: Currency) -> Option<u32> {
        self.upgrades
            .iter()
            .find(|u| u.rank == rank && u.currency == currency)
            .map(|u| u.amount)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Upgrade> {
        self.upgrades.iter()
    }
}

impl Default for UpgradeTable {
    fn default() -> Self {
        Self::standard()
    }
}
