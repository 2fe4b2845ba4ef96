//! Marginal income tax bracket lookup.
//!
//! The built-in table approximates the combined Finnish state and municipal
//! income tax rate for a non-church-member, sampled every 1,000 euros from 0 to
//! 125,000. Other tables, for example one reaching 200,000, can be supplied
//! through [`BracketTable::new`].
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use payout_core::BracketTable;
//!
//! let table = BracketTable::finnish();
//!
//! assert_eq!(table.bracket_for(dec!(14999)).marginal_rate_percent, dec!(0));
//! assert_eq!(table.bracket_for(dec!(50000)).marginal_rate_percent, dec!(23.5));
//! assert_eq!(table.bracket_for(dec!(500000)).marginal_rate_percent, dec!(37));
//! ```

use rust_decimal::Decimal;
use thiserror::Error;

use crate::TaxBracket;

/// `(income threshold, marginal rate in tenths of a percent)`.
const FINNISH_INCOME_TAX: [(u32, i64); 125] = [
    (0, 0), (1000, 0), (2000, 0), (3000, 0), (4000, 0), (5000, 0), (6000, 0), (7000, 0),
    (8000, 0), (9000, 0), (10000, 0), (11000, 0), (12000, 0), (13000, 0), (14000, 0),
    (15000, 15), (16000, 15), (17000, 25), (18000, 35), (19000, 50), (20000, 60),
    (21000, 70), (22000, 80), (24000, 100), (25000, 110), (26000, 115), (27000, 120),
    (28000, 130), (29000, 135), (30000, 140), (31000, 145), (32000, 150), (33000, 155),
    (34000, 165), (35000, 170), (36000, 175), (37000, 180), (38000, 185), (39000, 190),
    (40000, 195), (41000, 200), (42000, 205), (43000, 210), (44000, 215), (45000, 220),
    (46000, 220), (47000, 225), (48000, 230), (49000, 230), (50000, 235), (51000, 240),
    (52000, 240), (53000, 245), (54000, 250), (55000, 250), (56000, 255), (57000, 255),
    (58000, 260), (59000, 265), (60000, 265), (61000, 270), (62000, 270), (63000, 275),
    (64000, 275), (65000, 275), (66000, 280), (67000, 280), (68000, 285), (69000, 285),
    (70000, 290), (71000, 290), (72000, 290), (73000, 295), (74000, 295), (75000, 295),
    (76000, 300), (77000, 300), (78000, 300), (79000, 305), (80000, 305), (81000, 305),
    (82000, 305), (83000, 310), (84000, 310), (85000, 310), (86000, 310), (87000, 315),
    (88000, 315), (89000, 315), (90000, 320), (91000, 320), (92000, 325), (93000, 325),
    (94000, 330), (95000, 330), (96000, 330), (97000, 335), (98000, 335), (99000, 335),
    (100000, 340), (101000, 340), (102000, 340), (103000, 345), (104000, 345),
    (105000, 345), (106000, 350), (107000, 350), (108000, 350), (109000, 350),
    (110000, 355), (111000, 355), (112000, 355), (113000, 355), (114000, 360),
    (115000, 360), (116000, 360), (117000, 360), (118000, 365), (119000, 365),
    (120000, 365), (121000, 365), (122000, 370), (123000, 370), (124000, 370),
    (125000, 370),
];

/// Errors raised when a bracket table fails validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BracketTableError {
    /// The table has no brackets.
    #[error("bracket table is empty")]
    Empty,

    /// A threshold is below zero.
    #[error("bracket {index} has a negative income threshold {threshold}")]
    NegativeThreshold { index: usize, threshold: Decimal },

    /// A threshold is not greater than the one before it.
    #[error("bracket {index} threshold {threshold} does not exceed previous threshold {previous}")]
    NotAscending {
        index: usize,
        threshold: Decimal,
        previous: Decimal,
    },

    /// A rate is outside `0..=100` percent.
    #[error("bracket {index} has rate {rate}%, expected 0 to 100")]
    RateOutOfRange { index: usize, rate: Decimal },
}

/// An ordered, non-empty list of [`TaxBracket`]s with strictly increasing
/// thresholds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BracketTable {
    brackets: Vec<TaxBracket>,
}

impl BracketTable {
    /// Validates and wraps a bracket list.
    ///
    /// # Errors
    ///
    /// Returns [`BracketTableError`] if:
    /// - the list is empty
    /// - a threshold is negative or not strictly above the previous one
    /// - a rate is outside `0..=100`
    pub fn new(brackets: Vec<TaxBracket>) -> Result<Self, BracketTableError> {
        if brackets.is_empty() {
            return Err(BracketTableError::Empty);
        }

        for (index, bracket) in brackets.iter().enumerate() {
            if bracket.income_threshold < Decimal::ZERO {
                return Err(BracketTableError::NegativeThreshold {
                    index,
                    threshold: bracket.income_threshold,
                });
            }
            if bracket.marginal_rate_percent < Decimal::ZERO
                || bracket.marginal_rate_percent > Decimal::ONE_HUNDRED
            {
                return Err(BracketTableError::RateOutOfRange {
                    index,
                    rate: bracket.marginal_rate_percent,
                });
            }
            if let Some(previous) = index.checked_sub(1).map(|i| brackets[i].income_threshold) {
                if bracket.income_threshold <= previous {
                    return Err(BracketTableError::NotAscending {
                        index,
                        threshold: bracket.income_threshold,
                        previous,
                    });
                }
            }
        }

        Ok(Self { brackets })
    }

    /// The built-in Finnish income tax table.
    pub fn finnish() -> Self {
        let brackets = FINNISH_INCOME_TAX
            .iter()
            .map(|&(threshold, tenths)| {
                TaxBracket::new(Decimal::from(threshold), Decimal::new(tenths, 1))
            })
            .collect();
        Self { brackets }
    }

    /// Returns the bracket that applies to `gross_income`.
    ///
    /// That is the last bracket whose threshold is at or below the income.
    /// Income below the first threshold falls into the first bracket and
    /// income above the last threshold into the last one.
    pub fn bracket_for(
        &self,
        gross_income: Decimal,
    ) -> &TaxBracket {
        let above = self
            .brackets
            .partition_point(|b| b.income_threshold <= gross_income);
        &self.brackets[above.saturating_sub(1)]
    }

    pub fn brackets(&self) -> &[TaxBracket] {
        &self.brackets
    }
}

impl Default for BracketTable {
    fn default() -> Self {
        Self::finnish()
    }
}
