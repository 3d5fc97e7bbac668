//! Call/put price pair returned by the analytic pricers.

use std::fmt;

use jumpdiff_core::types::OptionType;

/// European call and put prices for the same strike and maturity.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptionPrices {
    /// Call price.
    pub call: f64,
    /// Put price.
    pub put: f64,
}

impl OptionPrices {
    /// Returns the price for the requested side.
    #[inline]
    pub fn get(&self, option_type: OptionType) -> f64 {
        match option_type {
            OptionType::Call => self.call,
            OptionType::Put => self.put,
        }
    }

    /// `call - put`, which put-call parity ties to the discounted forward
    /// `S·e^(-qT) - K·e^(-rT)`.
    #[inline]
    pub fn call_minus_put(&self) -> f64 {
        self.call - self.put
    }
}

impl From<OptionPrices> for (f64, f64) {
    fn from(prices: OptionPrices) -> Self {
        (prices.call, prices.put)
    }
}

impl fmt::Display for OptionPrices {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "call {:.6}, put {:.6}", self.call, self.put)
    }
}
