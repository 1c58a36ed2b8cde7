//! COP list-price computation for distributor items.

use crate::money::{Currency, Money};

/// Colombian value-added tax applied to distributor list prices.
pub const IVA_RATE: f64 = 0.19;

/// Compute the COP list price for an item quoted in USD.
///
/// Converts at the given exchange rate and applies IVA, rounding once at
/// the end. Rounding the converted amount before tax would compound two
/// rounding steps.
pub fn list_price_cop(price_usd: f64, exchange_rate: f64) -> Money {
    let price_cop = price_usd * exchange_rate;
    let with_iva = price_cop * (1.0 + IVA_RATE);
    Money::new(with_iva.round() as i64, Currency::COP)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_price_with_iva() {
        // 100 USD at TRM 4000 -> 400000 COP -> 476000 with 19% IVA.
        let price = list_price_cop(100.0, 4000.0);
        assert_eq!(price.amount_minor, 476_000);
        assert_eq!(price.currency, Currency::COP);
    }

    #[test]
    fn test_rounds_once_after_tax() {
        // 2.6 * 1.0 = 2.6 COP; 2.6 * 1.19 = 3.094 -> 3.
        // Rounding before tax would give round(2.6) * 1.19 = 3.57 -> 4.
        let price = list_price_cop(2.6, 1.0);
        assert_eq!(price.amount_minor, 3);
    }

    #[test]
    fn test_zero_price() {
        assert!(list_price_cop(0.0, 4200.0).is_zero());
    }
}
