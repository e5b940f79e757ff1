//! Amount extraction for yuan-denominated invoices.

use rust_decimal::Decimal;
use std::str::FromStr;

use super::patterns::AMOUNT_WITH_CURRENCY;
use super::{ExtractionMatch, FieldExtractor};

/// Amount field extractor for `¥123.45` / `￥ 123.45` figures.
pub struct AmountExtractor;

impl AmountExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for AmountExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for AmountExtractor {
    type Output = ExtractionMatch<Decimal>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        AMOUNT_WITH_CURRENCY
            .captures_iter(text)
            .filter_map(|caps| {
                let amount = Decimal::from_str(&caps[1]).ok()?;
                let full_match = caps.get(0)?;
                Some(
                    ExtractionMatch::new(amount, full_match.as_str())
                        .with_position(full_match.start(), full_match.end()),
                )
            })
            .collect()
    }
}

/// Pick the grand total: the largest currency figure in the text.
///
/// Returns `None` when no figure is found or the largest is zero.
pub fn extract_total(text: &str) -> Option<Decimal> {
    let total = AmountExtractor::new()
        .extract_all(text)
        .into_iter()
        .fold(Decimal::ZERO, |max, m| max.max(m.value));

    (total > Decimal::ZERO).then_some(total)
}

/// Format an amount with exactly two decimal places.
pub fn format_amount(amount: Decimal) -> String {
    format!("{:.2}", amount)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_extract_all_amounts() {
        let extractor = AmountExtractor::new();
        let text = "金额 ¥50.00 税额 ￥ 6.50 价税合计 ¥123.45";

        let values: Vec<Decimal> = extractor
            .extract_all(text)
            .into_iter()
            .map(|m| m.value)
            .collect();
        assert_eq!(values, vec![dec("50.00"), dec("6.50"), dec("123.45")]);
    }

    #[test]
    fn test_total_is_maximum() {
        let text = "¥50.00\n¥123.45\n¥99.99";
        assert_eq!(extract_total(text), Some(dec("123.45")));

        let text = "¥1000.00 before ¥999.99";
        assert_eq!(extract_total(text), Some(dec("1000.00")));
    }

    #[test]
    fn test_no_currency_figures() {
        assert_eq!(extract_total("合计 123.45 元"), None);
        assert_eq!(extract_total(""), None);
    }

    #[test]
    fn test_zero_total_is_not_found() {
        assert_eq!(extract_total("¥0.00 ￥0.00"), None);
    }

    #[test]
    fn test_requires_two_fraction_digits() {
        assert_eq!(extract_total("¥12.3 ¥45"), None);
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(dec("123.45")), "123.45");
        assert_eq!(format_amount(dec("35")), "35.00");
        assert_eq!(format_amount(dec("35.5")), "35.50");
    }
}
