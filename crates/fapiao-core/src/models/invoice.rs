//! Invoice record extracted from one document.

use std::fmt;

use chrono::{DateTime, NaiveDate, TimeZone};
use rust_decimal::Decimal;

use crate::invoice::rules::format_amount;

/// Number of trailing code characters kept in the canonical filename.
pub const CODE_SUFFIX_LEN: usize = 8;

/// A fully validated invoice record.
///
/// Records are only built once every field is known; extractors return an
/// error instead of a partially filled record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvoiceRecord {
    /// Invoice date.
    pub date: NaiveDate,

    /// Category of the invoice.
    pub kind: InvoiceKind,

    /// Grand total, always positive with two fractional digits.
    pub amount: Decimal,

    /// Invoice identifier, genuine or synthesized.
    pub code: InvoiceCode,
}

impl InvoiceRecord {
    /// Amount formatted with exactly two decimal places.
    pub fn amount_text(&self) -> String {
        format_amount(self.amount)
    }
}

/// Invoice category, one of the catalog labels or unclassified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InvoiceKind {
    /// Catering (餐饮).
    Catering,
    /// Medical and pharmaceutical (医药).
    Medical,
    /// Passenger transport, including ride-hailing (客运).
    PassengerTransport,
    /// Equipment (设备).
    Equipment,
    /// No catalog label found in the document.
    Unclassified,
}

impl InvoiceKind {
    /// Labelled kinds in classification priority order.
    pub const CATALOG: [InvoiceKind; 4] = [
        InvoiceKind::Catering,
        InvoiceKind::Medical,
        InvoiceKind::PassengerTransport,
        InvoiceKind::Equipment,
    ];

    /// Marker appended to a catalog label.
    pub const SUFFIX: &'static str = "发票";

    /// Keyword searched for in document text.
    pub fn keyword(self) -> Option<&'static str> {
        match self {
            Self::Catering => Some("餐饮"),
            Self::Medical => Some("医药"),
            Self::PassengerTransport => Some("客运"),
            Self::Equipment => Some("设备"),
            Self::Unclassified => None,
        }
    }
}

impl fmt::Display for InvoiceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.keyword() {
            Some(keyword) => write!(f, "{}{}", keyword, Self::SUFFIX),
            None => write!(f, "其他{}", Self::SUFFIX),
        }
    }
}

/// Invoice identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvoiceCode {
    /// 20-digit code found in the document text.
    Genuine(String),
    /// Fallback built from the processing timestamp.
    Synthetic(String),
}

impl InvoiceCode {
    /// Synthesize a code from a timestamp: epoch milliseconds plus `_`.
    ///
    /// Two documents handled within the same millisecond get the same code.
    pub fn synthesize<Tz: TimeZone>(now: &DateTime<Tz>) -> Self {
        Self::Synthetic(format!("{}_", now.timestamp_millis()))
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Genuine(code) | Self::Synthetic(code) => code,
        }
    }

    pub fn is_synthetic(&self) -> bool {
        matches!(self, Self::Synthetic(_))
    }

    /// Last eight characters, used in the canonical filename.
    pub fn suffix(&self) -> &str {
        let code = self.as_str();
        let start = code
            .char_indices()
            .rev()
            .nth(CODE_SUFFIX_LEN - 1)
            .map_or(0, |(i, _)| i);
        &code[start..]
    }
}

impl fmt::Display for InvoiceCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_kind_display() {
        assert_eq!(InvoiceKind::PassengerTransport.to_string(), "客运发票");
        assert_eq!(InvoiceKind::Catering.to_string(), "餐饮发票");
        assert_eq!(InvoiceKind::Unclassified.to_string(), "其他发票");
    }

    #[test]
    fn test_code_suffix() {
        let code = InvoiceCode::Genuine("12345678901234567890".to_string());
        assert_eq!(code.suffix(), "34567890");

        let short = InvoiceCode::Genuine("1234".to_string());
        assert_eq!(short.suffix(), "1234");
    }

    #[test]
    fn test_synthetic_code() {
        let now = Utc.timestamp_millis_opt(1_693_526_400_123).unwrap();
        let code = InvoiceCode::synthesize(&now);

        assert!(code.is_synthetic());
        assert_eq!(code.as_str(), "1693526400123_");
        assert_eq!(code.suffix(), "6400123_");
    }

    #[test]
    fn test_amount_text_pads_two_places() {
        let record = InvoiceRecord {
            date: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
            kind: InvoiceKind::Unclassified,
            amount: Decimal::new(355, 1),
            code: InvoiceCode::Genuine("12345678901234567890".to_string()),
        };
        assert_eq!(record.amount_text(), "35.50");
    }
}
