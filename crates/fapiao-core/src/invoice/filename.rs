//! Extraction from machine-generated ride-hailing invoice filenames.
//!
//! Files such as `高德打车电子发票-35.00元-20230101.pdf` already encode the
//! amount, so their content is never read.

use chrono::{DateTime, Local};
use rust_decimal::Decimal;
use std::str::FromStr;
use tracing::debug;

use crate::error::ExtractionError;
use crate::models::invoice::{InvoiceCode, InvoiceKind, InvoiceRecord};

use super::Result;

/// Filename-based extractor for one ride-hailing invoice family.
pub struct RideHailingExtractor {
    marker: String,
}

impl RideHailingExtractor {
    /// Create an extractor recognizing filenames that contain `marker`.
    pub fn new(marker: impl Into<String>) -> Self {
        Self {
            marker: marker.into(),
        }
    }

    /// Whether the filename belongs to this invoice family.
    pub fn matches(&self, file_name: &str) -> bool {
        !self.marker.is_empty() && file_name.contains(&self.marker)
    }

    /// Build a record from the filename alone.
    ///
    /// The amount comes from the second `-`-separated segment, rounded to
    /// two decimal places; date and code are derived from `now`.
    pub fn extract(&self, file_name: &str, now: &DateTime<Local>) -> Result<InvoiceRecord> {
        let segment = file_name
            .split('-')
            .nth(1)
            .ok_or(ExtractionError::MissingField("amount"))?;
        let digits = segment.trim().trim_end_matches(|c: char| !c.is_ascii_digit());

        let amount = Decimal::from_str(digits)
            .ok()
            .filter(|amount| amount.is_sign_positive() && !amount.is_zero())
            .ok_or_else(|| ExtractionError::Parse {
                field: "amount",
                value: segment.to_string(),
            })?;

        let record = InvoiceRecord {
            date: now.date_naive(),
            kind: InvoiceKind::PassengerTransport,
            amount: amount.round_dp(2),
            code: InvoiceCode::synthesize(now),
        };

        debug!("Derived {:?} from filename {}", record, file_name);
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone};

    fn extractor() -> RideHailingExtractor {
        RideHailingExtractor::new("高德打车电子发票")
    }

    fn now() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 3, 5, 10, 30, 0).unwrap()
    }

    #[test]
    fn test_matches_marker() {
        assert!(extractor().matches("高德打车电子发票-35.00元-20230101.pdf"));
        assert!(extractor().matches("副本 高德打车电子发票-35.00元-20230101.pdf"));
        assert!(!extractor().matches("电子发票-35.00元.pdf"));
        assert!(!RideHailingExtractor::new("").matches("anything.pdf"));
    }

    #[test]
    fn test_extract_from_filename() {
        let now = now();
        let record = extractor()
            .extract("高德打车电子发票-35.00元-20230101.pdf", &now)
            .unwrap();

        assert_eq!(record.amount_text(), "35.00");
        assert_eq!(record.kind, InvoiceKind::PassengerTransport);
        assert_eq!(record.date, NaiveDate::from_ymd_opt(2024, 3, 5).unwrap());
        assert_eq!(record.code, InvoiceCode::synthesize(&now));
    }

    #[test]
    fn test_amount_without_cents_is_padded() {
        let record = extractor()
            .extract("高德打车电子发票-128元-2行程.pdf", &now())
            .unwrap();

        assert_eq!(record.amount_text(), "128.00");
    }

    #[test]
    fn test_extra_precision_is_rounded() {
        let record = extractor()
            .extract("高德打车电子发票-35.555元-20230101.pdf", &now())
            .unwrap();

        assert_eq!(record.amount_text(), "35.56");
    }

    #[test]
    fn test_missing_segment_fails() {
        assert_eq!(
            extractor().extract("高德打车电子发票.pdf", &now()),
            Err(ExtractionError::MissingField("amount"))
        );
    }

    #[test]
    fn test_unparseable_segment_fails() {
        assert_eq!(
            extractor().extract("高德打车电子发票-行程单-20230101.pdf", &now()),
            Err(ExtractionError::Parse {
                field: "amount",
                value: "行程单".to_string(),
            })
        );
        assert!(extractor()
            .extract("高德打车电子发票-0.00元-20230101.pdf", &now())
            .is_err());
    }
}
