//! Invoice date extraction.

use chrono::NaiveDate;

use super::patterns::DATE_YMD_CJK;
use super::{ExtractionMatch, FieldExtractor};

/// Date field extractor for `YYYY年MM月DD日` style dates.
pub struct DateExtractor;

impl DateExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DateExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for DateExtractor {
    type Output = ExtractionMatch<NaiveDate>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        DATE_YMD_CJK
            .captures_iter(text)
            .filter_map(|caps| {
                let year: i32 = caps[1].parse().ok()?;
                let month: u32 = caps[2].parse().ok()?;
                let day: u32 = caps[3].parse().ok()?;
                let date = NaiveDate::from_ymd_opt(year, month, day)?;

                let full_match = caps.get(0)?;
                Some(
                    ExtractionMatch::new(date, full_match.as_str())
                        .with_position(full_match.start(), full_match.end()),
                )
            })
            .collect()
    }
}
