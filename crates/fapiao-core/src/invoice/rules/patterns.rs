//! Common regex patterns for invoice field extraction.

use lazy_static::lazy_static;
use regex::Regex;

// ASCII digits only: `\d` in `regex` also matches full-width digits.
lazy_static! {
    // Date: "2023年09月01日", "2023 年 09 月 01 日" or "2023 09 01 "
    pub static ref DATE_YMD_CJK: Regex = Regex::new(
        r"([0-9]{4})[\s年]+([0-9]{2})[\s月]+([0-9]{2})[\s日]+"
    ).unwrap();

    // Invoice code: first 20 consecutive digits
    pub static ref INVOICE_CODE: Regex = Regex::new(
        r"[0-9]{20}"
    ).unwrap();

    // Amount prefixed by a yuan sign, half- or full-width
    pub static ref AMOUNT_WITH_CURRENCY: Regex = Regex::new(
        r"[¥￥]\s*([0-9]+\.[0-9]{2})"
    ).unwrap();
}
