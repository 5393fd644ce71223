// src/ledger.rs
// =============================================================================
// This module keeps the ledger of purchased backlinks.
//
// A record captures where a bought link lives, who sold it, and when it
// runs out. The expiry date is computed from the purchase date plus the
// bought duration in calendar months. Records are immutable once saved and
// live only for the process - there is no delete and no storage.
//
// Rust concepts:
// - chrono::NaiveDate: A calendar date with month arithmetic built in
// - Validation before construction: A record can only exist in valid form
// - Borrowed returns: add() hands back a reference into the ledger
// =============================================================================

use chrono::{Months, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

// The durations a seller actually offers
const ALLOWED_DURATIONS: [u32; 4] = [1, 3, 6, 12];

// Days below which an expiry is flagged as urgent
pub const EXPIRY_WARNING_DAYS: i64 = 30;

// Why a record could not be saved
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// Source URL, target URL and seller name are all required
    #[error("please fill in all required fields")]
    MissingRequiredFields,
    /// The source URL did not parse
    #[error("invalid source URL: {0}")]
    InvalidSourceUrl(String),
    /// The target URL did not parse
    #[error("invalid target URL: {0}")]
    InvalidTargetUrl(String),
    /// The duration is not one a seller offers
    #[error("unsupported duration: {0} months")]
    UnsupportedDuration(u32),
    /// Adding the duration pushed the date out of chrono's range
    #[error("expiry date out of range")]
    ExpiryOutOfRange,
}

// What the add form collects before validation
#[derive(Debug, Clone, Default)]
pub struct NewBacklink {
    pub source_url: String,
    pub target_url: String,
    pub seller_name: String,
    pub contact_info: String,
    pub duration_months: u32,
}

// A saved purchase record
//
// Immutable after creation: the ledger only ever appends.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PurchasedBacklink {
    pub id: String,
    pub source_url: String,
    pub target_url: String,
    pub seller_name: String,
    pub contact_info: String,
    pub duration_months: u32,
    pub purchase_date: NaiveDate,
    pub expiry_date: NaiveDate,
}

impl PurchasedBacklink {
    /// Days from `today` until this record expires
    ///
    /// Zero or negative means the purchase has already run out.
    pub fn days_until_expiry(&self, today: NaiveDate) -> i64 {
        (self.expiry_date - today).num_days()
    }
}

// The in-memory record list
#[derive(Debug, Default)]
pub struct Ledger {
    records: Vec<PurchasedBacklink>,
}

impl Ledger {
    pub fn new() -> Self {
        Ledger {
            records: Vec::new(),
        }
    }

    // Validates a form and appends the resulting record
    //
    // Parameters:
    //   form: the raw field values from the user
    //   today: the purchase date (passed in so tests control the calendar)
    //
    // Returns: a reference to the saved record, or why it was refused
    pub fn add(
        &mut self,
        form: NewBacklink,
        today: NaiveDate,
    ) -> Result<&PurchasedBacklink, LedgerError> {
        // The three fields the form marks as required
        if form.source_url.trim().is_empty()
            || form.target_url.trim().is_empty()
            || form.seller_name.trim().is_empty()
        {
            return Err(LedgerError::MissingRequiredFields);
        }

        // Both link endpoints must be real URLs
        if Url::parse(&form.source_url).is_err() {
            return Err(LedgerError::InvalidSourceUrl(form.source_url));
        }
        if Url::parse(&form.target_url).is_err() {
            return Err(LedgerError::InvalidTargetUrl(form.target_url));
        }

        if !ALLOWED_DURATIONS.contains(&form.duration_months) {
            return Err(LedgerError::UnsupportedDuration(form.duration_months));
        }

        // expiry = purchase + N calendar months
        // chrono clamps to the last day of a shorter month (Jan 31 + 1 month
        // lands on Feb 28/29), which is what a subscription renewal does
        let expiry_date = today
            .checked_add_months(Months::new(form.duration_months))
            .ok_or(LedgerError::ExpiryOutOfRange)?;

        self.records.push(PurchasedBacklink {
            id: Utc::now().timestamp_millis().to_string(),
            source_url: form.source_url,
            target_url: form.target_url,
            seller_name: form.seller_name,
            contact_info: form.contact_info,
            duration_months: form.duration_months,
            purchase_date: today,
            expiry_date,
        });

        // Safe: we just pushed, so the list cannot be empty
        Ok(&self.records[self.records.len() - 1])
    }

    pub fn records(&self) -> &[PurchasedBacklink] {
        &self.records
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What is NaiveDate?
//    - A plain calendar date with no timezone attached
//    - Subtracting two of them gives a Duration in whole days
//    - "Naive" just means timezone-unaware, which is all a purchase
//      date needs
//
// 2. What does checked_add_months return?
//    - Option<NaiveDate>: None if the result would overflow the calendar
//    - ok_or() converts that Option into our Result type
//
// 3. Why does add() take `today` as a parameter?
//    - Tests can pin the calendar and assert exact expiry dates
//    - Only main.rs reaches for the real clock
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> NewBacklink {
        NewBacklink {
            source_url: "https://blog.example.com/post".to_string(),
            target_url: "https://mysite.com".to_string(),
            seller_name: "John Doe".to_string(),
            contact_info: "john@example.com".to_string(),
            duration_months: 3,
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_expiry_is_purchase_plus_months() {
        let mut ledger = Ledger::new();
        let record = ledger.add(valid_form(), date(2026, 2, 10)).unwrap();
        assert_eq!(record.purchase_date, date(2026, 2, 10));
        assert_eq!(record.expiry_date, date(2026, 5, 10));
    }

    #[test]
    fn test_expiry_clamps_to_month_end() {
        let mut ledger = Ledger::new();
        let mut form = valid_form();
        form.duration_months = 1;
        // Jan 31 + 1 month: February has no 31st
        let record = ledger.add(form, date(2026, 1, 31)).unwrap();
        assert_eq!(record.expiry_date, date(2026, 2, 28));
    }

    #[test]
    fn test_expiry_crosses_year_boundary() {
        let mut ledger = Ledger::new();
        let mut form = valid_form();
        form.duration_months = 6;
        let record = ledger.add(form, date(2026, 10, 15)).unwrap();
        assert_eq!(record.expiry_date, date(2027, 4, 15));
    }

    #[test]
    fn test_missing_seller_is_rejected() {
        let mut ledger = Ledger::new();
        let mut form = valid_form();
        form.seller_name = "   ".to_string();
        let err = ledger.add(form, date(2026, 2, 10)).unwrap_err();
        assert_eq!(err, LedgerError::MissingRequiredFields);
        assert!(ledger.records().is_empty());
    }

    #[test]
    fn test_bad_source_url_is_rejected() {
        let mut ledger = Ledger::new();
        let mut form = valid_form();
        form.source_url = "not a url".to_string();
        let err = ledger.add(form, date(2026, 2, 10)).unwrap_err();
        assert!(matches!(err, LedgerError::InvalidSourceUrl(_)));
    }

    #[test]
    fn test_odd_duration_is_rejected() {
        let mut ledger = Ledger::new();
        let mut form = valid_form();
        form.duration_months = 5;
        let err = ledger.add(form, date(2026, 2, 10)).unwrap_err();
        assert_eq!(err, LedgerError::UnsupportedDuration(5));
    }

    #[test]
    fn test_days_until_expiry() {
        let mut ledger = Ledger::new();
        let mut form = valid_form();
        form.duration_months = 1;
        let record = ledger.add(form, date(2026, 3, 1)).unwrap();
        assert_eq!(record.days_until_expiry(date(2026, 3, 1)), 31);
        assert_eq!(record.days_until_expiry(date(2026, 3, 20)), 12);
        // Past the expiry the count goes negative
        assert_eq!(record.days_until_expiry(date(2026, 4, 5)), -4);
    }

    #[test]
    fn test_contact_info_is_optional() {
        let mut ledger = Ledger::new();
        let mut form = valid_form();
        form.contact_info = String::new();
        assert!(ledger.add(form, date(2026, 2, 10)).is_ok());
        assert_eq!(ledger.records().len(), 1);
    }
}
