use chrono::{Datelike, NaiveDate};

use crate::error::EngineError;
use crate::types::Quote;

/// Deterministic pick for the day: day-of-year modulo the collection size,
/// so everyone sees the same quote all day and it rolls over at midnight.
pub fn quote_of_the_day(quotes: &[Quote], today: NaiveDate) -> Result<&Quote, EngineError> {
    if quotes.is_empty() {
        return Err(EngineError::EmptyCollection);
    }
    let index = today.ordinal() as usize % quotes.len();
    Ok(&quotes[index])
}

/// Cyclic successor for the "new quote" action. An unknown current quote
/// restarts the rotation from the front.
pub fn next_quote<'a>(quotes: &'a [Quote], current: &Quote) -> Result<&'a Quote, EngineError> {
    if quotes.is_empty() {
        return Err(EngineError::EmptyCollection);
    }
    let index = quotes
        .iter()
        .position(|q| q.text == current.text)
        .map(|i| (i + 1) % quotes.len())
        .unwrap_or(0);
    Ok(&quotes[index])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::QuoteCategory;

    fn quote(text: &str) -> Quote {
        Quote {
            text: text.to_string(),
            author: "Unknown".to_string(),
            category: QuoteCategory::Motivation,
        }
    }

    fn fixtures() -> Vec<Quote> {
        vec![quote("first"), quote("second"), quote("third")]
    }

    #[test]
    fn same_date_always_picks_the_same_quote() {
        let quotes = fixtures();
        let date = NaiveDate::from_ymd_opt(2024, 1, 24).unwrap();
        let a = quote_of_the_day(&quotes, date).unwrap();
        let b = quote_of_the_day(&quotes, date).unwrap();
        assert_eq!(a.text, b.text);
        // Jan 24 is ordinal 24; 24 % 3 == 0.
        assert_eq!(a.text, "first");
    }

    #[test]
    fn consecutive_days_walk_the_rotation() {
        let quotes = fixtures();
        let day24 = NaiveDate::from_ymd_opt(2024, 1, 24).unwrap();
        let day25 = NaiveDate::from_ymd_opt(2024, 1, 25).unwrap();
        assert_eq!(quote_of_the_day(&quotes, day24).unwrap().text, "first");
        assert_eq!(quote_of_the_day(&quotes, day25).unwrap().text, "second");
    }

    #[test]
    fn next_quote_cycles_and_wraps() {
        let quotes = fixtures();
        assert_eq!(next_quote(&quotes, &quotes[0]).unwrap().text, "second");
        assert_eq!(next_quote(&quotes, &quotes[2]).unwrap().text, "first");
    }

    #[test]
    fn next_quote_restarts_when_current_is_unknown() {
        let quotes = fixtures();
        let stranger = quote("not in the set");
        assert_eq!(next_quote(&quotes, &stranger).unwrap().text, "first");
    }

    #[test]
    fn empty_collection_is_an_error() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 24).unwrap();
        assert!(quote_of_the_day(&[], date).is_err());
        assert!(next_quote(&[], &quote("x")).is_err());
    }
}
