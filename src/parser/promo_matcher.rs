// Month-qualified "exhausted" announcement matching
use crate::model::ParserError;
use regex::Regex;

pub const EXHAUSTED_MARKER: &str = "額滿";

pub struct ExhaustedMatcher;

impl ExhaustedMatcher {
    pub fn new() -> Self {
        Self
    }

    /// Finds the first `<year>年<month>月 ... 額滿` span in `text`, shortest
    /// possible tail. Month is not zero-padded.
    pub fn find(&self, text: &str, year: i32, month: u32) -> Result<Option<String>, ParserError> {
        if !(1..=12).contains(&month) {
            return Err(ParserError::InvalidMonth(month));
        }

        let pattern = format!(
            "{}(?s:.*?){}",
            regex::escape(&format!("{}年{}月", year, month)),
            regex::escape(EXHAUSTED_MARKER)
        );
        let re = Regex::new(&pattern)?;

        Ok(re.find(text).map(|m| m.as_str().to_string()))
    }
}

impl Default for ExhaustedMatcher {
    fn default() -> Self {
        Self::new()
    }
}
