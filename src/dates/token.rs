//! Symbolic bound tokens

use std::fmt;

/// A lower- or upper-bound specifier as supplied by a pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateToken {
    /// `current_year`
    CurrentYear,
    /// `current_month`
    CurrentMonth,
    /// `current_day`
    CurrentDay,
    /// A date string in the request's date format
    Explicit(String),
}

impl DateToken {
    /// Classifies a raw token. Symbolic names match case-insensitively;
    /// anything else is kept verbatim as an explicit date.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "current_year" => DateToken::CurrentYear,
            "current_month" => DateToken::CurrentMonth,
            "current_day" => DateToken::CurrentDay,
            _ => DateToken::Explicit(raw.to_string()),
        }
    }

    pub fn is_symbolic(&self) -> bool {
        !matches!(self, DateToken::Explicit(_))
    }
}

impl From<&str> for DateToken {
    fn from(raw: &str) -> Self {
        DateToken::parse(raw)
    }
}

impl fmt::Display for DateToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateToken::CurrentYear => f.write_str("current_year"),
            DateToken::CurrentMonth => f.write_str("current_month"),
            DateToken::CurrentDay => f.write_str("current_day"),
            DateToken::Explicit(value) => f.write_str(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbolic_tokens() {
        assert_eq!(DateToken::parse("current_year"), DateToken::CurrentYear);
        assert_eq!(DateToken::parse("CURRENT_MONTH"), DateToken::CurrentMonth);
        assert_eq!(DateToken::parse(" current_day "), DateToken::CurrentDay);
        assert!(DateToken::parse("current_day").is_symbolic());
    }

    #[test]
    fn test_explicit_token() {
        let token = DateToken::parse("2024-01-01");
        assert_eq!(token, DateToken::Explicit("2024-01-01".into()));
        assert!(!token.is_symbolic());
        assert_eq!(token.to_string(), "2024-01-01");
    }
}
