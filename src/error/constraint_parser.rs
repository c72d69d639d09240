use regex::Regex;
use std::sync::OnceLock;

/// Utility for parsing PostgreSQL constraint violation messages.
///
/// Extracts structured information from constraint violation messages so
/// that, for example, a violation of `employees_email_key` can be reported
/// as a duplicate of the `email` field rather than a raw database error.
pub struct ConstraintParser;

/// Compiled regex patterns for constraint parsing, cached for reuse
struct RegexPatterns {
    key_value: Regex,
    column_name: Regex,
    table_name: Regex,
}

impl RegexPatterns {
    fn new() -> Self {
        Self {
            // Matches "Key (field)=(value)" pattern in PostgreSQL messages
            key_value: Regex::new(r"Key \(([^)]+)\)=\(([^)]*)\)").unwrap(),
            // Matches column names in quotes
            column_name: Regex::new(r#"column "([^"]+)""#).unwrap(),
            // Matches table names in quotes
            table_name: Regex::new(r#"table "([^"]+)""#).unwrap(),
        }
    }
}

static REGEX_PATTERNS: OnceLock<RegexPatterns> = OnceLock::new();

impl ConstraintParser {
    fn patterns() -> &'static RegexPatterns {
        REGEX_PATTERNS.get_or_init(RegexPatterns::new)
    }

    /// Parses a unique constraint violation message.
    ///
    /// Tries the constraint name first (e.g. `employees_email_key` ->
    /// `("employees", "email")`), then falls back to the message body.
    ///
    /// # Returns
    /// Optional tuple of (entity, field, value) if parsing succeeds
    pub fn parse_unique_violation(
        message: &str,
        constraint_name: Option<&str>,
    ) -> Option<(String, String, String)> {
        if let Some(constraint) = constraint_name
            && let Some((entity, field)) = Self::parse_constraint_name(constraint)
        {
            if let Some((_, value)) = Self::extract_key_value_from_message(message) {
                return Some((entity, field, value));
            }
            return Some((entity, field, "duplicate_value".to_string()));
        }

        if let Some((field, value)) = Self::extract_key_value_from_message(message) {
            let entity =
                Self::extract_table_from_message(message).unwrap_or_else(|| "resource".to_string());
            return Some((entity, field, value));
        }

        None
    }

    /// Parses a not null constraint violation message.
    ///
    /// # Returns
    /// Optional tuple of (entity, field) if parsing succeeds
    pub fn parse_not_null_violation(
        message: &str,
        constraint_name: Option<&str>,
    ) -> Option<(String, String)> {
        if let Some(field) = Self::extract_column_from_message(message) {
            let entity = Self::extract_table_from_message(message)
                .or_else(|| {
                    constraint_name.and_then(|c| Self::parse_constraint_name(c).map(|(e, _)| e))
                })
                .unwrap_or_else(|| "resource".to_string());
            return Some((entity, field));
        }

        None
    }

    /// Parses a constraint name to extract entity and field information.
    ///
    /// Handles common PostgreSQL constraint naming patterns:
    /// - "employees_email_key" -> ("employees", "email")
    /// - "employees_age_check" -> ("employees", "age")
    pub fn parse_constraint_name(constraint_name: &str) -> Option<(String, String)> {
        let parts: Vec<&str> = constraint_name.split('_').collect();
        if parts.len() >= 3 {
            let entity = parts[0].to_string();
            let field = parts[1..parts.len() - 1].join("_");
            return Some((entity, field));
        }
        None
    }

    /// Extracts a column name from a message, e.g. `column "email"`.
    pub fn extract_column_from_message(message: &str) -> Option<String> {
        Self::patterns()
            .column_name
            .captures(message)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
    }

    /// Extracts a table name from a message, e.g. `table "employees"`.
    pub fn extract_table_from_message(message: &str) -> Option<String> {
        Self::patterns()
            .table_name
            .captures(message)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
    }

    /// Extracts the `Key (field)=(value)` pair from a message.
    pub fn extract_key_value_from_message(message: &str) -> Option<(String, String)> {
        Self::patterns().key_value.captures(message).and_then(|caps| {
            let field = caps.get(1)?.as_str().to_string();
            let value = caps.get(2)?.as_str().to_string();
            Some((field, value))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_unique_violation_with_constraint_name() {
        let message = "duplicate key value violates unique constraint \"employees_email_key\"\nDETAIL: Key (email)=(vedha@gmail.com) already exists.";
        let result = ConstraintParser::parse_unique_violation(message, Some("employees_email_key"));
        assert_eq!(
            result,
            Some((
                "employees".to_string(),
                "email".to_string(),
                "vedha@gmail.com".to_string()
            ))
        );
    }

    #[test]
    fn test_parse_unique_violation_without_constraint_name() {
        let message = "duplicate key value violates unique constraint\nDETAIL: Key (email)=(vedha@gmail.com) already exists.";
        let result = ConstraintParser::parse_unique_violation(message, None);
        assert_eq!(
            result,
            Some((
                "resource".to_string(),
                "email".to_string(),
                "vedha@gmail.com".to_string()
            ))
        );
    }

    #[test]
    fn test_parse_unique_violation_without_detail() {
        let message = "duplicate key value violates unique constraint \"employees_email_key\"";
        let result = ConstraintParser::parse_unique_violation(message, Some("employees_email_key"));
        assert_eq!(
            result,
            Some((
                "employees".to_string(),
                "email".to_string(),
                "duplicate_value".to_string()
            ))
        );
    }

    #[test]
    fn test_parse_not_null_violation() {
        let message = "null value in column \"email\" violates not-null constraint";
        let result = ConstraintParser::parse_not_null_violation(message, None);
        assert_eq!(result, Some(("resource".to_string(), "email".to_string())));
    }

    #[test]
    fn test_parse_constraint_name() {
        assert_eq!(
            ConstraintParser::parse_constraint_name("employees_email_key"),
            Some(("employees".to_string(), "email".to_string()))
        );
        assert_eq!(
            ConstraintParser::parse_constraint_name("employees_age_check"),
            Some(("employees".to_string(), "age".to_string()))
        );
        assert_eq!(ConstraintParser::parse_constraint_name("invalid"), None);
    }

    #[test]
    fn test_extract_key_value_from_message() {
        let message = "Key (email)=(vedha@gmail.com) already exists.";
        assert_eq!(
            ConstraintParser::extract_key_value_from_message(message),
            Some(("email".to_string(), "vedha@gmail.com".to_string()))
        );
        assert_eq!(
            ConstraintParser::extract_key_value_from_message("no key here"),
            None
        );
    }

    #[test]
    fn test_extract_table_from_message() {
        let message = "insert or update on table \"employees\" violates constraint";
        assert_eq!(
            ConstraintParser::extract_table_from_message(message),
            Some("employees".to_string())
        );
    }

    #[test]
    fn test_graceful_parsing_failures() {
        let message = "completely unrelated error message";
        assert_eq!(ConstraintParser::parse_unique_violation(message, None), None);
        assert_eq!(ConstraintParser::parse_not_null_violation(message, None), None);
    }
}
