//! Operator-facing diagnostics
//!
//! Errors from the API layer are turned into `(summary, detail)` pairs that a
//! caller can forward to Terraform, a log, or a CLI without further parsing.

use crate::api::ApiError;

/// Diagnostic represents an error raised while talking to the API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub summary: String,
    pub detail: String,
}

impl Diagnostic {
    pub fn error(summary: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            summary: summary.into(),
            detail: detail.into(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Diagnostics {
    pub errors: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_error(&mut self, summary: impl Into<String>, detail: Option<impl Into<String>>) {
        let detail: String = detail.map(Into::into).unwrap_or_default();
        self.errors.push(Diagnostic::error(summary, detail));
    }

    pub fn extend(&mut self, other: Diagnostics) {
        self.errors.extend(other.errors);
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Unwraps an API result, recording exactly one error diagnostic on failure.
///
/// Nothing is recorded on success.
pub fn report<T>(result: Result<T, ApiError>, diags: &mut Diagnostics) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            diags.errors.push(e.to_diagnostic());
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::envelope::decode_successful;

    #[test]
    fn report_records_nothing_on_success() {
        let mut diags = Diagnostics::new();
        let envelope = report(decode_successful(&br#"{"code":0}"#[..]), &mut diags);

        assert!(envelope.is_some());
        assert!(!diags.has_errors());
    }

    #[test]
    fn report_records_single_error_with_code() {
        let mut diags = Diagnostics::new();
        let body = br#"{"code":1100,"message":"invalid aid"}"#;
        let envelope = report(decode_successful(&body[..]), &mut diags);

        assert!(envelope.is_none());
        assert_eq!(diags.errors.len(), 1);
        assert!(diags.errors[0].summary.contains("1100"));
        assert!(diags.errors[0].detail.contains("invalid aid"));
    }

    #[test]
    fn diagnostics_merge() {
        let mut diags = Diagnostics::new();
        diags.add_error("request failed", Some("boom"));
        diags.add_error("configuration missing", None::<String>);

        assert!(diags.has_errors());
        assert_eq!(diags.errors[0].detail, "boom");
        assert_eq!(diags.errors[1].detail, "");

        let mut merged = Diagnostics::new();
        merged.extend(diags);
        assert_eq!(merged.errors.len(), 2);
    }
}
