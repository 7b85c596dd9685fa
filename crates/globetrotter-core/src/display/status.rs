//! Status and confirmation message types for operation feedback.

use std::fmt;

/// Wrapper type for displaying operation confirmation messages.
///
/// Used for edits that have no resource worth echoing back, such as
/// removing a day or an activity.
pub struct OperationStatus {
    pub message: String,
    pub success: bool,
}

impl OperationStatus {
    /// Create a new success status.
    pub fn success(message: String) -> Self {
        Self {
            message,
            success: true,
        }
    }

    /// Create a new failure status.
    pub fn failure(message: String) -> Self {
        Self {
            message,
            success: false,
        }
    }

    /// Success or "nothing matched" depending on whether an edit applied.
    pub fn from_applied(applied: bool, done: String, missing: String) -> Self {
        if applied {
            Self::success(done)
        } else {
            Self::failure(missing)
        }
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} {}",
            if self.success { "Success:" } else { "Error:" },
            self.message
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_status_display() {
        let success = OperationStatus::success("Day added".to_string());
        assert_eq!(format!("{success}"), "Success: Day added\n");

        let failure = OperationStatus::failure("No day 9".to_string());
        assert!(format!("{failure}").starts_with("Error:"));
    }

    #[test]
    fn test_from_applied() {
        let applied = OperationStatus::from_applied(true, "done".into(), "missing".into());
        assert!(applied.success);
        assert_eq!(applied.message, "done");

        let missed = OperationStatus::from_applied(false, "done".into(), "missing".into());
        assert!(!missed.success);
        assert_eq!(missed.message, "missing");
    }
}
