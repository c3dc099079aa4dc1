//! The contract every validator fulfils
//!
//! Validators are independent: each looks at the same [`ValidationInput`]
//! and reports at most one message for its category. None of them knows
//! whether another one fired.

use crate::{
    error::{FailureKind, FailureMessage},
    types::ValidationInput,
};

/// One category of input defect
///
/// ```ignore
/// struct NoSevens;
///
/// impl Validator for NoSevens {
///     fn name(&self) -> &'static str {
///         "no-sevens"
///     }
///
///     fn kind(&self) -> FailureKind {
///         FailureKind::UnsupportedNumber
///     }
///
///     fn validate(&self, input: &ValidationInput<'_>) -> Option<FailureMessage> {
///         input
///             .numbers
///             .values
///             .contains(&7)
///             .then(|| FailureMessage::new(self.kind(), "7 is not welcome"))
///     }
/// }
/// ```
pub trait Validator: Send + Sync {
    /// Used for debugging and logging
    fn name(&self) -> &'static str;

    /// The category this validator reports under
    fn kind(&self) -> FailureKind;

    /// Inspect the input; `None` means nothing to report
    fn validate(&self, input: &ValidationInput<'_>) -> Option<FailureMessage>;
}
