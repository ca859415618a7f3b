//! Error category classification

/// High-level classification of an error code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Malformed or rejected client input
    Client,
    /// Business-rule violations (conflicts, missing resources)
    Business,
    /// Infrastructure failures (database, internal)
    System,
}
