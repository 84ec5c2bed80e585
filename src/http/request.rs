//! Request ID propagation.
//!
//! Every request carries an `x-request-id`. A client-supplied value is kept,
//! otherwise tower-http's `MakeRequestUuid` generates a UUID v4. The value is
//! echoed on the response.

/// Request ID header name.
pub const X_REQUEST_ID: &str = "x-request-id";
