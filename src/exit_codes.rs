//! Exit code constants for the scrumhelper CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, missing input, unreadable files or config)
//! - 2: Template failure (placeholder or brace mismatch at render time)
//! - 3: Authentication failure (missing or rejected credential)
//! - 4: Service failure (network, timeout, rate limit, malformed response)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, empty required input, invalid configuration.
pub const USER_ERROR: i32 = 1;

/// Template failure: the selected template could not be rendered.
pub const TEMPLATE_FAILURE: i32 = 2;

/// Authentication failure: the API key is missing or was rejected.
pub const AUTH_FAILURE: i32 = 3;

/// Service failure: the generative-language service could not produce text.
pub const SERVICE_FAILURE: i32 = 4;
