//! Request-scoped middleware.
//!
//! - [`request_context`] -- Makes the `x-request-id` value readable anywhere
//!   inside the request's task (used to correlate 500 responses with logs).

pub mod request_context;
