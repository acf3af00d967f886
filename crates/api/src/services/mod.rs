//! Category and note use-cases.
//!
//! Every operation validates its input, then runs its reads and writes in
//! one scoped transaction via [`notekeeper_db::with_transaction`]. Any error
//! returned from inside the transaction rolls it back, so a failed check
//! never leaves a partial write behind.

pub mod categories;
pub mod notes;
