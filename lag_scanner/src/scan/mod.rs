//! The correlation scan: panel filtering, lag alignment, the all-pairs search,
//! and sign-agreement validation of whatever the search accepts.

pub mod accumulator;
pub mod aligner;
pub mod filter;
pub mod progress;
pub mod scanner;
pub mod validator;
