//! Test fixtures and sample data
//!
//! Sample bodies in the shapes the service sends, shared by unit tests.

mod assistant_fixtures;
mod thread_fixtures;

pub use assistant_fixtures::*;
pub use error_fixtures::*;
pub use thread_fixtures::*;
