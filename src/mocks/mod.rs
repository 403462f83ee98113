//! Mock implementations for testing
//!
//! In-memory stand-ins for the transport and auth seams so services can be
//! exercised without a network. Available to downstream crates through the
//! `mocks` feature.

mod mock_auth;
mod mock_transport;

pub use mock_auth::MockAuthManager;
pub use mock_transport::MockHttpTransport;
