//! Integration tests with mock HTTP server

pub mod mock_server;
pub mod transport;
pub mod workflow;
