// Daemon module
//
// This module contains everything that talks to the Docker daemon:
// - endpoint: Parsing of the --host value into a transport
// - client: Connection handle and the container list query
// - record: Mapping of daemon container summaries into display records
// - error: The single error type surfaced to the caller

pub mod client;
pub mod endpoint;
pub mod error;
pub mod record;

pub use client::DaemonConnection;
pub use endpoint::{DEFAULT_ENDPOINT, Endpoint};
pub use error::ConnectionError;
pub use record::ContainerRecord;
