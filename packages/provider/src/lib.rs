// ABOUTME: Model discovery and registration pipeline for the Autobyteus server
// ABOUTME: Endpoint resolution, catalog fetch, payload validation, registry handoff

pub mod client;
pub mod discovery;
pub mod error;
pub mod validation;

pub use client::AutobyteusClient;
pub use discovery::{discover_and_register, discover_from, parse_llm_config, resolve_server_url};
pub use error::{DiscoveryError, DiscoveryResult};
