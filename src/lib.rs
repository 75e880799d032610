pub mod config;
pub mod error;
pub mod flows;
pub mod llm;
pub mod server;

pub use error::{Error, ErrorKind, Result};
pub use flows::FlowGateway;
