//! Glue between the Square record types and the transport that carries them.
//! Keep this crate free of I/O; it only turns bytes into records and settings into values.
//!
//! ## Decoding a response
//! ```rust
//! use std::sync::Arc;
//! use square_kernel::codec::decode_response;
//! use square_kernel::models::{ApiResponse, HttpContext, ListLocationsResponse};
//!
//! let context = HttpContext::new(200, r#"{"locations":[{"id":"L1","name":"Main"}]}"#);
//! let response = decode_response::<ListLocationsResponse>(context).unwrap();
//!
//! assert!(response.is_success());
//! assert_eq!(response.context().status_code, 200);
//! assert_eq!(response.locations.as_ref().map(Vec::len), Some(1));
//! ```
//!
//! ## Config loading
//! ```rust,ignore
//! use square_kernel::config::{ClientConfig, load_config};
//!
//! let cfg: ClientConfig = load_config(Some("square")).unwrap_or_default();
//! println!("{}", cfg.base_url());
//! ```
pub mod codec;
pub mod config;
mod error;
pub mod prelude;

pub use error::{CodecError, CodecErrorExt};
pub use square_models as models;
