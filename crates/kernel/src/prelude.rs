pub use crate::codec::{decode, decode_response, encode, encode_value};
pub use crate::config::{ClientConfig, ConfigError, Environment, load_config, load_config_with_vars};
pub use crate::error::{CodecError, CodecErrorExt};
pub use square_models::prelude::*;
