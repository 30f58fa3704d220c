mod errors;
mod options;
mod service;

pub use errors::{RouterError, RouterResult};
pub use options::{
    DEFAULT_MAX_PATTERN_LENGTH, RouterOptions, RouterOptionsBuilder, RouterOptionsError,
};
pub use service::Router;
