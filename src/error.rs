//! Error types and result alias for the crate.
//!
//! The only failure surface is configuration: generation itself cannot fail
//! once a [`crate::config::ScatterConfig`] has passed validation, so the
//! error enum stays small.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_config_formats_message() {
        let err = Error::InvalidConfig("diameters must not be empty".into());
        assert_eq!(
            err.to_string(),
            "invalid configuration: diameters must not be empty"
        );
    }
}
