use thiserror::Error;

pub type Result<T> = std::result::Result<T, HeatError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum HeatError {
    /// A geometric or physical constant was non-positive, non-finite, or
    /// produced an empty grid.
    #[error("invalid parameter `{name}`: {value}")]
    InvalidParameter { name: &'static str, value: f64 },
}

impl HeatError {
    pub(crate) fn invalid(name: &'static str, value: f64) -> Self {
        HeatError::InvalidParameter { name, value }
    }
}
