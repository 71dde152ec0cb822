pub mod provider;
pub mod registry;

pub use provider::{DocumentType, FulfillmentOption, FulfillmentProvider, ProviderContext, ProviderOptions};
pub use registry::ProviderRegistry;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    /// Provider data did not carry the identifier the provider expects
    #[error("{0}")]
    InvalidData(String),
    /// Permanent: the provider does not support this capability
    #[error("Method not implemented: {0}")]
    NotImplemented(&'static str),
    #[error("Unknown fulfillment provider: {0}")]
    UnknownProvider(String),
    #[error("Fulfillment provider already registered: {0}")]
    DuplicateProvider(String),
}

pub type CoreResult<T> = Result<T, CoreError>;
