pub mod service;

pub use service::{register, CustomFulfillmentService, DYNAMIC_OPTION_ID, IDENTIFIER, UNIT_PRICE};
