pub mod data;
pub mod models;

pub use data::DataMap;
pub use models::{Cart, FulfillmentRecord, LineItem, Order, ReturnOrder};
