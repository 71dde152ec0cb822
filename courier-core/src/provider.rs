use async_trait::async_trait;
use courier_shared::{Cart, DataMap, FulfillmentRecord, LineItem, Order, ReturnOrder};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::CoreResult;

/// A shipping option a provider offers to the host's regions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FulfillmentOption {
    pub id: String,
}

impl FulfillmentOption {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentType {
    Invoice,
    Label,
}

/// Host-managed services and settings handed to a provider at start-up
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderContext {
    pub run_mode: String,
}

impl Default for ProviderContext {
    fn default() -> Self {
        Self {
            run_mode: "development".to_string(),
        }
    }
}

/// Provider configuration, opaque to everything but the provider itself
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProviderOptions(pub Value);

impl Default for ProviderOptions {
    fn default() -> Self {
        Self(Value::Object(Default::default()))
    }
}

impl From<Value> for ProviderOptions {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

/// Capability set the host invokes on every fulfillment provider.
///
/// Calls are independent of each other; implementations must not rely on
/// ordering between them.
#[async_trait]
pub trait FulfillmentProvider: Send + Sync {
    /// Key the provider is registered and dispatched under
    fn identifier(&self) -> &'static str;

    /// Options listed when an admin picks this provider for a region
    async fn get_fulfillment_options(&self) -> CoreResult<Vec<FulfillmentOption>>;

    /// Check option data when a shipping option is set up
    async fn validate_option(&self, data: &DataMap) -> CoreResult<bool>;

    /// Check shipping-method data when a customer chooses an option at
    /// checkout. Returns the data to store on the shipping method.
    async fn validate_fulfillment_data(
        &self,
        option_data: &DataMap,
        data: &DataMap,
        cart: &Cart,
    ) -> CoreResult<DataMap>;

    /// Returns the data to store on the fulfillment
    async fn create_fulfillment(
        &self,
        data: &DataMap,
        items: &[LineItem],
        order: &Order,
        fulfillment: &FulfillmentRecord,
    ) -> CoreResult<DataMap>;

    async fn cancel_fulfillment(&self, fulfillment: &DataMap) -> CoreResult<DataMap>;

    /// Price in minor currency units for options priced per request
    async fn calculate_price(
        &self,
        option_data: &DataMap,
        data: &DataMap,
        cart: &Cart,
    ) -> CoreResult<i64>;

    /// Whether the option is priced per request rather than at a flat rate
    async fn can_calculate(&self, data: &DataMap) -> CoreResult<bool>;

    async fn create_return(&self, return_order: &ReturnOrder) -> CoreResult<DataMap>;

    async fn get_fulfillment_documents(&self, data: &DataMap) -> CoreResult<Value>;

    async fn get_return_documents(&self, data: &DataMap) -> CoreResult<Value>;

    async fn get_shipment_documents(&self, data: &DataMap) -> CoreResult<Value>;

    async fn retrieve_documents(
        &self,
        fulfillment_data: &DataMap,
        document_type: DocumentType,
    ) -> CoreResult<Value>;
}
