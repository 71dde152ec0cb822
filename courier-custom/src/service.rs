use std::sync::Arc;

use async_trait::async_trait;
use courier_core::{
    CoreError, CoreResult, DocumentType, FulfillmentOption, FulfillmentProvider, ProviderContext,
    ProviderOptions, ProviderRegistry,
};
use courier_shared::{Cart, DataMap, FulfillmentRecord, LineItem, Order, ReturnOrder};
use serde_json::Value;

pub const IDENTIFIER: &str = "custom-fulfillment";

/// Option id marking per-request (calculated) pricing
pub const DYNAMIC_OPTION_ID: &str = "custom-fulfillment-dynamic";

/// Flat price per cart line item, in minor currency units
pub const UNIT_PRICE: i64 = 1000;

/// Fulfillment provider with a single shipping option and per-item pricing.
///
/// Nothing is sent to a carrier yet: fulfillments, cancellations and returns
/// are accepted and store no data, and documents are not supported.
#[derive(Debug, Clone)]
pub struct CustomFulfillmentService {
    context: ProviderContext,
    options: ProviderOptions,
}

impl CustomFulfillmentService {
    pub fn new(context: ProviderContext, options: ProviderOptions) -> Self {
        tracing::info!("Initialising {} provider (run mode: {})", IDENTIFIER, context.run_mode);
        Self { context, options }
    }

    pub fn context(&self) -> &ProviderContext {
        &self.context
    }

    pub fn options(&self) -> &ProviderOptions {
        &self.options
    }
}

/// Build the provider and add it to the host registry
pub fn register(
    registry: &mut ProviderRegistry,
    context: ProviderContext,
    options: ProviderOptions,
) -> CoreResult<()> {
    registry.register(Arc::new(CustomFulfillmentService::new(context, options)))
}

#[async_trait]
impl FulfillmentProvider for CustomFulfillmentService {
    fn identifier(&self) -> &'static str {
        IDENTIFIER
    }

    async fn get_fulfillment_options(&self) -> CoreResult<Vec<FulfillmentOption>> {
        Ok(vec![FulfillmentOption::new(IDENTIFIER)])
    }

    async fn validate_option(&self, data: &DataMap) -> CoreResult<bool> {
        Ok(data.has_id(IDENTIFIER))
    }

    async fn validate_fulfillment_data(
        &self,
        _option_data: &DataMap,
        data: &DataMap,
        cart: &Cart,
    ) -> CoreResult<DataMap> {
        if !data.has_id(IDENTIFIER) {
            tracing::debug!("Rejected shipping data for cart {}: id {:?}", cart.id, data.id());
            return Err(CoreError::InvalidData("invalid data".to_string()));
        }

        Ok(data.clone())
    }

    async fn create_fulfillment(
        &self,
        _data: &DataMap,
        items: &[LineItem],
        order: &Order,
        fulfillment: &FulfillmentRecord,
    ) -> CoreResult<DataMap> {
        // TODO: push the shipment to a carrier API once one is chosen
        tracing::debug!(
            "Fulfillment {} created for order {} ({} items)",
            fulfillment.id,
            order.id,
            items.len()
        );
        Ok(DataMap::new())
    }

    async fn cancel_fulfillment(&self, _fulfillment: &DataMap) -> CoreResult<DataMap> {
        Ok(DataMap::new())
    }

    async fn calculate_price(
        &self,
        _option_data: &DataMap,
        _data: &DataMap,
        cart: &Cart,
    ) -> CoreResult<i64> {
        Ok(cart.items.len() as i64 * UNIT_PRICE)
    }

    async fn can_calculate(&self, data: &DataMap) -> CoreResult<bool> {
        Ok(data.has_id(DYNAMIC_OPTION_ID))
    }

    async fn create_return(&self, return_order: &ReturnOrder) -> CoreResult<DataMap> {
        tracing::debug!("Return {} accepted", return_order.id);
        Ok(DataMap::new())
    }

    async fn get_fulfillment_documents(&self, _data: &DataMap) -> CoreResult<Value> {
        Err(CoreError::NotImplemented("get_fulfillment_documents"))
    }

    async fn get_return_documents(&self, _data: &DataMap) -> CoreResult<Value> {
        Err(CoreError::NotImplemented("get_return_documents"))
    }

    async fn get_shipment_documents(&self, _data: &DataMap) -> CoreResult<Value> {
        Err(CoreError::NotImplemented("get_shipment_documents"))
    }

    async fn retrieve_documents(
        &self,
        _fulfillment_data: &DataMap,
        _document_type: DocumentType,
    ) -> CoreResult<Value> {
        Err(CoreError::NotImplemented("retrieve_documents"))
    }
}
