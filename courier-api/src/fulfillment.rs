use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use courier_core::{DocumentType, FulfillmentOption};
use courier_shared::{Cart, DataMap, FulfillmentRecord, LineItem, Order, ReturnOrder};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::AppError;
use crate::state::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Serialize, Deserialize)]
pub struct ProvidersResponse {
    pub providers: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ValidOptionResponse {
    pub valid: bool,
}

#[derive(Debug, Deserialize)]
pub struct ValidateFulfillmentDataRequest {
    #[serde(default)]
    pub option_data: DataMap,
    #[serde(default)]
    pub data: DataMap,
    pub cart: Cart,
}

#[derive(Debug, Deserialize)]
pub struct CreateFulfillmentRequest {
    #[serde(default)]
    pub data: DataMap,
    #[serde(default)]
    pub items: Vec<LineItem>,
    pub order: Order,
    pub fulfillment: FulfillmentRecord,
}

#[derive(Debug, Deserialize)]
pub struct CancelFulfillmentRequest {
    #[serde(default)]
    pub fulfillment: DataMap,
}

#[derive(Debug, Deserialize)]
pub struct CalculatePriceRequest {
    #[serde(default)]
    pub option_data: DataMap,
    #[serde(default)]
    pub data: DataMap,
    pub cart: Cart,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PriceResponse {
    pub amount: i64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CanCalculateResponse {
    pub calculated: bool,
}

#[derive(Debug, Deserialize)]
pub struct RetrieveDocumentsRequest {
    #[serde(default)]
    pub fulfillment_data: DataMap,
    pub document_type: DocumentType,
}

// ============================================================================
// Routes
// ============================================================================

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/providers", get(list_providers))
        .route("/v1/providers/{id}/options", get(get_fulfillment_options))
        .route("/v1/providers/{id}/options/validate", post(validate_option))
        .route("/v1/providers/{id}/fulfillment-data/validate", post(validate_fulfillment_data))
        .route("/v1/providers/{id}/fulfillments", post(create_fulfillment))
        .route("/v1/providers/{id}/fulfillments/cancel", post(cancel_fulfillment))
        .route("/v1/providers/{id}/price", post(calculate_price))
        .route("/v1/providers/{id}/price/can-calculate", post(can_calculate))
        .route("/v1/providers/{id}/returns", post(create_return))
        .route("/v1/providers/{id}/documents/fulfillment", post(get_fulfillment_documents))
        .route("/v1/providers/{id}/documents/return", post(get_return_documents))
        .route("/v1/providers/{id}/documents/shipment", post(get_shipment_documents))
        .route("/v1/providers/{id}/documents/retrieve", post(retrieve_documents))
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /v1/providers
async fn list_providers(State(state): State<AppState>) -> Json<ProvidersResponse> {
    Json(ProvidersResponse {
        providers: state.registry.identifiers(),
    })
}

/// GET /v1/providers/{id}/options
async fn get_fulfillment_options(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<FulfillmentOption>>, AppError> {
    let provider = state.registry.get(&id)?;
    Ok(Json(provider.get_fulfillment_options().await?))
}

/// POST /v1/providers/{id}/options/validate
async fn validate_option(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(data): Json<DataMap>,
) -> Result<Json<ValidOptionResponse>, AppError> {
    let provider = state.registry.get(&id)?;
    let valid = provider.validate_option(&data).await?;
    Ok(Json(ValidOptionResponse { valid }))
}

/// POST /v1/providers/{id}/fulfillment-data/validate
/// Returns the data to store on the shipping method
async fn validate_fulfillment_data(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<ValidateFulfillmentDataRequest>,
) -> Result<Json<DataMap>, AppError> {
    let provider = state.registry.get(&id)?;
    let data = provider
        .validate_fulfillment_data(&req.option_data, &req.data, &req.cart)
        .await?;
    Ok(Json(data))
}

/// POST /v1/providers/{id}/fulfillments
async fn create_fulfillment(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<CreateFulfillmentRequest>,
) -> Result<Json<DataMap>, AppError> {
    let provider = state.registry.get(&id)?;
    let data = provider
        .create_fulfillment(&req.data, &req.items, &req.order, &req.fulfillment)
        .await?;
    Ok(Json(data))
}

/// POST /v1/providers/{id}/fulfillments/cancel
async fn cancel_fulfillment(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<CancelFulfillmentRequest>,
) -> Result<Json<DataMap>, AppError> {
    let provider = state.registry.get(&id)?;
    Ok(Json(provider.cancel_fulfillment(&req.fulfillment).await?))
}

/// POST /v1/providers/{id}/price
async fn calculate_price(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<CalculatePriceRequest>,
) -> Result<Json<PriceResponse>, AppError> {
    let provider = state.registry.get(&id)?;
    let amount = provider
        .calculate_price(&req.option_data, &req.data, &req.cart)
        .await?;
    Ok(Json(PriceResponse { amount }))
}

/// POST /v1/providers/{id}/price/can-calculate
async fn can_calculate(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(data): Json<DataMap>,
) -> Result<Json<CanCalculateResponse>, AppError> {
    let provider = state.registry.get(&id)?;
    let calculated = provider.can_calculate(&data).await?;
    Ok(Json(CanCalculateResponse { calculated }))
}

/// POST /v1/providers/{id}/returns
async fn create_return(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(return_order): Json<ReturnOrder>,
) -> Result<Json<DataMap>, AppError> {
    let provider = state.registry.get(&id)?;
    Ok(Json(provider.create_return(&return_order).await?))
}

/// POST /v1/providers/{id}/documents/fulfillment
async fn get_fulfillment_documents(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(data): Json<DataMap>,
) -> Result<Json<Value>, AppError> {
    let provider = state.registry.get(&id)?;
    Ok(Json(provider.get_fulfillment_documents(&data).await?))
}

/// POST /v1/providers/{id}/documents/return
async fn get_return_documents(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(data): Json<DataMap>,
) -> Result<Json<Value>, AppError> {
    let provider = state.registry.get(&id)?;
    Ok(Json(provider.get_return_documents(&data).await?))
}

/// POST /v1/providers/{id}/documents/shipment
async fn get_shipment_documents(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(data): Json<DataMap>,
) -> Result<Json<Value>, AppError> {
    let provider = state.registry.get(&id)?;
    Ok(Json(provider.get_shipment_documents(&data).await?))
}

/// POST /v1/providers/{id}/documents/retrieve
async fn retrieve_documents(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<RetrieveDocumentsRequest>,
) -> Result<Json<Value>, AppError> {
    let provider = state.registry.get(&id)?;
    let documents = provider
        .retrieve_documents(&req.fulfillment_data, req.document_type)
        .await?;
    Ok(Json(documents))
}
