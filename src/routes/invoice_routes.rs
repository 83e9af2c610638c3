use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};

use crate::controllers::invoice_controller::{parse_invoice_id, InvoiceController};
use crate::dto::invoice_dto::{
    CreateInvoiceRequest, InvoiceDetailResponse, InvoiceListResponse, InvoiceResponse,
    UpdateInvoiceRequest,
};
use crate::dto::StatusResponse;
use crate::state::AppState;
use crate::utils::errors::AppResult;
use crate::utils::extract::ValidatedJson;

pub fn create_invoice_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_invoices).post(create_invoice))
        .route(
            "/:id",
            get(get_invoice).put(update_invoice).delete(delete_invoice),
        )
}

async fn list_invoices(State(state): State<AppState>) -> AppResult<Json<InvoiceListResponse>> {
    let controller = InvoiceController::new(state.invoices.clone());
    Ok(Json(controller.list().await?))
}

async fn get_invoice(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<InvoiceDetailResponse>> {
    let id = parse_invoice_id(&id)?;
    let controller = InvoiceController::new(state.invoices.clone());
    Ok(Json(controller.get(id).await?))
}

// Responde 200, no 201, como el resto de escrituras sobre invoices
async fn create_invoice(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateInvoiceRequest>,
) -> AppResult<Json<InvoiceResponse>> {
    let controller = InvoiceController::new(state.invoices.clone());
    Ok(Json(controller.create(request).await?))
}

async fn update_invoice(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateInvoiceRequest>,
) -> AppResult<Json<InvoiceResponse>> {
    let id = parse_invoice_id(&id)?;
    let controller = InvoiceController::new(state.invoices.clone());
    Ok(Json(controller.update(id, request).await?))
}

async fn delete_invoice(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<StatusResponse>> {
    let id = parse_invoice_id(&id)?;
    let controller = InvoiceController::new(state.invoices.clone());
    Ok(Json(controller.delete(id).await?))
}
