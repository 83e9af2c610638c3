use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use crate::controllers::company_controller::CompanyController;
use crate::dto::company_dto::{
    CompanyDetailResponse, CompanyListResponse, CompanyRequest, CompanyResponse,
};
use crate::dto::StatusResponse;
use crate::state::AppState;
use crate::utils::errors::AppResult;
use crate::utils::extract::ValidatedJson;

pub fn create_company_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_companies).post(create_company))
        .route(
            "/:code",
            get(get_company).put(update_company).delete(delete_company),
        )
}

async fn list_companies(State(state): State<AppState>) -> AppResult<Json<CompanyListResponse>> {
    let controller = CompanyController::new(state.companies.clone());
    Ok(Json(controller.list().await?))
}

async fn get_company(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> AppResult<Json<CompanyDetailResponse>> {
    let controller = CompanyController::new(state.companies.clone());
    Ok(Json(controller.get(&code).await?))
}

async fn create_company(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CompanyRequest>,
) -> AppResult<(StatusCode, Json<CompanyResponse>)> {
    let controller = CompanyController::new(state.companies.clone());
    let response = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn update_company(
    State(state): State<AppState>,
    Path(code): Path<String>,
    ValidatedJson(request): ValidatedJson<CompanyRequest>,
) -> AppResult<Json<CompanyResponse>> {
    let controller = CompanyController::new(state.companies.clone());
    Ok(Json(controller.update(&code, request).await?))
}

async fn delete_company(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> AppResult<Json<StatusResponse>> {
    let controller = CompanyController::new(state.companies.clone());
    Ok(Json(controller.delete(&code).await?))
}
