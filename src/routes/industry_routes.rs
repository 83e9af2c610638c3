use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use crate::controllers::industry_controller::IndustryController;
use crate::dto::industry_dto::{
    AssociateCompanyRequest, AssociationResponse, CreateIndustryRequest,
    IndustryDetailResponse, IndustryListResponse, IndustryResponse,
};
use crate::state::AppState;
use crate::utils::errors::AppResult;
use crate::utils::extract::ValidatedJson;

pub fn create_industry_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_industries).post(create_industry))
        .route("/:code", get(get_industry).post(associate_company))
}

async fn list_industries(State(state): State<AppState>) -> AppResult<Json<IndustryListResponse>> {
    let controller = IndustryController::new(state.industries.clone());
    Ok(Json(controller.list().await?))
}

async fn get_industry(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> AppResult<Json<IndustryDetailResponse>> {
    let controller = IndustryController::new(state.industries.clone());
    Ok(Json(controller.get(&code).await?))
}

async fn create_industry(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateIndustryRequest>,
) -> AppResult<(StatusCode, Json<IndustryResponse>)> {
    let controller = IndustryController::new(state.industries.clone());
    let response = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn associate_company(
    State(state): State<AppState>,
    Path(code): Path<String>,
    ValidatedJson(request): ValidatedJson<AssociateCompanyRequest>,
) -> AppResult<(StatusCode, Json<AssociationResponse>)> {
    let controller = IndustryController::new(state.industries.clone());
    let response = controller.associate(&code, request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}
