// src/presentation/http/controllers/categories.rs
use crate::application::{
    commands::categories::CreateCategoryCommand,
    dto::CategoryDto,
    error::ApplicationError,
    queries::categories::GetCategoryByIdQuery,
};
use crate::presentation::http::error::{ErrorResponse, HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::JsonPayload;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Body of `POST /api/categories`. Both fields are required; empty strings are accepted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCategoryRequest {
    pub name: String,
    pub url_handle: String,
}

impl From<CreateCategoryRequest> for CreateCategoryCommand {
    fn from(request: CreateCategoryRequest) -> Self {
        Self {
            name: request.name,
            url_handle: request.url_handle,
        }
    }
}

#[utoipa::path(
    post,
    path = "/api/categories",
    request_body = CreateCategoryRequest,
    responses(
        (status = 200, description = "Category created.", body = CategoryDto),
        (status = 400, description = "Malformed request body.", body = ErrorResponse),
        (status = 409, description = "Url handle already in use.", body = ErrorResponse),
        (status = 422, description = "Missing or mistyped fields.", body = ErrorResponse),
        (status = 500, description = "Category could not be stored.", body = ErrorResponse)
    ),
    tag = "Categories"
)]
pub async fn create_category(
    Extension(state): Extension<HttpState>,
    JsonPayload(payload): JsonPayload<CreateCategoryRequest>,
) -> HttpResult<Json<CategoryDto>> {
    state
        .services
        .category_commands
        .create_category(payload.into())
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/categories",
    responses(
        (status = 200, description = "All categories ordered by name.", body = [CategoryDto]),
        (status = 500, description = "Categories could not be loaded.", body = ErrorResponse)
    ),
    tag = "Categories"
)]
pub async fn list_categories(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<Vec<CategoryDto>>> {
    state
        .services
        .category_queries
        .list_categories()
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/categories/{id}",
    params(("id" = Uuid, Path, description = "Category identifier")),
    responses(
        (status = 200, description = "The requested category.", body = CategoryDto),
        (status = 400, description = "Identifier is not a valid UUID.", body = ErrorResponse),
        (status = 404, description = "No category with this id.", body = ErrorResponse)
    ),
    tag = "Categories"
)]
pub async fn get_category(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
) -> HttpResult<Json<CategoryDto>> {
    let id = Uuid::parse_str(&id).map_err(|_| {
        HttpError::from_error(ApplicationError::validation(format!(
            "'{id}' is not a valid category id"
        )))
    })?;

    state
        .services
        .category_queries
        .get_category_by_id(GetCategoryByIdQuery { id })
        .await
        .into_http()
        .map(Json)
}
