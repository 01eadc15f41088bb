//! Reusable OpenAPI response types for consistent API documentation.

use super::ErrorResponse;
#[allow(unused_imports)]
use serde_json::json;
use utoipa::ToResponse;

#[derive(ToResponse)]
#[response(
    description = "Missing or invalid API key",
    content_type = "application/json",
    example = json!({
        "error": {
            "message": "Invalid or missing API key",
            "type": "Unauthorized",
            "status": 401
        }
    })
)]
pub struct UnauthorizedResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "One or more field rules violated",
    content_type = "application/json",
    example = json!({
        "error": {
            "message": "Name is required, Price must be a positive number",
            "type": "Validation",
            "status": 400
        }
    })
)]
pub struct ValidationResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "No record with the given id",
    content_type = "application/json",
    example = json!({
        "error": {
            "message": "Product not found",
            "type": "NotFound",
            "status": 404
        }
    })
)]
pub struct NotFoundResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Internal Server Error",
    content_type = "application/json",
    example = json!({
        "error": {
            "message": "Internal server error",
            "type": "Internal",
            "status": 500
        }
    })
)]
pub struct InternalServerErrorResponse(pub ErrorResponse);
