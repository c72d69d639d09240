use utoipa::OpenApi;

pub const EMPLOYEE_TAG: &str = "Employee";
pub const HEALTH_TAG: &str = "Health";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Roster",
        description = "An employee management api server",
    ),
    components(
        schemas(
            crate::api::dto::ErrorResponse,
        )
    ),
    tags(
        (name = EMPLOYEE_TAG, description = "Employee management endpoints"),
        (name = HEALTH_TAG, description = "Health check endpoints"),
    )
)]
pub struct ApiDoc;
