use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Aggregated OpenAPI document for the REST surface.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::rest::contact::submit_contact,
        crate::health::health_check,
    ),
    components(schemas(
        shared_types::ContactRequest,
        shared_types::ContactResponse,
        shared_types::ErrorBody,
    )),
    tags(
        (name = "contact", description = "Contact form submission"),
        (name = "health", description = "Service health"),
    )
)]
pub struct ApiDoc;

/// Router serving the Swagger UI at `/docs` backed by the generated spec.
pub fn docs_router() -> axum::Router {
    axum::Router::new()
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
