use actix_web::web;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::engine::PrizeDefinition;
use crate::handlers;
use crate::models::*;

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::draw::validate_weights,
        handlers::draw::auto_adjust,
        handlers::draw::spin,
    ),
    components(
        schemas(
            PrizeDefinition,
            DrawQuery,
            WeightValidationResponse,
            AutoAdjustResponse,
            DrawErrorCode,
            DrawResult,
            ApiError,
            ValidationApiResponse,
            AutoAdjustApiResponse,
        )
    ),
    tags(
        (name = "draw", description = "Weighted prize draw API"),
    ),
    info(
        title = "Prize Draw API",
        version = "1.0.0",
        description = "Weighted prize draw REST API shared by all chance-game front-ends",
    ),
    servers(
        (url = "/api/v1", description = "Local server")
    )
)]
pub struct ApiDoc;

pub fn swagger_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
    )
    .route(
        "/swagger-ui",
        web::get().to(|| async {
            actix_web::HttpResponse::Found()
                .append_header(("Location", "/swagger-ui/"))
                .finish()
        }),
    );
}
