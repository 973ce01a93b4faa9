use actix_web::{HttpResponse, ResponseError, Result, web};

use crate::engine::PrizeDefinition;
use crate::models::*;
use crate::services::DrawService;

#[utoipa::path(
    post,
    path = "/draw/validate",
    tag = "draw",
    request_body = Vec<PrizeDefinition>,
    responses(
        (status = 200, description = "权重校验结果", body = ValidationApiResponse)
    )
)]
/// 保存时权重校验:
/// 合计是否在 100±0.1、是否非空、有无负权重。结果只是提示，
/// 抽奖接口对非法权重另有兜底策略。
pub async fn validate_weights(
    service: web::Data<DrawService>,
    prizes: web::Json<Vec<PrizeDefinition>>,
) -> Result<HttpResponse> {
    let report = service.validate_weights(prizes.into_inner());
    Ok(HttpResponse::Ok().json(ApiResponse::success(report)))
}

#[utoipa::path(
    post,
    path = "/draw/auto-adjust",
    tag = "draw",
    request_body = Vec<PrizeDefinition>,
    responses(
        (status = 200, description = "配平后的奖品表", body = AutoAdjustApiResponse)
    )
)]
/// 自动调整: 等比缩放到合计恰好 100.0（最大余数法收残差），
/// 返回新奖品表，不修改请求中的原表。
pub async fn auto_adjust(
    service: web::Data<DrawService>,
    prizes: web::Json<Vec<PrizeDefinition>>,
) -> Result<HttpResponse> {
    let adjusted = service.auto_adjust(prizes.into_inner());
    Ok(HttpResponse::Ok().json(ApiResponse::success(adjusted)))
}

#[utoipa::path(
    post,
    path = "/draw/spin",
    tag = "draw",
    request_body = Vec<PrizeDefinition>,
    params(
        ("sample" = Option<f64>, Query, description = "[0,100) 区间的注入样本 (省略时用服务端RNG)")
    ),
    responses(
        (status = 200, description = "抽奖结果（失败码也在结果体内）", body = DrawResult),
        (status = 400, description = "样本越界等请求错误")
    )
)]
/// 进行一次抽奖。请求体与校验接口相同——一个奖品对象的 JSON 数组；
/// 响应是裸的 DrawResult。扭蛋/转盘/御神签/刮刮卡/福引/老虎机六种
/// 前端共用这两种线格式，EmptySet 等失败码随结果体返回 (HTTP 200)，
/// 前端按 success 分支而不是状态码。
pub async fn spin(
    service: web::Data<DrawService>,
    prizes: web::Json<Vec<PrizeDefinition>>,
    query: web::Query<DrawQuery>,
) -> Result<HttpResponse> {
    match service.spin(prizes.into_inner(), query.sample).await {
        Ok(result) => Ok(HttpResponse::Ok().json(result)),
        Err(e) => Ok(e.error_response()),
    }
}

/// 路由配置
pub fn draw_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/draw")
            .route("/validate", web::post().to(validate_weights))
            .route("/auto-adjust", web::post().to(auto_adjust))
            .route("/spin", web::post().to(spin)),
    );
}
