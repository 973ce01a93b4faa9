use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::draw::{AutoAdjustResponse, WeightValidationResponse};

/// 编辑器侧接口统一响应信封。抽奖 (spin) 接口不用此信封，
/// 直接返回 DrawResult（六种前端玩法共用的线格式）。
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[aliases(
    ValidationApiResponse = ApiResponse<WeightValidationResponse>,
    AutoAdjustApiResponse = ApiResponse<AutoAdjustResponse>
)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiError>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiError {
    pub code: String,
    pub message: String,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn failure(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(ApiError {
                code: code.into(),
                message: message.into(),
            }),
        }
    }
}
