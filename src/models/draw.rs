use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::engine::{PrizeDefinition, WeightValidation};

/// 抽奖查询参数
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct DrawQuery {
    /// [0, 100) 区间的随机样本。省略时由服务端注入的 RNG 生成；
    /// 指定时可做确定性重放（回归测试、开奖审计）。
    pub sample: Option<f64>,
}

/// 权重校验响应
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WeightValidationResponse {
    pub is_valid: bool,
    /// 权重合计（未舍入）
    pub total: f64,
    /// 面向编辑者的诊断信息，合法时为空串
    pub message: String,
}

impl From<WeightValidation> for WeightValidationResponse {
    fn from(v: WeightValidation) -> Self {
        WeightValidationResponse {
            is_valid: v.is_valid,
            total: v.total,
            message: v.message,
        }
    }
}

/// 自动调整响应: 配平后的奖品表与新合计
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AutoAdjustResponse {
    pub prizes: Vec<PrizeDefinition>,
    pub total: f64,
}

/// 抽奖失败码。InsufficientBalance 由上游的余额检查在进入引擎之前
/// 产生（本服务不做积分记账），这里只定义线格式。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum DrawErrorCode {
    EmptySet,
    InvalidWeights,
    InsufficientBalance,
}

/// 一次抽奖的结果。扭蛋/转盘/御神签/刮刮卡/福引/老虎机全部
/// 同步拿到同一份结果，各自决定演出多久之后揭晓——引擎与演出
/// 时长无关。
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DrawResult {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prize_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prize_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prize_image_url: Option<String>,
    /// 所选奖品的 is_winning 原样照搬
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_winning: Option<bool>,
    /// 奖品配置的积分奖励，透传给下游积分记账
    #[serde(skip_serializing_if = "Option::is_none")]
    pub points_reward: Option<i64>,
    /// 本次抽奖标识（下游落库、对账用）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub draw_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drawn_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<DrawErrorCode>,
}

impl DrawResult {
    pub fn won(prize: &PrizeDefinition) -> Self {
        DrawResult {
            success: true,
            prize_id: Some(prize.id.clone()),
            prize_name: Some(prize.name.clone()),
            prize_image_url: Some(prize.image_url.clone()),
            is_winning: Some(prize.is_winning),
            points_reward: prize.points_reward,
            draw_id: Some(Uuid::new_v4()),
            drawn_at: Some(Utc::now()),
            error_code: None,
        }
    }

    pub fn failed(code: DrawErrorCode) -> Self {
        DrawResult {
            success: false,
            prize_id: None,
            prize_name: None,
            prize_image_url: None,
            is_winning: None,
            points_reward: None,
            draw_id: None,
            drawn_at: None,
            error_code: Some(code),
        }
    }
}
