use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// 奖品定义 - 所有抽奖玩法（扭蛋/刮刮卡/福引/老虎机等）共用的同一份配置形状。
/// 概念说明:
/// - weight: 0-100 概率空间中的份额，允许未归一化（保存时校验、抽奖时兜底归一）
/// - is_winning: 中奖标记，与 weight 互相独立（"谢谢参与"也可以是最大权重）
/// - stock: 库存 (None = 无限)；stock == Some(0) 的奖品由调用方在抽奖前剔除
/// - display_order: 展示顺序，同时是累计分布遍历与并列裁决使用的全序
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PrizeDefinition {
    /// 奖品ID（集合内唯一）
    pub id: String,
    /// 奖品名称
    pub name: String,
    /// 奖品描述（引擎不解释）
    #[serde(default)]
    pub description: String,
    /// 奖品图片URL（引擎不解释）
    #[serde(default)]
    pub image_url: String,
    /// 权重（非负实数）
    pub weight: f64,
    /// 是否中奖奖品
    pub is_winning: bool,
    /// 库存 (None = 无限)
    #[serde(default)]
    pub stock: Option<u32>,
    /// 展示顺序
    pub display_order: i32,
    /// 积分奖励，原样透传给下游积分记账
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub points_reward: Option<i64>,
}

impl PrizeDefinition {
    /// 是否还有库存 (无限库存或剩余 > 0)
    pub fn is_available(&self) -> bool {
        match self.stock {
            None => true,
            Some(remain) => remain > 0,
        }
    }
}

/// 奖品集合，始终按 display_order 升序保存。
/// 引擎只读；一次抽奖之外没有任何引擎侧生命周期。
#[derive(Debug, Clone, PartialEq)]
pub struct PrizeSet {
    entries: Vec<PrizeDefinition>,
}

impl PrizeSet {
    /// 构造时按 display_order 排序（稳定排序，相同顺序值保持输入次序）
    pub fn new(mut entries: Vec<PrizeDefinition>) -> Self {
        entries.sort_by_key(|p| p.display_order);
        Self { entries }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PrizeDefinition> {
        self.entries.iter()
    }

    pub fn as_slice(&self) -> &[PrizeDefinition] {
        &self.entries
    }

    pub fn into_vec(self) -> Vec<PrizeDefinition> {
        self.entries
    }

    /// 权重合计（未舍入）
    pub fn total_weight(&self) -> f64 {
        self.entries.iter().map(|p| p.weight).sum()
    }
}
