use serde::Serialize;

use super::prize::PrizeSet;

/// 权重合计的允许误差（绝对值）
pub const WEIGHT_TOLERANCE: f64 = 0.1;
/// 归一化后的权重合计
pub const WEIGHT_TOTAL: f64 = 100.0;

/// 权重校验报告（编辑器保存时提示用）
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeightValidation {
    pub is_valid: bool,
    /// 权重合计（未舍入）
    pub total: f64,
    /// 诊断信息（面向编辑者，日文），合法时为空串
    pub message: String,
}

/// 校验奖品集合的权重是否可用于公平抽奖。纯函数，无副作用。
/// 合法条件: 非空、无负权重、合计在 100±0.1 以内。
pub fn validate(set: &PrizeSet) -> WeightValidation {
    if set.is_empty() {
        return WeightValidation {
            is_valid: false,
            total: 0.0,
            message: "景品が登録されていません".to_string(),
        };
    }

    let total = set.total_weight();

    if let Some(p) = set.iter().find(|p| p.weight < 0.0) {
        return WeightValidation {
            is_valid: false,
            total,
            message: format!("確率に負の値が含まれています: {}", p.name),
        };
    }

    if (total - WEIGHT_TOTAL).abs() > WEIGHT_TOLERANCE {
        return WeightValidation {
            is_valid: false,
            total,
            message: format!("合計が100%になっていません: {total}%"),
        };
    }

    WeightValidation {
        is_valid: true,
        total,
        message: String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::prize::PrizeDefinition;

    fn prize(id: &str, weight: f64, display_order: i32) -> PrizeDefinition {
        PrizeDefinition {
            id: id.to_string(),
            name: format!("Prize {id}"),
            description: String::new(),
            image_url: String::new(),
            weight,
            is_winning: false,
            stock: None,
            display_order,
            points_reward: None,
        }
    }

    fn set(weights: &[f64]) -> PrizeSet {
        PrizeSet::new(
            weights
                .iter()
                .enumerate()
                .map(|(i, w)| prize(&format!("p{i}"), *w, i as i32))
                .collect(),
        )
    }

    #[test]
    fn test_valid_set() {
        let report = validate(&set(&[30.0, 70.0]));
        assert!(report.is_valid);
        assert_eq!(report.total, 100.0);
        assert!(report.message.is_empty());
    }

    #[test]
    fn test_valid_within_tolerance() {
        let report = validate(&set(&[30.0, 70.05]));
        assert!(report.is_valid);
        assert!((report.total - 100.05).abs() < 1e-9);
    }

    #[test]
    fn test_total_mismatch() {
        let report = validate(&set(&[10.0, 10.0, 10.0]));
        assert!(!report.is_valid);
        assert_eq!(report.total, 30.0);
        assert_eq!(report.message, "合計が100%になっていません: 30%");
    }

    #[test]
    fn test_empty_set() {
        let report = validate(&set(&[]));
        assert!(!report.is_valid);
        assert_eq!(report.total, 0.0);
        assert!(!report.message.is_empty());
    }

    #[test]
    fn test_all_zero_weights() {
        // 即便条目数正确，合计 0 ≠ 100 仍然不合法
        let report = validate(&set(&[0.0, 0.0, 0.0]));
        assert!(!report.is_valid);
        assert_eq!(report.total, 0.0);
    }

    #[test]
    fn test_negative_weight() {
        let report = validate(&set(&[-5.0, 105.0]));
        assert!(!report.is_valid);
        assert!(report.message.contains("負の値"));
    }
}
