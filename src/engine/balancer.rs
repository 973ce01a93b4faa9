use super::prize::PrizeSet;
use super::validator::validate;

/// 自动配平: 把任意非空奖品集合调整为合计恰好 100.0 的集合。
/// 编辑器的「自動調整」按钮与抽奖时的兜底归一化共用此实现。
///
/// 规则:
/// - 输入已合法则原样返回（幂等）
/// - 合计 > 0: 每项按 100/total 等比缩放，保持相对比例
/// - 合计 == 0: n 项均分 100/n
/// - 缩放结果保留 1 位小数，舍入残差按最大余数法整体记入权重最大的
///   一项（并列时取 display_order 最小者），保证合计精确为 100.0
///
/// 内部以 0.1 为单位的整数（tenths）记账，避免浮点累计误差。
pub fn auto_adjust(set: &PrizeSet) -> PrizeSet {
    if validate(set).is_valid || set.is_empty() {
        return set.clone();
    }

    let entries = set.as_slice();
    let total: f64 = entries.iter().map(|p| p.weight).sum();

    let mut tenths: Vec<i64> = if total > 0.0 {
        entries
            .iter()
            .map(|p| (p.weight * 1000.0 / total).round() as i64)
            .collect()
    } else {
        // 全零集合: 均等配分
        let share = (1000.0 / entries.len() as f64).round() as i64;
        vec![share; entries.len()]
    };

    // 最大余数法: 残差整体记入最大的一项。entries 已按 display_order
    // 升序，严格大于比较即可落在并列中顺序值最小的一项上。
    let residual = 1000 - tenths.iter().sum::<i64>();
    if residual != 0 {
        let mut target = 0;
        for (i, t) in tenths.iter().enumerate() {
            if *t > tenths[target] {
                target = i;
            }
        }
        tenths[target] += residual;
    }

    let adjusted = entries
        .iter()
        .zip(&tenths)
        .map(|(p, t)| {
            let mut balanced = p.clone();
            balanced.weight = *t as f64 / 10.0;
            balanced
        })
        .collect();

    PrizeSet::new(adjusted)
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

    fn weights(set: &PrizeSet) -> Vec<f64> {
        set.iter().map(|p| p.weight).collect()
    }

    #[test]
    fn test_example_scenario() {
        // [10,10,10] -> 各 33.3，残差 0.1 在全员并列时记入
        // display_order 最小的首项
        let adjusted = auto_adjust(&set(&[10.0, 10.0, 10.0]));
        assert_eq!(weights(&adjusted), vec![33.4, 33.3, 33.3]);
        assert!(validate(&adjusted).is_valid);
    }

    #[test]
    fn test_proportionality() {
        // 合计 200 -> 减半，比例保持不变
        let adjusted = auto_adjust(&set(&[2.0, 10.0, 30.0, 60.0, 98.0]));
        assert_eq!(weights(&adjusted), vec![1.0, 5.0, 15.0, 30.0, 49.0]);
        let report = validate(&adjusted);
        assert!(report.is_valid);
        assert!((report.total - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_residual_to_largest() {
        // 3/7, 3/7, 1/7 -> 42.9, 42.9, 14.3 (合计 100.1)。
        // 残差 -0.1 记入最大权重并列两项中的首项。
        let adjusted = auto_adjust(&set(&[3.0, 3.0, 1.0]));
        assert_eq!(weights(&adjusted), vec![42.8, 42.9, 14.3]);
    }

    #[test]
    fn test_all_zero_equal_shares() {
        let adjusted = auto_adjust(&set(&[0.0, 0.0, 0.0, 0.0]));
        assert_eq!(weights(&adjusted), vec![25.0, 25.0, 25.0, 25.0]);

        let adjusted = auto_adjust(&set(&[0.0, 0.0, 0.0]));
        assert_eq!(weights(&adjusted), vec![33.4, 33.3, 33.3]);
        assert!(validate(&adjusted).is_valid);
    }

    #[test]
    fn test_zero_entry_stays_zero() {
        // 合计非零时 0 权重项不会被拉进均等配分
        let adjusted = auto_adjust(&set(&[0.0, 50.0]));
        assert_eq!(weights(&adjusted), vec![0.0, 100.0]);
    }

    #[test]
    fn test_idempotent() {
        let once = auto_adjust(&set(&[7.0, 13.0, 29.0]));
        let twice = auto_adjust(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_valid_set_unchanged() {
        let input = set(&[30.0, 70.0]);
        let adjusted = auto_adjust(&input);
        assert_eq!(input, adjusted);
    }

    #[test]
    fn test_sum_invariant_various_sets() {
        for ws in [
            vec![1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0],
            vec![0.3, 0.3, 0.4],
            vec![12.34, 56.78, 90.12],
            vec![0.1, 0.1, 0.1],
            vec![1.0],
            vec![250.0, 250.0, 500.0],
        ] {
            let adjusted = auto_adjust(&set(&ws));
            let report = validate(&adjusted);
            assert!(report.is_valid, "weights {ws:?} -> total {}", report.total);
            assert!((report.total - 100.0).abs() < 1e-9);
            // 已量化到 1 位小数
            for p in adjusted.iter() {
                assert!((p.weight * 10.0 - (p.weight * 10.0).round()).abs() < 1e-9);
            }
        }
    }
}
