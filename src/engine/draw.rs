use thiserror::Error;

use super::balancer::auto_adjust;
use super::prize::{PrizeDefinition, PrizeSet};
use super::validator::validate;

/// 引擎自身唯一可能产生的错误。权重问题不在此列：抽奖时一律兜底归一。
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("prize set is empty")]
    EmptySet,
}

/// 一次加权抽奖。sample 为调用方注入的随机样本，区间 [0, 100)。
///
/// 算法: 按 display_order 做累计分布遍历，每项占据半开区间
/// [acc, acc + weight)。sample 恰好落在区间边界时归属下一项
/// （固定约定，可测试）。浮点误差使累计不足 100 时收束到末项。
///
/// 非法权重在此防御性归一（保存时校验被绕过也不影响玩家侧抽奖）；
/// 是否中奖只是照搬所选奖品的 is_winning，引擎本身不判定输赢。
pub fn draw(set: &PrizeSet, sample: f64) -> Result<PrizeDefinition, EngineError> {
    if set.is_empty() {
        return Err(EngineError::EmptySet);
    }

    let balanced;
    let set = if validate(set).is_valid {
        set
    } else {
        balanced = auto_adjust(set);
        &balanced
    };

    let mut acc = 0.0;
    for prize in set.iter() {
        if sample < acc + prize.weight {
            return Ok(prize.clone());
        }
        acc += prize.weight;
    }

    // 浮点误差漏掉的样本收束到末项
    let last = set.as_slice().last().expect("non-empty prize set");
    Ok(last.clone())
}
