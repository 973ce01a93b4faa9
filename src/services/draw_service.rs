use std::sync::Arc;
use tokio::sync::Mutex;

use crate::config::DrawConfig;
use crate::engine::{
    self, EngineError, PrizeDefinition, PrizeSet, SampleSource, ThreadRngSource, WEIGHT_TOTAL,
};
use crate::error::{AppError, AppResult};
use crate::models::{AutoAdjustResponse, DrawErrorCode, DrawResult, WeightValidationResponse};

/// 抽奖服务: HTTP 层与纯引擎之间的编排。
/// 引擎本身无状态；这里只持有策略配置与注入的随机源。
#[derive(Clone)]
pub struct DrawService {
    config: DrawConfig,
    sample_source: Arc<Mutex<Box<dyn SampleSource>>>,
}

impl DrawService {
    pub fn new(config: DrawConfig) -> Self {
        Self::with_sample_source(config, Box::new(ThreadRngSource))
    }

    /// 注入自定义随机源（审计种子、测试固定值等）
    pub fn with_sample_source(config: DrawConfig, source: Box<dyn SampleSource>) -> Self {
        Self {
            config,
            sample_source: Arc::new(Mutex::new(source)),
        }
    }

    /// 保存时权重校验（编辑器调用）
    pub fn validate_weights(&self, prizes: Vec<PrizeDefinition>) -> WeightValidationResponse {
        let set = PrizeSet::new(prizes);
        engine::validate(&set).into()
    }

    /// 自动调整（编辑器「自動調整」按钮）
    pub fn auto_adjust(&self, prizes: Vec<PrizeDefinition>) -> AutoAdjustResponse {
        let set = PrizeSet::new(prizes);
        let adjusted = engine::auto_adjust(&set);
        let total = adjusted.total_weight();
        AutoAdjustResponse {
            prizes: adjusted.into_vec(),
            total,
        }
    }

    /// 抽奖 (Spin)
    ///
    /// 逻辑:
    /// 1. 剔除已无库存的奖品 (stock == Some(0))，引擎不碰库存
    /// 2. 剔除后为空 -> EmptySet
    /// 3. 权重策略: strict_weights 时非法权重直接拒绝，否则兜底归一
    /// 4. 采样: 请求给定样本优先（确定性重放），否则用注入的随机源
    /// 5. 打上 draw_id / drawn_at 返回，库存扣减与记录落库在下游
    pub async fn spin(
        &self,
        prizes: Vec<PrizeDefinition>,
        sample: Option<f64>,
    ) -> AppResult<DrawResult> {
        let mut prizes = prizes;
        prizes.retain(|p| p.is_available());
        let set = PrizeSet::new(prizes);

        if set.is_empty() {
            log::warn!("Spin rejected: no drawable prizes");
            return Ok(DrawResult::failed(DrawErrorCode::EmptySet));
        }

        if self.config.strict_weights {
            let report = engine::validate(&set);
            if !report.is_valid {
                log::warn!("Spin rejected by strict weight policy: {}", report.message);
                return Ok(DrawResult::failed(DrawErrorCode::InvalidWeights));
            }
        }

        let sample = match sample {
            Some(s) => {
                if !(0.0..WEIGHT_TOTAL).contains(&s) {
                    return Err(AppError::ValidationError(format!(
                        "Sample out of range [0, 100): {s}"
                    )));
                }
                s
            }
            None => self.sample_source.lock().await.sample(),
        };

        match engine::draw(&set, sample) {
            Ok(prize) => {
                log::info!("Prize drawn: {} (sample {sample})", prize.id);
                Ok(DrawResult::won(&prize))
            }
            Err(EngineError::EmptySet) => Ok(DrawResult::failed(DrawErrorCode::EmptySet)),
        }
    }
}
