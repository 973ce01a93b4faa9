use rand::Rng;

use super::validator::WEIGHT_TOTAL;

/// 抽奖随机样本的来源。每次返回 [0, 100) 区间的一个均匀样本。
///
/// 随机性必须由外部注入而不是从全局生成器隐式读取:
/// 测试可以给固定样本做确定性断言，服务端部署可以换成
/// 密码学强度或可审计种子的实现，防止客户端预测。
pub trait SampleSource: Send {
    fn sample(&mut self) -> f64;
}

/// 默认实现: 线程本地 RNG
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRngSource;

impl SampleSource for ThreadRngSource {
    fn sample(&mut self) -> f64 {
        rand::thread_rng().gen_range(0.0..WEIGHT_TOTAL)
    }
}
