//! 加权抽奖引擎。纯同步计算，无共享可变状态，可被任意数量的
//! 游玩会话并发调用。库存扣减与积分结算都在引擎之外。

pub mod balancer;
pub mod draw;
pub mod prize;
pub mod rng;
pub mod validator;

pub use balancer::auto_adjust;
pub use draw::{EngineError, draw};
pub use prize::{PrizeDefinition, PrizeSet};
pub use rng::{SampleSource, ThreadRngSource};
pub use validator::{WEIGHT_TOLERANCE, WEIGHT_TOTAL, WeightValidation, validate};
