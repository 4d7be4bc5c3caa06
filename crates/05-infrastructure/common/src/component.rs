//! 组件基础接口定义
//!
//! 提供所有可装配组件必须实现的基础 trait 以及两种能力接口

use std::fmt::Debug;

/// 组件基础 trait
///
/// 所有可装配组件都必须实现此 trait
pub trait Component: Send + Sync + Debug + 'static {
    /// 组件名称
    fn name(&self) -> &'static str;
}

/// 数据访问能力
pub trait DataAccess: Component {
    /// 获取数据
    fn get_data(&self) -> f64;
}

/// 业务逻辑能力
pub trait BusinessLogic: Component {
    /// 执行计算
    fn calcul(&self) -> f64;
}

/// 数据访问组件句柄，由接收它的业务逻辑组件独占
pub type DataAccessHandle = Box<dyn DataAccess>;

/// 业务逻辑组件句柄
pub type BusinessLogicHandle = Box<dyn BusinessLogic>;

/// 组件构造失败的原因
pub type ConstructionFailure = Box<dyn std::error::Error + Send + Sync>;
