//! 扩展版本的数据访问组件

use component_macros::component;
use di_abstractions::DefaultConstructible;
use infrastructure_common::{ConstructionFailure, DataAccess};
use tracing::debug;

/// 扩展版本的数据访问组件（传感器数据）
#[component(data_access)]
#[derive(Debug, Default)]
pub struct DaoImplV2;

impl DaoImplV2 {
    /// 创建新的组件
    pub fn new() -> Self {
        Self
    }
}

impl DataAccess for DaoImplV2 {
    fn get_data(&self) -> f64 {
        debug!("DaoImplV2: 从传感器读取数据");
        10.0
    }
}

impl DefaultConstructible for DaoImplV2 {
    fn construct() -> Result<Self, ConstructionFailure> {
        Ok(Self::new())
    }
}
