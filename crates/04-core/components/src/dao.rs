//! 数据库版本的数据访问组件

use component_macros::component;
use di_abstractions::DefaultConstructible;
use infrastructure_common::{ConstructionFailure, DataAccess};
use tracing::debug;

/// 数据库版本的数据访问组件
#[component(data_access)]
#[derive(Debug, Default)]
pub struct DaoImpl;

impl DaoImpl {
    /// 创建新的组件
    pub fn new() -> Self {
        Self
    }
}

impl DataAccess for DaoImpl {
    fn get_data(&self) -> f64 {
        debug!("DaoImpl: 从数据库读取数据");
        40.0
    }
}

impl DefaultConstructible for DaoImpl {
    fn construct() -> Result<Self, ConstructionFailure> {
        Ok(Self::new())
    }
}
