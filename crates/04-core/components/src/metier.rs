//! 业务逻辑组件

use component_macros::component;
use di_abstractions::DataAccessConstructible;
use infrastructure_common::{BusinessLogic, ConstructionFailure, DataAccessHandle};

/// 业务逻辑组件
///
/// 通过构造器注入数据访问组件，计算结果为数据的两倍
#[component(business_logic, inject = "DaoImplV2")]
#[derive(Debug)]
pub struct MetierImpl {
    dao: DataAccessHandle,
}

impl MetierImpl {
    /// 使用数据访问组件创建
    pub fn new(dao: DataAccessHandle) -> Self {
        Self { dao }
    }
}

impl BusinessLogic for MetierImpl {
    fn calcul(&self) -> f64 {
        self.dao.get_data() * 2.0
    }
}

impl DataAccessConstructible for MetierImpl {
    fn construct_with(data_access: DataAccessHandle) -> Result<Self, ConstructionFailure> {
        Ok(Self::new(data_access))
    }
}
