use component_macros::component;
use di_abstractions::{DataAccessConstructible, DefaultConstructible, COMPONENT_CATALOG};
use infrastructure_common::{
    BusinessLogic, Component, ConstructionFailure, DataAccess, DataAccessHandle,
};

#[component(data_access)]
#[derive(Debug)]
struct OkDao;

impl DataAccess for OkDao {
    fn get_data(&self) -> f64 {
        1.5
    }
}

impl DefaultConstructible for OkDao {
    fn construct() -> Result<Self, ConstructionFailure> {
        Ok(OkDao)
    }
}

#[component(business_logic, inject = "OkDao")]
#[derive(Debug)]
struct OkLogic {
    dao: DataAccessHandle,
}

impl BusinessLogic for OkLogic {
    fn calcul(&self) -> f64 {
        self.dao.get_data() * 2.0
    }
}

impl DataAccessConstructible for OkLogic {
    fn construct_with(data_access: DataAccessHandle) -> Result<Self, ConstructionFailure> {
        Ok(OkLogic { dao: data_access })
    }
}

fn main() {
    // 生成的实现提供 name 方法
    assert_eq!(OkDao.name(), "OkDao");
    let logic = OkLogic { dao: Box::new(OkDao) };
    assert_eq!(logic.name(), "OkLogic");
    assert_eq!(logic.calcul(), 3.0);

    assert_eq!(COMPONENT_CATALOG.len(), 2);
}
