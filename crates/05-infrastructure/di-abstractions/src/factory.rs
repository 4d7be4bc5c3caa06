//! 组件工厂抽象接口
//!
//! 以固定签名的工厂函数代替运行时反射构造组件

use infrastructure_common::{
    BusinessLogic, BusinessLogicHandle, ComponentRole, ConstructionFailure, DataAccess,
    DataAccessHandle,
};
use std::fmt;
use std::sync::Arc;

/// 数据访问组件工厂函数类型
pub type DataAccessFactoryFn =
    Arc<dyn Fn() -> Result<DataAccessHandle, ConstructionFailure> + Send + Sync>;

/// 业务逻辑组件工厂函数类型
pub type BusinessLogicFactoryFn =
    Arc<dyn Fn(DataAccessHandle) -> Result<BusinessLogicHandle, ConstructionFailure> + Send + Sync>;

/// 无参构造的数据访问组件
pub trait DefaultConstructible: DataAccess + Sized {
    /// 创建组件实例
    fn construct() -> Result<Self, ConstructionFailure>;
}

/// 以数据访问组件为构造参数的业务逻辑组件
pub trait DataAccessConstructible: BusinessLogic + Sized {
    /// 使用注入的数据访问组件创建实例
    fn construct_with(data_access: DataAccessHandle) -> Result<Self, ConstructionFailure>;
}

/// 组件工厂
///
/// 每个注册项只提供一种构造器，由角色区分
#[derive(Clone)]
pub enum ComponentFactory {
    /// 无参构造器
    DataAccess(DataAccessFactoryFn),
    /// 接收数据访问组件的构造器
    BusinessLogic(BusinessLogicFactoryFn),
}

impl ComponentFactory {
    /// 从闭包创建数据访问组件工厂
    pub fn data_access<F>(factory_fn: F) -> Self
    where
        F: Fn() -> Result<DataAccessHandle, ConstructionFailure> + Send + Sync + 'static,
    {
        Self::DataAccess(Arc::new(factory_fn))
    }

    /// 从闭包创建业务逻辑组件工厂
    pub fn business_logic<F>(factory_fn: F) -> Self
    where
        F: Fn(DataAccessHandle) -> Result<BusinessLogicHandle, ConstructionFailure>
            + Send
            + Sync
            + 'static,
    {
        Self::BusinessLogic(Arc::new(factory_fn))
    }

    /// 为实现了 [`DefaultConstructible`] 的类型创建工厂
    pub fn of_data_access<T: DefaultConstructible>() -> Self {
        Self::data_access(|| {
            let component: DataAccessHandle = Box::new(T::construct()?);
            Ok(component)
        })
    }

    /// 为实现了 [`DataAccessConstructible`] 的类型创建工厂
    pub fn of_business_logic<T: DataAccessConstructible>() -> Self {
        Self::business_logic(|data_access| {
            let component: BusinessLogicHandle = Box::new(T::construct_with(data_access)?);
            Ok(component)
        })
    }

    /// 工厂对应的组件角色
    pub fn role(&self) -> ComponentRole {
        match self {
            Self::DataAccess(_) => ComponentRole::DataAccess,
            Self::BusinessLogic(_) => ComponentRole::BusinessLogic,
        }
    }
}

impl fmt::Debug for ComponentFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ComponentFactory")
            .field(&self.role())
            .field(&"<function>")
            .finish()
    }
}
