//! 组件解析器抽象接口
//!
//! 提供按名称解析并装配组件的能力

use infrastructure_common::{
    BusinessLogicHandle, ComponentDescriptor, DataAccessHandle, DependencyError,
};

/// 组件解析器 trait
///
/// 负责把符号名称变成已构造、已装配的组件实例
pub trait ComponentResolver: Send + Sync {
    /// 解析数据访问组件（调用无参构造器）
    fn resolve_data_access(&self, name: &str) -> Result<DataAccessHandle, DependencyError>;

    /// 解析业务逻辑组件（调用接收数据访问组件的构造器）
    fn resolve_business_logic(
        &self,
        name: &str,
        data_access: DataAccessHandle,
    ) -> Result<BusinessLogicHandle, DependencyError>;

    /// 按描述符解析并装配
    ///
    /// 先数据访问后业务逻辑，遇到第一个错误立即返回
    fn resolve(
        &self,
        descriptor: &ComponentDescriptor,
    ) -> Result<BusinessLogicHandle, DependencyError> {
        let data_access = self.resolve_data_access(&descriptor.data_access)?;
        self.resolve_business_logic(&descriptor.business_logic, data_access)
    }
}
