//! 组件注册表实现

use di_abstractions::{
    catalog_entries, CatalogEntry, ComponentFactory, ComponentRegistration, ComponentRegistry,
};
use infrastructure_common::{
    BusinessLogicHandle, ComponentError, ComponentMetadata, ComponentRole, ConstructionFailure,
    DataAccessHandle,
};
use std::collections::HashMap;
use tracing::{debug, info};

/// 只读的组件注册表
///
/// 由 [`ComponentRegistryBuilder`] 构建，之后不再修改
#[derive(Debug, Default)]
pub struct ComponentRegistryImpl {
    /// 注册信息（按注册顺序）
    registrations: Vec<ComponentRegistration>,
    /// 名称和类型路径到注册项下标的索引
    index: HashMap<String, usize>,
}

impl ComponentRegistryImpl {
    /// 创建注册表构建器
    pub fn builder() -> ComponentRegistryBuilder {
        ComponentRegistryBuilder::new()
    }

    /// 只包含编译期目录中所有组件的注册表
    pub fn from_catalog() -> Result<Self, ComponentError> {
        ComponentRegistryBuilder::new().register_catalog().build()
    }
}

impl ComponentRegistry for ComponentRegistryImpl {
    fn lookup(&self, name: &str) -> Option<&ComponentRegistration> {
        self.index
            .get(name)
            .and_then(|position| self.registrations.get(*position))
    }

    fn get_registered_components(&self) -> Vec<ComponentMetadata> {
        self.registrations
            .iter()
            .map(|registration| registration.metadata.clone())
            .collect()
    }

    fn len(&self) -> usize {
        self.registrations.len()
    }
}

/// 注册表构建器
#[derive(Debug, Default)]
pub struct ComponentRegistryBuilder {
    registrations: Vec<ComponentRegistration>,
}

impl ComponentRegistryBuilder {
    /// 创建新的构建器
    pub fn new() -> Self {
        Self::default()
    }

    /// 添加组件注册
    pub fn register(mut self, metadata: ComponentMetadata, factory: ComponentFactory) -> Self {
        debug!("添加组件注册: {} ({})", metadata.name, factory.role());
        self.registrations
            .push(ComponentRegistration::new(metadata, factory));
        self
    }

    /// 注册数据访问组件工厂
    pub fn register_data_access<F>(self, name: impl Into<String>, factory_fn: F) -> Self
    where
        F: Fn() -> Result<DataAccessHandle, ConstructionFailure> + Send + Sync + 'static,
    {
        let metadata = ComponentMetadata::new(name, ComponentRole::DataAccess);
        self.register(metadata, ComponentFactory::data_access(factory_fn))
    }

    /// 注册业务逻辑组件工厂
    pub fn register_business_logic<F>(self, name: impl Into<String>, factory_fn: F) -> Self
    where
        F: Fn(DataAccessHandle) -> Result<BusinessLogicHandle, ConstructionFailure>
            + Send
            + Sync
            + 'static,
    {
        let metadata = ComponentMetadata::new(name, ComponentRole::BusinessLogic);
        self.register(metadata, ComponentFactory::business_logic(factory_fn))
    }

    /// 注册目录条目
    pub fn register_entry(self, entry: &CatalogEntry) -> Self {
        self.register(entry.metadata(), (entry.factory)())
    }

    /// 注册编译期目录中的所有组件
    pub fn register_catalog(self) -> Self {
        catalog_entries().fold(self, |builder, entry| builder.register_entry(entry))
    }

    /// 构建注册表
    ///
    /// 名称或类型路径重复时失败
    pub fn build(self) -> Result<ComponentRegistryImpl, ComponentError> {
        let mut index = HashMap::new();

        for (position, registration) in self.registrations.iter().enumerate() {
            let name = registration.name();
            if name.trim().is_empty() {
                return Err(ComponentError::InvalidMetadata {
                    message: format!("第 {} 个注册项的组件名称为空", position + 1),
                });
            }

            let mut keys = vec![name];
            if let Some(type_path) = registration.metadata.type_path.as_deref() {
                if type_path != name {
                    keys.push(type_path);
                }
            }

            for key in keys {
                if let Some(existing) = index.insert(key.to_string(), position) {
                    let existing: &ComponentRegistration = &self.registrations[existing];
                    return Err(ComponentError::RegistrationError {
                        name: name.to_string(),
                        message: format!("键 {} 已被组件 {} 占用", key, existing.name()),
                    });
                }
            }
        }

        info!("构建注册表完成，注册了 {} 个组件", self.registrations.len());
        Ok(ComponentRegistryImpl {
            registrations: self.registrations,
            index,
        })
    }
}
