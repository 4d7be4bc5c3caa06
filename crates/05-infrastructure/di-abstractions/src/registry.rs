//! 组件注册表抽象接口

use crate::factory::ComponentFactory;
use infrastructure_common::{ComponentMetadata, ComponentRole};

/// 组件注册表 trait
///
/// 名称到工厂的只读映射，构建完成后不再变化
pub trait ComponentRegistry: Send + Sync {
    /// 按名称或类型路径查找注册项
    fn lookup(&self, name: &str) -> Option<&ComponentRegistration>;

    /// 检查组件是否已注册
    fn is_registered(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }

    /// 获取所有已注册的组件元数据
    fn get_registered_components(&self) -> Vec<ComponentMetadata>;

    /// 已注册组件数量
    fn len(&self) -> usize;

    /// 注册表是否为空
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// 组件注册信息
#[derive(Debug, Clone)]
pub struct ComponentRegistration {
    /// 组件元数据
    pub metadata: ComponentMetadata,
    /// 组件工厂
    pub factory: ComponentFactory,
}

impl ComponentRegistration {
    /// 创建新的注册信息，角色以工厂为准
    pub fn new(mut metadata: ComponentMetadata, factory: ComponentFactory) -> Self {
        metadata.role = factory.role();
        Self { metadata, factory }
    }

    /// 组件名称
    pub fn name(&self) -> &str {
        &self.metadata.name
    }

    /// 组件角色
    pub fn role(&self) -> ComponentRole {
        self.factory.role()
    }
}
