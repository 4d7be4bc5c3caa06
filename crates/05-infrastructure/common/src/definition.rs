//! 声明式容器定义
//!
//! 描述容器中包含哪些组件以及业务逻辑组件注入哪个数据访问组件。
//! TOML 中写作 `[[component]]` 表数组，JSON 中写作 `{"component": [...]}`。

use serde::{Deserialize, Serialize};

/// 容器定义
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerDefinition {
    /// 组件定义列表
    #[serde(default, rename = "component", alias = "components")]
    pub components: Vec<ComponentDefinition>,
}

impl ContainerDefinition {
    /// 创建空的容器定义
    pub fn new() -> Self {
        Self::default()
    }

    /// 添加组件定义
    pub fn with_component(mut self, component: ComponentDefinition) -> Self {
        self.components.push(component);
        self
    }

    /// 按 id 查找组件定义
    pub fn find(&self, id: &str) -> Option<&ComponentDefinition> {
        self.components.iter().find(|component| component.id == id)
    }
}

/// 单个组件定义
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentDefinition {
    /// 容器内的组件 id
    pub id: String,
    /// 注册表中的组件名称或类型路径
    #[serde(rename = "type")]
    pub type_name: String,
    /// 注入的数据访问组件 id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inject: Option<String>,
    /// 是否为首选
    #[serde(default)]
    pub primary: bool,
}

impl ComponentDefinition {
    /// 创建新的组件定义
    pub fn new(id: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            type_name: type_name.into(),
            inject: None,
            primary: false,
        }
    }

    /// 设置注入的数据访问组件 id
    pub fn with_inject(mut self, inject: impl Into<String>) -> Self {
        self.inject = Some(inject.into());
        self
    }

    /// 标记为首选
    pub fn with_primary(mut self, primary: bool) -> Self {
        self.primary = primary;
        self
    }
}
