//! 元数据定义
//!
//! 提供组件角色和注册元数据

use serde::{Deserialize, Serialize};
use std::fmt;

/// 组件角色
///
/// 决定注册项提供的是哪一种构造器
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentRole {
    /// 数据访问组件，提供无参构造器
    DataAccess,
    /// 业务逻辑组件，提供接收数据访问组件的构造器
    BusinessLogic,
}

impl ComponentRole {
    /// 该角色对应的构造器签名描述
    pub fn constructor_signature(&self) -> &'static str {
        match self {
            Self::DataAccess => "fn() -> DataAccess",
            Self::BusinessLogic => "fn(DataAccess) -> BusinessLogic",
        }
    }
}

impl fmt::Display for ComponentRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DataAccess => f.write_str("数据访问"),
            Self::BusinessLogic => f.write_str("业务逻辑"),
        }
    }
}

/// 组件元数据
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentMetadata {
    /// 组件名称（注册键）
    pub name: String,
    /// 完整类型路径，作为别名参与查找
    pub type_path: Option<String>,
    /// 组件角色
    pub role: ComponentRole,
    /// 是否为同角色候选中的首选
    pub primary: bool,
    /// 需要注入的数据访问组件名称（仅业务逻辑组件）
    pub inject: Option<String>,
    /// 组件描述
    pub description: Option<String>,
}

impl ComponentMetadata {
    /// 创建新的组件元数据
    pub fn new(name: impl Into<String>, role: ComponentRole) -> Self {
        Self {
            name: name.into(),
            type_path: None,
            role,
            primary: false,
            inject: None,
            description: None,
        }
    }

    /// 设置类型路径
    pub fn with_type_path(mut self, type_path: impl Into<String>) -> Self {
        self.type_path = Some(type_path.into());
        self
    }

    /// 标记为首选
    pub fn with_primary(mut self, primary: bool) -> Self {
        self.primary = primary;
        self
    }

    /// 设置注入限定名
    pub fn with_inject(mut self, inject: impl Into<String>) -> Self {
        self.inject = Some(inject.into());
        self
    }

    /// 设置描述
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}
