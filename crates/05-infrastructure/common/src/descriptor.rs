//! 组件描述符

use serde::{Deserialize, Serialize};
use std::fmt;

/// 组件描述符
///
/// 有序的名称对：先是数据访问组件，再是业务逻辑组件
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ComponentDescriptor {
    /// 数据访问组件名称
    pub data_access: String,
    /// 业务逻辑组件名称
    pub business_logic: String,
}

impl ComponentDescriptor {
    /// 创建新的组件描述符
    pub fn new(data_access: impl Into<String>, business_logic: impl Into<String>) -> Self {
        Self {
            data_access: data_access.into(),
            business_logic: business_logic.into(),
        }
    }
}

impl fmt::Display for ComponentDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.data_access, self.business_logic)
    }
}
