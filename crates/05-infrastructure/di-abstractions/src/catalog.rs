//! 编译期组件目录
//!
//! `#[component]` 宏为每个组件生成一个 [`CatalogEntry`]，链接时收集到
//! [`COMPONENT_CATALOG`] 中。目录只读，注册表通过它显式构建。

use crate::factory::ComponentFactory;
use infrastructure_common::{ComponentMetadata, ComponentRole};

/// 组件目录条目
#[derive(Debug, Clone, Copy)]
pub struct CatalogEntry {
    /// 组件名称
    pub name: &'static str,
    /// 完整类型路径
    pub type_path: &'static str,
    /// 组件角色
    pub role: ComponentRole,
    /// 是否为首选
    pub primary: bool,
    /// 需要注入的数据访问组件名称
    pub inject: Option<&'static str>,
    /// 文档注释首行
    pub description: Option<&'static str>,
    /// 工厂构造函数
    pub factory: fn() -> ComponentFactory,
}

impl CatalogEntry {
    /// 转换为组件元数据
    pub fn metadata(&self) -> ComponentMetadata {
        let mut metadata = ComponentMetadata::new(self.name, self.role)
            .with_type_path(self.type_path)
            .with_primary(self.primary);
        if let Some(inject) = self.inject {
            metadata = metadata.with_inject(inject);
        }
        if let Some(description) = self.description {
            metadata = metadata.with_description(description);
        }
        metadata
    }

    /// 是否位于指定的模块路径之下
    ///
    /// 空路径匹配所有条目
    pub fn is_under(&self, base_path: &str) -> bool {
        let base_path = base_path.trim_end_matches("::");
        base_path.is_empty()
            || self.type_path == base_path
            || self
                .type_path
                .strip_prefix(base_path)
                .is_some_and(|rest| rest.starts_with("::"))
    }
}

/// 链接期收集的组件目录
#[linkme::distributed_slice]
pub static COMPONENT_CATALOG: [CatalogEntry] = [..];

/// 列出目录中的所有组件
pub fn catalog_entries() -> impl Iterator<Item = &'static CatalogEntry> {
    COMPONENT_CATALOG.iter()
}
