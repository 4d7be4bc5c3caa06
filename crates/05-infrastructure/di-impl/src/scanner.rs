//! 目录扫描器实现

use di_abstractions::{catalog_entries, ComponentScanner};
use infrastructure_common::{ComponentDefinition, ComponentMetadata, ContainerDefinition};
use tracing::info;

/// 基于编译期组件目录的扫描器
#[derive(Debug, Default, Clone, Copy)]
pub struct CatalogScanner;

impl CatalogScanner {
    /// 创建新的扫描器
    pub fn new() -> Self {
        Self
    }
}

impl ComponentScanner for CatalogScanner {
    fn scan(&self, base_path: &str) -> Vec<ComponentMetadata> {
        let found: Vec<ComponentMetadata> = catalog_entries()
            .filter(|entry| entry.is_under(base_path))
            .map(|entry| entry.metadata())
            .collect();

        info!("扫描 {} 发现 {} 个组件", base_path, found.len());
        found
    }

    fn name(&self) -> &str {
        "CatalogScanner"
    }
}

/// 把扫描结果转换为容器定义
///
/// 组件名称同时作为 id 和注册表键
pub fn definition_from_metadata(components: &[ComponentMetadata]) -> ContainerDefinition {
    components
        .iter()
        .fold(ContainerDefinition::new(), |definition, metadata| {
            let mut component = ComponentDefinition::new(&metadata.name, &metadata.name)
                .with_primary(metadata.primary);
            if let Some(inject) = &metadata.inject {
                component = component.with_inject(inject);
            }
            definition.with_component(component)
        })
}
