//! 组件扫描器抽象接口
//!
//! 提供按模块路径发现组件的能力

use infrastructure_common::ComponentMetadata;

/// 组件扫描器 trait
pub trait ComponentScanner: Send + Sync {
    /// 扫描指定模块路径下的组件
    fn scan(&self, base_path: &str) -> Vec<ComponentMetadata>;

    /// 获取扫描器名称
    fn name(&self) -> &str;
}
