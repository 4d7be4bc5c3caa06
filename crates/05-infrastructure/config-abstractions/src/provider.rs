//! 配置来源抽象接口

use async_trait::async_trait;
use infrastructure_common::{ComponentDescriptor, ConfigError, ContainerDefinition};
use std::path::Path;

/// 组件描述符来源 trait
///
/// 提供一对有序的组件名称：数据访问组件和业务逻辑组件
#[async_trait]
pub trait DescriptorSource: Send + Sync {
    /// 读取组件描述符
    ///
    /// 来源不存在或内容不足两项时返回 [`ConfigError::ConfigurationMissing`]
    async fn load_descriptor(&self) -> Result<ComponentDescriptor, ConfigError>;

    /// 获取来源名称
    fn name(&self) -> &str;
}

/// 容器定义来源 trait
#[async_trait]
pub trait DefinitionSource: Send + Sync {
    /// 读取并校验容器定义
    async fn load_definition(&self) -> Result<ContainerDefinition, ConfigError>;

    /// 获取来源名称
    fn name(&self) -> &str;
}

/// 基于文件的来源
#[async_trait]
pub trait FileSource: Send + Sync {
    /// 获取文件路径
    fn file_path(&self) -> &Path;

    /// 检查文件是否存在
    async fn file_exists(&self) -> bool {
        self.file_path().is_file()
    }
}
