//! 错误类型定义

use crate::component::ConstructionFailure;
use crate::metadata::ComponentRole;
use std::fmt;
use thiserror::Error;

/// 配置错误类型
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("配置缺失: {source_name}, 原因: {reason}")]
    ConfigurationMissing { source_name: String, reason: String },

    #[error("配置文件读取失败: {source}")]
    FileReadError {
        #[from]
        source: std::io::Error,
    },

    #[error("配置解析失败: {source}")]
    ParseError {
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("配置验证失败: {errors:?}")]
    ValidationFailed { errors: Vec<String> },

    #[error("不支持的配置格式: {path}")]
    UnsupportedFormat { path: String },
}

impl ConfigError {
    /// 创建配置缺失错误
    pub fn missing(source_name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ConfigurationMissing {
            source_name: source_name.into(),
            reason: reason.into(),
        }
    }
}

/// 解析阶段
///
/// 用于在诊断信息中指出失败发生在哪一步
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResolutionStage {
    /// 数据访问组件查找与构造
    DataAccess,
    /// 业务逻辑组件查找与构造
    BusinessLogic,
    /// 容器定义校验
    ContainerDefinition,
}

impl fmt::Display for ResolutionStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DataAccess => f.write_str("数据访问组件"),
            Self::BusinessLogic => f.write_str("业务逻辑组件"),
            Self::ContainerDefinition => f.write_str("容器定义"),
        }
    }
}

/// 依赖注入错误类型
#[derive(Error, Debug)]
pub enum DependencyError {
    #[error("[{stage}] 组件未注册: {name}")]
    UnknownComponent { stage: ResolutionStage, name: String },

    #[error("[{stage}] 组件 {name} 没有可用的构造器: 期望 {expected}")]
    IncompatibleConstructor {
        stage: ResolutionStage,
        name: String,
        expected: String,
    },

    #[error("[{stage}] 组件创建失败: {name}, 原因: {source}")]
    ConstructionError {
        stage: ResolutionStage,
        name: String,
        source: ConstructionFailure,
    },

    #[error("容器中不存在组件定义: {id}")]
    DefinitionNotFound { id: String },

    #[error("容器中组件 id 重复: {id}")]
    DuplicateDefinition { id: String },

    #[error("容器中没有 {role} 组件")]
    NoCandidate { role: ComponentRole },

    #[error("容器中存在多个 {role} 组件且无法确定首选: {candidates:?}")]
    AmbiguousCandidates {
        role: ComponentRole,
        candidates: Vec<String>,
    },
}

impl DependencyError {
    /// 获取失败的阶段（如果有）
    pub fn stage(&self) -> Option<ResolutionStage> {
        match self {
            Self::UnknownComponent { stage, .. }
            | Self::IncompatibleConstructor { stage, .. }
            | Self::ConstructionError { stage, .. } => Some(*stage),
            _ => None,
        }
    }

    /// 获取出错的组件名称（如果有）
    pub fn component_name(&self) -> Option<&str> {
        match self {
            Self::UnknownComponent { name, .. }
            | Self::IncompatibleConstructor { name, .. }
            | Self::ConstructionError { name, .. } => Some(name),
            Self::DefinitionNotFound { id } | Self::DuplicateDefinition { id } => Some(id),
            _ => None,
        }
    }
}

/// 组件错误类型
#[derive(Error, Debug)]
pub enum ComponentError {
    #[error("组件注册失败: {name}, 原因: {message}")]
    RegistrationError { name: String, message: String },

    #[error("组件元数据无效: {message}")]
    InvalidMetadata { message: String },
}

/// 基础设施错误类型
#[derive(Error, Debug)]
pub enum InfrastructureError {
    #[error("配置错误: {source}")]
    ConfigError {
        #[from]
        source: ConfigError,
    },

    #[error("依赖注入错误: {source}")]
    DependencyError {
        #[from]
        source: DependencyError,
    },

    #[error("组件错误: {source}")]
    ComponentError {
        #[from]
        source: ComponentError,
    },

    #[error("基础设施启动失败: {message}")]
    BootstrapFailed { message: String },
}

/// 结果类型别名
pub type ConfigResult<T> = Result<T, ConfigError>;
pub type DependencyResult<T> = Result<T, DependencyError>;
pub type ComponentResult<T> = Result<T, ComponentError>;
pub type InfrastructureResult<T> = Result<T, InfrastructureError>;
