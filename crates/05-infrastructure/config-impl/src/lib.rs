//! # Configuration Implementation
//!
//! 配置来源的具体实现。
//!
//! ## 主要组件
//!
//! - [`TextDescriptorSource`] - 两行文本文件描述符
//! - [`EnvironmentDescriptorSource`] - 环境变量描述符
//! - [`TomlDefinitionSource`] - TOML 容器定义
//! - [`JsonDefinitionSource`] - JSON 容器定义
//! - [`DefinitionValidator`] - 容器定义验证器

pub mod providers;
pub mod validation;

pub use providers::*;
pub use validation::*;
