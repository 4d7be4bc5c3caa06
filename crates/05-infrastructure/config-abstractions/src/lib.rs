//! # Configuration Abstractions
//!
//! 配置源抽象层，定义组件描述符和容器定义的获取接口。
//!
//! ## 核心接口
//!
//! - [`DescriptorSource`] - 组件描述符来源
//! - [`DefinitionSource`] - 容器定义来源
//! - [`FileSource`] - 基于文件的来源

pub mod provider;
pub mod validator;

pub use provider::*;
pub use validator::*;
