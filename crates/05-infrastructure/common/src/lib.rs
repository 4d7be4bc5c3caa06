//! # Infrastructure Common
//!
//! 这个 crate 提供了组件装配所需的公共 traits、错误类型和配置模型。
//!
//! ## 核心组件
//!
//! - [`Component`] - 组件基础 trait
//! - [`DataAccess`] - 数据访问能力
//! - [`BusinessLogic`] - 业务逻辑能力
//! - [`ComponentDescriptor`] - 组件描述符（数据访问名称 + 业务逻辑名称）
//! - [`ContainerDefinition`] - 声明式容器定义
//!
//! ## 设计原则
//!
//! - 按名称装配，注册表在启动时显式构建
//! - 构建完成后只读，不依赖全局可变状态
//! - 装配要么完整成功，要么在返回任何句柄之前失败

pub mod component;
pub mod definition;
pub mod descriptor;
pub mod errors;
pub mod metadata;

pub use component::*;
pub use definition::*;
pub use descriptor::*;
pub use errors::*;
pub use metadata::*;
