//! # Dependency Injection Abstractions
//!
//! 依赖注入抽象层，定义组件注册和按名称解析的核心接口。
//!
//! ## 核心接口
//!
//! - [`ComponentRegistry`] - 组件注册表接口
//! - [`ComponentResolver`] - 组件解析器接口
//! - [`ComponentFactory`] - 组件工厂
//! - [`ComponentScanner`] - 组件扫描器接口
//! - [`COMPONENT_CATALOG`] - 编译期组件目录

pub mod catalog;
pub mod factory;
pub mod registry;
pub mod resolver;
pub mod scanner;

pub use catalog::*;
pub use factory::*;
pub use registry::*;
pub use resolver::*;
pub use scanner::*;

// `#[component]` 宏生成的代码通过此路径引用 linkme
#[doc(hidden)]
pub use linkme;
