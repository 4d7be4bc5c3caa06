//! # 依赖注入具体实现
//!
//! 提供具体的组件注册表、解析器、目录扫描器和应用上下文实现

pub mod context;
pub mod registry;
pub mod resolver;
pub mod scanner;

pub use context::ApplicationContext;
pub use registry::{ComponentRegistryBuilder, ComponentRegistryImpl};
pub use resolver::ComponentResolverImpl;
pub use scanner::{definition_from_metadata, CatalogScanner};
