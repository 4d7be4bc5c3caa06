//! # Wiring Components
//!
//! 可按名称装配的组件：两种数据访问实现和一个业务逻辑实现。
//! 所有组件都通过 `#[component]` 登记到组件目录中。

pub mod dao;
pub mod ext;
pub mod metier;

pub use dao::DaoImpl;
pub use ext::DaoImplV2;
pub use metier::MetierImpl;

/// 组件所在的模块路径，供目录扫描使用
pub const BASE_PATH: &str = module_path!();
