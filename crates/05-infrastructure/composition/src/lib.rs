//! # 装配组合层
//!
//! 这个 crate 把配置来源、组件注册表和解析器组合起来，按选定的装配方式
//! 得到一个可以直接执行计算的业务逻辑组件。
//!
//! ## 装配方式
//!
//! - **文本文件**: 两行文本，依次为数据访问组件和业务逻辑组件名称
//! - **环境变量**: `<PREFIX>_DATA_ACCESS` 和 `<PREFIX>_BUSINESS_LOGIC`
//! - **组件目录扫描**: 扫描模块路径下用 `#[component]` 登记的组件
//! - **容器定义文件**: TOML 或 JSON 描述的组件列表
//!
//! ## 基本使用
//!
//! ```rust,no_run
//! use infrastructure_composition::WiringBuilder;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let app = WiringBuilder::new()
//!         .from_text_file("config.txt")
//!         .build()
//!         .await?;
//!
//!     println!("{}", app.render());
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod infrastructure;

// 重新导出主要类型
pub use builder::{LoggingConfig, WiringBuilder};
pub use infrastructure::{render_result, WiredApplication, WiringStrategy, RESULT_PREFIX};

// 重新导出错误类型
pub use infrastructure_common::InfrastructureError;
