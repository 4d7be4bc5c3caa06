//! # Component Macros
//!
//! 这个 crate 提供了把组件登记到编译期组件目录的过程宏。
//!
//! ## 使用示例
//!
//! ```rust,ignore
//! use component_macros::component;
//!
//! #[component(data_access, name = "DaoImplV2")]
//! #[derive(Debug)]
//! pub struct DaoImplV2;
//!
//! #[component(business_logic, inject = "DaoImplV2")]
//! #[derive(Debug)]
//! pub struct MetierImpl {
//!     dao: DataAccessHandle,
//! }
//! ```

use proc_macro::TokenStream;

mod component;

/// 组件目录注册宏
///
/// 为结构体实现 `Component` trait，并在组件目录中登记一个条目。
///
/// # 参数
///
/// - `data_access` - 数据访问组件，类型需实现 `DefaultConstructible`
/// - `business_logic` - 业务逻辑组件，类型需实现 `DataAccessConstructible`
/// - `name = "custom_name"` - 自定义组件名称（默认为结构体名）
/// - `primary` - 同角色多个候选时的首选组件
/// - `inject = "dao_name"` - 业务逻辑组件注入的数据访问组件名称
///
/// 使用方 crate 需要依赖 `infrastructure-common` 和 `di-abstractions`。
#[proc_macro_attribute]
pub fn component(args: TokenStream, input: TokenStream) -> TokenStream {
    component::component_impl(args, input)
}
