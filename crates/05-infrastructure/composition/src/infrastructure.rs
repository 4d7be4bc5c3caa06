//! 装配结果主入口

use crate::builder::WiringBuilder;
use infrastructure_common::{BusinessLogicHandle, ComponentDescriptor};
use std::fmt;
use std::path::PathBuf;
use tracing::info;

/// 输出前缀
pub const RESULT_PREFIX: &str = "RES=";

/// 按统一格式输出计算结果
pub fn render_result(value: f64) -> String {
    format!("{}{}", RESULT_PREFIX, value)
}

/// 装配方式
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WiringStrategy {
    /// 直接给定的描述符
    Descriptor(ComponentDescriptor),
    /// 两行文本文件
    TextFile(PathBuf),
    /// 环境变量前缀
    Environment(String),
    /// 组件目录扫描的模块路径
    Annotation(String),
    /// TOML 或 JSON 容器定义文件
    Definition(PathBuf),
}

impl fmt::Display for WiringStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Descriptor(descriptor) => write!(f, "描述符 {}", descriptor),
            Self::TextFile(path) => write!(f, "文本文件 {}", path.display()),
            Self::Environment(prefix) => write!(f, "环境变量 {}_*", prefix),
            Self::Annotation(base_path) => write!(f, "组件目录 {}", base_path),
            Self::Definition(path) => write!(f, "容器定义 {}", path.display()),
        }
    }
}

/// 装配好的应用
///
/// 持有解析出的业务逻辑组件，数据访问组件由它独占
#[derive(Debug)]
pub struct WiredApplication {
    strategy: WiringStrategy,
    descriptor: ComponentDescriptor,
    business_logic: BusinessLogicHandle,
}

impl WiredApplication {
    /// 创建装配构建器
    pub fn builder() -> WiringBuilder {
        WiringBuilder::new()
    }

    pub(crate) fn new(
        strategy: WiringStrategy,
        descriptor: ComponentDescriptor,
        business_logic: BusinessLogicHandle,
    ) -> Self {
        Self {
            strategy,
            descriptor,
            business_logic,
        }
    }

    /// 装配方式
    pub fn strategy(&self) -> &WiringStrategy {
        &self.strategy
    }

    /// 实际装配的组件描述符
    pub fn descriptor(&self) -> &ComponentDescriptor {
        &self.descriptor
    }

    /// 业务逻辑组件
    pub fn business_logic(&self) -> &BusinessLogicHandle {
        &self.business_logic
    }

    /// 执行计算
    pub fn calcul(&self) -> f64 {
        let value = self.business_logic.calcul();
        info!("{} 计算结果: {}", self.business_logic.name(), value);
        value
    }

    /// 执行计算并按统一格式输出
    pub fn render(&self) -> String {
        render_result(self.calcul())
    }
}
