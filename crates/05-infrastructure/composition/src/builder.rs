//! 装配构建器

use crate::infrastructure::{WiredApplication, WiringStrategy};
use config_abstractions::DescriptorSource;
use config_impl::{definition_source_for_path, EnvironmentDescriptorSource, TextDescriptorSource};
use di_abstractions::{ComponentRegistry, ComponentResolver};
use di_impl::{ApplicationContext, CatalogScanner, ComponentRegistryImpl, ComponentResolverImpl};
use infrastructure_common::{ComponentDescriptor, InfrastructureError};
use std::path::Path;
use tracing::{debug, info};

/// 装配构建器
///
/// 使用建造者模式选择装配方式，解析出业务逻辑组件
pub struct WiringBuilder {
    /// 组件注册表，未设置时使用组件目录
    registry: Option<Box<dyn ComponentRegistry>>,
    /// 装配方式
    strategy: Option<WiringStrategy>,
    /// 是否启用日志初始化
    logging_enabled: bool,
    /// 日志配置
    logging_config: LoggingConfig,
}

impl WiringBuilder {
    /// 创建新的装配构建器
    pub fn new() -> Self {
        Self {
            registry: None,
            strategy: None,
            logging_enabled: false,
            logging_config: LoggingConfig::default(),
        }
    }

    /// 使用自定义组件注册表
    pub fn with_registry<R: ComponentRegistry + 'static>(mut self, registry: R) -> Self {
        debug!("使用自定义组件注册表，包含 {} 个组件", registry.len());
        self.registry = Some(Box::new(registry));
        self
    }

    /// 直接使用给定的组件描述符
    pub fn from_descriptor(mut self, descriptor: ComponentDescriptor) -> Self {
        self.strategy = Some(WiringStrategy::Descriptor(descriptor));
        self
    }

    /// 从两行文本文件读取组件描述符
    pub fn from_text_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        info!("使用文本描述符: {}", path.as_ref().display());
        self.strategy = Some(WiringStrategy::TextFile(path.as_ref().to_path_buf()));
        self
    }

    /// 从环境变量读取组件描述符
    pub fn from_env<S: Into<String>>(mut self, prefix: S) -> Self {
        let prefix = prefix.into();
        info!("使用环境变量描述符，前缀: {}", prefix);
        self.strategy = Some(WiringStrategy::Environment(prefix));
        self
    }

    /// 扫描模块路径下登记的组件
    pub fn scan_package<S: Into<String>>(mut self, base_path: S) -> Self {
        let base_path = base_path.into();
        info!("扫描组件目录: {}", base_path);
        self.strategy = Some(WiringStrategy::Annotation(base_path));
        self
    }

    /// 从 TOML 或 JSON 容器定义文件装配
    pub fn from_definition_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        info!("使用容器定义文件: {}", path.as_ref().display());
        self.strategy = Some(WiringStrategy::Definition(path.as_ref().to_path_buf()));
        self
    }

    /// 配置日志
    pub fn with_logging(mut self, config: LoggingConfig) -> Self {
        self.logging_config = config;
        self.logging_enabled = true;
        self
    }

    /// 构建装配好的应用
    pub async fn build(self) -> Result<WiredApplication, InfrastructureError> {
        // 只有在明确配置了日志时才初始化日志
        if self.logging_enabled {
            self.logging_config.initialize()?;
        }

        let strategy = self
            .strategy
            .ok_or_else(|| InfrastructureError::BootstrapFailed {
                message: "未指定装配方式".to_string(),
            })?;
        info!("开始装配: {}", strategy);

        let registry: Box<dyn ComponentRegistry> = match self.registry {
            Some(registry) => registry,
            None => Box::new(ComponentRegistryImpl::from_catalog()?),
        };
        let registry = registry.as_ref();

        let (descriptor, business_logic) = match &strategy {
            WiringStrategy::Descriptor(descriptor) => {
                resolve_descriptor(registry, descriptor.clone())?
            }
            WiringStrategy::TextFile(path) => {
                let descriptor = TextDescriptorSource::new(path).load_descriptor().await?;
                resolve_descriptor(registry, descriptor)?
            }
            WiringStrategy::Environment(prefix) => {
                let descriptor = EnvironmentDescriptorSource::new(prefix.as_str())
                    .load_descriptor()
                    .await?;
                resolve_descriptor(registry, descriptor)?
            }
            WiringStrategy::Annotation(base_path) => {
                let context = ApplicationContext::from_scan(registry, &CatalogScanner, base_path)?;
                resolve_context(&context)?
            }
            WiringStrategy::Definition(path) => {
                let definition = definition_source_for_path(path)?.load_definition().await?;
                let context = ApplicationContext::new(registry, definition)?;
                resolve_context(&context)?
            }
        };

        info!("装配完成: {}", descriptor);
        Ok(WiredApplication::new(strategy, descriptor, business_logic))
    }
}

impl Default for WiringBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn resolve_descriptor(
    registry: &dyn ComponentRegistry,
    descriptor: ComponentDescriptor,
) -> Result<(ComponentDescriptor, infrastructure_common::BusinessLogicHandle), InfrastructureError> {
    let business_logic = ComponentResolverImpl::new(registry).resolve(&descriptor)?;
    Ok((descriptor, business_logic))
}

fn resolve_context(
    context: &ApplicationContext<'_>,
) -> Result<(ComponentDescriptor, infrastructure_common::BusinessLogicHandle), InfrastructureError> {
    let id = context.business_logic_id()?;
    let descriptor = context.descriptor_for(&id)?;
    let business_logic = context.get_business_logic_by_id(&id)?;
    Ok((descriptor, business_logic))
}

/// 日志配置
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// 日志级别
    pub level: tracing::Level,
    /// 是否显示目标
    pub show_target: bool,
    /// 是否显示文件名
    pub show_file: bool,
    /// 是否显示行号
    pub show_line_number: bool,
    /// 是否使用 JSON 格式
    pub json_format: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: tracing::Level::WARN,
            show_target: true,
            show_file: false,
            show_line_number: false,
            json_format: false,
        }
    }
}

impl LoggingConfig {
    /// 设置日志级别
    pub fn with_level(mut self, level: tracing::Level) -> Self {
        self.level = level;
        self
    }

    /// 设置是否使用 JSON 格式
    pub fn with_json_format(mut self, json_format: bool) -> Self {
        self.json_format = json_format;
        self
    }

    /// 初始化日志系统
    ///
    /// 日志写到标准错误，标准输出只保留计算结果
    pub fn initialize(&self) -> Result<(), InfrastructureError> {
        let subscriber = tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_max_level(self.level)
            .with_target(self.show_target)
            .with_file(self.show_file)
            .with_line_number(self.show_line_number);

        if self.json_format {
            subscriber.json().try_init()
        } else {
            subscriber.try_init()
        }
        .map_err(|e| InfrastructureError::BootstrapFailed {
            message: format!("日志初始化失败: {}", e),
        })?;

        debug!("日志系统初始化完成");
        Ok(())
    }
}
