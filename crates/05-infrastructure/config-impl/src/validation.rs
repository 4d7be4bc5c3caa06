//! 容器定义验证

use config_abstractions::{ConfigValidator, ValidationResult};
use infrastructure_common::ContainerDefinition;
use std::collections::HashSet;
use tracing::debug;

/// 容器定义验证器
///
/// 检查 id 和类型非空、id 唯一、`inject` 引用存在的组件 id
#[derive(Debug, Clone, Copy, Default)]
pub struct DefinitionValidator;

impl ConfigValidator<ContainerDefinition> for DefinitionValidator {
    fn validate(&self, definition: &ContainerDefinition) -> ValidationResult {
        let mut result = ValidationResult::success();
        let mut seen = HashSet::new();

        if definition.components.is_empty() {
            result.add_warning("容器定义中没有组件");
        }

        for (index, component) in definition.components.iter().enumerate() {
            if component.id.trim().is_empty() {
                result.add_error(format!("第 {} 个组件的 id 为空", index + 1));
            } else if !seen.insert(component.id.as_str()) {
                result.add_error(format!("组件 id 重复: {}", component.id));
            }

            if component.type_name.trim().is_empty() {
                result.add_error(format!("组件 {} 的类型为空", component.id));
            }
        }

        for component in &definition.components {
            match component.inject.as_deref() {
                Some(inject) if inject == component.id => {
                    result.add_error(format!("组件 {} 不能注入自身", component.id));
                }
                Some(inject) if definition.find(inject).is_none() => {
                    result.add_error(format!(
                        "组件 {} 注入的组件 {} 不存在",
                        component.id, inject
                    ));
                }
                _ => {}
            }
        }

        debug!(
            "容器定义验证完成: {} 个错误, {} 个警告",
            result.errors.len(),
            result.warnings.len()
        );
        result
    }

    fn name(&self) -> &str {
        "DefinitionValidator"
    }
}
