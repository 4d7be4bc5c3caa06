//! Centralized integration tests for component-macros crate

use component_macros::component;
use di_abstractions::{
    ComponentRegistry, ComponentResolver, DataAccessConstructible, DefaultConstructible,
};
use di_impl::{ApplicationContext, CatalogScanner, ComponentRegistryImpl, ComponentResolverImpl};
use infrastructure_common::{
    BusinessLogic, Component, ComponentDescriptor, ComponentRole, ConstructionFailure, DataAccess,
    DataAccessHandle, DependencyError,
};

#[component(data_access)]
/// 文件存储
#[derive(Debug)]
pub struct FileStore;

impl DataAccess for FileStore {
    fn get_data(&self) -> f64 {
        7.0
    }
}

impl DefaultConstructible for FileStore {
    fn construct() -> Result<Self, ConstructionFailure> {
        Ok(FileStore)
    }
}

#[component(data_access, name = "memory", primary)]
#[derive(Debug)]
pub struct MemoryStore;

impl DataAccess for MemoryStore {
    fn get_data(&self) -> f64 {
        3.0
    }
}

impl DefaultConstructible for MemoryStore {
    fn construct() -> Result<Self, ConstructionFailure> {
        Ok(MemoryStore)
    }
}

#[component(data_access)]
#[derive(Debug)]
pub struct OfflineStore;

impl DataAccess for OfflineStore {
    fn get_data(&self) -> f64 {
        0.0
    }
}

impl DefaultConstructible for OfflineStore {
    fn construct() -> Result<Self, ConstructionFailure> {
        Err("存储离线".into())
    }
}

mod logic {
    use super::*;

    #[component(business_logic)]
    #[derive(Debug)]
    pub struct Summer {
        store: DataAccessHandle,
    }

    impl BusinessLogic for Summer {
        fn calcul(&self) -> f64 {
            self.store.get_data() + 1.0
        }
    }

    impl DataAccessConstructible for Summer {
        fn construct_with(data_access: DataAccessHandle) -> Result<Self, ConstructionFailure> {
            Ok(Summer { store: data_access })
        }
    }
}

fn registry() -> ComponentRegistryImpl {
    ComponentRegistryImpl::from_catalog().unwrap()
}

#[test]
fn test_generated_component_names() {
    assert_eq!(FileStore.name(), "FileStore");
    assert_eq!(MemoryStore.name(), "memory");
}

#[test]
fn test_catalog_metadata() {
    let registry = registry();
    assert_eq!(registry.len(), 4);

    let memory = registry.lookup("memory").unwrap();
    assert_eq!(memory.role(), ComponentRole::DataAccess);
    assert!(memory.metadata.primary);
    assert_eq!(memory.metadata.description, None);
    assert!(!registry.is_registered("MemoryStore"));

    let file_store = registry.lookup("FileStore").unwrap();
    assert_eq!(file_store.metadata.description.as_deref(), Some("文件存储"));

    let summer = registry.lookup("Summer").unwrap();
    assert_eq!(summer.role(), ComponentRole::BusinessLogic);
    assert!(summer
        .metadata
        .type_path
        .as_deref()
        .unwrap()
        .ends_with("::logic::Summer"));
}

#[test]
fn test_resolve_macro_components() {
    let registry = registry();
    let resolver = ComponentResolverImpl::new(&registry);

    let logic = resolver
        .resolve(&ComponentDescriptor::new("FileStore", "Summer"))
        .unwrap();
    assert_eq!(logic.name(), "Summer");
    assert_eq!(logic.calcul(), 8.0);

    let err = resolver
        .resolve(&ComponentDescriptor::new("OfflineStore", "Summer"))
        .unwrap_err();
    assert!(matches!(
        err,
        DependencyError::ConstructionError { ref name, .. } if name == "OfflineStore"
    ));
}

#[test]
fn test_scan_uses_primary_data_access() {
    let registry = registry();
    let context =
        ApplicationContext::from_scan(&registry, &CatalogScanner, module_path!()).unwrap();

    // 三个数据访问组件中 memory 被标记为首选
    assert_eq!(
        context.descriptor_for("Summer").unwrap(),
        ComponentDescriptor::new("memory", "Summer")
    );
    assert_eq!(context.get_business_logic().unwrap().calcul(), 4.0);
}
