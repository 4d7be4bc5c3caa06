//! Centralized integration tests for the catalog registry and application context
use config_impl::definition_source_for_path;
use di_abstractions::{ComponentRegistry, ComponentResolver, ComponentScanner};
use di_impl::{ApplicationContext, CatalogScanner, ComponentRegistryBuilder, ComponentRegistryImpl, ComponentResolverImpl};
use infrastructure_common::{
    ComponentDescriptor, ComponentError, ComponentRole, DataAccess, DependencyError,
    ResolutionStage,
};
use std::path::PathBuf;
use wiring_components::{DaoImplV2, BASE_PATH};

fn catalog_registry() -> ComponentRegistryImpl {
    ComponentRegistryImpl::from_catalog().unwrap()
}

fn app_config(file: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../example-app/config")
        .join(file)
}

#[test]
fn test_catalog_contains_annotated_components() {
    let registry = catalog_registry();

    assert_eq!(registry.len(), 3);
    for name in ["DaoImpl", "DaoImplV2", "MetierImpl"] {
        assert!(registry.is_registered(name), "{} 应当已登记", name);
    }
    assert_eq!(
        registry.lookup("MetierImpl").unwrap().role(),
        ComponentRole::BusinessLogic
    );
    assert_eq!(
        registry
            .lookup("DaoImplV2")
            .unwrap()
            .metadata
            .type_path
            .as_deref(),
        Some("wiring_components::ext::DaoImplV2")
    );
}

#[test]
fn test_reference_scenario() {
    let registry = catalog_registry();
    let resolver = ComponentResolverImpl::new(&registry);

    let logic = resolver
        .resolve(&ComponentDescriptor::new("DaoImplV2", "MetierImpl"))
        .unwrap();
    assert_eq!(logic.calcul(), 20.0);

    let logic = resolver
        .resolve(&ComponentDescriptor::new("DaoImpl", "MetierImpl"))
        .unwrap();
    assert_eq!(logic.calcul(), 80.0);

    let err = resolver
        .resolve(&ComponentDescriptor::new("Nonexistent", "MetierImpl"))
        .unwrap_err();
    assert!(matches!(
        err,
        DependencyError::UnknownComponent { stage: ResolutionStage::DataAccess, ref name }
            if name == "Nonexistent"
    ));
}

#[test]
fn test_type_path_alias_resolves_same_component() {
    let registry = catalog_registry();
    let resolver = ComponentResolverImpl::new(&registry);

    let by_path = resolver
        .resolve_data_access("wiring_components::ext::DaoImplV2")
        .unwrap();
    assert_eq!(by_path.get_data(), DaoImplV2::new().get_data());

    let logic = resolver
        .resolve(&ComponentDescriptor::new(
            "wiring_components::ext::DaoImplV2",
            "wiring_components::metier::MetierImpl",
        ))
        .unwrap();
    assert_eq!(logic.calcul(), 20.0);
}

#[test]
fn test_duplicate_catalog_registration_is_rejected() {
    let err = ComponentRegistryBuilder::new()
        .register_catalog()
        .register_data_access("DaoImplV2", || Ok(Box::new(DaoImplV2::new())))
        .build()
        .unwrap_err();

    assert!(matches!(
        err,
        ComponentError::RegistrationError { ref name, .. } if name == "DaoImplV2"
    ));
}

#[test]
fn test_catalog_scan_by_package() {
    let scanner = CatalogScanner::new();

    let all = scanner.scan(BASE_PATH);
    assert_eq!(all.len(), 3);

    let ext: Vec<String> = scanner
        .scan("wiring_components::ext")
        .into_iter()
        .map(|metadata| metadata.name)
        .collect();
    assert_eq!(ext, vec!["DaoImplV2".to_string()]);

    // 只匹配完整的路径段
    assert!(scanner.scan("wiring_comp").is_empty());
}

#[test]
fn test_annotation_context() {
    let registry = catalog_registry();
    let context = ApplicationContext::from_scan(&registry, &CatalogScanner, BASE_PATH).unwrap();

    assert_eq!(context.business_logic_id().unwrap(), "MetierImpl");
    assert_eq!(
        context.descriptor_for("MetierImpl").unwrap(),
        ComponentDescriptor::new("DaoImplV2", "MetierImpl")
    );
    assert_eq!(context.get_business_logic().unwrap().calcul(), 20.0);
    assert_eq!(context.get_data_access("DaoImpl").unwrap().get_data(), 40.0);

    // 只扫描数据访问组件时没有业务逻辑组件
    let context =
        ApplicationContext::from_scan(&registry, &CatalogScanner, "wiring_components::dao").unwrap();
    assert!(matches!(
        context.get_business_logic().unwrap_err(),
        DependencyError::NoCandidate { role: ComponentRole::BusinessLogic }
    ));
}

#[tokio::test]
async fn test_declarative_contexts_from_app_config() -> anyhow::Result<()> {
    let registry = catalog_registry();

    // TOML: 显式注入
    let definition = definition_source_for_path(app_config("container.toml"))?
        .load_definition()
        .await?;
    let context = ApplicationContext::new(&registry, definition)?;
    assert_eq!(context.get_business_logic()?.calcul(), 20.0);

    // JSON: 两个数据访问组件，按首选注入
    let definition = definition_source_for_path(app_config("container.json"))?
        .load_definition()
        .await?;
    let context = ApplicationContext::new(&registry, definition)?;
    assert_eq!(
        context.descriptor_for("metier")?,
        ComponentDescriptor::new("wiring_components::ext::DaoImplV2", "MetierImpl")
    );
    assert_eq!(context.get_business_logic()?.calcul(), 20.0);

    Ok(())
}
