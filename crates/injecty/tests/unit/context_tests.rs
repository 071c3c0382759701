//! Configuration passes over a context

use injecty::unit::prefix_matcher;
use injecty::{
    BoxError, Configure, ConfigurationUnit, ContextState, DiscoveryConfig, Error,
    ImplType, InjectyContext, StaticDiscovery, create_injecty_context_with,
};

use crate::test_utils::{Bang, Bar, Foo, Zap};

fn names(context: &InjectyContext) -> Vec<&'static str> {
    context
        .impls::<dyn Foo>()
        .unwrap()
        .iter()
        .map(ImplType::name)
        .collect()
}

fn register_bar(context: &mut InjectyContext) -> Result<(), BoxError> {
    context.register_impl::<dyn Foo, Bar>();
    Ok(())
}

fn register_zap(context: &mut InjectyContext) -> Result<(), BoxError> {
    context.register_impl::<dyn Foo, Zap>();
    Ok(())
}

fn register_bang(context: &mut InjectyContext) -> Result<(), BoxError> {
    context.register_impl::<dyn Foo, Bang>();
    Ok(())
}

fn drop_bar(context: &mut InjectyContext) -> Result<(), BoxError> {
    context.deregister_impl::<dyn Foo, Bar>();
    Ok(())
}

fn replace_all(context: &mut InjectyContext) -> Result<(), BoxError> {
    context.deregister_all::<dyn Foo>();
    context.register_impl::<dyn Foo, Zap>();
    Ok(())
}

fn fail(_: &mut InjectyContext) -> Result<(), BoxError> {
    Err("backend unavailable".into())
}

fn foo_units() -> StaticDiscovery {
    StaticDiscovery::new([
        ConfigurationUnit::new("injecty_config_bar", 10, register_bar),
        ConfigurationUnit::new("injecty_config_zap", 10, register_zap),
        ConfigurationUnit::new("injecty_config_bang", 10, register_bang),
    ])
}

#[test]
fn test_new_context_is_empty() {
    let context = InjectyContext::new();
    assert_eq!(context.state(), ContextState::Empty);
    assert!(context.registry().is_empty());
}

#[test]
fn test_configure_applies_matching_units() {
    let mut context = InjectyContext::new();
    let discovery = foo_units().with_unit(ConfigurationUnit::new(
        "other_prefix_unit",
        0,
        drop_bar,
    ));

    let applied = context
        .configure_prefixed(&discovery, "injecty_config")
        .unwrap();

    assert_eq!(applied, 3);
    assert_eq!(context.state(), ContextState::Ready);
    assert_eq!(names(&context), vec!["Bang", "Bar", "Zap"]);
}

#[test]
fn test_configure_with_no_matching_units() {
    let mut context = InjectyContext::new();
    let applied = context
        .configure(&foo_units(), &|name: &str| name.ends_with("_none"))
        .unwrap();

    assert_eq!(applied, 0);
    assert_eq!(context.state(), ContextState::Ready);
    assert!(context.registry().is_empty());
}

#[test]
fn test_higher_priority_unit_runs_later() {
    // listed first but applied last
    let discovery = StaticDiscovery::new([
        ConfigurationUnit::new("injecty_config_cleanup", 50, drop_bar),
        ConfigurationUnit::new("injecty_config_bar", 10, register_bar),
        ConfigurationUnit::new("injecty_config_bang", 20, register_bang),
    ]);

    let mut context = InjectyContext::new();
    context
        .configure(&discovery, &prefix_matcher("injecty_config"))
        .unwrap();

    assert!(!context.has_impl::<dyn Foo, Bar>());
    assert_eq!(names(&context), vec!["Bang"]);
}

#[test]
fn test_equal_unit_priorities_keep_discovery_order() {
    let discovery = StaticDiscovery::new([
        ConfigurationUnit::new("injecty_config_bar", 5, register_bar),
        ConfigurationUnit::new("injecty_config_replace", 5, replace_all),
    ]);
    let mut context = InjectyContext::new();
    context.configure_prefixed(&discovery, "injecty_config").unwrap();
    assert_eq!(names(&context), vec!["Zap"]);

    let discovery = StaticDiscovery::new([
        ConfigurationUnit::new("injecty_config_replace", 5, replace_all),
        ConfigurationUnit::new("injecty_config_bar", 5, register_bar),
    ]);
    let mut context = InjectyContext::new();
    context.configure_prefixed(&discovery, "injecty_config").unwrap();
    assert_eq!(names(&context), vec!["Bar", "Zap"]);
}

#[test]
fn test_invalid_unit_aborts_whole_pass() {
    let discovery = StaticDiscovery::new([
        ConfigurationUnit::new("injecty_config_bar", 10, register_bar),
        ConfigurationUnit::named("injecty_config_broken")
            .with_configure(Configure::WithContext(register_zap)),
    ]);

    let mut context = InjectyContext::new();
    let err = context
        .configure_prefixed(&discovery, "injecty_config")
        .unwrap_err();

    assert!(matches!(err, Error::MissingPriority { .. }));
    assert_eq!(err.unit_name(), Some("injecty_config_broken"));
    assert!(context.registry().is_empty());
    assert!(!context.registry().is_known::<dyn Foo>());
    assert_eq!(context.state(), ContextState::Empty);
}

#[test]
fn test_failing_configure_leaves_context_unchanged() {
    let mut context = InjectyContext::new();
    context.configure_prefixed(&foo_units(), "injecty_config").unwrap();
    let before = names(&context);

    let discovery = StaticDiscovery::new([
        ConfigurationUnit::new("injecty_config_drop", 1, drop_bar),
        ConfigurationUnit::new("injecty_config_fail", 2, fail),
    ]);
    let err = context
        .configure_prefixed(&discovery, "injecty_config")
        .unwrap_err();

    assert!(matches!(&err, Error::Configure { unit, .. } if unit == "injecty_config_fail"));
    assert!(err.to_string().contains("backend unavailable"));
    assert_eq!(names(&context), before);
    assert!(context.has_impl::<dyn Foo, Bar>());
    assert_eq!(context.state(), ContextState::Ready);
}

#[test]
fn test_reconfigure_is_idempotent() {
    let mut context = InjectyContext::new();
    context.configure_prefixed(&foo_units(), "injecty_config").unwrap();
    let first = names(&context);

    context.configure_prefixed(&foo_units(), "injecty_config").unwrap();
    assert_eq!(names(&context), first);
    assert_eq!(context.registry().len(), 3);
}

#[test]
fn test_configure_keeps_manual_registrations() {
    let mut context = InjectyContext::new();
    context.register_impl::<dyn Foo, Zap>();

    let discovery = StaticDiscovery::new([ConfigurationUnit::new(
        "injecty_config_bar",
        0,
        register_bar,
    )]);
    context.configure_prefixed(&discovery, "injecty_config").unwrap();

    assert!(context.has_impl::<dyn Foo, Zap>());
    assert!(context.has_impl::<dyn Foo, Bar>());
}

#[test]
fn test_contexts_are_isolated() {
    let mut left = InjectyContext::new();
    let right = InjectyContext::new();

    left.register_impl::<dyn Foo, Bar>();

    assert!(left.has_impl::<dyn Foo, Bar>());
    assert!(!right.has_impl::<dyn Foo, Bar>());
}

#[test]
fn test_create_context_uses_configured_prefix() {
    let discovery = foo_units().with_unit(ConfigurationUnit::new("custom_zap", 0, replace_all));
    let config = DiscoveryConfig {
        unit_prefix: "custom".to_string(),
    };

    let context = create_injecty_context_with(&discovery, &config).unwrap();
    assert_eq!(names(&context), vec!["Zap"]);
    assert_eq!(context.state(), ContextState::Ready);
}
