//! Snapshot publication through SharedContext

use std::sync::Arc;
use std::thread;

use injecty::unit::prefix_matcher;
use injecty::{BoxError, ConfigurationUnit, InjectyContext, SharedContext, StaticDiscovery};

use crate::test_utils::{Bang, Bar, Foo, Zap};

fn register_bar(context: &mut InjectyContext) -> Result<(), BoxError> {
    context.register_impl::<dyn Foo, Bar>();
    Ok(())
}

fn register_bang(context: &mut InjectyContext) -> Result<(), BoxError> {
    context.register_impl::<dyn Foo, Bang>();
    Ok(())
}

fn fail(context: &mut InjectyContext) -> Result<(), BoxError> {
    context.deregister_all::<dyn Foo>();
    Err("refusing to continue".into())
}

#[test]
fn test_snapshot_survives_update() {
    let shared = SharedContext::new(InjectyContext::new());
    let before = shared.load();

    let added = shared.update(|context| context.register_impl::<dyn Foo, Zap>());

    assert!(added);
    assert!(!before.has_impl::<dyn Foo, Zap>());
    assert!(shared.load().has_impl::<dyn Foo, Zap>());
}

#[test]
fn test_reconfigure_publishes_on_success() {
    let shared = SharedContext::from(InjectyContext::new());
    let discovery = StaticDiscovery::new([
        ConfigurationUnit::new("injecty_config_bar", 0, register_bar),
        ConfigurationUnit::new("injecty_config_bang", 1, register_bang),
    ]);

    let applied = shared
        .reconfigure(&discovery, &prefix_matcher("injecty_config"))
        .unwrap();

    assert_eq!(applied, 2);
    let snapshot = shared.load();
    assert_eq!(snapshot.default_impl::<dyn Foo>().unwrap().name(), "Bang");
}

#[test]
fn test_failed_reconfigure_keeps_published_snapshot() {
    let mut context = InjectyContext::new();
    context.register_impl::<dyn Foo, Bar>();
    let shared = SharedContext::new(context);
    let before = shared.load();

    let discovery = StaticDiscovery::new([ConfigurationUnit::new("injecty_config_fail", 0, fail)]);
    let result = shared.reconfigure(&discovery, &prefix_matcher("injecty_config"));

    assert!(result.is_err());
    assert!(Arc::ptr_eq(&before, &shared.load()));
    assert!(shared.load().has_impl::<dyn Foo, Bar>());
}

#[test]
fn test_concurrent_readers_see_whole_snapshots() {
    let shared = Arc::new(SharedContext::new(InjectyContext::new()));

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let shared = Arc::clone(&shared);
            thread::spawn(move || {
                for _ in 0..100 {
                    let snapshot = shared.load();
                    let count = snapshot
                        .query()
                        .get_impls::<dyn Foo>(&injecty::Query::new().permit_unknown())
                        .unwrap()
                        .len();
                    // Bar and Zap are always published together
                    assert!(count == 0 || count == 2, "partial snapshot with {count}");
                }
            })
        })
        .collect();

    for _ in 0..50 {
        shared.update(|context| {
            context.register_impl::<dyn Foo, Bar>();
            context.register_impl::<dyn Foo, Zap>();
        });
        shared.update(|context| {
            context.deregister_all::<dyn Foo>();
        });
    }

    for reader in readers {
        reader.join().unwrap();
    }
}
