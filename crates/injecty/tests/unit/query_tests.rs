//! Query filtering, ordering and instantiation

use std::cmp::Reverse;

use injecty::{BoxError, Error, ExtensionPoint, ImplType, Implementation, InjectyContext, Query};

use crate::test_utils::{
    Bang, Bar, ConstructionLog, Faulty, First, Foo, Step, Third, Unregistered, Zap, labels,
};

fn foo_context() -> InjectyContext {
    let mut context = InjectyContext::new();
    context.register_impl::<dyn Foo, Bar>();
    context.register_impl::<dyn Foo, Zap>();
    context.register_impl::<dyn Foo, Bang>();
    context
}

fn names<B: ExtensionPoint + ?Sized>(impls: &[ImplType<B>]) -> Vec<&'static str> {
    impls.iter().map(ImplType::name).collect()
}

#[test]
fn test_default_order_is_priority_descending() {
    let context = foo_context();
    let impls = context.impls::<dyn Foo>().unwrap();
    assert_eq!(names(&impls), vec!["Bang", "Bar", "Zap"]);
}

#[test]
fn test_base_default_priority_applies_to_undeclared() {
    let bar = ImplType::<dyn Foo>::of::<Bar>();
    assert_eq!(bar.declared_priority(), None);
    assert_eq!(bar.priority(), 100);
}

#[test]
fn test_sort_by_key_ascending() {
    let context = foo_context();
    let query = Query::<dyn Foo>::new().sort_by_key(ImplType::priority);
    let impls = context.get_impls(&query).unwrap();
    assert_eq!(names(&impls), vec!["Zap", "Bar", "Bang"]);
}

#[test]
fn test_reverse_inverts_default_order() {
    let context = foo_context();
    let query = Query::<dyn Foo>::new().reverse();
    let impls = context.get_impls(&query).unwrap();
    assert_eq!(names(&impls), vec!["Zap", "Bar", "Bang"]);
}

#[test]
fn test_custom_comparator_replaces_default() {
    let context = foo_context();
    let query = Query::<dyn Foo>::new().sort_by(|a, b| a.name().cmp(b.name()));
    let impls = context.get_impls(&query).unwrap();
    assert_eq!(names(&impls), vec!["Bang", "Bar", "Zap"]);

    let query = Query::<dyn Foo>::new().sort_by_key(|candidate| Reverse(candidate.name()));
    let impls = context.get_impls(&query).unwrap();
    assert_eq!(names(&impls), vec!["Zap", "Bar", "Bang"]);
}

// Priorities [5, 5, 10, 1] registered in that order
mod stability {
    use super::*;

    pub trait Ranked {}

    impl ExtensionPoint for dyn Ranked {
        type Args = ();
    }

    macro_rules! ranked {
        ($ty:ident, $priority:expr) => {
            pub struct $ty;
            impl Ranked for $ty {}
            impl Implementation<dyn Ranked> for $ty {
                const PRIORITY: Option<i32> = Some($priority);
                fn create(_: &()) -> Result<Box<dyn Ranked>, BoxError> {
                    Ok(Box::new($ty))
                }
            }
        };
    }

    ranked!(FiveA, 5);
    ranked!(FiveB, 5);
    ranked!(Ten, 10);
    ranked!(One, 1);

    #[test]
    fn test_equal_priorities_keep_insertion_order() {
        let mut context = InjectyContext::new();
        context.register_impl::<dyn Ranked, FiveA>();
        context.register_impl::<dyn Ranked, FiveB>();
        context.register_impl::<dyn Ranked, Ten>();
        context.register_impl::<dyn Ranked, One>();

        let impls = context.impls::<dyn Ranked>().unwrap();
        assert_eq!(names(&impls), vec!["Ten", "FiveA", "FiveB", "One"]);
        let priorities: Vec<i32> = impls.iter().map(ImplType::priority).collect();
        assert_eq!(priorities, vec![10, 5, 5, 1]);
    }

    #[test]
    fn test_reverse_keeps_ties_in_insertion_order() {
        let mut context = InjectyContext::new();
        context.register_impl::<dyn Ranked, FiveA>();
        context.register_impl::<dyn Ranked, FiveB>();
        context.register_impl::<dyn Ranked, Ten>();
        context.register_impl::<dyn Ranked, One>();

        let impls = context
            .get_impls(&Query::<dyn Ranked>::new().reverse())
            .unwrap();
        assert_eq!(names(&impls), vec!["One", "FiveA", "FiveB", "Ten"]);
    }
}

#[test]
fn test_default_impl_is_first_of_filtered() {
    let context = foo_context();
    let predicates: [fn(&ImplType<dyn Foo>) -> bool; 3] = [
        |_| true,
        |candidate| candidate.priority() < 105,
        |candidate| candidate.name().starts_with('Z'),
    ];

    for predicate in predicates {
        let query = Query::<dyn Foo>::new().filter(predicate);
        let first = context.get_impls(&query).unwrap()[0];
        assert_eq!(context.get_default_impl(&query).unwrap(), first);
    }
}

#[test]
fn test_default_impl_fails_when_filter_rejects_all() {
    let context = foo_context();
    let query = Query::<dyn Foo>::new().filter(|_| false);

    assert!(context.get_impls(&query).unwrap().is_empty());
    let err = context.get_default_impl(&query).unwrap_err();
    assert!(matches!(err, Error::NoImplementationsFound { base: "Foo" }));
}

#[test]
fn test_default_impl_on_emptied_base() {
    let mut context = InjectyContext::new();
    context.register_impl::<dyn Foo, Bar>();
    context.deregister_all::<dyn Foo>();

    assert!(matches!(
        context.default_impl::<dyn Foo>(),
        Err(Error::NoImplementationsFound { .. })
    ));
}

#[test]
fn test_unknown_base_fails_unless_permitted() {
    let context = foo_context();

    let err = context.impls::<dyn Unregistered>().unwrap_err();
    assert!(err.is_lookup());
    assert!(err.to_string().contains("Unregistered"));

    let permissive = Query::<dyn Unregistered>::new().permit_unknown();
    assert!(context.get_impls(&permissive).unwrap().is_empty());
    assert!(matches!(
        context.get_default_impl(&permissive),
        Err(Error::NoImplementationsFound { .. })
    ));
}

#[test]
fn test_instances_follow_impls_order() {
    let context = foo_context();
    let instances = context.instances::<dyn Foo>(&()).unwrap();
    assert_eq!(labels(&instances), vec!["Bang", "Bar", "Zap"]);

    let query = Query::<dyn Foo>::new().reverse();
    let instances = context.get_instances(&(), &query).unwrap();
    assert_eq!(labels(&instances), vec!["Zap", "Bar", "Bang"]);
}

#[test]
fn test_new_default_instance_builds_highest_priority() {
    let context = foo_context();
    let instance = context.new_default_instance::<dyn Foo>(&()).unwrap();
    assert_eq!(instance.label(), "Bang");

    let query = Query::<dyn Foo>::new().filter(|candidate| candidate.is::<Zap>());
    let instance = context.get_new_default_instance(&(), &query).unwrap();
    assert_eq!(instance.label(), "Zap");
}

#[test]
fn test_construction_failure_stops_later_candidates() {
    let mut context = InjectyContext::new();
    context.register_impl::<dyn Step, Third>();
    context.register_impl::<dyn Step, Faulty>();
    context.register_impl::<dyn Step, First>();

    let log = ConstructionLog::default();
    let result = context.instances::<dyn Step>(&log);

    let err = result.err().unwrap();
    assert!(matches!(err, Error::Construction(_)));
    assert_eq!(err.to_string(), "faulty step refused to start");
    assert_eq!(*log.borrow(), vec!["First", "Faulty"]);
}

#[test]
fn test_construction_succeeds_without_faulty_candidate() {
    let mut context = InjectyContext::new();
    context.register_impl::<dyn Step, Third>();
    context.register_impl::<dyn Step, First>();

    let log = ConstructionLog::default();
    let steps = context.instances::<dyn Step>(&log).unwrap();

    let ids: Vec<&str> = steps.iter().map(|step| step.id()).collect();
    assert_eq!(ids, vec!["First", "Third"]);
    assert_eq!(*log.borrow(), ids);
}
