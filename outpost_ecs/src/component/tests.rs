#![cfg(test)]

use std::collections::HashSet;

use crate::components::{Health, Transform};

use super::*;

struct Marker;

impl Component for Marker {
    const KIND: ComponentKind = ComponentKind::new("marker");
}

#[test]
fn test_kind_tag() {
    assert_eq!(Marker::KIND.tag(), "marker");
    assert_eq!(Marker::KIND.to_string(), "marker");
    assert_eq!(Marker::KIND, ComponentKind::new("marker"));
}

#[test]
fn test_builtin_kinds_are_distinct() {
    let kinds: HashSet<_> = [Marker::KIND, Health::KIND, Transform::KIND]
        .into_iter()
        .collect();
    assert_eq!(kinds.len(), 3);
}

#[test]
fn test_erased_kind() {
    let erased: Box<dyn ErasedComponent> = Box::new(Marker);
    assert_eq!(erased.kind(), Marker::KIND);
    assert!(erased.as_any().is::<Marker>());
}
