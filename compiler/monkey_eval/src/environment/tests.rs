use super::*;

#[test]
fn test_define_lookup() {
    let env = Environment::new();
    env.define("x", Value::Integer(42));
    assert_eq!(env.lookup("x"), Some(Value::Integer(42)));
    assert_eq!(env.lookup("y"), None);
}

#[test]
fn test_child_sees_parent() {
    let parent = Environment::new();
    parent.define("x", Value::Integer(1));
    let child = parent.child();
    assert_eq!(child.lookup("x"), Some(Value::Integer(1)));
}

#[test]
fn test_shadowing_does_not_leak_outward() {
    let parent = Environment::new();
    parent.define("x", Value::Integer(1));

    let child = parent.child();
    child.define("x", Value::Integer(2));

    assert_eq!(child.lookup("x"), Some(Value::Integer(2)));
    assert_eq!(parent.lookup("x"), Some(Value::Integer(1)));
}

#[test]
fn test_redefine_overwrites_in_same_scope() {
    let env = Environment::new();
    env.define("x", Value::Integer(1));
    env.define("x", Value::Boolean(true));
    assert_eq!(env.lookup("x"), Some(Value::Boolean(true)));
}

#[test]
fn test_parent_changes_visible_through_child() {
    // Children hold the parent by reference, not a snapshot.
    let parent = Environment::new();
    let child = parent.child();
    parent.define("late", Value::Integer(7));
    assert_eq!(child.lookup("late"), Some(Value::Integer(7)));
}

#[test]
fn test_child_outlives_dropped_parent_handle() {
    let child = {
        let parent = Environment::new();
        parent.define("kept", Value::Integer(3));
        parent.child()
    };
    assert_eq!(child.lookup("kept"), Some(Value::Integer(3)));
}

#[test]
fn test_depth_and_identity() {
    let root = Environment::new();
    let a = root.child();
    let b = a.child();
    assert_eq!(root.depth(), 1);
    assert_eq!(b.depth(), 3);
    assert!(b.parent().is_some_and(|p| p.ptr_eq(&a)));
    assert!(!a.ptr_eq(&root.child()));
}

#[test]
fn test_debug_lists_local_names() {
    let env = Environment::new();
    env.define("b", Value::Null);
    env.define("a", Value::Null);
    assert_eq!(
        format!("{env:?}"),
        "Environment { names: [\"a\", \"b\"], has_parent: false }"
    );
}
