//! Lexical environments.
//!
//! An [`Environment`] is a handle to one scope: a name-to-value map plus an
//! optional parent. Lookup walks the parent chain, innermost first.
//!
//! Handles are reference counted. A block or call creates a child scope and
//! drops its handle when it finishes; a function value created inside keeps
//! its own handle, so the scope it closes over outlives the block. A
//! closure stored in the very scope it captures forms a reference cycle and
//! is only freed with the process.

use rustc_hash::FxHashMap;
use std::cell::RefCell;
use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

use crate::Value;

/// A single-threaded, reference-counted cell.
///
/// All scope allocations go through [`LocalScope::new`]. `Rc` rather than
/// `Arc`: the interpreter never shares scopes across threads.
#[repr(transparent)]
pub struct LocalScope<T>(Rc<RefCell<T>>);

impl<T> LocalScope<T> {
    #[inline]
    pub fn new(value: T) -> Self {
        LocalScope(Rc::new(RefCell::new(value)))
    }

    /// Whether both handles point at the same scope.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl<T> Clone for LocalScope<T> {
    #[inline]
    fn clone(&self) -> Self {
        LocalScope(Rc::clone(&self.0))
    }
}

impl<T> Deref for LocalScope<T> {
    type Target = RefCell<T>;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Bindings of one scope.
pub struct Scope<'ast> {
    bindings: FxHashMap<String, Value<'ast>>,
    parent: Option<Environment<'ast>>,
}

impl<'ast> Scope<'ast> {
    fn new(parent: Option<Environment<'ast>>) -> Self {
        Scope {
            bindings: FxHashMap::default(),
            parent,
        }
    }

    fn lookup(&self, name: &str) -> Option<Value<'ast>> {
        if let Some(value) = self.bindings.get(name) {
            return Some(value.clone());
        }
        if let Some(parent) = &self.parent {
            return parent.lookup(name);
        }
        None
    }
}

/// Shared handle to a scope.
#[derive(Clone)]
pub struct Environment<'ast>(LocalScope<Scope<'ast>>);

impl<'ast> Environment<'ast> {
    /// A root scope with no parent.
    pub fn new() -> Self {
        Environment(LocalScope::new(Scope::new(None)))
    }

    /// A fresh scope whose parent is `self`.
    #[must_use]
    pub fn child(&self) -> Self {
        Environment(LocalScope::new(Scope::new(Some(self.clone()))))
    }

    /// Bind `name` in this scope, replacing an existing binding of the same
    /// name here. Enclosing scopes are never touched.
    pub fn define(&self, name: impl Into<String>, value: Value<'ast>) {
        self.0.borrow_mut().bindings.insert(name.into(), value);
    }

    /// Resolve `name`, searching from this scope outward.
    pub fn lookup(&self, name: &str) -> Option<Value<'ast>> {
        self.0.borrow().lookup(name)
    }

    pub fn parent(&self) -> Option<Environment<'ast>> {
        self.0.borrow().parent.clone()
    }

    /// Number of scopes from this one to the root, inclusive.
    pub fn depth(&self) -> usize {
        let mut depth = 1;
        let mut current = self.parent();
        while let Some(env) = current {
            depth += 1;
            current = env.parent();
        }
        depth
    }

    pub fn ptr_eq(&self, other: &Self) -> bool {
        self.0.ptr_eq(&other.0)
    }
}

impl Default for Environment<'_> {
    fn default() -> Self {
        Self::new()
    }
}

/// Lists the local names only; values may refer back to this scope.
impl fmt::Debug for Environment<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let scope = self.0.borrow();
        let mut names: Vec<_> = scope.bindings.keys().collect();
        names.sort();
        f.debug_struct("Environment")
            .field("names", &names)
            .field("has_parent", &scope.parent.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests;
