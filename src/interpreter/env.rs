use std::{cell::RefCell, fmt::Debug, rc::Rc};

use fnv::FnvHashMap;

use crate::{errors, OryonError};

use super::{TypeTag, Value};

/// A shared handle to one lexical scope frame.
///
/// Cloning an `Environment` shares the frame: every child scope, closure or
/// loop holding a clone observes the same bindings, and the frame is freed
/// once the last handle is dropped. Two handles are equal only if they refer
/// to the same frame.
#[derive(Clone, Default)]
pub struct Environment(Rc<RefCell<Scope>>);

#[derive(Default)]
struct Scope {
    bindings: FnvHashMap<String, Binding>,
    parent: Option<Environment>,
}

/// A single named entry within a scope.
#[derive(Debug, Clone, PartialEq)]
pub struct Binding {
    value: Value,
    declared: TypeTag,
    private: bool,
}

impl Binding {
    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn declared_type(&self) -> &TypeTag {
        &self.declared
    }

    pub fn is_private(&self) -> bool {
        self.private
    }
}

impl Environment {
    /// Creates a root scope with no parent.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create(parent: Option<&Environment>) -> Self {
        let scope = Scope {
            parent: parent.cloned(),
            ..Default::default()
        };

        Environment(Rc::new(RefCell::new(scope)))
    }

    pub fn new_child(&self) -> Environment {
        Self::create(Some(self))
    }

    pub fn parent(&self) -> Option<Environment> {
        self.0.borrow().parent.clone()
    }

    /// Defines a public, unchecked binding in this frame.
    pub fn define<K: Into<String>>(&self, key: K, value: Value) {
        self.define_with(key, value, TypeTag::Auto, false)
    }

    /// Inserts or overwrites a binding in this frame only. The declared type
    /// given here is the one every later `assign` is checked against.
    pub fn define_with<K: Into<String>>(&self, key: K, value: Value, declared: TypeTag, private: bool) {
        let key = key.into();
        tracing::trace!(name = %key, declared = %declared, private, "define");
        self.0.borrow_mut().bindings.insert(key, Binding { value, declared, private });
    }

    pub fn bind_this(&self, this: Option<Value>) -> Result<(), OryonError> {
        let this = this.ok_or(OryonError::InvalidBindingTarget)?;
        tracing::trace!(class = %this.type_tag(), "bind this");
        self.define("this", this);
        Ok(())
    }

    /// Resolves `key` against this frame and then its ancestors.
    ///
    /// A private binding is only readable when `origin` is the frame which
    /// declared it, or one of that frame's descendants.
    pub fn get(&self, key: &str, origin: Option<&Environment>) -> Result<Value, OryonError> {
        let mut current = Some(self.clone());
        while let Some(env) = current {
            let scope = env.0.borrow();
            if let Some(binding) = scope.bindings.get(key) {
                if binding.private && !is_descendant(origin, &env) {
                    return Err(errors::access(key));
                }

                return Ok(binding.value.clone());
            }

            current = scope.parent.clone();
        }

        Err(errors::undefined(key))
    }

    /// Updates the nearest existing binding for `key`, keeping its declared
    /// type and privacy. Never creates a binding.
    pub fn assign<K: Into<String>>(&self, key: K, value: Value) -> Result<(), OryonError> {
        let key = key.into();
        let mut current = Some(self.clone());
        while let Some(env) = current {
            let mut scope = env.0.borrow_mut();
            if let Some(binding) = scope.bindings.get_mut(&key) {
                let actual = value.type_tag();
                if !binding.declared.accepts(&actual) {
                    return Err(errors::type_mismatch(key, binding.declared.clone(), actual));
                }

                tracing::trace!(name = %key, "assign");
                binding.value = value;
                return Ok(());
            }

            current = scope.parent.clone();
        }

        Err(errors::undefined(key))
    }

    pub fn has(&self, key: &str) -> bool {
        let mut current = Some(self.clone());
        while let Some(env) = current {
            let scope = env.0.borrow();
            if scope.bindings.contains_key(key) {
                return true;
            }

            current = scope.parent.clone();
        }

        false
    }

    /// Returns a copy of the binding declared directly in this frame.
    pub fn local(&self, key: &str) -> Option<Binding> {
        self.0.borrow().bindings.get(key).cloned()
    }

    pub fn is_descendant_of(&self, ancestor: &Environment) -> bool {
        is_descendant(Some(self), ancestor)
    }
}

/// Walks from `origin` up through its parents looking for `declaring` by
/// identity. An absent origin is never a descendant.
pub fn is_descendant(origin: Option<&Environment>, declaring: &Environment) -> bool {
    let mut current = origin.cloned();
    while let Some(env) = current {
        if env == *declaring {
            return true;
        }

        current = env.parent();
    }

    false
}

impl PartialEq for Environment {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Debug for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let scope = self.0.borrow();
        let mut names: Vec<&String> = scope.bindings.keys().collect();
        names.sort();

        f.debug_struct("Environment")
            .field("bindings", &names)
            .field("parent", &scope.parent)
            .finish()
    }
}
