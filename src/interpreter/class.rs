use std::fmt::{Debug, Display};

use super::{Environment, TypeTag, Value};

/// An instance of a class. Its fields live in a root environment of their own,
/// so private fields can only be read from code running within that scope.
pub struct Object {
    class: String,
    fields: Environment,
}

impl Object {
    pub fn new<S: Into<String>>(class: S) -> Self {
        Self {
            class: class.into(),
            fields: Environment::new(),
        }
    }

    pub fn with_field<K: Into<String>>(self, key: K, value: Value, declared: TypeTag, private: bool) -> Self {
        self.fields.define_with(key, value, declared, private);
        self
    }

    pub fn class(&self) -> &str {
        &self.class
    }

    pub fn fields(&self) -> &Environment {
        &self.fields
    }
}

impl Display for Object {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "<instance {}>", &self.class)
    }
}

impl Debug for Object {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "<instance {}>", &self.class)
    }
}
