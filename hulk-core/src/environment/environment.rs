use std::collections::HashMap;

use super::prelude::Value;

/// Variable bindings visible to one evaluation context.
///
/// Never mutated once handed to a child scope: `extend` returns a new
/// environment and leaves the receiver untouched.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct Environment {
    store: HashMap<String, Value>,
}

impl Environment {
    pub fn new() -> Self {
        Self {
            store: HashMap::new()
        }
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.store.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.store.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Copy of this environment with `bindings` layered on top. A later
    /// binding of the same name shadows an earlier one.
    pub fn extend<I>(&self, bindings: I) -> Environment
    where
        I: IntoIterator<Item = (String, Value)>
    {
        let mut store = self.store.clone();
        store.extend(bindings);

        Self { store }
    }
}

impl FromIterator<(String, Value)> for Environment {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        Self {
            store: HashMap::from_iter(iter)
        }
    }
}
