use indexmap::IndexMap;

use crate::{
    analyzer::prelude::{SemanticError, SemanticErrorType},
    utils::prelude::SrcSpan
};

use super::function::{Builtin, FunctionDescriptor, FunctionSignature};

/// Every callable function of a session, keyed by `(name, arity)` and kept
/// in declaration order.
#[derive(Debug, Clone, Default)]
pub struct FunctionRegistry {
    functions: IndexMap<(String, usize), FunctionDescriptor>,
}

impl FunctionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.seed_builtins();
        registry
    }

    /// Registers `sin`, `cos`, `tan` and `print`. Seeding twice is a no-op.
    pub fn seed_builtins(&mut self) {
        for builtin in Builtin::ALL {
            let descriptor = FunctionDescriptor::builtin(builtin);

            self.functions
                .entry((descriptor.name.clone(), descriptor.arity))
                .or_insert(descriptor);
        }
    }

    pub fn declare(
        &mut self,
        descriptor: FunctionDescriptor,
        location: SrcSpan
    ) -> Result<(), SemanticError> {
        let key = (descriptor.name.clone(), descriptor.arity);

        if self.functions.contains_key(&key) {
            let (name, arity) = key;

            return Err(SemanticError::new(
                SemanticErrorType::DuplicateFunction { name, arity },
                location
            ));
        }

        self.functions.insert(key, descriptor);

        Ok(())
    }

    pub fn get(&self, name: &str, arity: usize) -> Option<&FunctionDescriptor> {
        self.functions.get(&(name.to_string(), arity))
    }

    pub fn contains(&self, name: &str, arity: usize) -> bool {
        self.get(name, arity).is_some()
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    pub fn list(&self) -> Vec<FunctionSignature> {
        self.functions.values()
            .map(FunctionDescriptor::signature)
            .collect()
    }
}
