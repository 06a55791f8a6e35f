pub mod function;
pub mod registry;

pub mod prelude {
    pub use super::{
        function::*,
        registry::*
    };
}

#[cfg(test)]
mod tests;
