use std::fmt::Display;

use indexmap::IndexMap;

use crate::ast::types::Type;

/// Variable name to type, in the order each variable was first assigned.
///
/// Once a name is recorded its type is fixed; [`TypeMap::declare`] never
/// overwrites an entry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TypeMap {
    types: IndexMap<String, Type>,
}

impl TypeMap {
    pub fn new() -> Self {
        TypeMap {
            types: IndexMap::new(),
        }
    }

    pub fn get(&self, variable: &str) -> Option<Type> {
        self.types.get(variable).copied()
    }

    /// Records `variable` as `ty`.
    ///
    /// Returns `Ok(true)` for a new variable, `Ok(false)` if it already had
    /// this type, and `Err` with the recorded type on a mismatch.
    pub fn declare(&mut self, variable: &str, ty: Type) -> Result<bool, Type> {
        match self.types.get(variable) {
            Some(existing) if *existing == ty => Ok(false),
            Some(existing) => Err(*existing),
            None => {
                self.types.insert(variable.to_string(), ty);
                Ok(true)
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Type)> {
        self.types.iter().map(|(name, ty)| (name.as_str(), *ty))
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

/// One `<identifier> <type>` line per variable.
impl Display for TypeMap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (name, ty) in self.iter() {
            writeln!(f, "{} {}", name, ty)?;
        }
        Ok(())
    }
}
