//! Collaborators handed to every evaluation call.

use std::fmt;

use rebind_property::PropertyOracle;

use crate::generator::GeneratorResolver;
use crate::types::TypeOracle;

/// The oracles one resolution pass evaluates against.
///
/// Passed down explicitly; nothing in this crate looks collaborators up from
/// global state.
#[derive(Clone, Copy)]
pub struct RebindContext<'a> {
    properties: &'a dyn PropertyOracle,
    types: &'a dyn TypeOracle,
    generators: &'a dyn GeneratorResolver,
}

impl<'a> RebindContext<'a> {
    /// Bundle the three collaborators.
    pub fn new(
        properties: &'a dyn PropertyOracle,
        types: &'a dyn TypeOracle,
        generators: &'a dyn GeneratorResolver,
    ) -> Self {
        Self {
            properties,
            types,
            generators,
        }
    }

    /// Property lookup.
    pub fn properties(&self) -> &'a dyn PropertyOracle {
        self.properties
    }

    /// Type lookup.
    pub fn types(&self) -> &'a dyn TypeOracle {
        self.types
    }

    /// Generator lookup.
    pub fn generators(&self) -> &'a dyn GeneratorResolver {
        self.generators
    }
}

impl fmt::Debug for RebindContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RebindContext").finish_non_exhaustive()
    }
}
