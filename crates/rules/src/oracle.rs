//! Memoized resolution for one compile pass.

use std::collections::HashMap;

use crate::context::RebindContext;
use crate::error::RebindResult;
use crate::rules::{Rebind, Rules};

/// Caches successful answers per requested type.
///
/// The cache is only valid for a single set of oracles; build a new
/// `RebindOracle` (or call [`clear`](Self::clear)) when the permutation
/// changes. Failures are never cached.
#[derive(Debug)]
pub struct RebindOracle<'r> {
    rules: &'r Rules,
    cache: HashMap<String, Rebind>,
}

impl<'r> RebindOracle<'r> {
    /// Wrap a rule collection.
    pub fn new(rules: &'r Rules) -> Self {
        Self {
            rules,
            cache: HashMap::new(),
        }
    }

    /// Resolve `type_name`, consulting the cache first.
    pub fn rebind(&mut self, ctx: &RebindContext<'_>, type_name: &str) -> RebindResult<Rebind> {
        if let Some(hit) = self.cache.get(type_name) {
            tracing::trace!(type_name, "rebind cache hit");
            return Ok(hit.clone());
        }
        let answer = self.rules.rebind(ctx, type_name)?;
        self.cache.insert(type_name.to_owned(), answer.clone());
        Ok(answer)
    }

    /// The cached answer for `type_name`, if any.
    pub fn cached(&self, type_name: &str) -> Option<&Rebind> {
        self.cache.get(type_name)
    }

    /// Forget every cached answer.
    pub fn clear(&mut self) {
        self.cache.clear();
    }
}
