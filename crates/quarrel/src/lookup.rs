use indexmap::IndexMap;

use crate::error::{Error, Result};
use crate::spec::OptionSpec;

/// Alias to specification table, in first-seen alias order.
///
/// Built fresh for every parse and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct AliasLookup<'a> {
    specs: &'a [OptionSpec],
    index: IndexMap<&'a str, usize>,
}

impl<'a> AliasLookup<'a> {
    /// Index every alias of `specs`, walking specs and their aliases in order.
    ///
    /// Fails on the first alias seen twice, whether the repeat is inside one
    /// spec or across two of them.
    pub fn build(specs: &'a [OptionSpec]) -> Result<Self> {
        let mut index: IndexMap<&'a str, usize> = IndexMap::with_capacity(specs.len() * 2);

        for (idx, spec) in specs.iter().enumerate() {
            if spec.aliases().is_empty() {
                return Err(Error::InvalidConfig(format!(
                    "option specification #{} has no aliases",
                    idx + 1
                )));
            }
            for alias in spec.aliases() {
                if index.contains_key(alias.as_str()) {
                    return Err(Error::DuplicateAlias {
                        alias: alias.clone(),
                    });
                }
                index.insert(alias.as_str(), idx);
            }
        }

        tracing::trace!(aliases = index.len(), specs = specs.len(), "built alias lookup");
        Ok(Self { specs, index })
    }

    pub fn get(&self, alias: &str) -> Option<&'a OptionSpec> {
        let specs = self.specs;
        self.index.get(alias).map(|&idx| &specs[idx])
    }

    /// All aliases in insertion order.
    pub fn aliases(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.index.keys().copied()
    }

    /// Distinct specs, ordered by the first time one of their aliases was seen.
    pub fn specs(&self) -> Vec<&'a OptionSpec> {
        let specs = self.specs;
        let mut seen = vec![false; specs.len()];
        let mut out = Vec::new();
        for &idx in self.index.values() {
            if !seen[idx] {
                seen[idx] = true;
                out.push(&specs[idx]);
            }
        }
        out
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}
