//! Entity Resolver
//!
//! Selects the single measurement that satisfies the requested entity's
//! allowed units and renders it in canonical form.
//!
//! Tie-break policy is first-match-wins over the candidates' input order,
//! which is their left-to-right order of appearance in the source text.
//! No attempt is made to pick a "best" candidate; that simplicity is
//! deliberate and covered by tests.

use crate::catalog::UnitCatalog;
use crate::parser::MeasurementCandidate;
use qex_common::types::EntityType;

/// Resolves measurement candidates against an entity's allowed units.
#[derive(Debug, Clone, Copy, Default)]
pub struct EntityResolver {
    catalog: UnitCatalog,
}

impl EntityResolver {
    pub fn new(catalog: UnitCatalog) -> Self {
        Self { catalog }
    }

    /// The canonical `"<value> <unit>"` string for the first candidate
    /// whose unit is valid for `entity`, or `""` when none matches.
    ///
    /// The unit abbreviation is rewritten to its full-form name as a whole
    /// token; the numeric value is never touched.
    pub fn resolve(&self, entity: EntityType, candidates: &[MeasurementCandidate]) -> String {
        let Some(first) = candidates
            .iter()
            .find(|c| self.catalog.allows(entity, &c.unit))
        else {
            return String::new();
        };

        match self.catalog.canonical_name(entity, &first.unit) {
            Some(full) => format!("{} {}", first.value, full),
            None => format!("{} {}", first.value, first.unit),
        }
    }
}
