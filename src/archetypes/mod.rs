//! Built-in archetype catalog: ~70 declarative definitions across 15
//! categories, all interpreted by the same factory. Visual variation only
//! ever comes from the context rng, so every slide reproduces exactly.

mod artisanal_craft;
mod atmospheric;
mod cinematic;
mod contemporary_art;
mod corporate;
mod cultural;
mod cultural_heritage;
mod design_movements;
mod editorial;
mod future_speculative;
mod historical_period;
mod natural;
mod support;
mod tech;
mod typography_print;
mod wabi_sabi;

use crate::{definition::ArchetypeDefinition, error::DeckforgeResult};

/// Every built-in definition, in catalog order. Build failures are returned
/// rather than panicking so the registry loader can log and skip them.
pub fn builtin() -> Vec<DeckforgeResult<ArchetypeDefinition>> {
    let mut defs = Vec::new();
    defs.extend(corporate::definitions());
    defs.extend(editorial::definitions());
    defs.extend(wabi_sabi::definitions());
    defs.extend(natural::definitions());
    defs.extend(cultural::definitions());
    defs.extend(tech::definitions());
    defs.extend(cinematic::definitions());
    defs.extend(design_movements::definitions());
    defs.extend(cultural_heritage::definitions());
    defs.extend(historical_period::definitions());
    defs.extend(artisanal_craft::definitions());
    defs.extend(atmospheric::definitions());
    defs.extend(typography_print::definitions());
    defs.extend(contemporary_art::definitions());
    defs.extend(future_speculative::definitions());
    defs
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn every_builtin_definition_builds_and_validates() {
        for built in builtin() {
            let def = built.expect("builtin definition must build");
            def.validate()
                .unwrap_or_else(|e| panic!("{} failed validation: {e}", def.id));
        }
    }

    #[test]
    fn builtin_ids_are_unique() {
        let mut seen = BTreeSet::new();
        for built in builtin() {
            let def = built.unwrap();
            assert!(seen.insert(def.id.clone()), "duplicate id {}", def.id);
        }
    }

    #[test]
    fn catalog_is_roughly_seventy_strong() {
        let n = builtin().len();
        assert!((70..90).contains(&n), "unexpected catalog size {n}");
    }
}
