use std::collections::BTreeMap;
use std::sync::{Arc, OnceLock};

use crate::{
    archetypes,
    compose::Compositor,
    definition::{ArchetypeDefinition, Category},
    error::{DeckforgeError, DeckforgeResult},
};

/// Browsing metadata for one category.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct CategoryInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub short_name: &'static str,
    pub description: &'static str,
    pub preview_colors: [&'static str; 2],
}

impl From<Category> for CategoryInfo {
    fn from(category: Category) -> Self {
        Self {
            id: category.id(),
            name: category.name(),
            short_name: category.short_name(),
            description: category.description(),
            preview_colors: category.preview_colors(),
        }
    }
}

/// Browsing metadata for one archetype.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct ArchetypeInfo {
    pub id: String,
    pub name: String,
    pub description: String,
    pub preview_colors: [String; 2],
}

impl From<&ArchetypeDefinition> for ArchetypeInfo {
    fn from(def: &ArchetypeDefinition) -> Self {
        Self {
            id: def.id.clone(),
            name: def.name.clone(),
            description: def.description.clone(),
            preview_colors: def.preview_colors.clone(),
        }
    }
}

struct Entry {
    def: Arc<ArchetypeDefinition>,
    compositor: OnceLock<Compositor>,
}

/// Catalog of archetype definitions. Written once at startup, read-only
/// afterwards: renders on any number of threads share it without locking,
/// compositors are built lazily on first resolve.
pub struct ArchetypeRegistry {
    entries: Vec<Entry>,
    index: BTreeMap<String, usize>,
    default_id: String,
}

impl ArchetypeRegistry {
    /// Fallback when a slide references an unknown archetype id.
    pub const DEFAULT_ARCHETYPE: &'static str = "deck";

    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: BTreeMap::new(),
            default_id: Self::DEFAULT_ARCHETYPE.to_string(),
        }
    }

    /// Registry preloaded with the built-in catalog. A definition that fails
    /// validation is logged and skipped; one bad archetype never takes down
    /// the catalog.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        for built in archetypes::builtin() {
            match built {
                Ok(def) => {
                    let id = def.id.clone();
                    if let Err(err) = registry.register(def) {
                        tracing::error!(archetype = %id, %err, "skipping invalid archetype");
                    }
                }
                Err(err) => {
                    tracing::error!(%err, "skipping archetype that failed to build");
                }
            }
        }
        registry
    }

    /// Validates and stores a definition. Duplicate ids and definition-level
    /// violations are definition-time errors, caught here at startup.
    pub fn register(&mut self, def: ArchetypeDefinition) -> DeckforgeResult<()> {
        def.validate()?;
        if self.index.contains_key(&def.id) {
            return Err(DeckforgeError::registry(format!(
                "archetype id '{}' is already registered",
                def.id
            )));
        }
        self.index.insert(def.id.clone(), self.entries.len());
        self.entries.push(Entry {
            def: Arc::new(def),
            compositor: OnceLock::new(),
        });
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Compositor for `id`, falling back to the default archetype when the
    /// id is unknown. Errs only when the registry holds neither, i.e. an
    /// empty catalog, which is a deployment bug, not a render-time condition.
    pub fn resolve(&self, id: &str) -> DeckforgeResult<&Compositor> {
        let entry = match self.index.get(id) {
            Some(&i) => &self.entries[i],
            None => {
                tracing::warn!(
                    archetype = %id,
                    fallback = %self.default_id,
                    "unknown archetype id, falling back to default"
                );
                let &i = self.index.get(&self.default_id).ok_or_else(|| {
                    DeckforgeError::registry(format!(
                        "unknown archetype '{}' and default '{}' is not registered",
                        id, self.default_id
                    ))
                })?;
                &self.entries[i]
            }
        };
        Ok(entry
            .compositor
            .get_or_init(|| Compositor::new(entry.def.clone())))
    }

    pub fn find_archetype(&self, id: &str) -> Option<ArchetypeInfo> {
        self.index
            .get(id)
            .map(|&i| ArchetypeInfo::from(self.entries[i].def.as_ref()))
    }

    pub fn find_category_for_archetype(&self, id: &str) -> Option<CategoryInfo> {
        self.index
            .get(id)
            .map(|&i| CategoryInfo::from(self.entries[i].def.category))
    }

    /// Case-insensitive match on name or description. An empty query
    /// returns the whole catalog.
    pub fn search_archetypes(&self, query: &str) -> Vec<ArchetypeInfo> {
        let needle = query.trim().to_lowercase();
        self.entries
            .iter()
            .filter(|e| {
                needle.is_empty()
                    || e.def.name.to_lowercase().contains(&needle)
                    || e.def.description.to_lowercase().contains(&needle)
            })
            .map(|e| ArchetypeInfo::from(e.def.as_ref()))
            .collect()
    }

    /// Archetypes grouped for browsing UIs. Category order is the fixed
    /// catalog order; within a category, registration order. Empty
    /// categories are omitted.
    pub fn list_by_category(&self) -> Vec<(CategoryInfo, Vec<ArchetypeInfo>)> {
        Category::ALL
            .iter()
            .filter_map(|&category| {
                let members: Vec<ArchetypeInfo> = self
                    .entries
                    .iter()
                    .filter(|e| e.def.category == category)
                    .map(|e| ArchetypeInfo::from(e.def.as_ref()))
                    .collect();
                if members.is_empty() {
                    None
                } else {
                    Some((CategoryInfo::from(category), members))
                }
            })
            .collect()
    }
}

impl Default for ArchetypeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        definition::RegionKind,
        dsl::{DefinitionBuilder, RegionBuilder},
        layer::LayerBand,
    };

    fn plain(id: &str, category: Category) -> ArchetypeDefinition {
        DefinitionBuilder::new(id, id.to_uppercase(), category)
            .background("#ffffff")
            .region(
                RegionBuilder::new("title", RegionKind::Title)
                    .band(LayerBand::ContentHero)
                    .build()
                    .unwrap(),
            )
            .build()
            .unwrap()
    }

    #[test]
    fn duplicate_id_registration_is_a_definition_time_error() {
        let mut reg = ArchetypeRegistry::new();
        reg.register(plain("deck", Category::Corporate)).unwrap();
        let err = reg
            .register(plain("deck", Category::Corporate))
            .unwrap_err();
        assert!(err.to_string().contains("already registered"));
        assert_eq!(reg.len(), 1);
    }

    #[test]
    fn unknown_id_resolves_to_the_default_archetype() {
        let mut reg = ArchetypeRegistry::new();
        reg.register(plain("deck", Category::Corporate)).unwrap();
        let compositor = reg.resolve("no-such-archetype").unwrap();
        assert_eq!(compositor.definition().id, "deck");
    }

    #[test]
    fn empty_registry_cannot_resolve() {
        let reg = ArchetypeRegistry::new();
        assert!(reg.resolve("anything").is_err());
    }

    #[test]
    fn resolve_reuses_the_lazily_built_compositor() {
        let mut reg = ArchetypeRegistry::new();
        reg.register(plain("deck", Category::Corporate)).unwrap();
        let a = reg.resolve("deck").unwrap() as *const Compositor;
        let b = reg.resolve("deck").unwrap() as *const Compositor;
        assert_eq!(a, b);
    }

    #[test]
    fn list_by_category_follows_catalog_then_registration_order() {
        let mut reg = ArchetypeRegistry::new();
        reg.register(plain("neon", Category::Tech)).unwrap();
        reg.register(plain("deck", Category::Corporate)).unwrap();
        reg.register(plain("terminal", Category::Tech)).unwrap();

        let listed = reg.list_by_category();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].0.id, "corporate");
        assert_eq!(listed[1].0.id, "tech");
        let tech_ids: Vec<&str> = listed[1].1.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(tech_ids, vec!["neon", "terminal"]);
    }

    #[test]
    fn search_matches_name_and_description_case_insensitively() {
        let mut reg = ArchetypeRegistry::new();
        let def = DefinitionBuilder::new("kintsugi", "Kintsugi", Category::WabiSabi)
            .description("Broken porcelain mended with gold")
            .background("#1a1a2e")
            .build()
            .unwrap();
        reg.register(def).unwrap();
        reg.register(plain("deck", Category::Corporate)).unwrap();

        assert_eq!(reg.search_archetypes("GOLD").len(), 1);
        assert_eq!(reg.search_archetypes("kint").len(), 1);
        assert_eq!(reg.search_archetypes("").len(), 2);
        assert!(reg.search_archetypes("zzz").is_empty());
    }
}
