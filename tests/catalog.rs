use deckforge::{
    ArchetypeRegistry, Category, LayerBand, RegionKind, RenderContext, Slide, Theme,
};

fn slide_for(archetype_id: &str) -> Slide {
    Slide::new(
        format!("slide-{archetype_id}"),
        "Quarterly Review",
        vec![
            "Revenue grew 14%".to_string(),
            "Churn held flat".to_string(),
            "Two new markets opened".to_string(),
        ],
        archetype_id,
    )
}

#[test]
fn builtin_catalog_is_at_least_seventy_archetypes() {
    let registry = ArchetypeRegistry::with_builtins();
    assert!(
        registry.len() >= 70,
        "catalog has only {} archetypes",
        registry.len()
    );
}

#[test]
fn every_category_has_at_least_one_archetype() {
    let registry = ArchetypeRegistry::with_builtins();
    let listed = registry.list_by_category();
    assert_eq!(listed.len(), Category::ALL.len());
    for (category, members) in &listed {
        assert!(!members.is_empty(), "category {} is empty", category.id);
    }
}

#[test]
fn categories_come_back_in_fixed_catalog_order() {
    let registry = ArchetypeRegistry::with_builtins();
    let ids: Vec<&str> = registry
        .list_by_category()
        .iter()
        .map(|(c, _)| c.id)
        .collect();
    let expected: Vec<&str> = Category::ALL.iter().map(|c| c.id()).collect();
    assert_eq!(ids, expected);
}

#[test]
fn default_archetype_is_registered() {
    let registry = ArchetypeRegistry::with_builtins();
    assert!(registry.contains(ArchetypeRegistry::DEFAULT_ARCHETYPE));
}

#[test]
fn unknown_archetype_falls_back_to_default() {
    let registry = ArchetypeRegistry::with_builtins();
    let compositor = registry.resolve("does-not-exist").unwrap();
    assert_eq!(
        compositor.definition().id,
        ArchetypeRegistry::DEFAULT_ARCHETYPE
    );
}

#[test]
fn search_is_case_insensitive_over_name_and_description() {
    let registry = ArchetypeRegistry::with_builtins();

    let by_name = registry.search_archetypes("KINTSUGI");
    assert!(by_name.iter().any(|a| a.id == "kintsugi"));

    let by_description = registry.search_archetypes("gold seams");
    assert!(by_description.iter().any(|a| a.id == "kintsugi"));

    assert_eq!(registry.search_archetypes("").len(), registry.len());
    assert!(registry.search_archetypes("qzxv-no-match").is_empty());
}

#[test]
fn category_lookup_by_archetype_id() {
    let registry = ArchetypeRegistry::with_builtins();
    let category = registry.find_category_for_archetype("terminal").unwrap();
    assert_eq!(category.id, "tech");
    assert!(registry.find_category_for_archetype("nope").is_none());
}

#[test]
fn every_builtin_composes_for_a_plain_slide() {
    let registry = ArchetypeRegistry::with_builtins();
    let theme = Theme::system();

    for (_, members) in registry.list_by_category() {
        for info in members {
            let slide = slide_for(&info.id);
            let ctx = RenderContext::read_only(&slide, &theme);
            let comp = registry.resolve(&info.id).unwrap().compose(&ctx);

            assert_eq!(comp.archetype_id, info.id);
            assert!(!comp.background.is_empty(), "{} has no background", info.id);
            assert!(!comp.nodes.is_empty(), "{} composed no nodes", info.id);
            for pair in comp.nodes.windows(2) {
                assert!(
                    pair[0].z <= pair[1].z,
                    "{} nodes are not in stacking order",
                    info.id
                );
            }
        }
    }
}

#[test]
fn overlay_decorations_never_trap_editable_text_below() {
    // The same rule the registry enforces, checked against the shipped
    // catalog rather than a synthetic definition.
    let registry = ArchetypeRegistry::with_builtins();
    for (_, members) in registry.list_by_category() {
        for info in members {
            let def = registry.resolve(&info.id).unwrap().definition().clone();
            let highest = def.decorations.iter().map(|d| d.band).max();
            if highest >= Some(LayerBand::Overlay) {
                for region in &def.regions {
                    if matches!(region.kind, RegionKind::Title | RegionKind::Body { .. }) {
                        assert!(
                            region.band >= LayerBand::ContentTop,
                            "{}: region '{}' sits below an overlay decoration",
                            def.id,
                            region.name
                        );
                    }
                }
            }
        }
    }
}
