use std::cell::RefCell;

use deckforge::{
    ArchetypeRegistry, ContentBinding, RenderContext, Slide, SlidePatch, Theme, TitleBinding,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

fn slide_for(archetype_id: &str) -> Slide {
    Slide::new(
        format!("slide-{archetype_id}"),
        "Seeded Variation",
        vec!["alpha".to_string(), "beta".to_string()],
        archetype_id,
    )
}

#[test]
fn whole_catalog_reproduces_byte_for_byte() {
    init_tracing();
    let registry = ArchetypeRegistry::with_builtins();
    let theme = Theme::system();

    for (_, members) in registry.list_by_category() {
        for info in members {
            let slide = slide_for(&info.id);
            let compositor = registry.resolve(&info.id).unwrap();

            let ctx_a = RenderContext::read_only(&slide, &theme);
            let ctx_b = RenderContext::read_only(&slide, &theme);
            let a = compositor.compose(&ctx_a).to_json().unwrap();
            let b = compositor.compose(&ctx_b).to_json().unwrap();
            assert_eq!(a, b, "{} does not reproduce across contexts", info.id);

            // Repeated calls against one context must match too: the factory
            // snapshots the rng at entry instead of consuming the caller's.
            let again = compositor.compose(&ctx_a).to_json().unwrap();
            assert_eq!(a, again, "{} drifts across repeated calls", info.id);
        }
    }
}

#[test]
fn different_slides_draw_different_variation() {
    // "collage" rotates its photo from the stream, so two slides with
    // different ids should almost surely disagree somewhere.
    let registry = ArchetypeRegistry::with_builtins();
    let theme = Theme::system();
    let compositor = registry.resolve("collage").unwrap();

    let s1 = Slide::new("slide-1", "T", vec!["x".to_string()], "collage");
    let s2 = Slide::new("slide-2", "T", vec!["x".to_string()], "collage");
    let a = serde_json::to_string(&compositor.compose(&RenderContext::read_only(&s1, &theme)))
        .unwrap();
    let b = serde_json::to_string(&compositor.compose(&RenderContext::read_only(&s2, &theme)))
        .unwrap();
    assert_ne!(a, b);
}

#[test]
fn switching_archetypes_reseeds_the_stream() {
    let registry = ArchetypeRegistry::with_builtins();
    let theme = Theme::system();

    let mut slide = slide_for("editorial");
    let first = {
        let ctx = RenderContext::read_only(&slide, &theme);
        registry.resolve("editorial").unwrap().compose(&ctx).extras
    };

    slide.archetype_id = "zine".to_string();
    let second = {
        let ctx = RenderContext::read_only(&slide, &theme);
        registry.resolve("zine").unwrap().compose(&ctx).extras
    };

    // Both archetypes surface rng-derived extras; the streams must differ.
    assert!(first.contains_key("volume"));
    assert!(second.contains_key("issue"));
}

#[test]
fn compose_never_mutates_the_slide() {
    let registry = ArchetypeRegistry::with_builtins();
    let theme = Theme::system();
    let slide = slide_for("deck");
    let snapshot = serde_json::to_string(&slide).unwrap();

    let ctx = RenderContext::read_only(&slide, &theme);
    let _ = registry.resolve("deck").unwrap().compose(&ctx);

    assert_eq!(serde_json::to_string(&slide).unwrap(), snapshot);
}

#[test]
fn edits_flow_through_the_sink_not_the_slide() {
    let theme = Theme::system();
    let slide = slide_for("deck");
    let seen: RefCell<Vec<SlidePatch>> = RefCell::new(Vec::new());
    let sink = |patch: SlidePatch| seen.borrow_mut().push(patch);
    let ctx = RenderContext::new(&slide, &theme, &sink);

    assert!(TitleBinding::new(&ctx).commit("Edited"));
    assert!(ContentBinding::new(&ctx).commit_item(0, "ALPHA"));

    let patches = seen.borrow();
    assert_eq!(patches[0], SlidePatch::Title("Edited".to_string()));
    assert_eq!(
        patches[1],
        SlidePatch::Content(vec!["ALPHA".to_string(), "beta".to_string()])
    );
    // The slide itself is untouched until the persistence layer applies.
    assert_eq!(slide.title, "Seeded Variation");
}

#[test]
fn read_only_render_marks_every_node_static() {
    let registry = ArchetypeRegistry::with_builtins();
    let theme = Theme::system();
    let slide = slide_for("deck");
    let ctx = RenderContext::read_only(&slide, &theme);
    let comp = registry.resolve("deck").unwrap().compose(&ctx);
    assert!(comp.nodes.iter().all(|n| !n.editable));
}

#[test]
fn interactive_render_marks_text_regions_editable() {
    let registry = ArchetypeRegistry::with_builtins();
    let theme = Theme::system();
    let slide = slide_for("deck");
    let sink = |_: SlidePatch| {};
    let ctx = RenderContext::new(&slide, &theme, &sink);
    let comp = registry.resolve("deck").unwrap().compose(&ctx);

    let title = comp.nodes.iter().find(|n| n.name == "title").unwrap();
    let media = comp.nodes.iter().find(|n| n.name == "media").unwrap();
    assert!(title.editable);
    assert!(!media.editable);
}
