use crate::{
    contrast::Contrast,
    model::{Slide, SlidePatch, Theme},
    rng::SeededVariationSource,
};

/// Sink for slide edits; the persistence layer behind it merges and saves.
/// Fire-and-forget from the engine's perspective.
pub type UpdateSink<'a> = dyn Fn(SlidePatch) + 'a;

/// Everything one render pass needs. Created fresh per render; never
/// persisted or shared across slides. The factory snapshots the rng at
/// entry, so a context can back multiple independent composition calls.
pub struct RenderContext<'a> {
    pub slide: &'a Slide,
    pub theme: &'a Theme,
    pub rng: SeededVariationSource,
    pub contrast: Contrast,
    pub on_update: Option<&'a UpdateSink<'a>>,
    pub read_only: bool,
}

impl<'a> RenderContext<'a> {
    /// Context for an interactive render. The rng is seeded from the
    /// (slide, archetype) pair; contrast resolves theme + per-slide
    /// overrides (any archetype-declared override is layered on by the
    /// factory).
    pub fn new(slide: &'a Slide, theme: &'a Theme, on_update: &'a UpdateSink<'a>) -> Self {
        Self::build(slide, theme, Some(on_update), false)
    }

    /// Context for a display- or export-only render: edits are rejected and
    /// editable regions render as static text.
    pub fn read_only(slide: &'a Slide, theme: &'a Theme) -> Self {
        Self::build(slide, theme, None, true)
    }

    fn build(
        slide: &'a Slide,
        theme: &'a Theme,
        on_update: Option<&'a UpdateSink<'a>>,
        read_only: bool,
    ) -> Self {
        Self {
            slide,
            theme,
            rng: SeededVariationSource::for_slide(&slide.id, &slide.archetype_id),
            contrast: Contrast::resolve(theme, slide.theme_overrides.as_ref(), None),
            on_update,
            read_only,
        }
    }

    /// Shadow copy used by the factory: same slide, theme and sink, a
    /// snapshot of the rng state at entry, and the archetype-adjusted
    /// contrast. Leaves the caller's context untouched.
    pub(crate) fn fork(&self, contrast: Contrast) -> RenderContext<'a> {
        RenderContext {
            slide: self.slide,
            theme: self.theme,
            rng: self.rng.clone(),
            contrast,
            on_update: self.on_update,
            read_only: self.read_only,
        }
    }

    /// Emits a patch through the sink. Returns false when the context is
    /// read-only or has no sink; the edit is rejected, never queued.
    pub fn push_update(&self, patch: SlidePatch) -> bool {
        if self.read_only {
            return false;
        }
        match self.on_update {
            Some(sink) => {
                sink(patch);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Slide;
    use std::cell::RefCell;

    fn slide() -> Slide {
        Slide::new("s1", "Title", vec!["a".to_string()], "deck")
    }

    #[test]
    fn rng_seed_incorporates_slide_and_archetype() {
        let theme = Theme::system();
        let a = slide();
        let mut b = slide();
        b.archetype_id = "editorial".to_string();
        let ctx_a = RenderContext::read_only(&a, &theme);
        let ctx_b = RenderContext::read_only(&b, &theme);
        assert_ne!(ctx_a.rng.next().to_bits(), ctx_b.rng.next().to_bits());
    }

    #[test]
    fn read_only_context_rejects_updates() {
        let theme = Theme::system();
        let s = slide();
        let ctx = RenderContext::read_only(&s, &theme);
        assert!(!ctx.push_update(SlidePatch::Title("x".to_string())));
    }

    #[test]
    fn updates_flow_through_the_sink() {
        let theme = Theme::system();
        let s = slide();
        let seen: RefCell<Vec<SlidePatch>> = RefCell::new(Vec::new());
        let sink = |patch: SlidePatch| seen.borrow_mut().push(patch);
        let ctx = RenderContext::new(&s, &theme, &sink);
        assert!(ctx.push_update(SlidePatch::Title("New".to_string())));
        assert_eq!(seen.borrow().len(), 1);
    }

    #[test]
    fn fork_snapshots_rng_state() {
        let theme = Theme::system();
        let s = slide();
        let ctx = RenderContext::read_only(&s, &theme);
        let fork_a = ctx.fork(ctx.contrast.clone());
        let fork_b = ctx.fork(ctx.contrast.clone());
        assert_eq!(fork_a.rng.next().to_bits(), fork_b.rng.next().to_bits());
    }
}
