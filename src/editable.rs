//! Editable region bindings: the only path by which archetype visuals
//! mutate slide data. Archetypes never call persistence directly; edits go
//! through the context sink as [`SlidePatch`] values.

use crate::{context::RenderContext, model::SlidePatch};

/// Binding for a slide's title region.
pub struct TitleBinding<'a> {
    ctx: &'a RenderContext<'a>,
}

impl<'a> TitleBinding<'a> {
    pub fn new(ctx: &'a RenderContext<'a>) -> Self {
        Self { ctx }
    }

    pub fn text(&self) -> &str {
        &self.ctx.slide.title
    }

    pub fn editable(&self) -> bool {
        !self.ctx.read_only && self.ctx.on_update.is_some()
    }

    /// Commits a new title. Returns false (renders as static text) when the
    /// context is read-only.
    pub fn commit(&self, title: impl Into<String>) -> bool {
        self.ctx.push_update(SlidePatch::Title(title.into()))
    }
}

/// Binding for a slide's ordered content items. Every commit replaces the
/// full ordered sequence so ordering stays unambiguous downstream.
pub struct ContentBinding<'a> {
    ctx: &'a RenderContext<'a>,
}

impl<'a> ContentBinding<'a> {
    pub fn new(ctx: &'a RenderContext<'a>) -> Self {
        Self { ctx }
    }

    pub fn items(&self) -> &[String] {
        &self.ctx.slide.content
    }

    pub fn editable(&self) -> bool {
        !self.ctx.read_only && self.ctx.on_update.is_some()
    }

    /// Replaces a single item by index, emitting the full updated list.
    pub fn commit_item(&self, index: usize, text: impl Into<String>) -> bool {
        let items = self.items();
        if index >= items.len() {
            tracing::warn!(
                slide = %self.ctx.slide.id,
                index,
                len = items.len(),
                "content edit index out of bounds, rejected"
            );
            return false;
        }
        let mut updated = items.to_vec();
        updated[index] = text.into();
        self.ctx.push_update(SlidePatch::Content(updated))
    }

    /// Replaces the whole ordered list.
    pub fn commit_all(&self, items: Vec<String>) -> bool {
        self.ctx.push_update(SlidePatch::Content(items))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Slide, Theme};
    use std::cell::RefCell;

    fn slide() -> Slide {
        Slide::new(
            "s1",
            "Original",
            vec!["first".to_string(), "second".to_string()],
            "deck",
        )
    }

    #[test]
    fn title_commit_emits_a_title_patch() {
        let theme = Theme::system();
        let s = slide();
        let seen = RefCell::new(Vec::new());
        let sink = |p: SlidePatch| seen.borrow_mut().push(p);
        let ctx = RenderContext::new(&s, &theme, &sink);

        assert!(TitleBinding::new(&ctx).commit("Renamed"));
        assert_eq!(
            seen.borrow()[0],
            SlidePatch::Title("Renamed".to_string())
        );
    }

    #[test]
    fn item_commit_replaces_the_full_ordered_list() {
        let theme = Theme::system();
        let s = slide();
        let seen = RefCell::new(Vec::new());
        let sink = |p: SlidePatch| seen.borrow_mut().push(p);
        let ctx = RenderContext::new(&s, &theme, &sink);

        assert!(ContentBinding::new(&ctx).commit_item(1, "SECOND"));
        assert_eq!(
            seen.borrow()[0],
            SlidePatch::Content(vec!["first".to_string(), "SECOND".to_string()])
        );
    }

    #[test]
    fn out_of_bounds_item_is_rejected() {
        let theme = Theme::system();
        let s = slide();
        let seen = RefCell::new(Vec::new());
        let sink = |p: SlidePatch| seen.borrow_mut().push(p);
        let ctx = RenderContext::new(&s, &theme, &sink);

        assert!(!ContentBinding::new(&ctx).commit_item(9, "nope"));
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn read_only_bindings_reject_all_edits() {
        let theme = Theme::system();
        let s = slide();
        let ctx = RenderContext::read_only(&s, &theme);

        assert!(!TitleBinding::new(&ctx).editable());
        assert!(!TitleBinding::new(&ctx).commit("x"));
        assert!(!ContentBinding::new(&ctx).commit_all(vec![]));
    }
}
