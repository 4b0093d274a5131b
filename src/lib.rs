//! Deterministic slide-archetype composition engine. Archetypes are
//! declarative definitions interpreted by one factory; all visual variation
//! is drawn from a seeded stream, so a slide renders identically every time.

#![forbid(unsafe_code)]

pub mod archetypes;
pub mod compose;
pub mod context;
pub mod contrast;
pub mod definition;
pub mod dsl;
pub mod editable;
pub mod error;
pub mod layer;
pub mod model;
pub mod registry;
pub mod rng;
pub mod style;

pub use compose::{ComposedNode, Composition, Compositor, NodeContent};
pub use context::{RenderContext, UpdateSink};
pub use contrast::{Contrast, ContrastMode, ContrastOverride};
pub use definition::{
    ArchetypeDefinition, Category, DecorationSpec, DynamicRule, DynamicValue, RegionKind,
    RegionSpec,
};
pub use dsl::{DecorationBuilder, DefinitionBuilder, RegionBuilder};
pub use editable::{ContentBinding, TitleBinding};
pub use error::{DeckforgeError, DeckforgeResult};
pub use layer::LayerBand;
pub use model::{Slide, SlidePatch, Theme};
pub use registry::{ArchetypeInfo, ArchetypeRegistry, CategoryInfo};
pub use rng::SeededVariationSource;
pub use style::{Align, DecorationShape, Frame, MediaPosition, Style, TextTransform};
