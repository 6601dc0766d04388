// Pitchcraft core: the pitch data model and everything that generates or
// stores it.
//
// Given an idea, an industry and a tone, the core assembles a `Pitch`: copy
// from `pitchcraft_lang`, a brand palette and an SVG logo. Later it draws
// `LayoutVariation`s for the landing-page renderer in `pitchcraft_render`.
// Generation is pure apart from the injected `RandomSource`; persistence sits
// behind the `PitchStore` port.
//
// Architecture:
// - `types.rs`: `PitchId`, `LayoutId`, `BrandColors`, `LogoColors`, the
//   known-industry list
// - `palette.rs`: static tables (brand palettes, logo styles, industry
//   categories, layout palettes, typography, animation presets, section
//   orders)
// - `logo.rs`: the five SVG templates and the data-URL helper
// - `pitch.rs`: `Pitch`, `GeneratedPitch`, create/regenerate
// - `layout.rs`: layout axis enums and the variation selector
// - `update.rs`: `PitchUpdate` field edits
// - `store.rs`: `PitchStore` with memory and JSON-file adapters
// - `share.rs`: share-link encoding
//
// Lookups never fail: unseen industries resolve to documented defaults. The
// only fallible operations are the store's.

pub mod layout;
pub mod logo;
pub mod palette;
pub mod pitch;
pub mod share;
pub mod store;
pub mod types;
pub mod update;

pub use layout::{
    CtaStyle, FeatureLayout, HeroStyle, LayoutVariation, SectionKind, generate_layout_variation,
    generate_layout_variations,
};
pub use logo::{LogoStyle, generate_logo, generate_logo_variations, svg_to_data_url};
pub use pitch::{GeneratedPitch, Pitch, create_pitch, generate_pitch, regenerate_pitch};
pub use share::shareable_link;
pub use store::{JsonFileStore, MemoryStore, PitchStore, StoreError};
pub use types::{BrandColors, KNOWN_INDUSTRIES, LayoutId, LogoColors, PitchId};
pub use update::{PitchField, PitchUpdate};
