// Landing-page rendering for Pitchcraft.
//
// A pitch plus one `LayoutVariation` renders two ways from a single section
// tree (`sections`):
//
// - `render_preview` -> `PreviewPage`, the live preview, which serializes to a
//   standalone HTML document (`PreviewPage::to_html`).
// - `generate_landing_page_code`, the exportable React component source.
//
// Both outputs carry the same section order, variants, copy, palette and
// fonts. All pitch text is escaped at the point of emission.

pub mod escape;
pub mod motion;
pub mod node;
pub mod preview;
pub mod sections;
pub mod source;

pub use preview::{PreviewPage, render_preview};
pub use sections::{SectionFragment, build_sections};
pub use source::generate_landing_page_code;
