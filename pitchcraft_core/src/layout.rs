// Landing-page layout variations.
//
// A `LayoutVariation` bundles one value from each independent layout axis:
// hero style, section order, color palette, typography, animation style,
// feature layout and CTA style. The selector draws every axis uniformly and
// independently from its enumeration; the only coupling is the color palette,
// which is first restricted to the pitch's industry category (see
// `palette::classify_industry`) and then drawn uniformly.
//
// Variations are ephemeral. Their `LayoutId` only keys a render; nothing is
// persisted and repeated calls for the same pitch are independent.
//
// The axis enums live here; the fixed tables they index (section orders,
// palettes, typography pairings, animation presets) live in `palette.rs`.
// The renderer in `pitchcraft_render` consumes this record.

use crate::palette::{
    ANIMATION_STYLES, ColorPalette, SECTION_ORDERS, TYPOGRAPHY_PAIRINGS, Typography,
    category_palettes, classify_industry,
};
use crate::pitch::Pitch;
use crate::types::LayoutId;
use pitchcraft_prng::RandomSource;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How many variations `generate_layout_variations` draws by default.
pub const DEFAULT_VARIATION_COUNT: usize = 3;

// ---------------------------------------------------------------------------
// Axis enums
// ---------------------------------------------------------------------------

/// Treatment of the hero section.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HeroStyle {
    /// Headline, tagline and two buttons centered over the page background.
    Centered,
    /// Copy on the left, logo panel on the right.
    Split,
    /// Small left-aligned headline and a text link, no buttons.
    Minimal,
    /// Oversized tagline with its tail in the primary color.
    Bold,
    /// Full-bleed primary-to-secondary gradient with white copy.
    GradientBg,
}

impl HeroStyle {
    pub const ALL: [HeroStyle; 5] = [
        HeroStyle::Centered,
        HeroStyle::Split,
        HeroStyle::Minimal,
        HeroStyle::Bold,
        HeroStyle::GradientBg,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            HeroStyle::Centered => "centered",
            HeroStyle::Split => "split",
            HeroStyle::Minimal => "minimal",
            HeroStyle::Bold => "bold",
            HeroStyle::GradientBg => "gradient-bg",
        }
    }
}

/// Arrangement of the feature items.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FeatureLayout {
    /// Three items in a three-column grid.
    #[serde(rename = "grid-3")]
    Grid3,
    /// Four items in a four-column grid.
    #[serde(rename = "grid-4")]
    Grid4,
    /// Six elevated cards with an icon badge, three per row.
    #[serde(rename = "cards")]
    Cards,
    /// Six compact tiles in a single scrolling row.
    #[serde(rename = "horizontal")]
    Horizontal,
    /// Three full-width rows with the icon beside the text.
    #[serde(rename = "stacked")]
    Stacked,
}

impl FeatureLayout {
    pub const ALL: [FeatureLayout; 5] = [
        FeatureLayout::Grid3,
        FeatureLayout::Grid4,
        FeatureLayout::Cards,
        FeatureLayout::Horizontal,
        FeatureLayout::Stacked,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FeatureLayout::Grid3 => "grid-3",
            FeatureLayout::Grid4 => "grid-4",
            FeatureLayout::Cards => "cards",
            FeatureLayout::Horizontal => "horizontal",
            FeatureLayout::Stacked => "stacked",
        }
    }

    /// Number of feature items this layout shows.
    pub fn item_count(self) -> usize {
        match self {
            FeatureLayout::Grid3 | FeatureLayout::Stacked => 3,
            FeatureLayout::Grid4 => 4,
            FeatureLayout::Cards | FeatureLayout::Horizontal => 6,
        }
    }
}

/// Treatment of the call-to-action section.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CtaStyle {
    /// Rounded gradient box inside the page width.
    Box,
    /// Edge-to-edge primary band.
    FullWidth,
    /// Copy on the left, two buttons on the right.
    Split,
    /// One line of copy and a text link.
    Minimal,
}

impl CtaStyle {
    pub const ALL: [CtaStyle; 4] = [CtaStyle::Box, CtaStyle::FullWidth, CtaStyle::Split, CtaStyle::Minimal];

    pub fn as_str(self) -> &'static str {
        match self {
            CtaStyle::Box => "box",
            CtaStyle::FullWidth => "full-width",
            CtaStyle::Split => "split",
            CtaStyle::Minimal => "minimal",
        }
    }
}

/// A page section. Orders are drawn from `palette::SECTION_ORDERS`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    Hero,
    Features,
    Problem,
    Solution,
    Pricing,
    Stats,
    Cta,
    Footer,
}

impl SectionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            SectionKind::Hero => "hero",
            SectionKind::Features => "features",
            SectionKind::Problem => "problem",
            SectionKind::Solution => "solution",
            SectionKind::Pricing => "pricing",
            SectionKind::Stats => "stats",
            SectionKind::Cta => "cta",
            SectionKind::Footer => "footer",
        }
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimationKind {
    Fade,
    Slide,
    Zoom,
    Glow,
    Parallax,
}

impl AnimationKind {
    pub fn as_str(self) -> &'static str {
        match self {
            AnimationKind::Fade => "fade",
            AnimationKind::Slide => "slide",
            AnimationKind::Zoom => "zoom",
            AnimationKind::Glow => "glow",
            AnimationKind::Parallax => "parallax",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimationSpeed {
    Slow,
    Medium,
    Fast,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Easing {
    EaseInOut,
    EaseOut,
    Linear,
}

impl Easing {
    /// The easing name as the motion library spells it.
    pub fn as_str(self) -> &'static str {
        match self {
            Easing::EaseInOut => "easeInOut",
            Easing::EaseOut => "easeOut",
            Easing::Linear => "linear",
        }
    }
}

/// One entry of `palette::ANIMATION_STYLES`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimationStyle {
    #[serde(rename = "type")]
    pub kind: AnimationKind,
    pub speed: AnimationSpeed,
    pub easing: Easing,
}

// ---------------------------------------------------------------------------
// LayoutVariation
// ---------------------------------------------------------------------------

/// One randomized landing-page configuration.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutVariation {
    pub id: LayoutId,
    pub hero_style: HeroStyle,
    pub section_order: Vec<SectionKind>,
    pub color_palette: ColorPalette,
    pub typography: Typography,
    pub animation_style: AnimationStyle,
    pub feature_layout: FeatureLayout,
    pub cta_style: CtaStyle,
}

/// Draw one layout variation for a pitch.
///
/// Only `pitch.industry` is read. Draw order: id, hero, section order,
/// palette, typography, animation, feature layout, CTA.
pub fn generate_layout_variation(
    pitch: &Pitch,
    now_millis: i64,
    rng: &mut impl RandomSource,
) -> LayoutVariation {
    let id = LayoutId::generate(now_millis, rng);
    let category = classify_industry(&pitch.industry);
    let variation = LayoutVariation {
        id,
        hero_style: *rng.choose(&HeroStyle::ALL),
        section_order: rng.choose(&SECTION_ORDERS).to_vec(),
        color_palette: *rng.choose(category_palettes(category)),
        typography: *rng.choose(&TYPOGRAPHY_PAIRINGS),
        animation_style: *rng.choose(&ANIMATION_STYLES),
        feature_layout: *rng.choose(&FeatureLayout::ALL),
        cta_style: *rng.choose(&CtaStyle::ALL),
    };
    log::debug!(
        "layout {} for '{}': hero={} features={} cta={} category={:?}",
        variation.id,
        pitch.name,
        variation.hero_style.as_str(),
        variation.feature_layout.as_str(),
        variation.cta_style.as_str(),
        category
    );
    variation
}

/// Draw `count` independent variations for the same pitch.
pub fn generate_layout_variations(
    pitch: &Pitch,
    count: usize,
    now_millis: i64,
    rng: &mut impl RandomSource,
) -> Vec<LayoutVariation> {
    (0..count)
        .map(|_| generate_layout_variation(pitch, now_millis, rng))
        .collect()
}
