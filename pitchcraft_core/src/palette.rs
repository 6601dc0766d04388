// Static lookup tables for pitch branding and landing-page layouts.
//
// Two independent color systems live here:
//
// - Brand palettes: one 5-slot `BrandColors` per known industry, stored on
//   the pitch at creation. Unknown industries get the technology palette.
// - Layout palettes: 7-slot `ColorPalette`s bucketed by `IndustryCategory`,
//   a coarser grouping computed by keyword matching on the industry string.
//   The layout selector draws from the bucket; they never touch the pitch.
//
// Also here: industry -> logo style, typography pairings, animation presets
// and the fixed section orders. Every lookup is total: an unseen industry
// resolves to a documented default and no table is ever empty.
//
// Lookups are pure. Calling any of them twice with the same input returns
// the same value.

use crate::layout::{AnimationKind, AnimationSpeed, AnimationStyle, Easing, SectionKind};
use crate::logo::LogoStyle;
use crate::types::{BrandColors, industry_key};
use serde::Serialize;

// ---------------------------------------------------------------------------
// Brand palettes (per industry)
// ---------------------------------------------------------------------------

/// Industry whose palette and logo style apply when a lookup misses.
pub const DEFAULT_BRAND_INDUSTRY: &str = "technology";

/// primary, secondary, accent, background, text
const BRAND_PALETTES: [(&str, [&str; 5]); 10] = [
    ("technology", ["#4F46E5", "#818CF8", "#A78BFA", "#F8FAFC", "#1E293B"]),
    ("healthcare", ["#0EA5E9", "#38BDF8", "#22D3EE", "#F0F9FF", "#0C4A6E"]),
    ("education", ["#F59E0B", "#FBBF24", "#FCD34D", "#FFFBEB", "#78350F"]),
    ("finance", ["#059669", "#10B981", "#34D399", "#ECFDF5", "#064E3B"]),
    ("e-commerce", ["#8B5CF6", "#A78BFA", "#C4B5FD", "#FAF5FF", "#5B21B6"]),
    ("food & beverage", ["#EF4444", "#F87171", "#FCA5A5", "#FEF2F2", "#991B1B"]),
    ("sustainability", ["#2E7D32", "#66BB6A", "#81C784", "#F1F8E9", "#1B5E20"]),
    ("entertainment", ["#EC4899", "#F472B6", "#F9A8D4", "#FDF2F8", "#831843"]),
    ("travel", ["#14B8A6", "#2DD4BF", "#5EEAD4", "#F0FDFA", "#134E4A"]),
    ("real estate", ["#7C3AED", "#8B5CF6", "#A78BFA", "#FAF5FF", "#5B21B6"]),
];

fn brand_slots(industry: &str) -> &'static [&'static str; 5] {
    let key = industry_key(industry);
    match BRAND_PALETTES.iter().find(|(name, _)| *name == key) {
        Some((_, slots)) => slots,
        None => {
            log::debug!("no brand palette for industry '{industry}', using {DEFAULT_BRAND_INDUSTRY}");
            &BRAND_PALETTES[0].1
        }
    }
}

/// The brand palette for an industry (case-insensitive, default technology).
pub fn brand_colors(industry: &str) -> BrandColors {
    let [primary, secondary, accent, background, text] = *brand_slots(industry);
    BrandColors {
        primary: primary.to_string(),
        secondary: secondary.to_string(),
        accent: accent.to_string(),
        background: background.to_string(),
        text: text.to_string(),
    }
}

/// Whether `colors` is exactly one of the per-industry brand palettes.
pub fn is_brand_palette(colors: &BrandColors) -> bool {
    BRAND_PALETTES.iter().any(|(name, _)| brand_colors(name) == *colors)
}

// ---------------------------------------------------------------------------
// Logo style (per industry)
// ---------------------------------------------------------------------------

const LOGO_STYLES: [(&str, LogoStyle); 10] = [
    ("technology", LogoStyle::Tech),
    ("healthcare", LogoStyle::Abstract),
    ("education", LogoStyle::Lettermark),
    ("finance", LogoStyle::Geometric),
    ("e-commerce", LogoStyle::Minimal),
    ("food & beverage", LogoStyle::Abstract),
    ("sustainability", LogoStyle::Geometric),
    ("entertainment", LogoStyle::Abstract),
    ("travel", LogoStyle::Minimal),
    ("real estate", LogoStyle::Geometric),
];

/// The logo style for an industry. Unknown industries get `Lettermark`.
pub fn logo_style_for(industry: &str) -> LogoStyle {
    let key = industry_key(industry);
    LOGO_STYLES
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, style)| *style)
        .unwrap_or(LogoStyle::Lettermark)
}

// ---------------------------------------------------------------------------
// Industry categories and layout palettes
// ---------------------------------------------------------------------------

/// Coarse industry grouping used only to bucket layout palettes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IndustryCategory {
    Tech,
    Health,
    RealEstate,
    Education,
    Marketing,
    Fintech,
    Default,
}

/// Keyword lists in match order. The first category with any keyword
/// contained in the lowercased industry wins.
///
/// Matching is by substring, so "sustainability" and "entertainment" land
/// in `Tech` through "ai".
const CATEGORY_KEYWORDS: [(IndustryCategory, &[&str]); 6] = [
    (IndustryCategory::Tech, &["tech", "ai", "software", "saas"]),
    (IndustryCategory::Health, &["health", "fitness", "wellness", "medical"]),
    (IndustryCategory::RealEstate, &["real estate", "property"]),
    (IndustryCategory::Education, &["education", "edtech", "learning"]),
    (IndustryCategory::Marketing, &["marketing", "ecommerce", "e-commerce", "retail"]),
    (IndustryCategory::Fintech, &["fintech", "finance", "banking"]),
];

/// Classify a free-text industry into a category.
pub fn classify_industry(industry: &str) -> IndustryCategory {
    let lower = industry.to_lowercase();
    CATEGORY_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| lower.contains(k)))
        .map(|(category, _)| *category)
        .unwrap_or(IndustryCategory::Default)
}

/// Seven-slot palette used by the landing-page renderer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorPalette {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub accent: &'static str,
    pub background: &'static str,
    /// Cards and panels drawn over the background.
    pub surface: &'static str,
    pub text: &'static str,
    pub text_secondary: &'static str,
}

const fn palette(s: [&'static str; 7]) -> ColorPalette {
    ColorPalette {
        primary: s[0],
        secondary: s[1],
        accent: s[2],
        background: s[3],
        surface: s[4],
        text: s[5],
        text_secondary: s[6],
    }
}

const TECH_PALETTES: [ColorPalette; 3] = [
    palette(["#4F46E5", "#7C3AED", "#06B6D4", "#0a0a0a", "#1a1a1a", "#ffffff", "#a1a1aa"]),
    palette(["#3B82F6", "#8B5CF6", "#14B8A6", "#050505", "#151515", "#f5f5f5", "#9ca3af"]),
    palette(["#6366F1", "#A855F7", "#22D3EE", "#0b0b0b", "#1e1e1e", "#fafafa", "#94a3b8"]),
];

const HEALTH_PALETTES: [ColorPalette; 3] = [
    palette(["#14B8A6", "#10B981", "#06B6D4", "#f8f9fa", "#ffffff", "#1f2937", "#6b7280"]),
    palette(["#0D9488", "#059669", "#0EA5E9", "#f1f5f9", "#ffffff", "#0f172a", "#64748b"]),
    palette(["#06B6D4", "#14B8A6", "#22C55E", "#fafafa", "#f8f9fa", "#111827", "#4b5563"]),
];

const REAL_ESTATE_PALETTES: [ColorPalette; 2] = [
    palette(["#78716C", "#A78BFA", "#F59E0B", "#1c1917", "#292524", "#fafaf9", "#a8a29e"]),
    palette(["#57534E", "#14B8A6", "#FBBF24", "#0c0a09", "#1c1917", "#f5f5f4", "#d6d3d1"]),
];

const EDUCATION_PALETTES: [ColorPalette; 3] = [
    palette(["#8B5CF6", "#EC4899", "#F59E0B", "#faf5ff", "#ffffff", "#1e1b4b", "#6b7280"]),
    palette(["#A855F7", "#D946EF", "#F97316", "#fdf4ff", "#fefefe", "#4c1d95", "#7c3aed"]),
    palette(["#7C3AED", "#C026D3", "#FB923C", "#f5f3ff", "#ffffff", "#2e1065", "#6d28d9"]),
];

const MARKETING_PALETTES: [ColorPalette; 3] = [
    palette(["#F97316", "#EC4899", "#FBBF24", "#0a0a0a", "#1a1a1a", "#ffffff", "#d1d5db"]),
    palette(["#FB923C", "#F472B6", "#FDE047", "#050505", "#171717", "#fafafa", "#cbd5e1"]),
    palette(["#EA580C", "#DB2777", "#EAB308", "#0f0f0f", "#1f1f1f", "#f8fafc", "#e2e8f0"]),
];

const FINTECH_PALETTES: [ColorPalette; 2] = [
    palette(["#059669", "#0284C7", "#FBBF24", "#0a0a0a", "#1a1a1a", "#ffffff", "#9ca3af"]),
    palette(["#10B981", "#0EA5E9", "#F59E0B", "#020617", "#0f172a", "#f8fafc", "#94a3b8"]),
];

const DEFAULT_PALETTES: [ColorPalette; 1] = [palette([
    "#4F46E5", "#8B5CF6", "#14B8A6", "#0b0b0b", "#1a1a1a", "#ffffff", "#a1a1aa",
])];

/// The layout palettes of a category. Never empty.
pub fn category_palettes(category: IndustryCategory) -> &'static [ColorPalette] {
    match category {
        IndustryCategory::Tech => &TECH_PALETTES,
        IndustryCategory::Health => &HEALTH_PALETTES,
        IndustryCategory::RealEstate => &REAL_ESTATE_PALETTES,
        IndustryCategory::Education => &EDUCATION_PALETTES,
        IndustryCategory::Marketing => &MARKETING_PALETTES,
        IndustryCategory::Fintech => &FINTECH_PALETTES,
        IndustryCategory::Default => &DEFAULT_PALETTES,
    }
}

// ---------------------------------------------------------------------------
// Typography, animation, section orders
// ---------------------------------------------------------------------------

/// Font families for one landing page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Typography {
    pub heading: &'static str,
    pub body: &'static str,
    pub display: &'static str,
}

const fn fonts(heading: &'static str, body: &'static str, display: &'static str) -> Typography {
    Typography { heading, body, display }
}

pub const TYPOGRAPHY_PAIRINGS: [Typography; 6] = [
    fonts("Poppins", "Inter", "Poppins"),
    fonts("Montserrat", "Open Sans", "Montserrat"),
    fonts("Space Grotesk", "Inter", "Space Grotesk"),
    fonts("Plus Jakarta Sans", "Inter", "Plus Jakarta Sans"),
    fonts("Outfit", "Manrope", "Outfit"),
    fonts("Sora", "DM Sans", "Sora"),
];

const fn anim(kind: AnimationKind, speed: AnimationSpeed, easing: Easing) -> AnimationStyle {
    AnimationStyle { kind, speed, easing }
}

pub const ANIMATION_STYLES: [AnimationStyle; 5] = [
    anim(AnimationKind::Fade, AnimationSpeed::Medium, Easing::EaseInOut),
    anim(AnimationKind::Slide, AnimationSpeed::Fast, Easing::EaseOut),
    anim(AnimationKind::Zoom, AnimationSpeed::Slow, Easing::EaseInOut),
    anim(AnimationKind::Glow, AnimationSpeed::Medium, Easing::Linear),
    anim(AnimationKind::Parallax, AnimationSpeed::Slow, Easing::EaseOut),
];

use SectionKind::{Cta, Features, Footer, Hero, Pricing, Problem, Solution, Stats};

/// The five section permutations. Hero is always first, footer always last.
pub const SECTION_ORDERS: [&[SectionKind]; 5] = [
    &[Hero, Features, Problem, Solution, Pricing, Cta, Footer],
    &[Hero, Problem, Solution, Features, Pricing, Cta, Footer],
    &[Hero, Solution, Features, Pricing, Problem, Cta, Footer],
    &[Hero, Features, Pricing, Problem, Solution, Cta, Footer],
    &[Hero, Stats, Features, Problem, Solution, Cta, Footer],
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::KNOWN_INDUSTRIES;

    #[test]
    fn every_known_industry_has_its_own_brand_palette() {
        for industry in KNOWN_INDUSTRIES {
            assert!(BRAND_PALETTES.iter().any(|(name, _)| *name == industry), "{industry}");
        }
        assert_eq!(brand_colors("food & beverage").primary, "#EF4444");
        assert_eq!(brand_colors("Sustainability").primary, "#2E7D32");
    }

    #[test]
    fn unknown_industry_falls_back_to_technology() {
        assert_eq!(brand_colors("asteroid mining"), brand_colors("technology"));
        assert_eq!(brand_colors(""), brand_colors("technology"));
    }

    #[test]
    fn brand_palette_membership() {
        let mut colors = brand_colors("travel");
        assert!(is_brand_palette(&colors));
        colors.accent = "#000000".into();
        assert!(!is_brand_palette(&colors));
    }

    #[test]
    fn logo_style_table() {
        assert_eq!(logo_style_for("technology"), LogoStyle::Tech);
        assert_eq!(logo_style_for("Food & Beverage"), LogoStyle::Abstract);
        assert_eq!(logo_style_for("e-commerce"), LogoStyle::Minimal);
        assert_eq!(logo_style_for("real estate"), LogoStyle::Geometric);
        assert_eq!(logo_style_for("education"), LogoStyle::Lettermark);
        assert_eq!(logo_style_for("knitting"), LogoStyle::Lettermark);
    }

    #[test]
    fn classifier_matches_keywords_in_order() {
        assert_eq!(classify_industry("technology"), IndustryCategory::Tech);
        assert_eq!(classify_industry("SaaS tools"), IndustryCategory::Tech);
        assert_eq!(classify_industry("healthcare"), IndustryCategory::Health);
        assert_eq!(classify_industry("Real Estate"), IndustryCategory::RealEstate);
        assert_eq!(classify_industry("education"), IndustryCategory::Education);
        assert_eq!(classify_industry("e-commerce"), IndustryCategory::Marketing);
        assert_eq!(classify_industry("finance"), IndustryCategory::Fintech);
        assert_eq!(classify_industry("travel"), IndustryCategory::Default);
        assert_eq!(classify_industry("food & beverage"), IndustryCategory::Default);
    }

    #[test]
    fn classifier_substring_quirk() {
        // "ai" appears inside both words.
        assert_eq!(classify_industry("sustainability"), IndustryCategory::Tech);
        assert_eq!(classify_industry("entertainment"), IndustryCategory::Tech);
    }

    #[test]
    fn classifier_is_idempotent() {
        for industry in KNOWN_INDUSTRIES {
            assert_eq!(classify_industry(industry), classify_industry(industry));
            assert_eq!(brand_colors(industry), brand_colors(industry));
        }
    }

    #[test]
    fn category_bucket_sizes() {
        let sizes: Vec<usize> = [
            IndustryCategory::Tech,
            IndustryCategory::Health,
            IndustryCategory::RealEstate,
            IndustryCategory::Education,
            IndustryCategory::Marketing,
            IndustryCategory::Fintech,
            IndustryCategory::Default,
        ]
        .into_iter()
        .map(|c| category_palettes(c).len())
        .collect();
        assert_eq!(sizes, vec![3, 3, 2, 3, 3, 2, 1]);
    }

    #[test]
    fn animation_presets() {
        assert_eq!(ANIMATION_STYLES[1].kind, AnimationKind::Slide);
        assert_eq!(ANIMATION_STYLES[1].speed, AnimationSpeed::Fast);
        assert_eq!(ANIMATION_STYLES[3].easing, Easing::Linear);
    }
}
