// SVG logo synthesis.
//
// Five template builders, one per `LogoStyle`. Every template draws on a
// 200x200 viewBox, uses a two-stop linear gradient from `primary` to
// `secondary` as its dominant fill, and uses `accent` only for decoration.
// The startup's initials are rendered as centered text:
//
// - geometric, tech, minimal: first character of the name
// - lettermark: first character of each of the first two space-separated
//   words
// - abstract: no text
//
// An empty name yields empty initials and the `<text>` element is omitted.
// Initials are XML-escaped, so a name starting with '<' or '&' still yields
// a well-formed document. Each template's gradient has its own id so several
// logos can share one HTML page.
//
// The abstract template is the one non-deterministic builder: it draws a
// single value from the caller's `RandomSource` to move the control point
// of its decorative curve. Same inputs can therefore produce slightly
// different curves across calls. All other templates are pure.
//
// `svg_to_data_url` wraps a finished document in a base64 `data:` URL for
// embedding in an `<img>` tag.

use crate::palette::logo_style_for;
use crate::types::LogoColors;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use pitchcraft_prng::RandomSource;
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// Visual template of a logo.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogoStyle {
    Geometric,
    Lettermark,
    Abstract,
    Tech,
    Minimal,
}

impl LogoStyle {
    /// Order used by `generate_logo_variations`.
    pub const ALL: [LogoStyle; 5] = [
        LogoStyle::Geometric,
        LogoStyle::Lettermark,
        LogoStyle::Abstract,
        LogoStyle::Tech,
        LogoStyle::Minimal,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            LogoStyle::Geometric => "geometric",
            LogoStyle::Lettermark => "lettermark",
            LogoStyle::Abstract => "abstract",
            LogoStyle::Tech => "tech",
            LogoStyle::Minimal => "minimal",
        }
    }

    /// Gradient element id, distinct per style.
    fn gradient_id(self) -> &'static str {
        match self {
            LogoStyle::Geometric => "grad1",
            LogoStyle::Lettermark => "grad2",
            LogoStyle::Abstract => "grad3",
            LogoStyle::Tech => "grad4",
            LogoStyle::Minimal => "grad5",
        }
    }
}

/// Generate the logo for an industry's style.
pub fn generate_logo(
    name: &str,
    industry: &str,
    colors: &LogoColors,
    rng: &mut impl RandomSource,
) -> String {
    let style = logo_style_for(industry);
    log::debug!("logo for '{name}' ({industry}) uses style {}", style.as_str());
    render_logo(style, name, colors, rng)
}

/// Generate one logo per style, in `LogoStyle::ALL` order.
pub fn generate_logo_variations(
    name: &str,
    industry: &str,
    colors: &LogoColors,
    rng: &mut impl RandomSource,
) -> Vec<String> {
    log::debug!("logo variations for '{name}' ({industry})");
    LogoStyle::ALL
        .iter()
        .map(|style| render_logo(*style, name, colors, rng))
        .collect()
}

/// Render one template. Only `LogoStyle::Abstract` draws from `rng`.
pub fn render_logo(
    style: LogoStyle,
    name: &str,
    colors: &LogoColors,
    rng: &mut impl RandomSource,
) -> String {
    let mut svg = String::with_capacity(1024);
    svg.push_str("<svg viewBox=\"0 0 200 200\" xmlns=\"http://www.w3.org/2000/svg\">\n");
    write_gradient(&mut svg, style.gradient_id(), colors);
    let grad = style.gradient_id();

    match style {
        LogoStyle::Geometric => {
            let _ = writeln!(
                svg,
                "  <rect x=\"20\" y=\"20\" width=\"160\" height=\"160\" rx=\"20\" fill=\"url(#{grad})\"/>"
            );
            let _ = writeln!(
                svg,
                "  <polygon points=\"100,50 150,100 100,150 50,100\" fill=\"{}\" opacity=\"0.3\"/>",
                colors.accent
            );
            write_text(&mut svg, &first_initial(name), 125, 80, "bold", "white");
        }
        LogoStyle::Lettermark => {
            let _ = writeln!(svg, "  <circle cx=\"100\" cy=\"100\" r=\"90\" fill=\"url(#{grad})\"/>");
            let _ = writeln!(
                svg,
                "  <circle cx=\"100\" cy=\"100\" r=\"75\" fill=\"none\" stroke=\"{}\" stroke-width=\"3\" opacity=\"0.5\"/>",
                colors.accent
            );
            write_text(&mut svg, &lettermark_initials(name), 125, 60, "bold", "white");
        }
        LogoStyle::Abstract => {
            let control_y = 50.0 + rng.next_f64() * 30.0;
            let _ = writeln!(svg, "  <circle cx=\"100\" cy=\"100\" r=\"90\" fill=\"url(#{grad})\"/>");
            let _ = writeln!(
                svg,
                "  <path d=\"M 50 100 Q 100 {control_y:.2} 150 100 T 150 150\" fill=\"none\" stroke=\"{}\" stroke-width=\"15\" opacity=\"0.6\"/>",
                colors.accent
            );
            svg.push_str("  <circle cx=\"70\" cy=\"80\" r=\"20\" fill=\"white\" opacity=\"0.3\"/>\n");
            svg.push_str("  <circle cx=\"130\" cy=\"120\" r=\"25\" fill=\"white\" opacity=\"0.2\"/>\n");
        }
        LogoStyle::Tech => {
            let _ = writeln!(
                svg,
                "  <rect x=\"30\" y=\"30\" width=\"140\" height=\"140\" rx=\"30\" fill=\"url(#{grad})\"/>"
            );
            for (x, y) in [(45, 45), (125, 45), (45, 125), (125, 125)] {
                let _ = writeln!(
                    svg,
                    "  <rect x=\"{x}\" y=\"{y}\" width=\"30\" height=\"30\" rx=\"5\" fill=\"{}\"/>",
                    colors.accent
                );
            }
            write_text(&mut svg, &first_initial(name), 120, 50, "bold", "white");
        }
        LogoStyle::Minimal => {
            let _ = writeln!(
                svg,
                "  <circle cx=\"100\" cy=\"100\" r=\"80\" fill=\"none\" stroke=\"url(#{grad})\" stroke-width=\"12\"/>"
            );
            let _ = writeln!(svg, "  <circle cx=\"158\" cy=\"42\" r=\"8\" fill=\"{}\"/>", colors.accent);
            write_text(&mut svg, &first_initial(name), 125, 70, "300", &colors.primary);
        }
    }

    svg.push_str("</svg>\n");
    svg
}

fn write_gradient(svg: &mut String, id: &str, colors: &LogoColors) {
    let _ = write!(
        svg,
        "  <defs>\n    <linearGradient id=\"{id}\" x1=\"0%\" y1=\"0%\" x2=\"100%\" y2=\"100%\">\n      \
         <stop offset=\"0%\" style=\"stop-color:{};stop-opacity:1\"/>\n      \
         <stop offset=\"100%\" style=\"stop-color:{};stop-opacity:1\"/>\n    \
         </linearGradient>\n  </defs>\n",
        colors.primary, colors.secondary
    );
}

/// Centered text. Skipped when `initials` is empty.
fn write_text(svg: &mut String, initials: &str, y: u32, size: u32, weight: &str, fill: &str) {
    if initials.is_empty() {
        return;
    }
    let _ = writeln!(
        svg,
        "  <text x=\"100\" y=\"{y}\" font-family=\"Arial, sans-serif\" font-size=\"{size}\" \
         font-weight=\"{weight}\" fill=\"{fill}\" text-anchor=\"middle\">{}</text>",
        escape_xml(initials)
    );
}

/// The uppercased first character of `name`, or "" for an empty name.
pub fn first_initial(name: &str) -> String {
    name.chars().next().map(|c| c.to_uppercase().collect()).unwrap_or_default()
}

/// Up to two uppercased initials, one per space-separated word.
pub fn lettermark_initials(name: &str) -> String {
    name.split(' ')
        .filter_map(|word| word.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}

/// Escape the five XML special characters.
pub fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

/// Wrap an SVG document as a base64 `data:image/svg+xml` URL.
pub fn svg_to_data_url(svg: &str) -> String {
    format!("data:image/svg+xml;base64,{}", STANDARD.encode(svg.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pitchcraft_prng::{PitchRng, SequenceRng};

    fn colors() -> LogoColors {
        LogoColors {
            primary: "#111111".into(),
            secondary: "#222222".into(),
            accent: "#333333".into(),
        }
    }

    /// Hex colors appearing in a document, deduplicated.
    fn hex_colors(svg: &str) -> std::collections::BTreeSet<String> {
        svg.match_indices('#')
            .filter_map(|(i, _)| svg.get(i..i + 7))
            .filter(|s| s[1..].chars().all(|c| c.is_ascii_hexdigit()))
            .map(str::to_string)
            .collect()
    }

    fn text_content(svg: &str) -> Option<&str> {
        let start = svg.find("<text")?;
        let open_end = start + svg[start..].find('>')? + 1;
        let close = open_end + svg[open_end..].find("</text>")?;
        Some(&svg[open_end..close])
    }

    #[test]
    fn every_style_uses_exactly_the_three_colors() {
        let mut rng = PitchRng::new(1);
        for style in LogoStyle::ALL {
            let svg = render_logo(style, "Acme", &colors(), &mut rng);
            let expected: std::collections::BTreeSet<String> =
                ["#111111", "#222222", "#333333"].iter().map(|s| s.to_string()).collect();
            assert_eq!(hex_colors(&svg), expected, "{style:?}");
            assert!(svg.contains("viewBox=\"0 0 200 200\""));
            assert!(svg.contains("<linearGradient"));
        }
    }

    #[test]
    fn initials_per_style() {
        let mut rng = SequenceRng::zeros();
        let name = "blue ocean labs";
        for (style, expected) in [
            (LogoStyle::Geometric, Some("B")),
            (LogoStyle::Lettermark, Some("BO")),
            (LogoStyle::Abstract, None),
            (LogoStyle::Tech, Some("B")),
            (LogoStyle::Minimal, Some("B")),
        ] {
            let svg = render_logo(style, name, &colors(), &mut rng);
            assert_eq!(text_content(&svg), expected, "{style:?}");
        }
    }

    #[test]
    fn abstract_logo_never_carries_initials() {
        let mut rng = PitchRng::new(3);
        for name in ["Acme", "blue ocean labs", "<Evil & Co>", "X"] {
            let svg = render_logo(LogoStyle::Abstract, name, &colors(), &mut rng);
            assert!(!svg.contains("<text"), "{name}");
            assert!(svg.contains("<path"));
        }
    }

    #[test]
    fn single_word_lettermark_has_one_letter() {
        assert_eq!(lettermark_initials("MarketplaceHub"), "M");
        assert_eq!(lettermark_initials("two  spaces"), "TS");
    }

    #[test]
    fn empty_name_renders_no_text() {
        let mut rng = SequenceRng::zeros();
        for style in LogoStyle::ALL {
            let svg = render_logo(style, "", &colors(), &mut rng);
            assert!(!svg.contains("<text"), "{style:?}");
            assert!(svg.ends_with("</svg>\n"));
        }
    }

    #[test]
    fn initials_are_escaped() {
        let mut rng = SequenceRng::zeros();
        let svg = render_logo(LogoStyle::Geometric, "<script>", &colors(), &mut rng);
        assert_eq!(text_content(&svg), Some("&lt;"));
        let svg = render_logo(LogoStyle::Lettermark, "& co", &colors(), &mut rng);
        assert_eq!(text_content(&svg), Some("&amp;C"));
    }

    #[test]
    fn abstract_curve_follows_the_draw() {
        let mut rng = SequenceRng::new(vec![0, 500_000]);
        let low = render_logo(LogoStyle::Abstract, "X", &colors(), &mut rng);
        let mid = render_logo(LogoStyle::Abstract, "X", &colors(), &mut rng);
        assert!(low.contains("Q 100 50.00 150 100"));
        assert!(mid.contains("Q 100 65.00 150 100"));
        assert_eq!(rng.draws(), 2);
    }

    #[test]
    fn only_abstract_draws_randomness() {
        let mut rng = SequenceRng::zeros();
        for style in [LogoStyle::Geometric, LogoStyle::Lettermark, LogoStyle::Tech, LogoStyle::Minimal] {
            let a = render_logo(style, "Acme", &colors(), &mut rng);
            let b = render_logo(style, "Acme", &colors(), &mut rng);
            assert_eq!(a, b);
        }
        assert_eq!(rng.draws(), 0);
    }

    #[test]
    fn generate_logo_picks_industry_style() {
        let mut rng = SequenceRng::zeros();
        let svg = generate_logo("Acme", "technology", &colors(), &mut rng);
        assert!(svg.contains("id=\"grad4\""));
        let svg = generate_logo("Acme", "unheard of", &colors(), &mut rng);
        assert!(svg.contains("id=\"grad2\""));
    }

    #[test]
    fn variations_come_in_style_order() {
        let mut rng = SequenceRng::zeros();
        let all = generate_logo_variations("Acme", "travel", &colors(), &mut rng);
        assert_eq!(all.len(), 5);
        for (i, svg) in all.iter().enumerate() {
            assert!(svg.contains(&format!("id=\"grad{}\"", i + 1)));
        }
    }

    #[test]
    fn data_url_is_base64() {
        assert_eq!(svg_to_data_url("<svg/>"), "data:image/svg+xml;base64,PHN2Zy8+");
    }
}
