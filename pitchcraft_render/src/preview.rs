// Live preview of a pitch rendered with one layout variation.
//
// `render_preview` builds the page tree; `PreviewPage::to_html` serializes it
// as a standalone HTML document that loads Tailwind, lucide icons and the
// layout's Google Fonts from CDNs. The preview is static: an element's
// entrance animation is kept as `data-animate`, `data-duration` and
// `data-delay` attributes rather than played.

use crate::escape::{escape_attr, escape_text};
use crate::motion::Motion;
use crate::node::{Element, Icon, Node};
use crate::sections::{SectionFragment, build_sections, page_style};
use pitchcraft_core::layout::{LayoutVariation, SectionKind};
use pitchcraft_core::pitch::Pitch;
use pitchcraft_core::types::LayoutId;
use serde::Serialize;
use std::fmt::Write;

const TAILWIND_CDN: &str = "https://cdn.tailwindcss.com";
const LUCIDE_CDN: &str = "https://unpkg.com/lucide@latest";
const FONTS_CSS: &str = "https://fonts.googleapis.com/css2";

/// The page tree for one pitch under one layout.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewPage {
    pub layout_id: LayoutId,
    pub title: String,
    /// Font families to load, deduplicated, heading first.
    pub fonts: Vec<&'static str>,
    /// Root style: body font and page colors.
    pub style: Vec<(&'static str, String)>,
    pub sections: Vec<SectionFragment>,
}

pub fn render_preview(pitch: &Pitch, layout: &LayoutVariation) -> PreviewPage {
    let t = layout.typography;
    let mut fonts = Vec::with_capacity(3);
    for family in [t.heading, t.body, t.display] {
        if !fonts.contains(&family) {
            fonts.push(family);
        }
    }
    log::debug!("rendering preview of {} with layout {}", pitch.id, layout.id);
    PreviewPage {
        layout_id: layout.id.clone(),
        title: format!("{} | {}", pitch.name, pitch.tagline),
        fonts,
        style: page_style(layout),
        sections: build_sections(pitch, layout),
    }
}

impl PreviewPage {
    pub fn section_order(&self) -> Vec<SectionKind> {
        self.sections.iter().map(|s| s.kind).collect()
    }

    /// Variant label chosen for `kind`, if the page has that section.
    pub fn variant(&self, kind: SectionKind) -> Option<&'static str> {
        self.sections.iter().find(|s| s.kind == kind).map(|s| s.variant)
    }

    pub fn to_html(&self) -> String {
        let mut out = String::with_capacity(32 * 1024);
        out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        out.push_str("<meta charset=\"utf-8\">\n");
        out.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
        let _ = writeln!(out, "<title>{}</title>", escape_text(&self.title));
        let _ = writeln!(out, "<script src=\"{TAILWIND_CDN}\"></script>");
        let _ = writeln!(out, "<script src=\"{LUCIDE_CDN}\"></script>");
        let _ = writeln!(out, "<link rel=\"stylesheet\" href=\"{}\">", escape_attr(&fonts_url(&self.fonts)));
        out.push_str("</head>\n");
        let _ = writeln!(out, "<body class=\"min-h-screen\" style=\"{}\">", escape_attr(&css(&self.style)));
        for section in &self.sections {
            let _ = writeln!(out, "<!-- {} ({}) -->", section.kind, section.variant);
            for node in &section.nodes {
                write_node(&mut out, node);
                out.push('\n');
            }
        }
        out.push_str("<script>lucide.createIcons();</script>\n</body>\n</html>\n");
        out
    }
}

fn fonts_url(fonts: &[&str]) -> String {
    let mut url = String::from(FONTS_CSS);
    for (i, family) in fonts.iter().enumerate() {
        url.push(if i == 0 { '?' } else { '&' });
        let _ = write!(url, "family={}:wght@400;600;700", family.replace(' ', "+"));
    }
    url.push_str("&display=swap");
    url
}

/// `backgroundColor` -> `background-color`; `WebkitTextFillColor` ->
/// `-webkit-text-fill-color`.
fn css_property(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    for c in key.chars() {
        if c.is_ascii_uppercase() {
            out.push('-');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

fn css(style: &[(&str, String)]) -> String {
    style
        .iter()
        .map(|(k, v)| format!("{}: {v}", css_property(k)))
        .collect::<Vec<_>>()
        .join("; ")
}

fn write_node(out: &mut String, node: &Node) {
    match node {
        Node::Text { text } => out.push_str(&escape_text(text)),
        Node::Element(el) => write_element(out, el),
        Node::Icon(icon) => write_icon(out, icon),
    }
}

fn write_element(out: &mut String, el: &Element) {
    let _ = write!(out, "<{}", el.tag);
    if !el.class.is_empty() {
        let _ = write!(out, " class=\"{}\"", escape_attr(&el.class));
    }
    if !el.style.is_empty() {
        let _ = write!(out, " style=\"{}\"", escape_attr(&css(&el.style)));
    }
    for (k, v) in &el.attrs {
        let _ = write!(out, " {k}=\"{}\"", escape_attr(v));
    }
    if let Some(motion) = &el.motion {
        write_motion(out, motion);
    }
    out.push('>');
    if el.is_void() {
        return;
    }
    for child in &el.children {
        write_node(out, child);
    }
    let _ = write!(out, "</{}>", el.tag);
}

fn write_motion(out: &mut String, m: &Motion) {
    let t = &m.transition;
    let _ = write!(
        out,
        " data-animate=\"{}\" data-duration=\"{}\" data-delay=\"{}\"",
        m.kind.as_str(),
        t.duration,
        t.delay
    );
}

fn write_icon(out: &mut String, icon: &Icon) {
    let _ = write!(out, "<i data-lucide=\"{}\" class=\"{}\"", icon.kind.html_name(), icon.class);
    if let Some(color) = &icon.color {
        let _ = write!(out, " style=\"color: {}\"", escape_attr(color));
    }
    out.push_str("></i>");
}
