// React source for a pitch's landing page.
//
// Emits one self-contained `.tsx` component from the same section fragments
// the live preview renders, so the exported page matches what the user saw.
// The component depends on `motion/react` for entrance animations and
// `lucide-react` for icons; styling is Tailwind classes plus inline styles
// carrying the layout's palette and fonts.
//
// Output shape:
//
//     import { motion } from 'motion/react';
//     import { Check, ArrowRight, ... } from 'lucide-react';
//
//     export default function AcmeLanding() {
//       return (
//         <div className="min-h-screen" style={{ fontFamily: ... }}>
//           {/* Hero Section (centered) */}
//           ...
//         </div>
//       );
//     }

use crate::escape::{component_name, escape_attr, escape_js_string, escape_text};
use crate::motion::{Motion, Trigger};
use crate::node::{Element, Icon, IconKind, Node};
use crate::sections::{SectionFragment, build_sections, page_style};
use pitchcraft_core::layout::{LayoutVariation, SectionKind};
use pitchcraft_core::pitch::Pitch;
use std::fmt::Write;

const INDENT: &str = "  ";

/// Generate the React component source for `pitch` under `layout`.
pub fn generate_landing_page_code(pitch: &Pitch, layout: &LayoutVariation) -> String {
    let sections = build_sections(pitch, layout);
    let name = component_name(&pitch.name);
    log::debug!("emitting {name}Landing for layout {}", layout.id);

    let mut out = String::with_capacity(48 * 1024);
    out.push_str("import { motion } from 'motion/react';\n");
    let icons: Vec<&str> = IconKind::ALL.iter().map(|k| k.component()).collect();
    let _ = writeln!(out, "import {{ {} }} from 'lucide-react';", icons.join(", "));
    out.push('\n');
    let _ = writeln!(out, "export default function {name}Landing() {{");
    let _ = writeln!(out, "{INDENT}return (");

    let mut w = JsxWriter { out, depth: 2 };
    w.line(&format!("<div className=\"min-h-screen\" style={}>", style_prop(&page_style(layout))));
    w.depth += 1;
    for section in &sections {
        w.fragment(section);
    }
    w.depth -= 1;
    w.line("</div>");

    let mut out = w.out;
    let _ = writeln!(out, "{INDENT});");
    out.push_str("}\n");
    out
}

fn section_title(kind: SectionKind) -> &'static str {
    match kind {
        SectionKind::Hero => "Hero",
        SectionKind::Features => "Features",
        SectionKind::Problem => "Problem",
        SectionKind::Solution => "Solution",
        SectionKind::Pricing => "Pricing",
        SectionKind::Stats => "Stats",
        SectionKind::Cta => "CTA",
        SectionKind::Footer => "Footer",
    }
}

struct JsxWriter {
    out: String,
    depth: usize,
}

impl JsxWriter {
    fn line(&mut self, s: &str) {
        for _ in 0..self.depth {
            self.out.push_str(INDENT);
        }
        self.out.push_str(s);
        self.out.push('\n');
    }

    fn fragment(&mut self, section: &SectionFragment) {
        let title = section_title(section.kind);
        if section.variant == "default" {
            self.line(&format!("{{/* {title} Section */}}"));
        } else {
            self.line(&format!("{{/* {title} Section ({}) */}}", section.variant));
        }
        for node in &section.nodes {
            self.node(node);
        }
    }

    fn node(&mut self, node: &Node) {
        match node {
            Node::Text { text } => self.line(&escape_text(text)),
            Node::Icon(icon) => self.line(&icon_tag(icon)),
            Node::Element(el) => self.element(el),
        }
    }

    fn element(&mut self, el: &Element) {
        let tag = match el.motion {
            Some(_) => format!("motion.{}", el.tag),
            None => el.tag.to_string(),
        };
        let open = format!("<{tag}{}", props(el));

        if el.children.is_empty() {
            self.line(&format!("{open} />"));
            return;
        }
        if let [Node::Text { text }] = el.children.as_slice() {
            self.line(&format!("{open}>{}</{tag}>", escape_text(text)));
            return;
        }
        self.line(&format!("{open}>"));
        self.depth += 1;
        for child in &el.children {
            self.node(child);
        }
        self.depth -= 1;
        self.line(&format!("</{tag}>"));
    }
}

fn props(el: &Element) -> String {
    let mut out = String::new();
    if !el.class.is_empty() {
        let _ = write!(out, " className=\"{}\"", escape_attr(&el.class));
    }
    for (k, v) in &el.attrs {
        let _ = write!(out, " {k}=\"{}\"", escape_attr(v));
    }
    if !el.style.is_empty() {
        let _ = write!(out, " style={}", style_prop(&el.style));
    }
    if let Some(motion) = &el.motion {
        out.push_str(&motion_props(motion));
    }
    out
}

/// `{{ key: 'value', ... }}`
fn style_prop(style: &[(&str, String)]) -> String {
    let body = style
        .iter()
        .map(|(k, v)| format!("{k}: '{}'", escape_js_string(v)))
        .collect::<Vec<_>>()
        .join(", ");
    format!("{{{{ {body} }}}}")
}

fn object(pairs: &[(&str, f32)]) -> String {
    let body = pairs
        .iter()
        .map(|(k, v)| format!("{k}: {v}"))
        .collect::<Vec<_>>()
        .join(", ");
    format!("{{{{ {body} }}}}")
}

fn motion_props(m: &Motion) -> String {
    let mut out = format!(" initial={}", object(&m.initial));
    match m.trigger {
        Trigger::Mount => {
            let _ = write!(out, " animate={}", object(&m.target));
        }
        Trigger::InViewOnce => {
            let _ = write!(out, " whileInView={} viewport={{{{ once: true }}}}", object(&m.target));
        }
    }
    let t = &m.transition;
    let _ = write!(out, " transition={{{{ duration: {}, delay: {}", t.duration, t.delay);
    if let Some(ease) = t.ease {
        let _ = write!(out, ", ease: '{}'", ease.as_str());
    }
    out.push_str(" }}");
    out
}

fn icon_tag(icon: &Icon) -> String {
    let mut tag = format!("<{} className=\"{}\"", icon.kind.component(), icon.class);
    if let Some(color) = &icon.color {
        let _ = write!(tag, " style={{{{ color: '{}' }}}}", escape_js_string(color));
    }
    tag.push_str(" />");
    tag
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::motion_for;
    use pitchcraft_core::palette::ANIMATION_STYLES;

    #[test]
    fn motion_props_on_mount() {
        let props = motion_props(&motion_for(ANIMATION_STYLES[0], 1));
        assert_eq!(
            props,
            " initial={{ opacity: 0, y: 20 }} animate={{ opacity: 1, y: 0 }} \
             transition={{ duration: 0.5, delay: 0.1, ease: 'easeInOut' }}"
        );
    }

    #[test]
    fn parallax_uses_while_in_view() {
        let props = motion_props(&motion_for(ANIMATION_STYLES[4], 0));
        assert!(props.contains("whileInView={{ opacity: 1, y: 0 }} viewport={{ once: true }}"));
    }

    #[test]
    fn glow_omits_ease() {
        let props = motion_props(&motion_for(ANIMATION_STYLES[3], 0));
        assert!(!props.contains("ease:"));
    }

    #[test]
    fn single_text_child_stays_inline() {
        let mut w = JsxWriter { out: String::new(), depth: 0 };
        w.element(&Element::new("h3").class("text-xl").text("A <b>"));
        assert_eq!(w.out, "<h3 className=\"text-xl\">A &lt;b&gt;</h3>\n");
    }

    #[test]
    fn empty_element_self_closes() {
        let mut w = JsxWriter { out: String::new(), depth: 1 };
        w.element(&Element::new("br"));
        assert_eq!(w.out, "  <br />\n");
    }

    #[test]
    fn icon_with_color() {
        let tag = icon_tag(&Icon::new(IconKind::Check, "w-5 h-5").color("#10B981"));
        assert_eq!(tag, "<Check className=\"w-5 h-5\" style={{ color: '#10B981' }} />");
    }
}
