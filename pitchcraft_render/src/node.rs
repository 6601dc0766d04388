// The renderable tree shared by the live preview and the source emitter.
//
// Section builders produce `Node`s; `preview.rs` serializes them to HTML and
// `source.rs` to JSX. Nodes hold raw, unescaped text. Escaping happens only
// at those two emit points (see `escape.rs`).
//
// Style keys are stored camelCase (`backgroundColor`), the way the JSX
// `style` prop wants them. The HTML writer converts to kebab-case.

use crate::motion::Motion;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Node {
    Element(Element),
    Text { text: String },
    Icon(Icon),
}

impl Node {
    pub fn text(s: impl Into<String>) -> Self {
        Node::Text { text: s.into() }
    }

    /// Concatenated text of this node and its descendants, space-separated.
    pub fn text_content(&self) -> String {
        let mut parts = Vec::new();
        self.collect_text(&mut parts);
        parts.join(" ")
    }

    fn collect_text<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            Node::Text { text } => out.push(text),
            Node::Element(el) => el.children.iter().for_each(|c| c.collect_text(out)),
            Node::Icon(_) => {}
        }
    }

    /// Depth-first visit of every node, this one included.
    pub fn walk<'a>(&'a self, f: &mut impl FnMut(&'a Node)) {
        f(self);
        if let Node::Element(el) = self {
            for child in &el.children {
                child.walk(f);
            }
        }
    }
}

impl From<Element> for Node {
    fn from(el: Element) -> Self {
        Node::Element(el)
    }
}

impl From<Icon> for Node {
    fn from(icon: Icon) -> Self {
        Node::Icon(icon)
    }
}

/// An HTML element with optional entrance animation.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Element {
    pub tag: &'static str,
    /// Space-separated utility classes.
    pub class: String,
    pub style: Vec<(&'static str, String)>,
    pub attrs: Vec<(&'static str, String)>,
    pub motion: Option<Motion>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            class: String::new(),
            style: Vec::new(),
            attrs: Vec::new(),
            motion: None,
            children: Vec::new(),
        }
    }

    pub fn class(mut self, class: &str) -> Self {
        if !self.class.is_empty() {
            self.class.push(' ');
        }
        self.class.push_str(class);
        self
    }

    pub fn style(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.style.push((key, value.into()));
        self
    }

    pub fn attr(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.attrs.push((key, value.into()));
        self
    }

    pub fn motion(mut self, motion: Motion) -> Self {
        self.motion = Some(motion);
        self
    }

    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    pub fn children(mut self, nodes: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(nodes);
        self
    }

    pub fn text(self, s: impl Into<String>) -> Self {
        self.child(Node::text(s))
    }

    pub fn get_attr(&self, key: &str) -> Option<&str> {
        self.attrs.iter().find(|(k, _)| *k == key).map(|(_, v)| v.as_str())
    }

    pub fn get_style(&self, key: &str) -> Option<&str> {
        self.style.iter().find(|(k, _)| *k == key).map(|(_, v)| v.as_str())
    }

    /// Elements that never have children or a closing tag in HTML.
    pub fn is_void(&self) -> bool {
        matches!(self.tag, "img" | "br")
    }
}

/// A lucide icon.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Icon {
    pub kind: IconKind,
    pub class: &'static str,
    pub color: Option<String>,
}

impl Icon {
    pub fn new(kind: IconKind, class: &'static str) -> Self {
        Self { kind, class, color: None }
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum IconKind {
    Check,
    ArrowRight,
    Star,
    Zap,
    Shield,
    Users,
    Target,
    TrendingUp,
    Award,
    Globe,
}

impl IconKind {
    /// Every icon the generated component imports.
    pub const ALL: [IconKind; 10] = [
        IconKind::Check,
        IconKind::ArrowRight,
        IconKind::Star,
        IconKind::Zap,
        IconKind::Shield,
        IconKind::Users,
        IconKind::Target,
        IconKind::TrendingUp,
        IconKind::Award,
        IconKind::Globe,
    ];

    /// Component name in `lucide-react`.
    pub fn component(self) -> &'static str {
        match self {
            IconKind::Check => "Check",
            IconKind::ArrowRight => "ArrowRight",
            IconKind::Star => "Star",
            IconKind::Zap => "Zap",
            IconKind::Shield => "Shield",
            IconKind::Users => "Users",
            IconKind::Target => "Target",
            IconKind::TrendingUp => "TrendingUp",
            IconKind::Award => "Award",
            IconKind::Globe => "Globe",
        }
    }

    /// Icon name in the plain-JS lucide bundle.
    pub fn html_name(self) -> &'static str {
        match self {
            IconKind::Check => "check",
            IconKind::ArrowRight => "arrow-right",
            IconKind::Star => "star",
            IconKind::Zap => "zap",
            IconKind::Shield => "shield",
            IconKind::Users => "users",
            IconKind::Target => "target",
            IconKind::TrendingUp => "trending-up",
            IconKind::Award => "award",
            IconKind::Globe => "globe",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_accumulates() {
        let el = Element::new("div")
            .class("p-4")
            .class("rounded")
            .style("color", "#fff")
            .attr("id", "x")
            .text("hello")
            .child(Icon::new(IconKind::Zap, "w-4 h-4"));
        assert_eq!(el.class, "p-4 rounded");
        assert_eq!(el.get_style("color"), Some("#fff"));
        assert_eq!(el.get_attr("id"), Some("x"));
        assert_eq!(el.children.len(), 2);
    }

    #[test]
    fn text_content_skips_icons() {
        let node: Node = Element::new("p")
            .text("a")
            .child(Icon::new(IconKind::Check, ""))
            .child(Element::new("span").text("b"))
            .into();
        assert_eq!(node.text_content(), "a b");
    }

    #[test]
    fn walk_visits_every_node() {
        let node: Node = Element::new("ul")
            .child(Element::new("li").text("1"))
            .child(Element::new("li").text("2"))
            .into();
        let mut count = 0;
        node.walk(&mut |_| count += 1);
        assert_eq!(count, 5);
    }
}
