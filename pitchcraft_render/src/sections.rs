// Per-section builders for the landing page.
//
// One builder per `SectionKind`. Each returns a `SectionFragment`: the
// section's kind, the label of the visual variant it chose, and its nodes.
// Both the live preview and the source emitter consume these fragments, so
// the two outputs agree on order, variant, copy, colors and fonts.
//
// Variants:
// - hero (`HeroStyle`): centered, split, minimal, bold, gradient-bg. Every
//   hero is preceded by the navigation bar, which belongs to the hero
//   fragment.
// - features (`FeatureLayout`): grid-3 (3 tinted cards), grid-4 (4 compact
//   cards), cards (6 elevated cards with round icon badges), horizontal
//   (6 tiles in one scrolling row), stacked (3 full-width rows with the icon
//   beside the text).
// - cta (`CtaStyle`): box, full-width, split, minimal.
// - problem, solution, pricing, stats, footer: one treatment each.
//
// Every section root carries `data-section="<kind>"`. Variant sections also
// carry `data-variant`. Colors with a two-digit suffix (`#4F46E510`) are
// 8-digit hex with alpha.

use crate::motion::motion_for;
use crate::node::{Element, Icon, IconKind, Node};
use pitchcraft_core::layout::{CtaStyle, FeatureLayout, HeroStyle, LayoutVariation, SectionKind};
use pitchcraft_core::logo::svg_to_data_url;
use pitchcraft_core::palette::ColorPalette;
use pitchcraft_core::pitch::Pitch;
use serde::Serialize;

/// The rendered nodes of one page section.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SectionFragment {
    pub kind: SectionKind,
    pub variant: &'static str,
    pub nodes: Vec<Node>,
}

/// Build every section of the page in `layout.section_order`.
pub fn build_sections(pitch: &Pitch, layout: &LayoutVariation) -> Vec<SectionFragment> {
    layout
        .section_order
        .iter()
        .map(|kind| build_section(*kind, pitch, layout))
        .collect()
}

pub fn build_section(kind: SectionKind, pitch: &Pitch, layout: &LayoutVariation) -> SectionFragment {
    let ctx = Ctx::new(pitch, layout);
    match kind {
        SectionKind::Hero => hero(&ctx),
        SectionKind::Features => features(&ctx),
        SectionKind::Problem => problem(&ctx),
        SectionKind::Solution => solution(&ctx),
        SectionKind::Pricing => pricing(&ctx),
        SectionKind::Stats => stats(&ctx),
        SectionKind::Cta => cta(&ctx),
        SectionKind::Footer => footer(&ctx),
    }
}

/// Inline style of the page root: body font and page colors.
pub fn page_style(layout: &LayoutVariation) -> Vec<(&'static str, String)> {
    vec![
        ("fontFamily", font(layout.typography.body)),
        ("backgroundColor", layout.color_palette.background.to_string()),
        ("color", layout.color_palette.text.to_string()),
    ]
}

fn font(family: &str) -> String {
    format!("{family}, sans-serif")
}

/// Shared inputs of the builders.
struct Ctx<'a> {
    pitch: &'a Pitch,
    layout: &'a LayoutVariation,
    c: &'a ColorPalette,
}

impl<'a> Ctx<'a> {
    fn new(pitch: &'a Pitch, layout: &'a LayoutVariation) -> Self {
        Self {
            pitch,
            layout,
            c: &layout.color_palette,
        }
    }

    fn animated(&self, tag: &'static str, step: usize) -> Element {
        Element::new(tag).motion(motion_for(self.layout.animation_style, step))
    }

    fn heading_font(&self) -> String {
        font(self.layout.typography.heading)
    }

    fn display_font(&self) -> String {
        font(self.layout.typography.display)
    }

    /// `primary` with a two-digit alpha suffix.
    fn primary_a(&self, alpha: &str) -> String {
        format!("{}{alpha}", self.c.primary)
    }

    fn gradient(&self, direction: &str) -> String {
        format!("linear-gradient({direction}, {}, {})", self.c.primary, self.c.secondary)
    }

    fn tint(&self, a: &str, b: &str, alpha: &str) -> String {
        format!("linear-gradient(135deg, {a}{alpha}, {b}{alpha})")
    }

    fn muted(&self, tag: &'static str, class: &str, text: &str) -> Element {
        Element::new(tag)
            .class(class)
            .style("color", self.c.text_secondary)
            .text(text)
    }

    fn section(&self, kind: SectionKind, class: &str) -> Element {
        Element::new("section")
            .class(class)
            .attr("data-section", kind.as_str())
    }

    fn logo_img(&self, class: &str) -> Element {
        Element::new("img")
            .class(class)
            .attr("src", svg_to_data_url(&self.pitch.logo))
            .attr("alt", format!("{} logo", self.pitch.name))
    }

    fn gradient_button(&self, class: &str, label: &str) -> Element {
        Element::new("button")
            .class(class)
            .style("background", self.gradient("to right"))
            .text(label)
    }

    fn outline_button(&self, class: &str, label: &str) -> Element {
        Element::new("button")
            .class(class)
            .style("border", format!("1px solid {}", self.primary_a("40")))
            .text(label)
    }

    /// Decorative gradient tile used beside two-column copy.
    fn art_panel(&self, a: &str, b: &str, step: usize) -> Element {
        self.animated("div", step).child(
            Element::new("div")
                .class("aspect-square rounded-2xl")
                .style("background", self.tint(a, b, "20"))
                .style("border", format!("1px solid {a}30")),
        )
    }

    fn section_heading(&self, title: &str, subtitle: &str) -> Element {
        self.animated("div", 0)
            .class("text-center mb-16")
            .child(
                Element::new("h2")
                    .class("text-5xl mb-4")
                    .style("fontFamily", self.heading_font())
                    .text(title),
            )
            .child(self.muted("p", "text-xl", subtitle))
    }
}

/// Text before the first '.', used as a section headline.
fn first_sentence(s: &str) -> &str {
    s.split('.').next().unwrap_or(s)
}

// ---------------------------------------------------------------------------
// Hero
// ---------------------------------------------------------------------------

fn nav(ctx: &Ctx) -> Element {
    let c = ctx.c;
    Element::new("nav")
        .class("fixed top-0 w-full backdrop-blur-lg z-50 border-b")
        .style("backgroundColor", format!("{}cc", c.background))
        .style("borderColor", ctx.primary_a("30"))
        .child(
            Element::new("div")
                .class("max-w-7xl mx-auto px-6 py-4 flex items-center justify-between")
                .child(
                    Element::new("div")
                        .class("flex items-center gap-3")
                        .child(ctx.logo_img("w-10 h-10 rounded-lg"))
                        .child(
                            Element::new("span")
                                .class("text-xl")
                                .style("fontFamily", ctx.heading_font())
                                .text(&ctx.pitch.name),
                        ),
                )
                .child(
                    Element::new("div")
                        .class("hidden md:flex items-center gap-6")
                        .child(nav_link(ctx, "#features", "Features"))
                        .child(nav_link(ctx, "#pricing", "Pricing"))
                        .child(
                            ctx.gradient_button("px-6 py-2 rounded-lg transition hover:shadow-lg", "Get Started")
                                .style("boxShadow", format!("0 0 20px {}", ctx.primary_a("40"))),
                        ),
                ),
        )
}

fn nav_link(ctx: &Ctx, href: &str, label: &str) -> Element {
    Element::new("a")
        .class("hover:opacity-80 transition")
        .attr("href", href)
        .style("color", ctx.c.text_secondary)
        .text(label)
}

fn hero(ctx: &Ctx) -> SectionFragment {
    let style = ctx.layout.hero_style;
    let body = match style {
        HeroStyle::Centered => hero_centered(ctx),
        HeroStyle::Split => hero_split(ctx),
        HeroStyle::Minimal => hero_minimal(ctx),
        HeroStyle::Bold => hero_bold(ctx),
        HeroStyle::GradientBg => hero_gradient(ctx),
    };
    SectionFragment {
        kind: SectionKind::Hero,
        variant: style.as_str(),
        nodes: vec![nav(ctx).into(), body.attr("data-variant", style.as_str()).into()],
    }
}

fn hero_centered(ctx: &Ctx) -> Element {
    let (c, p) = (ctx.c, ctx.pitch);
    let glow = |pos: &str, color: &str| {
        Element::new("div")
            .class(&format!("absolute {pos} w-96 h-96 rounded-full blur-3xl animate-pulse"))
            .style("backgroundColor", color)
    };
    ctx.section(SectionKind::Hero, "relative pt-32 pb-20 px-6 overflow-hidden")
        .child(
            Element::new("div")
                .class("absolute inset-0 opacity-30")
                .child(glow("top-20 left-10", c.primary))
                .child(glow("bottom-20 right-10", c.secondary).style("animationDelay", "1s")),
        )
        .child(
            Element::new("div").class("relative max-w-5xl mx-auto text-center").child(
                ctx.animated("div", 0)
                    .child(
                        Element::new("div")
                            .class("inline-flex items-center gap-2 px-4 py-2 rounded-full mb-8 border")
                            .style("backgroundColor", ctx.primary_a("10"))
                            .style("borderColor", ctx.primary_a("40"))
                            .child(Icon::new(IconKind::Star, "w-4 h-4").color(c.primary))
                            .child(Element::new("span").class("text-sm").text(&p.industry)),
                    )
                    .child(
                        Element::new("h1")
                            .class("text-6xl md:text-7xl mb-6")
                            .style("fontFamily", ctx.display_font())
                            .style("background", format!("linear-gradient(to right, {}, {})", c.text, c.text_secondary))
                            .style("WebkitBackgroundClip", "text")
                            .style("WebkitTextFillColor", "transparent")
                            .text(&p.tagline),
                    )
                    .child(ctx.muted("p", "text-xl mb-8 max-w-3xl mx-auto", &p.elevator))
                    .child(
                        Element::new("div")
                            .class("flex flex-col sm:flex-row gap-4 justify-center")
                            .child(
                                ctx.gradient_button("px-8 py-4 rounded-lg hover:shadow-lg transition", "Start Free Trial")
                                    .child(Icon::new(IconKind::ArrowRight, "inline w-5 h-5 ml-2")),
                            )
                            .child(
                                Element::new("button")
                                    .class("px-8 py-4 rounded-lg border transition hover:opacity-80")
                                    .style("borderColor", c.primary)
                                    .style("color", c.primary)
                                    .text("Watch Demo"),
                            ),
                    ),
            ),
        )
}

fn hero_split(ctx: &Ctx) -> Element {
    let (c, p) = (ctx.c, ctx.pitch);
    ctx.section(SectionKind::Hero, "pt-32 pb-20 px-6").child(
        Element::new("div")
            .class("max-w-7xl mx-auto grid md:grid-cols-2 gap-12 items-center")
            .child(
                ctx.animated("div", 0)
                    .child(
                        Element::new("div")
                            .class("inline-block px-4 py-2 rounded-full mb-6")
                            .style("backgroundColor", ctx.primary_a("10"))
                            .style("color", c.primary)
                            .text(&p.industry),
                    )
                    .child(
                        Element::new("h1")
                            .class("text-5xl md:text-6xl mb-6")
                            .style("fontFamily", ctx.display_font())
                            .text(&p.tagline),
                    )
                    .child(ctx.muted("p", "text-lg mb-8", &p.elevator))
                    .child(
                        Element::new("div")
                            .class("flex gap-4")
                            .child(ctx.gradient_button("px-8 py-3 rounded-lg", "Get Started"))
                            .child(ctx.outline_button("px-8 py-3 rounded-lg", "Learn More")),
                    ),
            )
            .child(
                ctx.animated("div", 2).child(
                    Element::new("div")
                        .class("aspect-square rounded-3xl flex items-center justify-center p-16")
                        .style("background", ctx.tint(c.primary, c.secondary, "20"))
                        .style("border", format!("1px solid {}", ctx.primary_a("30")))
                        .child(ctx.logo_img("w-full h-full")),
                ),
            ),
    )
}

fn hero_minimal(ctx: &Ctx) -> Element {
    let (c, p) = (ctx.c, ctx.pitch);
    ctx.section(SectionKind::Hero, "pt-40 pb-32 px-6").child(
        Element::new("div").class("max-w-4xl mx-auto").child(
            ctx.animated("div", 0)
                .class("space-y-8")
                .child(
                    Element::new("h1")
                        .class("text-7xl md:text-8xl leading-tight")
                        .style("fontFamily", ctx.display_font())
                        .style("color", c.text)
                        .text(&p.tagline),
                )
                .child(ctx.muted("p", "text-2xl", &p.elevator))
                .child(
                    Element::new("a")
                        .class("inline-block text-lg border-b-2 pb-1")
                        .attr("href", "#features")
                        .style("color", c.primary)
                        .style("borderColor", c.primary)
                        .text("Get Started →"),
                ),
        ),
    )
}

fn hero_bold(ctx: &Ctx) -> Element {
    let (c, p) = (ctx.c, ctx.pitch);
    let words: Vec<&str> = p.tagline.split(' ').collect();
    let split = words.len().min(3);
    let mut headline = Element::new("h1")
        .class("text-6xl md:text-8xl mb-8 leading-tight")
        .style("fontFamily", ctx.display_font())
        .text(words[..split].join(" "));
    if split < words.len() {
        headline = headline
            .child(Element::new("br"))
            .child(Element::new("span").style("color", c.primary).text(words[split..].join(" ")));
    }

    ctx.section(SectionKind::Hero, "relative pt-32 pb-24 px-6 overflow-hidden")
        .child(
            Element::new("div")
                .class("absolute inset-0")
                .style("background", ctx.tint(c.primary, c.secondary, "15")),
        )
        .child(
            Element::new("div").class("relative max-w-7xl mx-auto").child(
                ctx.animated("div", 0)
                    .class("text-center")
                    .child(
                        Element::new("div")
                            .class("text-sm uppercase tracking-widest mb-6")
                            .style("color", c.accent)
                            .text(&p.industry),
                    )
                    .child(headline)
                    .child(ctx.muted("p", "text-xl max-w-2xl mx-auto mb-10", &p.elevator))
                    .child(
                        ctx.gradient_button("px-12 py-5 text-xl rounded-lg shadow-2xl", "Start Now")
                            .style("boxShadow", format!("0 20px 40px {}", ctx.primary_a("40"))),
                    ),
            ),
        )
}

fn hero_gradient(ctx: &Ctx) -> Element {
    let (c, p) = (ctx.c, ctx.pitch);
    ctx.section(SectionKind::Hero, "relative pt-32 pb-24 px-6")
        .style("background", ctx.gradient("135deg"))
        .style("color", "#ffffff")
        .child(
            Element::new("div").class("max-w-6xl mx-auto").child(
                ctx.animated("div", 0)
                    .class("text-center")
                    .child(
                        Element::new("div")
                            .class("inline-block px-6 py-3 rounded-full mb-8 border")
                            .style("background", "#ffffff20")
                            .style("borderColor", "#ffffff60")
                            .child(
                                Element::new("span")
                                    .class("text-sm")
                                    .text(format!("{} • {}", p.industry, p.name)),
                            ),
                    )
                    .child(
                        Element::new("h1")
                            .class("text-6xl md:text-7xl mb-8")
                            .style("fontFamily", ctx.display_font())
                            .text(&p.tagline),
                    )
                    .child(
                        Element::new("p")
                            .class("text-xl mb-10 max-w-3xl mx-auto opacity-90")
                            .text(&p.elevator),
                    )
                    .child(
                        Element::new("div")
                            .class("flex flex-wrap gap-4 justify-center")
                            .child(
                                Element::new("button")
                                    .class("px-8 py-4 rounded-xl")
                                    .style("backgroundColor", "#ffffff")
                                    .style("color", c.primary)
                                    .text("Get Started Free"),
                            )
                            .child(
                                Element::new("button")
                                    .class("px-8 py-4 rounded-xl")
                                    .style("border", "2px solid #ffffff80")
                                    .text("View Demo"),
                            ),
                    ),
            ),
        )
}

// ---------------------------------------------------------------------------
// Features
// ---------------------------------------------------------------------------

/// (icon, title, description), in display order.
pub const FEATURES: [(IconKind, &str, &str); 6] = [
    (IconKind::Zap, "Lightning Fast", "Optimized for peak performance"),
    (IconKind::Shield, "Secure & Safe", "Enterprise-grade security"),
    (IconKind::Users, "Team Collaboration", "Work together seamlessly"),
    (IconKind::Target, "Goal Tracking", "Measure what matters"),
    (IconKind::TrendingUp, "Analytics", "Data-driven insights"),
    (IconKind::Award, "Best in Class", "Industry-leading solution"),
];

fn features(ctx: &Ctx) -> SectionFragment {
    let c = ctx.c;
    let layout = ctx.layout.feature_layout;
    let items = &FEATURES[..layout.item_count()];

    let container_class = match layout {
        FeatureLayout::Grid3 => "grid md:grid-cols-3 gap-8",
        FeatureLayout::Grid4 => "grid sm:grid-cols-2 lg:grid-cols-4 gap-6",
        FeatureLayout::Cards => "grid md:grid-cols-2 lg:grid-cols-3 gap-8",
        FeatureLayout::Horizontal => "flex gap-6 overflow-x-auto pb-4 snap-x",
        FeatureLayout::Stacked => "max-w-3xl mx-auto space-y-6",
    };
    let container = Element::new("div")
        .class(container_class)
        .children(items.iter().enumerate().map(|(i, f)| feature_item(ctx, layout, *f, i).into()));

    let root = ctx
        .section(SectionKind::Features, "py-20 px-6")
        .attr("id", "features")
        .attr("data-variant", layout.as_str())
        .style("backgroundColor", c.surface)
        .child(
            Element::new("div")
                .class("max-w-7xl mx-auto")
                .child(ctx.section_heading("Powerful Features", "Everything you need to succeed"))
                .child(container),
        );

    SectionFragment {
        kind: SectionKind::Features,
        variant: layout.as_str(),
        nodes: vec![root.into()],
    }
}

fn feature_item(ctx: &Ctx, layout: FeatureLayout, (icon, title, desc): (IconKind, &str, &str), i: usize) -> Element {
    let c = ctx.c;
    let icon_square = |class: &str| {
        Element::new("div")
            .class(class)
            .style("background", ctx.gradient("135deg"))
            .child(Icon::new(icon, "w-7 h-7"))
    };
    let title_el = |class: &str| Element::new("h3").class(class).text(title);

    match layout {
        FeatureLayout::Grid3 => ctx
            .animated("div", i)
            .class("p-8 rounded-2xl transition-all hover:scale-105")
            .style("background", ctx.tint(c.primary, c.secondary, "10"))
            .style("border", format!("1px solid {}", ctx.primary_a("20")))
            .child(icon_square("w-14 h-14 rounded-lg mb-6 flex items-center justify-center"))
            .child(title_el("text-2xl mb-3"))
            .child(ctx.muted("p", "", desc)),
        FeatureLayout::Grid4 => ctx
            .animated("div", i)
            .class("p-6 rounded-xl transition-all hover:-translate-y-1")
            .style("background", ctx.tint(c.primary, c.secondary, "10"))
            .style("border", format!("1px solid {}", ctx.primary_a("20")))
            .child(icon_square("w-12 h-12 rounded-lg mb-4 flex items-center justify-center"))
            .child(title_el("text-xl mb-2"))
            .child(ctx.muted("p", "text-sm", desc)),
        FeatureLayout::Cards => ctx
            .animated("div", i)
            .class("p-8 rounded-3xl shadow-xl transition-all hover:shadow-2xl")
            .style("backgroundColor", c.background)
            .style("boxShadow", format!("0 10px 30px {}", ctx.primary_a("25")))
            .child(
                Element::new("div")
                    .class("w-16 h-16 rounded-full mb-6 flex items-center justify-center")
                    .style("backgroundColor", format!("{}30", c.accent))
                    .child(Icon::new(icon, "w-8 h-8").color(c.accent)),
            )
            .child(title_el("text-2xl mb-3"))
            .child(ctx.muted("p", "", desc)),
        FeatureLayout::Horizontal => ctx
            .animated("div", i)
            .class("min-w-[220px] snap-start p-6 rounded-xl text-center")
            .style("border", format!("1px solid {}", ctx.primary_a("30")))
            .child(Icon::new(icon, "w-8 h-8 mx-auto mb-4").color(c.primary))
            .child(title_el("text-lg mb-1"))
            .child(ctx.muted("p", "text-sm", desc)),
        FeatureLayout::Stacked => ctx
            .animated("div", i)
            .class("flex items-start gap-6 p-6 rounded-2xl")
            .style("borderLeft", format!("4px solid {}", c.primary))
            .style("backgroundColor", ctx.primary_a("08"))
            .child(icon_square("shrink-0 w-14 h-14 rounded-lg flex items-center justify-center"))
            .child(
                Element::new("div")
                    .child(title_el("text-2xl mb-2"))
                    .child(ctx.muted("p", "", desc)),
            ),
    }
}

// ---------------------------------------------------------------------------
// Problem, solution
// ---------------------------------------------------------------------------

const PROBLEM_RED: &str = "#EF4444";

fn badge(label: &str, color: &str) -> Element {
    Element::new("div")
        .class("inline-block px-4 py-2 rounded-full mb-6")
        .style("backgroundColor", format!("{color}10"))
        .style("color", color)
        .style("border", format!("1px solid {color}30"))
        .text(label)
}

fn statement(ctx: &Ctx, badge_el: Element, full: &str, step: usize) -> Element {
    ctx.animated("div", step)
        .child(badge_el)
        .child(
            Element::new("h2")
                .class("text-4xl mb-6")
                .style("fontFamily", ctx.heading_font())
                .text(first_sentence(full)),
        )
        .child(ctx.muted("p", "text-lg", full))
}

fn problem(ctx: &Ctx) -> SectionFragment {
    let root = ctx.section(SectionKind::Problem, "py-20 px-6").child(
        Element::new("div")
            .class("max-w-7xl mx-auto grid md:grid-cols-2 gap-12 items-center")
            .child(statement(ctx, badge("The Challenge", PROBLEM_RED), &ctx.pitch.problem, 0))
            .child(ctx.art_panel(PROBLEM_RED, ctx.c.primary, 2)),
    );
    single(SectionKind::Problem, root)
}

fn solution(ctx: &Ctx) -> SectionFragment {
    let c = ctx.c;
    let root = ctx
        .section(SectionKind::Solution, "py-20 px-6")
        .style("backgroundColor", c.surface)
        .child(
            Element::new("div")
                .class("max-w-7xl mx-auto grid md:grid-cols-2 gap-12 items-center")
                .child(ctx.art_panel(c.secondary, c.accent, 0).class("order-2 md:order-1"))
                .child(
                    statement(ctx, badge("Our Solution", c.primary), &ctx.pitch.solution, 2)
                        .class("order-1 md:order-2"),
                ),
        );
    single(SectionKind::Solution, root)
}

fn single(kind: SectionKind, root: Element) -> SectionFragment {
    SectionFragment {
        kind,
        variant: "default",
        nodes: vec![root.into()],
    }
}

// ---------------------------------------------------------------------------
// Pricing, stats
// ---------------------------------------------------------------------------

pub struct Plan {
    pub name: &'static str,
    pub price: &'static str,
    pub features: &'static [&'static str],
    pub popular: bool,
}

pub const PLANS: [Plan; 3] = [
    Plan {
        name: "Starter",
        price: "$9",
        features: &["Basic features", "5 projects", "Email support"],
        popular: false,
    },
    Plan {
        name: "Pro",
        price: "$29",
        features: &["All features", "Unlimited projects", "Priority support", "Analytics"],
        popular: true,
    },
    Plan {
        name: "Enterprise",
        price: "$99",
        features: &["Everything in Pro", "Custom integrations", "Dedicated support", "SLA"],
        popular: false,
    },
];

fn pricing(ctx: &Ctx) -> SectionFragment {
    let c = ctx.c;
    let cards = PLANS.iter().enumerate().map(|(i, plan)| {
        let mut card = ctx
            .animated("div", i)
            .class("p-8 rounded-2xl border transition-all hover:scale-105");
        card = if plan.popular {
            card.style("background", ctx.tint(c.primary, c.secondary, "15"))
                .style("borderColor", c.primary)
                .child(
                    Element::new("div")
                        .class("inline-block px-3 py-1 rounded-full text-sm mb-4")
                        .style("background", ctx.gradient("to right"))
                        .text("Most Popular"),
                )
        } else {
            card.style("background", c.surface).style("borderColor", ctx.primary_a("20"))
        };
        let button = if plan.popular {
            ctx.gradient_button("w-full py-3 rounded-lg transition", "Get Started")
        } else {
            ctx.outline_button("w-full py-3 rounded-lg transition", "Get Started")
                .style("background", c.surface)
        };
        let card = card
            .child(Element::new("h3").class("text-2xl mb-2").text(plan.name))
            .child(
                Element::new("div")
                    .class("mb-6")
                    .child(Element::new("span").class("text-5xl").text(plan.price))
                    .child(Element::new("span").style("color", c.text_secondary).text("/month")),
            )
            .child(Element::new("ul").class("space-y-3 mb-8").children(plan.features.iter().map(|f| {
                Element::new("li")
                    .class("flex items-center gap-2")
                    .child(Icon::new(IconKind::Check, "w-5 h-5").color(c.primary))
                    .child(Element::new("span").style("color", c.text_secondary).text(*f))
                    .into()
            })))
            .child(button);
        Node::from(card)
    });

    let root = ctx
        .section(SectionKind::Pricing, "py-20 px-6")
        .attr("id", "pricing")
        .child(
            Element::new("div")
                .class("max-w-7xl mx-auto")
                .child(ctx.section_heading("Simple Pricing", "Choose the plan that fits your needs"))
                .child(Element::new("div").class("grid md:grid-cols-3 gap-8 max-w-6xl mx-auto").children(cards)),
        );
    single(SectionKind::Pricing, root)
}

pub const STATS: [(&str, &str); 4] = [
    ("10K+", "Active Users"),
    ("99%", "Satisfaction"),
    ("50+", "Countries"),
    ("24/7", "Support"),
];

fn stats(ctx: &Ctx) -> SectionFragment {
    let c = ctx.c;
    let cells = STATS.iter().map(|(value, label)| {
        let cell = Element::new("div")
            .class("text-center")
            .child(
                Element::new("div")
                    .class("text-5xl mb-2")
                    .style("color", c.primary)
                    .style("fontFamily", ctx.heading_font())
                    .text(*value),
            )
            .child(ctx.muted("p", "", label));
        Node::from(cell)
    });
    let root = ctx
        .section(SectionKind::Stats, "py-20 px-6")
        .style("backgroundColor", c.surface)
        .child(
            Element::new("div").class("max-w-7xl mx-auto").child(
                ctx.animated("div", 0)
                    .child(Element::new("div").class("grid grid-cols-2 md:grid-cols-4 gap-8").children(cells)),
            ),
        );
    single(SectionKind::Stats, root)
}

// ---------------------------------------------------------------------------
// CTA
// ---------------------------------------------------------------------------

fn cta(ctx: &Ctx) -> SectionFragment {
    let (c, p) = (ctx.c, ctx.pitch);
    let style = ctx.layout.cta_style;
    let h2 = |class: &str, text: String| {
        Element::new("h2")
            .class(class)
            .style("fontFamily", ctx.heading_font())
            .text(text)
    };

    let root = match style {
        CtaStyle::Box => ctx.section(SectionKind::Cta, "py-20 px-6").child(
            Element::new("div").class("max-w-4xl mx-auto").child(
                ctx.animated("div", 0)
                    .class("p-12 rounded-3xl border text-center")
                    .style("background", ctx.tint(c.primary, c.secondary, "20"))
                    .style("borderColor", ctx.primary_a("40"))
                    .child(h2("text-5xl mb-6", "Ready to get started?".into()))
                    .child(ctx.muted("p", "text-xl mb-8", &format!("Join thousands already using {}", p.name)))
                    .child(
                        ctx.gradient_button("px-10 py-4 rounded-lg text-lg", "Start Free Trial")
                            .child(Icon::new(IconKind::ArrowRight, "inline w-5 h-5 ml-2")),
                    ),
            ),
        ),
        CtaStyle::FullWidth => ctx
            .section(SectionKind::Cta, "py-32 px-6")
            .style("background", ctx.gradient("to right"))
            .child(
                Element::new("div").class("max-w-5xl mx-auto text-center").child(
                    ctx.animated("div", 0)
                        .child(h2("text-6xl mb-8", "Transform your business today".into()))
                        .child(Element::new("p").class("text-2xl mb-10 opacity-90").text(&p.elevator))
                        .child(
                            Element::new("button")
                                .class("px-12 py-5 text-xl rounded-lg")
                                .style("backgroundColor", c.background)
                                .style("color", c.primary)
                                .text("Get Started Now"),
                        ),
                ),
            ),
        CtaStyle::Split => ctx.section(SectionKind::Cta, "py-20 px-6").child(
            Element::new("div")
                .class("max-w-7xl mx-auto grid md:grid-cols-2 gap-12 items-center")
                .child(
                    ctx.animated("div", 0)
                        .child(h2("text-5xl mb-6", "Ready to transform your workflow?".into()))
                        .child(ctx.muted("p", "text-xl mb-8", &format!("Join {} and experience the difference", p.name)))
                        .child(
                            Element::new("div")
                                .class("flex gap-4")
                                .child(ctx.gradient_button("px-8 py-4 rounded-lg", "Get Started"))
                                .child(ctx.outline_button("px-8 py-4 rounded-lg", "Contact Sales")),
                        ),
                )
                .child(ctx.art_panel(c.primary, c.accent, 2)),
        ),
        CtaStyle::Minimal => ctx.section(SectionKind::Cta, "py-32 px-6 text-center").child(
            ctx.animated("div", 0)
                .class("max-w-3xl mx-auto")
                .child(h2("text-6xl mb-12", format!("Start your journey with {}", p.name)))
                .child(
                    Element::new("a")
                        .class("text-xl underline underline-offset-8")
                        .attr("href", "#pricing")
                        .style("color", c.primary)
                        .text("Get Started →"),
                ),
        ),
    };

    SectionFragment {
        kind: SectionKind::Cta,
        variant: style.as_str(),
        nodes: vec![root.attr("data-variant", style.as_str()).into()],
    }
}

// ---------------------------------------------------------------------------
// Footer
// ---------------------------------------------------------------------------

const FOOTER_COLUMNS: [&str; 4] = ["Product", "Company", "Resources", "Legal"];
const FOOTER_LINKS: [&str; 3] = ["Features", "Pricing", "Documentation"];

fn footer(ctx: &Ctx) -> SectionFragment {
    let (c, p) = (ctx.c, ctx.pitch);
    let columns = FOOTER_COLUMNS.iter().map(|heading| {
        let column = Element::new("div")
            .child(Element::new("h4").class("mb-4").text(*heading))
            .child(
                Element::new("ul")
                    .class("space-y-2 text-sm")
                    .style("color", c.text_secondary)
                    .children(FOOTER_LINKS.iter().map(|link| {
                        Element::new("li")
                            .child(
                                Element::new("a")
                                    .class("hover:opacity-80 transition")
                                    .attr("href", "#")
                                    .text(*link),
                            )
                            .into()
                    })),
            );
        Node::from(column)
    });

    let brand = Element::new("div")
        .child(
            Element::new("div")
                .class("flex items-center gap-2 mb-4")
                .child(ctx.logo_img("w-8 h-8 rounded-lg"))
                .child(Element::new("span").class("text-lg").text(&p.name)),
        )
        .child(ctx.muted("p", "text-sm", &p.tagline));

    let root = Element::new("footer")
        .class("py-12 px-6 border-t")
        .attr("data-section", SectionKind::Footer.as_str())
        .style("borderColor", ctx.primary_a("20"))
        .child(
            Element::new("div")
                .class("max-w-7xl mx-auto")
                .child(
                    Element::new("div")
                        .class("grid md:grid-cols-5 gap-8 mb-8")
                        .child(brand)
                        .children(columns),
                )
                .child(
                    Element::new("div")
                        .class("pt-8 border-t text-center text-sm")
                        .style("borderColor", ctx.primary_a("20"))
                        .style("color", c.text_secondary)
                        .text(format!("© {} {}. All rights reserved.", p.created_at.format("%Y"), p.name)),
                ),
        );
    single(SectionKind::Footer, root)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pitchcraft_core::layout::generate_layout_variation;
    use pitchcraft_core::pitch::create_pitch;
    use pitchcraft_lang::{Tone, default_phrase_banks};
    use pitchcraft_prng::PitchRng;

    fn fixture() -> (Pitch, LayoutVariation) {
        let mut rng = PitchRng::new(21);
        let pitch = create_pitch(&default_phrase_banks(), "Bike repair on demand", "travel", Tone::Fun, &mut rng);
        let layout = generate_layout_variation(&pitch, 0, &mut rng);
        (pitch, layout)
    }

    fn root(fragment: &SectionFragment) -> &Element {
        match fragment.nodes.last() {
            Some(Node::Element(el)) => el,
            other => panic!("unexpected root {other:?}"),
        }
    }

    #[test]
    fn first_sentence_cuts_at_period() {
        assert_eq!(first_sentence("One. Two."), "One");
        assert_eq!(first_sentence("No period"), "No period");
    }

    #[test]
    fn hero_includes_nav_first() {
        let (pitch, layout) = fixture();
        let hero = build_section(SectionKind::Hero, &pitch, &layout);
        assert_eq!(hero.nodes.len(), 2);
        assert!(matches!(&hero.nodes[0], Node::Element(el) if el.tag == "nav"));
        assert_eq!(root(&hero).get_attr("data-section"), Some("hero"));
    }

    #[test]
    fn bold_hero_splits_tagline_after_three_words() {
        let (mut pitch, mut layout) = fixture();
        pitch.tagline = "Rock your daily vibe".into();
        layout.hero_style = HeroStyle::Bold;
        let hero = build_section(SectionKind::Hero, &pitch, &layout);
        let mut h1 = None;
        hero.nodes[1].walk(&mut |n| match n {
            Node::Element(el) if el.tag == "h1" => h1 = Some(el.clone()),
            _ => {}
        });
        let h1 = h1.expect("h1");
        assert_eq!(h1.children.len(), 3);
        assert_eq!(Node::Element(h1).text_content(), "Rock your daily vibe");
    }

    #[test]
    fn bold_hero_short_tagline_has_no_break() {
        let (mut pitch, mut layout) = fixture();
        pitch.tagline = "Just two".into();
        layout.hero_style = HeroStyle::Bold;
        let hero = build_section(SectionKind::Hero, &pitch, &layout);
        let mut breaks = 0;
        hero.nodes[1].walk(&mut |n| {
            if matches!(n, Node::Element(el) if el.tag == "br") {
                breaks += 1;
            }
        });
        assert_eq!(breaks, 0);
    }

    #[test]
    fn feature_counts_follow_layout() {
        let (pitch, mut layout) = fixture();
        for fl in FeatureLayout::ALL {
            layout.feature_layout = fl;
            let frag = build_section(SectionKind::Features, &pitch, &layout);
            let mut icons = 0;
            frag.nodes[0].walk(&mut |n| {
                if matches!(n, Node::Icon(_)) {
                    icons += 1;
                }
            });
            assert_eq!(icons, fl.item_count(), "{}", fl.as_str());
            assert_eq!(root(&frag).get_attr("data-variant"), Some(fl.as_str()));
        }
    }

    #[test]
    fn footer_year_comes_from_creation_date() {
        let (pitch, layout) = fixture();
        let frag = build_section(SectionKind::Footer, &pitch, &layout);
        let year = pitch.created_at.format("%Y").to_string();
        assert!(frag.nodes[0].text_content().contains(&format!("© {year} {}", pitch.name)));
    }

    #[test]
    fn page_style_uses_body_font() {
        let (_, layout) = fixture();
        let style = page_style(&layout);
        assert_eq!(style[0].1, format!("{}, sans-serif", layout.typography.body));
    }
}
