//! EpiDoc → Leiden+ rendering.
//!
//! The transducer walks an edition subtree and emits plain text annotated
//! with the Leiden+ conventions: brackets for restorations, dotted runs for
//! lacunae, combining dots for unclear letters, and so on. Rendering is a
//! pure function of the subtree; every rule lives in [`rules`] as an
//! independently testable unit and the dispatch below is the only place that
//! maps tag names to rules.

pub mod rules;

use crate::dom::Element;

/// The closed vocabulary of markup constructs the transducer understands.
///
/// Anything else is [`Construct::Transparent`]: its children are rendered as
/// if the wrapper were absent, which keeps unknown or future markup from
/// breaking a rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Construct {
    LineBreak,
    TextDivision,
    Unclear,
    Orig,
    Supplied,
    Expansion,
    Gap,
    Deletion,
    Addition,
    Choice,
    Highlight,
    AbbrLeaf,
    Symbol,
    Surplus,
    Note,
    Space,
    Transparent,
}

impl Construct {
    /// Dispatch: tag name (plus the one attribute-discriminated case) to
    /// construct.
    pub fn of(element: &Element) -> Self {
        match element.name() {
            "lb" => Construct::LineBreak,
            "div" if element.attr("type") == Some("textpart") => Construct::TextDivision,
            "unclear" => Construct::Unclear,
            "orig" => Construct::Orig,
            "supplied" => Construct::Supplied,
            "expan" => Construct::Expansion,
            "gap" => Construct::Gap,
            "del" => Construct::Deletion,
            "add" => Construct::Addition,
            "choice" => Construct::Choice,
            "hi" => Construct::Highlight,
            "abbr" | "ex" | "num" => Construct::AbbrLeaf,
            "g" => Construct::Symbol,
            "surplus" => Construct::Surplus,
            "note" => Construct::Note,
            "space" => Construct::Space,
            _ => Construct::Transparent,
        }
    }
}

/// Render a markup subtree as Leiden+ annotated text.
///
/// Emits the node's own leading text, then each child per its construct
/// rule, then that child's tail, in document order.
pub fn render(node: &Element) -> String {
    let mut out = String::new();
    out.push_str(node.text());
    for child in node.children() {
        out.push_str(&render_element(child));
        out.push_str(child.tail());
    }
    out
}

/// Render one element per its construct rule.
fn render_element(element: &Element) -> String {
    match Construct::of(element) {
        Construct::LineBreak => rules::line_break(element),
        Construct::TextDivision => rules::text_division(element, &render(element)),
        Construct::Unclear => rules::unclear(element),
        Construct::Orig => rules::orig(element),
        Construct::Supplied => rules::supplied(element, &render(element)),
        Construct::Expansion => rules::expansion(element),
        Construct::Gap => rules::gap(element),
        Construct::Deletion => rules::deletion(element),
        Construct::Addition => rules::addition(element),
        Construct::Choice => rules::choice(element),
        Construct::Highlight => rules::highlight(element),
        Construct::AbbrLeaf => element.text().to_string(),
        Construct::Symbol => rules::symbol(element),
        Construct::Surplus => rules::surplus(element),
        Construct::Note => rules::note(element),
        Construct::Space => rules::space(element),
        Construct::Transparent => render(element),
    }
}

/// Top-level entry point for an edition subtree.
///
/// Strips blank lines from the rendering while keeping the intentional
/// newlines produced by line-break constructs.
pub fn render_edition(node: &Element) -> String {
    let rendered = render(node);
    rendered
        .lines()
        .filter(|line| !line.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
