//! Per-construct Leiden+ rendering rules.
//!
//! Each rule is a pure function of one element (and, where the construct
//! nests, its already-rendered inner text). Missing attributes fall back to
//! the documented defaults; a quantity that fails to parse counts as zero.

use crate::dom::Element;

/// Combining dot below, marking an unclear letter.
const COMBINING_DOT_BELOW: char = '\u{0323}';
/// Combining double breve below, marking a ligature.
const COMBINING_DOUBLE_BREVE: char = '\u{0361}';

/// `?` when the editor marked the reading as low certainty.
fn cert_suffix(element: &Element) -> &'static str {
    if element.attr("cert") == Some("low") {
        "?"
    } else {
        ""
    }
}

/// Each `lb` becomes a newline. `break="no"` suppresses it: the word
/// continues across the physical line.
pub fn line_break(element: &Element) -> String {
    if element.attr("break") == Some("no") {
        String::new()
    } else {
        "\n".to_string()
    }
}

/// Wraps a rendered textpart division in `<D=.n … =D>`.
pub fn text_division(element: &Element, inner: &str) -> String {
    let n = element.attr("n").unwrap_or("");
    format!("<D=.{n} {inner} =D>")
}

/// Marks every unclear letter with a combining dot below.
pub fn unclear(element: &Element) -> String {
    let mut out = String::new();
    for ch in element.text().chars() {
        out.push(ch);
        out.push(COMBINING_DOT_BELOW);
    }
    out
}

/// Letters kept as written on the support, `={text}=`. Applies to a bare
/// `orig`; one inside a `choice` is consumed by the choice rule instead.
pub fn orig(element: &Element) -> String {
    format!("={}=", element.text())
}

/// Editorial restoration, bracketed according to its `reason`.
pub fn supplied(element: &Element, inner: &str) -> String {
    match element.attr("reason") {
        Some("lost") => format!("[{inner}{}]", cert_suffix(element)),
        Some("undefined") => format!("_[{inner}]_"),
        Some("omitted") => format!("<{inner}>"),
        Some("subaudible") => format!("({inner})"),
        _ => inner.to_string(),
    }
}

/// Abbreviation/expansion pairs, each rendered as `abbr(expansion)` with a
/// certainty marker on the expansion. The pairs are zipped in document
/// order; an expansion without text leaves the bare abbreviation.
pub fn expansion(element: &Element) -> String {
    let mut out = String::new();
    let abbrs = element.children_named("abbr");
    let exs = element.children_named("ex");
    for (abbr, ex) in abbrs.zip(exs) {
        if ex.text().is_empty() {
            out.push_str(abbr.text());
        } else {
            out.push_str(abbr.text());
            out.push('(');
            out.push_str(ex.text());
            out.push_str(cert_suffix(ex));
            out.push(')');
        }
    }
    out
}

/// A lacuna of known, bounded, or unknown extent.
pub fn gap(element: &Element) -> String {
    if element.attr("reason") == Some("ellipsis") {
        return "...".to_string();
    }

    let quantity = element.attr("quantity").unwrap_or("");
    let extent_unknown = element.attr("extent") == Some("unknown");
    let cert = cert_suffix(element);

    match element.attr("unit") {
        Some("character") => {
            if extent_unknown {
                "[.?]".to_string()
            } else if let (Some(lo), Some(hi)) = (element.attr("atLeast"), element.attr("atMost"))
            {
                format!("[{lo}-{hi}{cert}]")
            } else if let Some(lo) = element.attr("atLeast") {
                format!("[{lo}+{cert}]")
            } else if let Some(hi) = element.attr("atMost") {
                format!("[≤{hi}{cert}]")
            } else if element.attr("precision") == Some("low") {
                format!("[.{quantity}]")
            } else {
                let count = quantity.parse::<usize>().unwrap_or(0);
                format!("[{}]", ".".repeat(count))
            }
        }
        Some("line") => {
            if extent_unknown {
                "(Lines: ? non transcribed)".to_string()
            } else {
                format!("(Lines: {quantity} non transcribed)")
            }
        }
        _ => String::new(),
    }
}

/// Deleted text. An erasure keeps its content in double brackets; anything
/// else passes the content through. All contained text counts, including
/// nested elements'.
pub fn deletion(element: &Element) -> String {
    let inner = element.collect_text();
    if element.attr("rend") == Some("erasure") {
        format!("〚{inner}〛")
    } else {
        inner
    }
}

/// Scribal addition, marked by where on the support it was written.
pub fn addition(element: &Element) -> String {
    let inner = element.text();
    match element.attr("place") {
        Some("overstrike") => format!("《{inner}》"),
        Some("above") => format!("`{inner}´"),
        Some("below") => format!("/{inner}\\"),
        _ => inner.to_string(),
    }
}

/// Editorial correction (`corr`/`sic`) or orthographic regularization
/// (`reg`/`orig`). Without a recognized pair the contained text passes
/// through unlabeled.
pub fn choice(element: &Element) -> String {
    if let (Some(corr), Some(sic)) = (element.child("corr"), element.child("sic")) {
        format!("<{}|corr|{}>", corr.text(), sic.text())
    } else if let (Some(reg), Some(orig)) = (element.child("reg"), element.child("orig")) {
        format!("<{}|reg|{}>", orig.text(), reg.text())
    } else {
        element.collect_text()
    }
}

/// Epigraphic highlighting: apex, supraline, or ligature.
pub fn highlight(element: &Element) -> String {
    let inner = element.text();
    match element.attr("rend") {
        Some("apex") => format!("{inner}(΄)"),
        Some("supraline") => format!("{inner}¯"),
        Some("ligature") => format!("{inner}{COMBINING_DOUBLE_BREVE}"),
        _ => inner.to_string(),
    }
}

/// Named scribal symbols, `g type="cross"` and friends.
pub fn symbol(element: &Element) -> String {
    match element.attr("type") {
        Some("cross") => "♱".to_string(),
        Some("dipunct") => "։".to_string(),
        Some("dot") => "⸱".to_string(),
        Some(other) => format!("*{other}*"),
        None => String::new(),
    }
}

/// Letters the scribe wrote but should not have, braced.
pub fn surplus(element: &Element) -> String {
    format!("{{{}}}", element.text())
}

/// Editorial note. The conventional sigla (`!`, `sic`, `e.g.`) become
/// `/*…*/`; anything else is parenthesized.
pub fn note(element: &Element) -> String {
    let text = element.text();
    if matches!(text, "!" | "sic" | "e.g.") {
        format!("/*{text}*/")
    } else {
        format!("({text})")
    }
}

/// Uninscribed space on the support, the vacat.
pub fn space(element: &Element) -> String {
    let quantity = element.attr("quantity").unwrap_or("");
    let extent_unknown = element.attr("extent") == Some("unknown");
    match element.attr("unit") {
        Some("character") => {
            if extent_unknown {
                "vac.?".to_string()
            } else {
                format!("vac.{quantity}")
            }
        }
        Some("line") => {
            if extent_unknown {
                "vac.?lin".to_string()
            } else {
                format!("vac.{quantity}lin")
            }
        }
        _ => String::new(),
    }
}
