//! Language-filtered extraction of the parallel text sections
//! (translation, commentary, apparatus).

use crate::dom::Element;

/// Collect the text of every descendant named `element_name` whose `lang`
/// attribute matches, joined with newlines in document order.
///
/// A nested `note` child's text is preferred over the element's own text
/// (translation segments often carry their prose in a note). Returns an
/// empty string when the section is absent or yields nothing.
pub fn extract_language_text(
    section: Option<&Element>,
    element_name: &str,
    lang: &str,
) -> String {
    let Some(section) = section else {
        return String::new();
    };

    let mut texts = Vec::new();
    for element in section.descendants(element_name) {
        if element.attr("lang") != Some(lang) {
            continue;
        }
        if let Some(note) = element.child("note")
            && !note.text().is_empty()
        {
            texts.push(note.text().trim().to_string());
        } else if !element.text().is_empty() {
            texts.push(element.text().trim().to_string());
        }
    }
    texts.join("\n")
}

/// Extract the critical apparatus: the language-filtered heading first, then
/// one `Line {loc}: {notes}` entry per `app` element carrying a location,
/// its note texts joined by commas.
pub fn extract_apparatus(section: Option<&Element>, lang: &str) -> String {
    let Some(section) = section else {
        return String::new();
    };

    let mut lines = Vec::new();

    if let Some(head) = section
        .descendants("head")
        .find(|h| h.attr("lang") == Some(lang))
        && !head.text().is_empty()
    {
        lines.push(head.text().trim().to_string());
    }

    for app in section.descendants("app") {
        let Some(loc) = app.attr("loc") else {
            continue;
        };
        let notes: Vec<&str> = app
            .children_named("note")
            .filter(|n| !n.text().is_empty())
            .map(|n| n.text().trim())
            .collect();
        if !notes.is_empty() {
            lines.push(format!("Line {}: {}", loc, notes.join(", ")));
        }
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::parse;

    #[test]
    fn test_language_filtering() {
        let xml = r#"<div type="translation">
            <seg xml:lang="bg">Превод</seg>
            <seg xml:lang="en">Translation text</seg>
        </div>"#;
        let div = parse(xml).unwrap();
        assert_eq!(
            extract_language_text(Some(&div), "seg", "en"),
            "Translation text"
        );
        assert_eq!(extract_language_text(Some(&div), "seg", "bg"), "Превод");
        assert_eq!(extract_language_text(Some(&div), "seg", "de"), "");
    }

    #[test]
    fn test_prefers_nested_note() {
        let xml = r#"<div>
            <seg xml:lang="en"><note>From the note</note>own text</seg>
        </div>"#;
        let div = parse(xml).unwrap();
        assert_eq!(extract_language_text(Some(&div), "seg", "en"), "From the note");
    }

    #[test]
    fn test_multiple_segments_joined() {
        let xml = r#"<div>
            <seg xml:lang="en">First.</seg>
            <seg xml:lang="en">Second.</seg>
        </div>"#;
        let div = parse(xml).unwrap();
        assert_eq!(
            extract_language_text(Some(&div), "seg", "en"),
            "First.\nSecond."
        );
    }

    #[test]
    fn test_absent_section() {
        assert_eq!(extract_language_text(None, "seg", "en"), "");
        assert_eq!(extract_apparatus(None, "en"), "");
    }

    #[test]
    fn test_apparatus_entries() {
        let xml = r#"<div type="apparatus">
            <head xml:lang="en">Apparatus</head>
            <app loc="2"><note>ΚΕ for ΚΥΡΙΕ</note><note>supralinear</note></app>
            <app loc="5"><note>erased</note></app>
            <app><note>no location, skipped</note></app>
        </div>"#;
        let div = parse(xml).unwrap();
        assert_eq!(
            extract_apparatus(Some(&div), "en"),
            "Apparatus\nLine 2: ΚΕ for ΚΥΡΙΕ, supralinear\nLine 5: erased"
        );
    }

    #[test]
    fn test_apparatus_without_heading() {
        let xml = r#"<div><app loc="1"><note>note</note></app></div>"#;
        let div = parse(xml).unwrap();
        assert_eq!(extract_apparatus(Some(&div), "en"), "Line 1: note");
    }

    #[test]
    fn test_apparatus_entry_without_notes_skipped() {
        let xml = r#"<div><app loc="1"/><app loc="2"><note>kept</note></app></div>"#;
        let div = parse(xml).unwrap();
        assert_eq!(extract_apparatus(Some(&div), "en"), "Line 2: kept");
    }
}
