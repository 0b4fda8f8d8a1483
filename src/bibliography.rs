//! Citation lookup built from a TEI `listBibl` document, and resolution of
//! inline bibliography markers against it.

use std::collections::HashMap;

use crate::dom::Element;

/// Namespace prefix used by `sameAs` cross-references into the
/// bibliographic-record document.
const BIB_PREFIX: &str = "bib:";

/// Immutable mapping of citation-record id to a formatted citation string.
///
/// Built once per bibliographic-record document and shared read-only across
/// every resolution; an empty lookup makes the resolver fall back to each
/// marker's literal text.
#[derive(Debug, Clone, Default)]
pub struct CitationLookup {
    refs: HashMap<String, String>,
}

impl CitationLookup {
    /// Build the lookup from a parsed `listBibl` document: one formatted
    /// citation per `biblStruct` carrying an id.
    pub fn from_document(root: &Element, lang: &str) -> Self {
        let mut refs = HashMap::new();
        for record in root.descendants("biblStruct") {
            if let Some(id) = record.attr("id") {
                refs.insert(id.to_string(), format_citation(record, lang));
            }
        }
        Self { refs }
    }

    pub fn get(&self, id: &str) -> Option<&str> {
        self.refs.get(id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.refs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.refs.is_empty()
    }
}

/// Format one `biblStruct` as `Authors (date) Title. Vol. n. Place (Country).`
/// with empty components omitted and stray spaces before periods collapsed.
fn format_citation(record: &Element, lang: &str) -> String {
    let mut authors = Vec::new();
    for author in record.descendants("author") {
        let surname = author
            .children_named("surname")
            .find(|e| e.attr("lang") == Some(lang));
        let forename = author
            .children_named("forename")
            .find(|e| e.attr("lang") == Some(lang));
        if let (Some(surname), Some(forename)) = (surname, forename) {
            authors.push(format!(
                "{}, {}",
                surname.text().trim(),
                forename.text().trim()
            ));
        }
    }
    let author_str = authors.join("; ");

    let monogr = record.child("monogr");
    let title = monogr
        .and_then(|m| {
            m.children_named("title")
                .find(|t| t.attr("level") == Some("m") && t.attr("lang") == Some(lang))
                .or_else(|| m.children_named("title").find(|t| t.attr("lang") == Some(lang)))
        })
        .map(|t| t.text().trim())
        .unwrap_or("");

    let imprint = record.descendant("imprint");
    let volume = imprint
        .and_then(|i| {
            i.children_named("biblScope")
                .find(|s| s.attr("unit") == Some("volume"))
        })
        .map(|s| s.text().trim())
        .unwrap_or("");
    let pub_place = imprint.and_then(|i| {
        i.children_named("pubPlace")
            .find(|p| p.attr("lang") == Some(lang))
    });
    let settlement = pub_place
        .and_then(|p| p.child("settlement"))
        .map(|s| s.text().trim())
        .unwrap_or("");
    let country = pub_place
        .and_then(|p| p.child("country"))
        .map(|c| c.text().trim())
        .unwrap_or("");
    let date = imprint
        .and_then(|i| i.child("date"))
        .map(|d| d.text().trim())
        .unwrap_or("");

    let mut parts = Vec::new();
    if author_str.is_empty() {
        parts.push(format!("({date})"));
    } else {
        parts.push(format!("{author_str} ({date})"));
    }
    if !title.is_empty() {
        parts.push(format!("{title}."));
    }
    if !volume.is_empty() {
        parts.push(format!("Vol. {volume}."));
    }
    if !settlement.is_empty() && !country.is_empty() {
        parts.push(format!("{settlement} ({country})."));
    }

    parts.join(" ").replace(" .", ".").trim().to_string()
}

/// Resolve every `bibl` marker in a bibliography section against the lookup.
///
/// A marker with `sameAs="bib:ID"` resolves to the looked-up citation, with
/// its own inner text appended as `, p.{page}` when non-empty. Markers with
/// no cross-reference (or a lookup miss) fall back to their literal text;
/// markers with nothing to show are skipped. Joined with newlines in
/// document order.
pub fn resolve_bibliography(section: Option<&Element>, lookup: &CitationLookup) -> String {
    let Some(section) = section else {
        return String::new();
    };

    let mut lines = Vec::new();
    for marker in section.descendants("bibl") {
        let page = marker.text().trim();
        let entry = marker
            .attr("sameAs")
            .and_then(|same| same.strip_prefix(BIB_PREFIX))
            .and_then(|id| lookup.get(id));

        match entry {
            Some(entry) if page.is_empty() => lines.push(entry.to_string()),
            Some(entry) => lines.push(format!("{entry}, p.{page}")),
            None if page.is_empty() => {}
            None => lines.push(page.to_string()),
        }
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::parse;

    const LIST_BIBL: &str = r#"<listBibl xmlns="http://www.tei-c.org/ns/1.0">
        <biblStruct xml:id="Beshevliev1964">
            <monogr>
                <author>
                    <surname xml:lang="en">Beshevliev</surname>
                    <surname xml:lang="bg">Бешевлиев</surname>
                    <forename xml:lang="en">Veselin</forename>
                    <forename xml:lang="bg">Веселин</forename>
                </author>
                <title level="m" xml:lang="en">Die protobulgarischen Inschriften</title>
                <title xml:lang="bg">Първобългарски надписи</title>
                <imprint>
                    <biblScope unit="volume">23</biblScope>
                    <pubPlace xml:lang="en">
                        <settlement>Berlin</settlement>
                        <country>Germany</country>
                    </pubPlace>
                    <date>1964</date>
                </imprint>
            </monogr>
        </biblStruct>
        <biblStruct xml:id="Anon1900">
            <monogr>
                <title xml:lang="en">Corpus Inscriptionum</title>
                <imprint><date>1900</date></imprint>
            </monogr>
        </biblStruct>
        <biblStruct>
            <monogr><title xml:lang="en">No id, skipped</title></monogr>
        </biblStruct>
    </listBibl>"#;

    fn lookup() -> CitationLookup {
        CitationLookup::from_document(&parse(LIST_BIBL).unwrap(), "en")
    }

    #[test]
    fn test_lookup_formats_full_citation() {
        let lookup = lookup();
        assert_eq!(lookup.len(), 2);
        assert_eq!(
            lookup.get("Beshevliev1964"),
            Some(
                "Beshevliev, Veselin (1964) Die protobulgarischen Inschriften. \
                 Vol. 23. Berlin (Germany)."
            )
        );
    }

    #[test]
    fn test_lookup_without_authors() {
        let lookup = lookup();
        assert_eq!(lookup.get("Anon1900"), Some("(1900) Corpus Inscriptionum."));
    }

    #[test]
    fn test_lookup_absent_document() {
        let lookup = CitationLookup::default();
        assert!(lookup.is_empty());
        assert_eq!(lookup.get("anything"), None);
    }

    #[test]
    fn test_resolve_with_page() {
        let div = parse(r#"<div><bibl sameAs="bib:Anon1900">45</bibl></div>"#).unwrap();
        assert_eq!(
            resolve_bibliography(Some(&div), &lookup()),
            "(1900) Corpus Inscriptionum., p.45"
        );
    }

    #[test]
    fn test_resolve_without_page() {
        let div = parse(r#"<div><bibl sameAs="bib:Anon1900"/></div>"#).unwrap();
        assert_eq!(
            resolve_bibliography(Some(&div), &lookup()),
            "(1900) Corpus Inscriptionum."
        );
    }

    #[test]
    fn test_resolve_fallback_to_literal_text() {
        let div = parse("<div><bibl>see also p.12</bibl></div>").unwrap();
        assert_eq!(resolve_bibliography(Some(&div), &lookup()), "see also p.12");
    }

    #[test]
    fn test_resolve_lookup_miss_falls_back() {
        let div = parse(r#"<div><bibl sameAs="bib:Unknown">7</bibl></div>"#).unwrap();
        assert_eq!(resolve_bibliography(Some(&div), &lookup()), "7");
    }

    #[test]
    fn test_resolve_multiple_markers() {
        let div = parse(
            r#"<div>
                <bibl sameAs="bib:Anon1900">3</bibl>
                <bibl>Fieldnotes 1988</bibl>
            </div>"#,
        )
        .unwrap();
        assert_eq!(
            resolve_bibliography(Some(&div), &lookup()),
            "(1900) Corpus Inscriptionum., p.3\nFieldnotes 1988"
        );
    }
}
