//! Per-inscription document assembly.
//!
//! An [`Inscription`] wraps one parsed TEI document; [`Inscription::render`]
//! produces the full [`InscriptionRecord`]: Leiden+ edition text, the
//! language-filtered parallel sections, the resolved bibliography, and the
//! header metadata. Every piece degrades to empty when its structure is
//! missing; only the edition gets a visible placeholder.

use crate::bibliography::{CitationLookup, resolve_bibliography};
use crate::dom::{self, Element};
use crate::error::{Error, Result};
use crate::leiden;
use crate::sections::{extract_apparatus, extract_language_text};

/// Placeholder shown when a document carries no edition subtree at all.
pub const MISSING_EDITION: &str = "No edition text available.";

/// One parsed TEI inscription document.
#[derive(Debug, Clone)]
pub struct Inscription {
    root: Element,
}

impl Inscription {
    /// Parse a TEI document. Fails only on malformed XML or a non-TEI root;
    /// a structurally sparse document still parses and renders as mostly
    /// empty sections.
    pub fn parse(xml: &str) -> Result<Self> {
        Self::from_root(dom::parse(xml)?)
    }

    /// Parse from raw bytes (strips a UTF-8 BOM if present).
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Self::from_root(dom::parse_bytes(bytes)?)
    }

    fn from_root(root: Element) -> Result<Self> {
        if root.name() != "TEI" {
            return Err(Error::NotTei(root.name().to_string()));
        }
        Ok(Self { root })
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    /// The body `div` with the given `type` attribute, if present.
    pub fn body_div(&self, div_type: &str) -> Option<&Element> {
        self.root
            .find("text/body")?
            .children_named("div")
            .find(|d| d.attr("type") == Some(div_type))
    }

    /// Render the full record: edition, parallel sections, bibliography,
    /// metadata.
    pub fn render(&self, lang: &str, lookup: &CitationLookup) -> InscriptionRecord {
        let edition = match self.body_div("edition") {
            Some(div) => leiden::render_edition(div),
            None => MISSING_EDITION.to_string(),
        };

        InscriptionRecord {
            metadata: self.metadata(lang),
            edition,
            translation: extract_language_text(self.body_div("translation"), "seg", lang),
            commentary: extract_language_text(self.body_div("commentary"), "seg", lang),
            apparatus: extract_apparatus(self.body_div("apparatus"), lang),
            bibliography: resolve_bibliography(self.body_div("bibliography"), lookup),
        }
    }

    /// Extract the header metadata. Every field is optional; a header with
    /// nothing in it yields the default.
    pub fn metadata(&self, lang: &str) -> Metadata {
        let root = &self.root;
        let mut meta = Metadata::default();

        meta.title = root
            .text_or_default("teiHeader/fileDesc/titleStmt/title", Some(lang), "")
            .to_string();

        meta.id = root
            .descendants("idno")
            .find(|i| i.attr("type") == Some("filename"))
            .map(|i| i.text().trim().to_string())
            .unwrap_or_default();

        if let Some(title_stmt) = root.descendant("titleStmt") {
            for editor in title_stmt.children_named("editor") {
                if let Some(name) = editor
                    .children_named("persName")
                    .find(|p| p.attr("lang") == Some(lang))
                    && !name.text().trim().is_empty()
                {
                    meta.editors.push(name.text().trim().to_string());
                }
            }
        }

        let ms_desc = root.descendant("msDesc");
        if let Some(ms_desc) = ms_desc {
            meta.object_type = ms_desc.lang_text("objectType", lang).map(String::from);
            meta.material = ms_desc.lang_text("material", lang).map(String::from);
            meta.category = ms_desc
                .descendant("msContents")
                .and_then(|c| c.descendant("summary"))
                .and_then(|s| s.text_of("seg", Some(lang)))
                .map(String::from);

            if let Some(alt) = ms_desc
                .descendants("altIdentifier")
                .find(|a| a.attr("lang") == Some(lang))
            {
                meta.institution = alt
                    .descendant("repository")
                    .and_then(|r| r.first_text("ref"))
                    .map(String::from);
                meta.inventory = alt.first_text("idno").map(String::from);
            }

            meta.dimensions = extract_dimensions(ms_desc);

            meta.letter_height = ms_desc
                .descendant("handNote")
                .and_then(|h| h.text_of("height", None))
                .map(String::from);
            meta.layout = ms_desc
                .descendant("layoutDesc")
                .and_then(|l| l.text_of("layout", Some(lang)))
                .map(String::from);
        }

        if let Some(history) = root.descendant("history") {
            if let Some(orig_place) = history.descendant("origPlace") {
                meta.origin_place = orig_place.text_of("seg", Some(lang)).map(String::from);
                meta.origin_ref = orig_place.attr("ref").map(String::from);
            }
            if let Some(orig_date) = history.descendant("origDate") {
                meta.date_not_before = orig_date.attr("notBefore").map(String::from);
                meta.date_not_after = orig_date.attr("notAfter").map(String::from);
                meta.date_text = orig_date.text_of("seg", Some(lang)).map(String::from);
            }
            if let Some(found) = history
                .children_named("provenance")
                .find(|p| p.attr("type") == Some("found"))
            {
                meta.found_when = found.attr("when").map(String::from);
                meta.found_place = found
                    .descendants("seg")
                    .find(|s| s.attr("lang") == Some(lang))
                    .and_then(|s| {
                        s.first_text("placeName")
                            .or_else(|| Some(s.text().trim()).filter(|t| !t.is_empty()))
                    })
                    .map(String::from);
            }
        }

        meta
    }
}

/// Support dimensions in centimetres, as recorded by the editors.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "cli", derive(serde::Serialize))]
pub struct Dimensions {
    pub height: Option<String>,
    pub width: Option<String>,
    pub depth: Option<String>,
    pub diameter: Option<String>,
}

impl Dimensions {
    pub fn is_empty(&self) -> bool {
        self.height.is_none()
            && self.width.is_none()
            && self.depth.is_none()
            && self.diameter.is_none()
    }
}

/// Dimensions come from the support's `dimensions` element when present,
/// falling back to the layout description (some documents record them
/// there).
fn extract_dimensions(ms_desc: &Element) -> Dimensions {
    let from = |container: &Element| Dimensions {
        height: container
            .first_text("height")
            .or_else(|| container.first_text("length"))
            .or_else(|| container.first_text("lenght"))
            .map(String::from),
        width: container.first_text("width").map(String::from),
        depth: container.first_text("depth").map(String::from),
        diameter: container
            .descendants("dim")
            .find(|d| d.attr("type") == Some("diameter"))
            .map(|d| d.text().trim().to_string())
            .filter(|t| !t.is_empty()),
    };

    let primary = ms_desc
        .descendant("support")
        .and_then(|s| s.child("dimensions"))
        .map(from)
        .unwrap_or_default();
    if !primary.is_empty() {
        return primary;
    }

    ms_desc
        .descendant("layoutDesc")
        .and_then(|l| l.child("layout"))
        .map(from)
        .unwrap_or_default()
}

/// Inscription header metadata, extracted from `teiHeader`.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "cli", derive(serde::Serialize))]
pub struct Metadata {
    pub title: String,
    pub id: String,
    pub editors: Vec<String>,
    pub object_type: Option<String>,
    pub material: Option<String>,
    pub category: Option<String>,
    pub institution: Option<String>,
    pub inventory: Option<String>,
    pub dimensions: Dimensions,
    pub letter_height: Option<String>,
    pub layout: Option<String>,
    pub origin_place: Option<String>,
    pub origin_ref: Option<String>,
    pub date_not_before: Option<String>,
    pub date_not_after: Option<String>,
    pub date_text: Option<String>,
    pub found_when: Option<String>,
    pub found_place: Option<String>,
}

/// The assembled outputs for one inscription document.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "cli", derive(serde::Serialize))]
pub struct InscriptionRecord {
    pub metadata: Metadata,
    pub edition: String,
    pub translation: String,
    pub commentary: String,
    pub apparatus: String,
    pub bibliography: String,
}
