//! # epidoc
//!
//! A fast, lightweight library for rendering TEI/EpiDoc inscription
//! documents as Leiden+ annotated plain text.
//!
//! ## Features
//!
//! - Parse TEI XML into a read-only markup tree with exact text/tail
//!   preservation
//! - Render edition subtrees with the full Leiden+ convention set
//!   (restorations, lacunae, unclear letters, abbreviations, erasures,
//!   scribal symbols, vacats, …)
//! - Extract language-filtered translation, commentary, and apparatus
//!   sections
//! - Resolve bibliography markers against a `listBibl` citation lookup
//!
//! ## Quick Start
//!
//! ```
//! use epidoc::{CitationLookup, Inscription};
//!
//! let xml = r#"<TEI xmlns="http://www.tei-c.org/ns/1.0">
//!   <text><body>
//!     <div type="edition" xml:lang="grc">
//!       <ab><lb/><expan><abbr>K</abbr><ex>ύριος</ex></expan><gap unit="character" quantity="3"/></ab>
//!     </div>
//!   </body></text>
//! </TEI>"#;
//!
//! let inscription = Inscription::parse(xml).unwrap();
//! let record = inscription.render("en", &CitationLookup::default());
//! assert_eq!(record.edition, "K(ύριος)[...]");
//! ```
//!
//! Rendering is a pure function of the document tree: missing structure
//! yields empty sections, never an error, and independent documents can be
//! rendered in parallel against one shared [`CitationLookup`].

pub mod bibliography;
pub mod dom;
pub mod error;
pub mod leiden;
pub mod record;
pub mod sections;

pub use bibliography::{CitationLookup, resolve_bibliography};
pub use dom::Element;
pub use error::{Error, Result};
pub use leiden::{render, render_edition};
pub use record::{Inscription, InscriptionRecord, Metadata};
pub use sections::{extract_apparatus, extract_language_text};
