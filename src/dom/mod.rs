//! Owned markup tree for one parsed TEI document.
//!
//! The tree is read-only input to the rendering core: every accessor returns
//! an `Option` or a default, so absent structure never turns into an error
//! further down the pipeline.

mod parser;

pub use parser::{parse, parse_bytes};

/// One element of the markup tree.
///
/// Element and attribute names are stored with their namespace prefixes
/// stripped, so `tei:supplied` is read as `supplied` and `xml:lang` as
/// `lang`. `text` holds the element's own leading text; `tail` holds the
/// text that follows its end tag, before the next sibling. Children are kept
/// in document order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Element {
    name: String,
    attrs: Vec<(String, String)>,
    text: String,
    tail: String,
    children: Vec<Element>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The element's own leading text (before its first child).
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The text following this element's end tag, before the next sibling.
    pub fn tail(&self) -> &str {
        &self.tail
    }

    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// Attribute value by (prefix-stripped) name.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// First direct child with the given name.
    pub fn child(&self, name: &str) -> Option<&Element> {
        self.children.iter().find(|c| c.name == name)
    }

    /// All direct children with the given name, in document order.
    pub fn children_named<'a, 'b>(
        &'a self,
        name: &'b str,
    ) -> impl Iterator<Item = &'a Element> + use<'a, 'b> {
        self.children.iter().filter(move |c| c.name == name)
    }

    /// First descendant with the given name (depth-first document order;
    /// does not match `self`).
    pub fn descendant(&self, name: &str) -> Option<&Element> {
        for child in &self.children {
            if child.name == name {
                return Some(child);
            }
            if let Some(found) = child.descendant(name) {
                return Some(found);
            }
        }
        None
    }

    /// All descendants with the given name, depth-first document order.
    pub fn descendants<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> {
        let mut found = Vec::new();
        self.collect_descendants(name, &mut found);
        found.into_iter()
    }

    fn collect_descendants<'a>(&'a self, name: &str, found: &mut Vec<&'a Element>) {
        for child in &self.children {
            if child.name == name {
                found.push(child);
            }
            child.collect_descendants(name, found);
        }
    }

    /// Walk a relative `a/b/c` child path.
    pub fn find(&self, path: &str) -> Option<&Element> {
        let mut current = self;
        for segment in path.split('/') {
            current = current.child(segment)?;
        }
        Some(current)
    }

    /// Trimmed text at a relative `a/b/c` path, optionally filtered by the
    /// final segment's `lang` attribute. Absence at any step, a language
    /// mismatch, or whitespace-only text all yield `None`.
    pub fn text_of(&self, path: &str, lang: Option<&str>) -> Option<&str> {
        let (parent, name) = match path.rsplit_once('/') {
            Some((parent_path, name)) => (self.find(parent_path)?, name),
            None => (self, path),
        };
        parent
            .children_named(name)
            .find(|e| lang.is_none_or(|l| e.attr("lang") == Some(l)))
            .map(|e| e.text.trim())
            .filter(|t| !t.is_empty())
    }

    /// [`Element::text_of`] with a caller-supplied fallback for the absent
    /// case.
    pub fn text_or_default<'a>(
        &'a self,
        path: &str,
        lang: Option<&str>,
        default: &'a str,
    ) -> &'a str {
        self.text_of(path, lang).unwrap_or(default)
    }

    /// Trimmed text of the first descendant with the given name whose `lang`
    /// attribute matches.
    pub fn lang_text<'a>(&'a self, name: &'a str, lang: &str) -> Option<&'a str> {
        self.descendants(name)
            .find(|e| e.attr("lang") == Some(lang))
            .map(|e| e.text.trim())
            .filter(|t| !t.is_empty())
    }

    /// Trimmed text of the first descendant with the given name, any language.
    pub fn first_text(&self, name: &str) -> Option<&str> {
        self.descendant(name)
            .map(|e| e.text.trim())
            .filter(|t| !t.is_empty())
    }

    /// All text contained in this element: its own leading text, then each
    /// child's contained text followed by that child's tail, recursively.
    pub fn collect_text(&self) -> String {
        let mut out = String::new();
        self.collect_text_into(&mut out);
        out
    }

    fn collect_text_into(&self, out: &mut String) {
        out.push_str(&self.text);
        for child in &self.children {
            child.collect_text_into(out);
            out.push_str(&child.tail);
        }
    }

    // Mutators used by the parser while the tree is under construction.

    pub(crate) fn push_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attrs.push((name.into(), value.into()));
    }

    pub(crate) fn push_child(&mut self, child: Element) {
        self.children.push(child);
    }

    pub(crate) fn append_text(&mut self, text: &str) {
        // Text before the first child is leading text; text after a child
        // closed is that child's tail.
        match self.children.last_mut() {
            Some(last) => last.tail.push_str(text),
            None => self.text.push_str(text),
        }
    }
}
