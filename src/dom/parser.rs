//! TEI XML parsing into the owned [`Element`] tree.
//!
//! Built on quick-xml's event reader. Text is kept verbatim (no trimming):
//! the Leiden+ renderer depends on leading and tail text surviving exactly
//! as written, including whitespace between elements.

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use crate::dom::Element;
use crate::error::{Error, Result};

/// Parse a TEI document from raw bytes, stripping a UTF-8 BOM if present.
pub fn parse_bytes(bytes: &[u8]) -> Result<Element> {
    let text = String::from_utf8(strip_bom(bytes).to_vec())?;
    parse(&text)
}

/// Parse a TEI document into its root element.
pub fn parse(xml: &str) -> Result<Element> {
    let mut reader = Reader::from_str(xml);

    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        match reader.read_event()? {
            Event::Start(e) => stack.push(element_from_tag(&e)),
            Event::Empty(e) => {
                let element = element_from_tag(&e);
                close_element(element, &mut stack, &mut root);
            }
            Event::End(_) => {
                if let Some(element) = stack.pop() {
                    close_element(element, &mut stack, &mut root);
                }
            }
            Event::Text(e) => append_text(&mut stack, &String::from_utf8_lossy(e.as_ref())),
            Event::CData(e) => append_text(&mut stack, &String::from_utf8_lossy(e.as_ref())),
            Event::GeneralRef(e) => {
                let entity = String::from_utf8_lossy(e.as_ref());
                if let Some(resolved) = resolve_entity(&entity) {
                    append_text(&mut stack, &resolved);
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    root.ok_or(Error::EmptyDocument)
}

fn element_from_tag(e: &BytesStart) -> Element {
    let name = e.name();
    let mut element = Element::new(String::from_utf8_lossy(local_name(name.as_ref())));

    for attr in e.attributes().flatten() {
        let key = String::from_utf8_lossy(local_name(attr.key.as_ref())).into_owned();
        let value = String::from_utf8_lossy(&attr.value).into_owned();
        element.push_attr(key, value);
    }

    element
}

/// Attach a finished element to its parent, or make it the document root.
fn close_element(element: Element, stack: &mut Vec<Element>, root: &mut Option<Element>) {
    if let Some(parent) = stack.last_mut() {
        parent.push_child(element);
    } else if root.is_none() {
        *root = Some(element);
    }
}

/// Route character data to the open element's leading text or, once it has
/// children, to the last child's tail.
fn append_text(stack: &mut Vec<Element>, text: &str) {
    if let Some(open) = stack.last_mut() {
        open.append_text(text);
    }
}

/// Strip UTF-8 BOM if present.
fn strip_bom(data: &[u8]) -> &[u8] {
    if data.starts_with(&[0xEF, 0xBB, 0xBF]) {
        &data[3..]
    } else {
        data
    }
}

/// Extract local name from namespaced XML name (e.g., "tei:supplied" ->
/// "supplied", "xml:lang" -> "lang").
fn local_name(name: &[u8]) -> &[u8] {
    name.iter()
        .rposition(|&b| b == b':')
        .map(|i| &name[i + 1..])
        .unwrap_or(name)
}

/// Resolve XML entity references.
fn resolve_entity(entity: &str) -> Option<String> {
    match entity {
        "apos" => return Some("'".to_string()),
        "quot" => return Some("\"".to_string()),
        "lt" => return Some("<".to_string()),
        "gt" => return Some(">".to_string()),
        "amp" => return Some("&".to_string()),
        _ => {}
    }

    if let Some(hex) = entity.strip_prefix("#x") {
        if let Ok(code) = u32::from_str_radix(hex, 16)
            && let Some(c) = char::from_u32(code)
        {
            return Some(c.to_string());
        }
    } else if let Some(dec) = entity.strip_prefix('#')
        && let Ok(code) = dec.parse::<u32>()
        && let Some(c) = char::from_u32(code)
    {
        return Some(c.to_string());
    }

    None
}
