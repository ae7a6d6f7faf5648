//! Markup parsing.
//!
//! Builds an owned [`Element`] tree from markup source with `quick-xml`.
//! Character data is attached with the text/tail convention: data before
//! an element's first child goes to its `text`, data after a child's
//! closing tag goes to that child's `tail`.

use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;

use super::Element;
use crate::error::LineModeError;

/// Deepest element nesting accepted by [`parse`].
pub const MAX_DEPTH: usize = 256;

/// Parse markup source into an element tree.
///
/// Whitespace is kept exactly as written; see [`super::normalize`].
/// Elements nested deeper than [`MAX_DEPTH`] are a parse error.
pub fn parse(source: &str) -> Result<Element, LineModeError> {
    let mut reader = Reader::from_str(source);
    reader.config_mut().trim_text(false);

    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        let event = reader.read_event().map_err(|err| {
            LineModeError::Parse(format!("{} at byte {}", err, reader.error_position()))
        })?;

        match event {
            Event::Start(e) => {
                check_depth(&stack)?;
                let element = start_element(&reader, &e)?;
                if stack.is_empty() && root.is_some() {
                    return Err(multiple_roots(&element));
                }
                stack.push(element);
            }
            Event::Empty(e) => {
                check_depth(&stack)?;
                let element = start_element(&reader, &e)?;
                close_element(&mut stack, &mut root, element)?;
            }
            Event::End(_) => {
                let element = stack.pop().ok_or_else(|| {
                    LineModeError::Parse("closing tag without matching opening tag".into())
                })?;
                close_element(&mut stack, &mut root, element)?;
            }
            Event::Text(e) => {
                let text = e
                    .decode()
                    .map_err(|err| LineModeError::Parse(format!("text decode: {}", err)))?;
                append_text(&mut stack, &text)?;
            }
            Event::CData(e) => {
                let text = reader
                    .decoder()
                    .decode(&e)
                    .map_err(|err| LineModeError::Parse(format!("cdata decode: {}", err)))?;
                append_text(&mut stack, &text)?;
            }
            Event::GeneralRef(e) => {
                let name = e
                    .decode()
                    .map_err(|err| LineModeError::Parse(format!("entity decode: {}", err)))?;
                let entity = format!("&{};", name);
                let resolved = quick_xml::escape::unescape(&entity)
                    .map_err(|err| LineModeError::Parse(format!("entity {}: {}", entity, err)))?;
                append_text(&mut stack, &resolved)?;
            }
            Event::Eof => break,
            // Declarations, comments, processing instructions, doctype
            _ => {}
        }
    }

    if let Some(open) = stack.last() {
        return Err(LineModeError::Parse(format!(
            "unexpected end of markup: <{}> is not closed",
            open.tag()
        )));
    }

    let root = root.ok_or_else(|| LineModeError::Parse("no root element".into()))?;
    log::debug!("parsed <{}> with {} children", root.tag(), root.children.len());
    Ok(root)
}

fn start_element(reader: &Reader<&[u8]>, start: &BytesStart<'_>) -> Result<Element, LineModeError> {
    let decoder = reader.decoder();
    let name = decoder
        .decode(start.local_name().as_ref())
        .map_err(|err| LineModeError::Parse(format!("tag name decode: {}", err)))?
        .into_owned();
    let mut element = Element::from_tag(&name);

    for attr in start.attributes() {
        let attr = attr.map_err(|err| LineModeError::Parse(format!("<{}>: {}", name, err)))?;
        let key = decoder
            .decode(attr.key.local_name().as_ref())
            .map_err(|err| LineModeError::Parse(format!("attribute name decode: {}", err)))?
            .into_owned();
        let raw = decoder
            .decode(&attr.value)
            .map_err(|err| LineModeError::Parse(format!("attribute decode: {}", err)))?;
        let value = quick_xml::escape::unescape(&raw)
            .map_err(|err| LineModeError::Parse(format!("attribute {}: {}", key, err)))?
            .into_owned();
        element.attributes.insert(key, value);
    }

    Ok(element)
}

fn check_depth(stack: &[Element]) -> Result<(), LineModeError> {
    if stack.len() >= MAX_DEPTH {
        return Err(LineModeError::Parse(format!(
            "nesting deeper than {} elements",
            MAX_DEPTH
        )));
    }
    Ok(())
}

fn close_element(
    stack: &mut [Element],
    root: &mut Option<Element>,
    element: Element,
) -> Result<(), LineModeError> {
    match stack.last_mut() {
        Some(parent) => parent.children.push(element),
        None if root.is_some() => return Err(multiple_roots(&element)),
        None => *root = Some(element),
    }
    Ok(())
}

fn append_text(stack: &mut [Element], text: &str) -> Result<(), LineModeError> {
    let Some(parent) = stack.last_mut() else {
        if text.trim().is_empty() {
            return Ok(());
        }
        return Err(LineModeError::Parse(format!(
            "text outside the root element: {:?}",
            text.trim()
        )));
    };

    let slot = match parent.children.last_mut() {
        Some(last) => &mut last.tail,
        None => &mut parent.text,
    };
    slot.get_or_insert_with(String::new).push_str(text);
    Ok(())
}

fn multiple_roots(element: &Element) -> LineModeError {
    LineModeError::Parse(format!(
        "unexpected <{}> after the root element",
        element.tag()
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::ElementKind;

    #[test]
    fn test_text_and_tail() {
        let root = parse("<document><line>Sub<bold>total</bold>: 5</line></document>").unwrap();
        assert_eq!(root.kind, ElementKind::Document);
        let line = &root.children[0];
        assert_eq!(line.kind, ElementKind::Line);
        assert_eq!(line.text_str(), Some("Sub"));
        let bold = &line.children[0];
        assert_eq!(bold.kind, ElementKind::Bold);
        assert_eq!(bold.text_str(), Some("total"));
        assert_eq!(bold.tail_str(), Some(": 5"));
    }

    #[test]
    fn test_whitespace_preserved() {
        let root = parse("<document>\n  <line> a  b </line>\n</document>").unwrap();
        assert_eq!(root.text_str(), Some("\n  "));
        assert_eq!(root.children[0].text_str(), Some(" a  b "));
        assert_eq!(root.children[0].tail_str(), Some("\n"));
    }

    #[test]
    fn test_attributes() {
        let root = parse(
            "<document charset=\"utf-8\"><line><span width=\"10\" align='right'>hi</span></line></document>",
        )
        .unwrap();
        assert_eq!(root.charset(), "utf-8");
        let span = &root.children[0].children[0];
        assert_eq!(span.attribute("width"), Some("10"));
        assert_eq!(span.attribute("align"), Some("right"));
    }

    #[test]
    fn test_empty_element() {
        let root = parse("<document><line>a<span width=\"3\"/>b</line></document>").unwrap();
        let line = &root.children[0];
        assert_eq!(line.children.len(), 1);
        assert_eq!(line.children[0].text, None);
        assert_eq!(line.children[0].tail_str(), Some("b"));
    }

    #[test]
    fn test_entities_and_cdata() {
        let root =
            parse("<document><line>A &amp; B &#65;<![CDATA[<x>]]></line></document>").unwrap();
        assert_eq!(root.children[0].text_str(), Some("A & B A<x>"));
    }

    #[test]
    fn test_unknown_tag_is_kept() {
        let root = parse("<document><line><blink>x</blink></line></document>").unwrap();
        assert_eq!(
            root.children[0].children[0].kind,
            ElementKind::Unknown("blink".into())
        );
    }

    #[test]
    fn test_declaration_and_comments_ignored() {
        let root =
            parse("<?xml version=\"1.0\"?>\n<document><line>a<!-- note -->b</line></document>")
                .unwrap();
        assert_eq!(root.children[0].text_str(), Some("ab"));
    }

    #[test]
    fn test_nesting_limit() {
        // document and line take two levels
        let nested = |depth: usize| {
            format!(
                "<document><line>{}x{}</line></document>",
                "<bold>".repeat(depth),
                "</bold>".repeat(depth)
            )
        };
        assert!(parse(&nested(MAX_DEPTH - 2)).is_ok());
        assert!(matches!(
            parse(&nested(MAX_DEPTH - 1)),
            Err(LineModeError::Parse(msg)) if msg.contains("nesting")
        ));

        let empty = format!(
            "<document><line>{}<span/>{}</line></document>",
            "<bold>".repeat(MAX_DEPTH - 2),
            "</bold>".repeat(MAX_DEPTH - 2)
        );
        assert!(matches!(parse(&empty), Err(LineModeError::Parse(_))));
    }

    #[test]
    fn test_syntax_errors() {
        assert!(matches!(parse(""), Err(LineModeError::Parse(_))));
        assert!(matches!(
            parse("<document><line>x</document>"),
            Err(LineModeError::Parse(_))
        ));
        assert!(matches!(
            parse("<document><line>x</line>"),
            Err(LineModeError::Parse(_))
        ));
        assert!(matches!(
            parse("<document/><document/>"),
            Err(LineModeError::Parse(_))
        ));
        assert!(matches!(
            parse("stray<document/>"),
            Err(LineModeError::Parse(_))
        ));
    }
}
