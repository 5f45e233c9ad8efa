/*!
 * XMLTV text codec.
 *
 * Parses guide markup into a `Document` and writes it back. Fields the passes
 * do not touch come out exactly as they went in; only inter-element layout
 * whitespace is regenerated.
 *
 * Comments inside `<tv>` survive. Top-level ones are written after the
 * programmes; comments before or after the root element are dropped.
 */

use log::debug;
use quick_xml::Reader;
use quick_xml::Writer;
use quick_xml::events::{BytesCData, BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use crate::errors::EpgError;

use super::model::{Attribute, Document, Element, Node, ROOT_ELEMENT};

/// Parse guide markup into a document
pub fn parse_document(text: &str) -> Result<Document, EpgError> {
    let mut reader = Reader::from_str(text);
    reader.config_mut().trim_text(false);

    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;
    let mut doctype: Option<String> = None;

    loop {
        let event = reader.read_event().map_err(|e| {
            EpgError::Parse(format!("{} at byte {}", e, reader.buffer_position()))
        })?;

        match event {
            Event::Start(start) => stack.push(open_element(&start)?),
            Event::Empty(start) => {
                let element = open_element(&start)?;
                attach(&mut stack, &mut root, element)?;
            }
            Event::End(end) => {
                let mut element = stack.pop().ok_or_else(|| {
                    EpgError::Parse(format!(
                        "unexpected closing tag </{}>",
                        String::from_utf8_lossy(end.name().as_ref())
                    ))
                })?;
                element.drop_layout_whitespace();
                attach(&mut stack, &mut root, element)?;
            }
            Event::Text(text) => {
                let text = text
                    .unescape()
                    .map_err(|e| EpgError::Parse(e.to_string()))?;
                match stack.last_mut() {
                    Some(parent) => parent.children.push(Node::Text(text.into_owned())),
                    None if text.trim().is_empty() => {}
                    None => {
                        return Err(EpgError::Parse(format!(
                            "text outside of the root element: {:?}",
                            text.trim()
                        )));
                    }
                }
            }
            Event::CData(data) => {
                if let Some(parent) = stack.last_mut() {
                    let data = String::from_utf8_lossy(&data.into_inner()).into_owned();
                    parent.children.push(Node::CData(data));
                }
            }
            Event::Comment(comment) => {
                if let Some(parent) = stack.last_mut() {
                    parent
                        .children
                        .push(Node::Comment(String::from_utf8_lossy(&comment).into_owned()));
                }
            }
            Event::DocType(content) => {
                doctype = Some(String::from_utf8_lossy(&content).trim().to_string());
            }
            Event::Decl(_) | Event::PI(_) => {}
            Event::Eof => break,
        }
    }

    if let Some(open) = stack.last() {
        return Err(EpgError::Parse(format!(
            "unexpected end of document inside <{}>",
            open.name
        )));
    }

    let root = root.ok_or_else(|| EpgError::Parse("document has no root element".to_string()))?;
    let root_name = root.name.clone();
    let document = Document::from_root(root, doctype).ok_or_else(|| {
        EpgError::Parse(format!(
            "expected <{}> root element, found <{}>",
            ROOT_ELEMENT, root_name
        ))
    })?;

    debug!(
        "Parsed guide with {} channels and {} programmes",
        document.channels.len(),
        document.programmes.len()
    );
    Ok(document)
}

fn open_element(start: &BytesStart) -> Result<Element, EpgError> {
    let mut element = Element::new(String::from_utf8_lossy(start.name().as_ref()).into_owned());
    for attribute in start.attributes() {
        let attribute = attribute.map_err(|e| EpgError::Parse(e.to_string()))?;
        let value = attribute
            .unescape_value()
            .map_err(|e| EpgError::Parse(e.to_string()))?;
        element.attributes.push(Attribute::new(
            String::from_utf8_lossy(attribute.key.as_ref()).into_owned(),
            value.into_owned(),
        ));
    }
    Ok(element)
}

fn attach(
    stack: &mut [Element],
    root: &mut Option<Element>,
    element: Element,
) -> Result<(), EpgError> {
    if let Some(parent) = stack.last_mut() {
        parent.children.push(Node::Element(element));
        return Ok(());
    }
    if root.is_some() {
        return Err(EpgError::Parse(format!(
            "second root element <{}>",
            element.name
        )));
    }
    *root = Some(element);
    Ok(())
}

/// Serialize a document back to guide markup
pub fn write_document(document: &Document) -> Result<String, EpgError> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);

    writer
        .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
        .map_err(write_error)?;
    if let Some(doctype) = &document.doctype {
        writer
            .write_event(Event::DocType(BytesText::from_escaped(doctype.as_str())))
            .map_err(write_error)?;
    }
    write_element(&mut writer, &document.to_root())?;

    String::from_utf8(writer.into_inner())
        .map_err(|e| EpgError::Parse(format!("serialized guide is not UTF-8: {}", e)))
}

fn write_element(writer: &mut Writer<Vec<u8>>, element: &Element) -> Result<(), EpgError> {
    let mut start = BytesStart::new(element.name.as_str());
    for attribute in &element.attributes {
        start.push_attribute((attribute.name.as_str(), attribute.value.as_str()));
    }

    if element.children.is_empty() {
        return writer.write_event(Event::Empty(start)).map_err(write_error);
    }

    writer.write_event(Event::Start(start)).map_err(write_error)?;
    for child in &element.children {
        match child {
            Node::Element(child) => write_element(writer, child)?,
            Node::Text(text) => writer
                .write_event(Event::Text(BytesText::new(text)))
                .map_err(write_error)?,
            Node::CData(data) => writer
                .write_event(Event::CData(BytesCData::new(data.as_str())))
                .map_err(write_error)?,
            Node::Comment(comment) => writer
                .write_event(Event::Comment(BytesText::from_escaped(comment.as_str())))
                .map_err(write_error)?,
        }
    }
    writer
        .write_event(Event::End(BytesEnd::new(element.name.as_str())))
        .map_err(write_error)
}

fn write_error(error: impl std::fmt::Display) -> EpgError {
    EpgError::Parse(format!("failed to serialize guide: {}", error))
}
