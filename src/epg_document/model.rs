/*!
 * In-memory model of an XMLTV guide.
 *
 * The generic `Element`/`Node` tree carries everything verbatim. Channels and
 * programmes are lifted out of the `<tv>` root so the passes can work on them
 * directly; anything else under the root is kept as-is and re-emitted.
 */

use serde::Serialize;

/// Name of the document root element
pub const ROOT_ELEMENT: &str = "tv";

/// A single `name="value"` attribute, order preserved
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

impl Attribute {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Child node of an element
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
    CData(String),
    Comment(String),
}

/// Generic XML element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub name: String,
    pub attributes: Vec<Attribute>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Value of the first attribute with the given name
    pub fn attribute(&self, name: &str) -> Option<&str> {
        find_attribute(&self.attributes, name)
    }

    /// Concatenated text and CDATA content of the direct children
    pub fn text(&self) -> String {
        self.children
            .iter()
            .filter_map(|child| match child {
                Node::Text(text) | Node::CData(text) => Some(text.as_str()),
                Node::Element(_) | Node::Comment(_) => None,
            })
            .collect()
    }

    /// Iterate over the element children only
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|child| match child {
            Node::Element(element) => Some(element),
            _ => None,
        })
    }

    /// Drop whitespace-only text between child elements.
    ///
    /// Leaf elements keep their text untouched, even when it is blank.
    pub fn drop_layout_whitespace(&mut self) {
        let has_elements = self
            .children
            .iter()
            .any(|child| matches!(child, Node::Element(_)));
        if has_elements {
            self.children
                .retain(|child| !matches!(child, Node::Text(text) if text.trim().is_empty()));
        }
    }
}

fn find_attribute<'a>(attributes: &'a [Attribute], name: &str) -> Option<&'a str> {
    attributes
        .iter()
        .find(|attribute| attribute.name == name)
        .map(|attribute| attribute.value.as_str())
}

/// A text-carrying field such as `<title>` or `<desc>`.
///
/// An element without attributes is plain text; one with attributes (usually
/// `lang`) wraps its payload. Rewriting a field keeps the variant and the
/// attributes and replaces only the payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextField {
    Plain(String),
    Wrapped {
        payload: String,
        attributes: Vec<Attribute>,
    },
}

impl TextField {
    pub fn from_element(element: &Element) -> Self {
        if element.attributes.is_empty() {
            Self::Plain(element.text())
        } else {
            Self::Wrapped {
                payload: element.text(),
                attributes: element.attributes.clone(),
            }
        }
    }

    pub fn text(&self) -> &str {
        match self {
            Self::Plain(text) => text,
            Self::Wrapped { payload, .. } => payload,
        }
    }

    /// Same shape, new text
    pub fn with_text(&self, text: impl Into<String>) -> Self {
        match self {
            Self::Plain(_) => Self::Plain(text.into()),
            Self::Wrapped { attributes, .. } => Self::Wrapped {
                payload: text.into(),
                attributes: attributes.clone(),
            },
        }
    }

    pub fn to_element(&self, name: &str) -> Element {
        let mut element = Element::new(name);
        if let Self::Wrapped { attributes, .. } = self {
            element.attributes = attributes.clone();
        }
        let text = self.text();
        if !text.is_empty() {
            element.children.push(Node::Text(text.to_string()));
        }
        element
    }
}

/// A `<channel>` entry, carried verbatim
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Channel {
    pub element: Element,
}

impl Channel {
    pub fn id(&self) -> &str {
        self.element.attribute("id").unwrap_or_default()
    }

    /// Text of every `<display-name>` child
    pub fn display_names(&self) -> Vec<String> {
        self.element
            .child_elements()
            .filter(|child| child.name == "display-name")
            .map(Element::text)
            .collect()
    }
}

impl From<Element> for Channel {
    fn from(element: Element) -> Self {
        Self { element }
    }
}

/// A `<programme>` listing entry.
///
/// The first `<title>` and first `<desc>` are lifted into typed fields;
/// every other attribute and child node (elements and comments alike) is
/// kept for re-emission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Programme {
    pub attributes: Vec<Attribute>,
    pub title: Option<TextField>,
    pub description: Option<TextField>,
    pub other_children: Vec<Node>,
}

pub const TITLE_ELEMENT: &str = "title";
pub const DESCRIPTION_ELEMENT: &str = "desc";
const PROGRAMME_ELEMENT: &str = "programme";
const CHANNEL_ELEMENT: &str = "channel";

impl Programme {
    pub fn new(channel: &str, start: &str, stop: &str) -> Self {
        Self {
            attributes: vec![
                Attribute::new("start", start),
                Attribute::new("stop", stop),
                Attribute::new("channel", channel),
            ],
            title: None,
            description: None,
            other_children: Vec::new(),
        }
    }

    pub fn with_title(mut self, title: TextField) -> Self {
        self.title = Some(title);
        self
    }

    pub fn with_description(mut self, description: TextField) -> Self {
        self.description = Some(description);
        self
    }

    pub fn channel(&self) -> Option<&str> {
        find_attribute(&self.attributes, "channel")
    }

    pub fn start(&self) -> Option<&str> {
        find_attribute(&self.attributes, "start")
    }

    pub fn stop(&self) -> Option<&str> {
        find_attribute(&self.attributes, "stop")
    }

    /// Copy of this programme with new title and description text.
    ///
    /// Existing fields keep their shape; missing ones are created as plain text.
    pub fn with_text(&self, title: String, description: String) -> Self {
        let title = match &self.title {
            Some(field) => field.with_text(title),
            None => TextField::Plain(title),
        };
        let description = match &self.description {
            Some(field) => field.with_text(description),
            None => TextField::Plain(description),
        };
        Self {
            attributes: self.attributes.clone(),
            title: Some(title),
            description: Some(description),
            other_children: self.other_children.clone(),
        }
    }

    pub fn from_element(element: Element) -> Self {
        let mut title = None;
        let mut description = None;
        let mut other_children = Vec::new();

        for child in element.children {
            match child {
                Node::Element(child) if child.name == TITLE_ELEMENT && title.is_none() => {
                    title = Some(TextField::from_element(&child));
                }
                Node::Element(child)
                    if child.name == DESCRIPTION_ELEMENT && description.is_none() =>
                {
                    description = Some(TextField::from_element(&child));
                }
                other => other_children.push(other),
            }
        }

        Self {
            attributes: element.attributes,
            title,
            description,
            other_children,
        }
    }

    /// Rebuild the `<programme>` element with children in XMLTV DTD order:
    /// titles, sub-titles, descriptions, then everything else as found.
    pub fn to_element(&self) -> Element {
        let mut ordered: Vec<Node> = Vec::with_capacity(self.other_children.len() + 2);
        if let Some(title) = &self.title {
            ordered.push(Node::Element(title.to_element(TITLE_ELEMENT)));
        }
        if let Some(description) = &self.description {
            ordered.push(Node::Element(description.to_element(DESCRIPTION_ELEMENT)));
        }
        ordered.extend(self.other_children.iter().cloned());
        ordered.sort_by_key(child_rank);

        let mut element = Element::new(PROGRAMME_ELEMENT);
        element.attributes = self.attributes.clone();
        element.children = ordered;
        element
    }
}

// Comments and stray text sort with the unranked elements, keeping their order
fn child_rank(child: &Node) -> u8 {
    match child {
        Node::Element(element) => match element.name.as_str() {
            TITLE_ELEMENT => 0,
            "sub-title" => 1,
            DESCRIPTION_ELEMENT => 2,
            _ => 3,
        },
        Node::Text(_) | Node::CData(_) | Node::Comment(_) => 3,
    }
}

/// A decoded guide: root attributes, channels, programmes and any other
/// top-level nodes. Those are re-emitted after the programmes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Document {
    pub doctype: Option<String>,
    pub root_attributes: Vec<Attribute>,
    pub channels: Vec<Channel>,
    pub programmes: Vec<Programme>,
    pub other_nodes: Vec<Node>,
}

impl Document {
    /// Split a parsed `<tv>` root into channels, programmes and the rest.
    ///
    /// Returns `None` when the root is not a `<tv>` element.
    pub fn from_root(root: Element, doctype: Option<String>) -> Option<Self> {
        if root.name != ROOT_ELEMENT {
            return None;
        }

        let mut document = Self {
            doctype,
            root_attributes: root.attributes,
            ..Self::default()
        };
        for child in root.children {
            match child {
                Node::Element(element) if element.name == CHANNEL_ELEMENT => {
                    document.channels.push(Channel::from(element));
                }
                Node::Element(element) if element.name == PROGRAMME_ELEMENT => {
                    document.programmes.push(Programme::from_element(element));
                }
                other => document.other_nodes.push(other),
            }
        }
        Some(document)
    }

    pub fn to_root(&self) -> Element {
        let mut root = Element::new(ROOT_ELEMENT);
        root.attributes = self.root_attributes.clone();
        root.children.extend(
            self.channels
                .iter()
                .map(|channel| Node::Element(channel.element.clone())),
        );
        root.children.extend(
            self.programmes
                .iter()
                .map(|programme| Node::Element(programme.to_element())),
        );
        root.children.extend(self.other_nodes.iter().cloned());
        root
    }

    /// Swap in a freshly built programme list, returning the old one
    pub fn replace_programmes(&mut self, programmes: Vec<Programme>) -> Vec<Programme> {
        std::mem::replace(&mut self.programmes, programmes)
    }
}
