//! Grid markup parsing.
//!
//! The grid tool exports every square, number and ruling as an absolutely
//! positioned `<div>` whose class names its role. Everything else in the
//! file is ignored.

use crate::error::{Error, Result};
use html5ever::parse_document;
use html5ever::serialize::{serialize, SerializeOpts, TraversalScope};
use html5ever::tendril::TendrilSink;
use log::debug;
use markup5ever_rcdom::{Handle, NodeData, RcDom, SerializableHandle};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// `bk`: used for black squares and for white squares alike.
    BlackSquare,
    /// `nu`
    NumberLabel,
    /// `hr`
    HorizontalRule,
    /// `vr`
    VerticalRule,
}

impl Role {
    pub fn from_class(class: &str) -> Option<Role> {
        match class {
            "bk" => Some(Role::BlackSquare),
            "nu" => Some(Role::NumberLabel),
            "hr" => Some(Role::HorizontalRule),
            "vr" => Some(Role::VerticalRule),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionedElement {
    /// Recognized roles in class-list order. Usually exactly one.
    pub roles: Vec<Role>,
    /// The `style` attribute verbatim (empty when absent).
    pub style: String,
    pub inner_text: String,
    /// The element re-serialized, children included.
    pub raw_markup: String,
}

impl PositionedElement {
    pub fn has_role(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }
}

fn html5_parse(input: &str) -> RcDom {
    parse_document(RcDom::default(), Default::default()).one(input)
}

/// Lowercased tag name and the `class` / `style` attributes of an element.
fn div_attrs(node: &Handle) -> Option<(String, String, String)> {
    let NodeData::Element { name, attrs, .. } = &node.data else {
        return None;
    };
    let tag = name.local.to_string().to_ascii_lowercase();
    let mut class = String::new();
    let mut style = String::new();
    for a in attrs.borrow().iter() {
        match &*a.name.local {
            "class" => class = a.value.to_string(),
            "style" => style = a.value.to_string(),
            _ => {}
        }
    }
    Some((tag, class, style))
}

fn text_content(node: &Handle, out: &mut String) {
    if let NodeData::Text { contents } = &node.data {
        out.push_str(&contents.borrow());
    }
    for c in node.children.borrow().iter() {
        text_content(c, out);
    }
}

fn serialize_element(node: &Handle, tag: &str) -> Result<String> {
    let mut bytes: Vec<u8> = Vec::new();
    let opts = SerializeOpts {
        traversal_scope: TraversalScope::IncludeNode,
        ..Default::default()
    };
    serialize(&mut bytes, &SerializableHandle::from(node.clone()), opts).map_err(|source| {
        Error::Serialize {
            tag: tag.to_string(),
            source,
        }
    })?;
    String::from_utf8(bytes).map_err(|_| Error::NonUtf8Markup {
        tag: tag.to_string(),
    })
}

fn positioned_element(node: &Handle) -> Result<Option<PositionedElement>> {
    let Some((tag, class, style)) = div_attrs(node) else {
        return Ok(None);
    };
    if tag != "div" {
        return Ok(None);
    }

    let roles: Vec<Role> = class
        .split_whitespace()
        .filter_map(Role::from_class)
        .collect();
    if roles.is_empty() {
        return Ok(None);
    }

    let mut inner_text = String::new();
    text_content(node, &mut inner_text);

    Ok(Some(PositionedElement {
        roles,
        style,
        inner_text,
        raw_markup: serialize_element(node, &tag)?,
    }))
}

fn collect(node: &Handle, out: &mut Vec<PositionedElement>) -> Result<()> {
    if let Some(el) = positioned_element(node)? {
        out.push(el);
    }
    for c in node.children.borrow().iter() {
        collect(c, out)?;
    }
    Ok(())
}

/// Returns every role-tagged `<div>` in document order.
///
/// Broken or empty markup is recovered by the HTML5 tree builder and simply
/// yields fewer elements.
pub fn parse_grid(markup: &str) -> Result<Vec<PositionedElement>> {
    let dom = html5_parse(markup);
    if !dom.errors.borrow().is_empty() {
        debug!("grid markup recovered from {} parse errors", dom.errors.borrow().len());
    }

    let mut elements = Vec::new();
    collect(&dom.document, &mut elements)?;
    debug!("found {} grid elements", elements.len());
    Ok(elements)
}
