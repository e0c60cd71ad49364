//! Markup element tree and XML rendering

use std::io::{Cursor, Write};

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use tracing::debug;

use crate::config::RenderConfig;
use crate::errors::{BlocksError, Result};

/// A single markup element
///
/// Attributes keep insertion order; setting an existing attribute replaces its
/// value in place. Body text is written before child elements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    name: String,
    attributes: Vec<(String, String)>,
    body: Option<String>,
    children: Vec<Element>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            body: None,
            children: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    pub fn children(&self) -> &[Element] {
        &self.children
    }

    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(key, _)| *key == name) {
            Some((_, existing)) => *existing = value,
            None => self.attributes.push((name, value)),
        }
    }

    pub fn set_body(&mut self, body: impl Into<String>) {
        self.body = Some(body.into());
    }

    pub fn push_child(&mut self, child: Element) {
        self.children.push(child);
    }

    /// Render this element as an XML document
    pub fn render(&self, config: &RenderConfig) -> Result<String> {
        let mut writer = match config.indent {
            Some(width) => Writer::new_with_indent(Cursor::new(Vec::new()), b' ', width),
            None => Writer::new(Cursor::new(Vec::new())),
        };

        if config.xml_declaration {
            writer
                .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
                .map_err(render_error)?;
        }
        self.write_to(&mut writer, config.indent.is_some(), !config.xml_declaration)?;

        let bytes = writer.into_inner().into_inner();
        let xml = String::from_utf8(bytes).map_err(render_error)?;
        debug!(root = %self.name, bytes = xml.len(), "rendered markup");
        Ok(xml)
    }

    fn write_to<W: Write>(
        &self,
        writer: &mut Writer<W>,
        indented: bool,
        first: bool,
    ) -> Result<()> {
        // Indenting inside mixed content would change the body text
        if indented && self.body.is_some() && !self.children.is_empty() {
            let mut inline = Writer::new(Vec::new());
            self.write_to(&mut inline, false, true)?;
            if !first {
                writer.write_indent().map_err(render_error)?;
            }
            return writer
                .get_mut()
                .write_all(&inline.into_inner())
                .map_err(render_error);
        }

        let mut start = BytesStart::new(self.name.as_str());
        for (key, value) in &self.attributes {
            start.push_attribute((key.as_str(), value.as_str()));
        }

        if self.body.is_none() && self.children.is_empty() {
            return writer.write_event(Event::Empty(start)).map_err(render_error);
        }

        writer.write_event(Event::Start(start)).map_err(render_error)?;
        if let Some(body) = &self.body {
            writer
                .write_event(Event::Text(BytesText::new(body)))
                .map_err(render_error)?;
        }
        for child in &self.children {
            child.write_to(writer, indented, false)?;
        }
        writer
            .write_event(Event::End(BytesEnd::new(self.name.as_str())))
            .map_err(render_error)
    }
}

fn render_error(err: impl std::fmt::Display) -> BlocksError {
    BlocksError::Render(err.to_string())
}
