use std::collections::HashSet;

use crate::error::{HathicheckError, Result};

const MARC21_SLIM_XSD: &str = include_str!("../resources/xsd/MARC21slim.xsd");
const ALTO_XSD: &str = include_str!("../resources/xsd/alto.xsd");

const XSD_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema";

/// Logical name of a bundled schema document. Callers address schemas by
/// name, never by filesystem path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scheme {
    Marc,
    Alto,
}

impl Scheme {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Marc => "MARC21slim",
            Self::Alto => "alto",
        }
    }

    const fn resource(self) -> &'static str {
        match self {
            Self::Marc => MARC21_SLIM_XSD,
            Self::Alto => ALTO_XSD,
        }
    }
}

/// Structural conformance checker derived from a bundled XSD.
///
/// There is no mature pure-Rust XSD validator, so conformance is checked
/// structurally: the document must be namespace-qualified under the schema's
/// target namespace and rooted at one of its top-level element declarations.
#[derive(Debug)]
pub struct XmlSchema {
    target_namespace: Option<String>,
    root_elements: HashSet<String>,
}

impl XmlSchema {
    /// Load a bundled schema by logical name.
    ///
    /// # Errors
    /// Returns [`HathicheckError::SchemaResource`] if the bundled document
    /// cannot be parsed.
    pub fn load(scheme: Scheme) -> Result<Self> {
        Self::parse(scheme.name(), scheme.resource())
    }

    fn parse(name: &str, xsd: &str) -> Result<Self> {
        let document =
            roxmltree::Document::parse(xsd).map_err(|error| HathicheckError::SchemaResource {
                name: name.to_string(),
                reason: error.to_string(),
            })?;

        let root = document.root_element();
        if root.tag_name().namespace() != Some(XSD_NAMESPACE) || root.tag_name().name() != "schema"
        {
            return Err(HathicheckError::SchemaResource {
                name: name.to_string(),
                reason: "document is not an XML Schema".to_string(),
            });
        }

        let target_namespace = root.attribute("targetNamespace").map(str::to_string);

        let root_elements: HashSet<String> = root
            .children()
            .filter(|node| {
                node.is_element()
                    && node.tag_name().namespace() == Some(XSD_NAMESPACE)
                    && node.tag_name().name() == "element"
            })
            .filter_map(|node| node.attribute("name"))
            .map(str::to_string)
            .collect();

        if root_elements.is_empty() {
            return Err(HathicheckError::SchemaResource {
                name: name.to_string(),
                reason: "schema declares no top-level elements".to_string(),
            });
        }

        Ok(Self {
            target_namespace,
            root_elements,
        })
    }

    /// Check a parsed document against the schema.
    ///
    /// Both bundled schemas are single-namespace with qualified elements, so
    /// every element in a conforming document lives in the target namespace.
    #[must_use]
    pub fn validate(&self, document: &roxmltree::Document<'_>) -> bool {
        let root = document.root_element();
        if !self.root_elements.contains(root.tag_name().name()) {
            return false;
        }
        if root.tag_name().namespace() != self.target_namespace.as_deref() {
            return false;
        }
        document
            .descendants()
            .filter(roxmltree::Node::is_element)
            .all(|node| node.tag_name().namespace() == self.target_namespace.as_deref())
    }
}

#[cfg(test)]
#[path = "schema_tests.rs"]
mod tests;
