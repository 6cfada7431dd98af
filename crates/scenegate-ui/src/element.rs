//! Abstract render tree.
//!
//! Guards decide *whether* something renders; this module defines
//! *what* they hand back. [`Node`] is a minimal render tree — enough
//! to express "nothing", fallback text, and an element whose props a
//! guard has rewritten — that a host front-end maps onto its own DOM
//! or widget layer.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// Error for malformed guard input.
///
/// Guards fail fast on input the contract forbids rather than
/// rendering something subtly wrong.
#[derive(Debug, Error, PartialEq)]
pub enum ElementError {
    /// A single-child wrapper was given zero or several children.
    #[error("expected exactly one child element, found {found}")]
    ExpectedSingleChild {
        /// How many children were supplied.
        found: usize,
    },

    /// A wrapper that rewrites element props was given a non-element.
    #[error("expected an element child, found {kind} node")]
    NotAnElement {
        /// The kind of node actually supplied ("empty" or "text").
        kind: &'static str,
    },
}

/// A node in the render tree.
///
/// [`Node::Empty`] is the canonical "renders nothing" value — a denied
/// guard with no fallback returns it, and hosts emit no output for it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub enum Node {
    /// Renders nothing.
    #[default]
    Empty,
    /// Plain text content.
    Text(String),
    /// An element with props and children.
    Element(Element),
}

impl Node {
    /// Shorthand for a text node.
    #[must_use]
    pub fn text(content: impl Into<String>) -> Self {
        Self::Text(content.into())
    }

    /// Returns `true` if this node renders nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// The node kind as a label ("empty", "text", "element").
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::Text(_) => "text",
            Self::Element(_) => "element",
        }
    }

    /// Returns the inner element, or `None` for other kinds.
    #[must_use]
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(element) => Some(element),
            _ => None,
        }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Self::Element(element)
    }
}

/// Properties carried by an [`Element`].
///
/// `disabled`, `title`, and `style` are first-class because guards
/// rewrite them; everything else rides in `attrs`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Props {
    /// Whether the element is interactive.
    pub disabled: bool,
    /// Tooltip text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Inline style, key → value.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub style: BTreeMap<String, String>,
    /// Remaining attributes, key → value.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub attrs: BTreeMap<String, String>,
}

impl Props {
    /// Shallow-merges `self` (the computed overlay) over `base` (the
    /// caller's props).
    ///
    /// Precedence, per field:
    ///
    /// - `disabled`: logical OR — once either side disables, the result
    ///   is disabled.
    /// - `title`: overlay wins when set, base otherwise.
    /// - `style` / `attrs`: per key — overlay wins for keys it supplies,
    ///   base keeps every key the overlay does not mention.
    ///
    /// This is spelled out as one function so guard code cannot clobber
    /// caller props by accident.
    #[must_use]
    pub fn merged_over(&self, base: &Props) -> Props {
        let mut style = base.style.clone();
        style.extend(self.style.iter().map(|(k, v)| (k.clone(), v.clone())));

        let mut attrs = base.attrs.clone();
        attrs.extend(self.attrs.iter().map(|(k, v)| (k.clone(), v.clone())));

        Props {
            disabled: base.disabled || self.disabled,
            title: self.title.clone().or_else(|| base.title.clone()),
            style,
            attrs,
        }
    }
}

/// An element with a tag, [`Props`], and children.
///
/// Built with chained setters:
///
/// ```
/// use scenegate_ui::{Element, Node};
///
/// let button = Element::new("button")
///     .attr("id", "delete-equipment")
///     .title("Delete")
///     .child(Node::text("Delete"));
///
/// assert_eq!(button.tag, "button");
/// assert!(!button.props.disabled);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    /// Element tag (e.g. `"button"`).
    pub tag: String,
    /// Element properties.
    #[serde(default)]
    pub props: Props,
    /// Child nodes.
    #[serde(default)]
    pub children: Vec<Node>,
}

impl Element {
    /// Creates an element with default props and no children.
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            props: Props::default(),
            children: Vec::new(),
        }
    }

    /// Sets an attribute.
    #[must_use]
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.props.attrs.insert(key.into(), value.into());
        self
    }

    /// Sets a style key.
    #[must_use]
    pub fn style(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.props.style.insert(key.into(), value.into());
        self
    }

    /// Sets the tooltip.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.props.title = Some(title.into());
        self
    }

    /// Sets the disabled flag.
    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.props.disabled = disabled;
        self
    }

    /// Appends a child node.
    #[must_use]
    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }
}
