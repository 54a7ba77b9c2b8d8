//! Node and edge records as the editor stores them.
//!
//! The JSON shape follows the editor's canvas library: `type`, `parentId`, `sourcePosition`, and
//! `targetPosition` are camelCase on the wire, and fields this crate does not know about are kept
//! verbatim in `extra` so a load/layout/save round trip never loses data.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

fn is_false(v: &bool) -> bool {
    !*v
}

/// What a node represents. Anything other than the two built-in kinds is kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum NodeKind {
    Organization,
    Person,
    Other(String),
}

impl NodeKind {
    pub fn as_str(&self) -> &str {
        match self {
            NodeKind::Organization => "organization",
            NodeKind::Person => "person",
            NodeKind::Other(s) => s,
        }
    }
}

impl Default for NodeKind {
    fn default() -> Self {
        NodeKind::Other("default".to_string())
    }
}

impl From<String> for NodeKind {
    fn from(value: String) -> Self {
        match value.as_str() {
            "organization" => NodeKind::Organization,
            "person" => NodeKind::Person,
            _ => NodeKind::Other(value),
        }
    }
}

impl From<&str> for NodeKind {
    fn from(value: &str) -> Self {
        NodeKind::from(value.to_string())
    }
}

impl From<NodeKind> for String {
    fn from(value: NodeKind) -> Self {
        match value {
            NodeKind::Other(s) => s,
            other => other.as_str().to_string(),
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which side of a node box a connector attaches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HandleSide {
    Top,
    Bottom,
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Direction {
    #[default]
    TB,
    LR,
}

impl Direction {
    pub fn is_horizontal(self) -> bool {
        matches!(self, Direction::LR)
    }

    pub fn toggled(self) -> Self {
        match self {
            Direction::TB => Direction::LR,
            Direction::LR => Direction::TB,
        }
    }

    /// Side incoming connectors attach to.
    pub fn target_side(self) -> HandleSide {
        match self {
            Direction::TB => HandleSide::Top,
            Direction::LR => HandleSide::Left,
        }
    }

    /// Side outgoing connectors attach to.
    pub fn source_side(self) -> HandleSide {
        match self {
            Direction::TB => HandleSide::Bottom,
            Direction::LR => HandleSide::Right,
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "TB" => Some(Direction::TB),
            "LR" => Some(Direction::LR),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct XYPosition {
    pub x: f64,
    pub y: f64,
}

impl XYPosition {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl std::ops::Add for XYPosition {
    type Output = XYPosition;

    fn add(self, rhs: XYPosition) -> XYPosition {
        XYPosition::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl std::ops::Sub for XYPosition {
    type Output = XYPosition;

    fn sub(self, rhs: XYPosition) -> XYPosition {
        XYPosition::new(self.x - rhs.x, self.y - rhs.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
    #[serde(rename = "type")]
    #[serde(default)]
    pub kind: NodeKind,
    /// Top-left corner, relative to the container when `parent_id` is set.
    #[serde(default)]
    pub position: XYPosition,
    /// Container this node is visually nested in.
    #[serde(rename = "parentId")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub hidden: bool,
    #[serde(default)]
    pub data: Map<String, Value>,
    #[serde(rename = "sourcePosition")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_position: Option<HandleSide>,
    #[serde(rename = "targetPosition")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_position: Option<HandleSide>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Node {
    pub fn new(id: impl Into<String>, kind: impl Into<NodeKind>) -> Self {
        Self {
            id: id.into(),
            kind: kind.into(),
            position: XYPosition::default(),
            parent_id: None,
            hidden: false,
            data: Map::new(),
            source_position: None,
            target_position: None,
            extra: Map::new(),
        }
    }

    pub fn organization(id: impl Into<String>, label: &str) -> Self {
        Self::new(id, NodeKind::Organization).with_data("label", label)
    }

    pub fn person(id: impl Into<String>, name: &str, role: &str) -> Self {
        Self::new(id, NodeKind::Person)
            .with_data("name", name)
            .with_data("role", role)
    }

    pub fn with_data(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.data.insert(key.to_string(), value.into());
        self
    }

    pub fn with_position(mut self, x: f64, y: f64) -> Self {
        self.position = XYPosition::new(x, y);
        self
    }

    pub fn with_parent(mut self, parent_id: impl Into<String>) -> Self {
        self.parent_id = Some(parent_id.into());
        self
    }

    pub fn with_hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    pub fn is_person(&self) -> bool {
        self.kind == NodeKind::Person
    }

    fn data_str(&self, key: &str) -> Option<&str> {
        self.data.get(key).and_then(Value::as_str)
    }

    /// Job title of a person node.
    pub fn role(&self) -> Option<&str> {
        self.data_str("role")
    }

    pub fn name(&self) -> Option<&str> {
        self.data_str("name")
    }

    /// Display name of an organization node.
    pub fn label(&self) -> Option<&str> {
        self.data_str("label")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub id: String,
    pub source: String,
    pub target: String,
    #[serde(default, skip_serializing_if = "is_false")]
    pub hidden: bool,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Edge {
    pub fn new(id: impl Into<String>, source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            source: source.into(),
            target: target.into(),
            hidden: false,
            extra: Map::new(),
        }
    }

    pub fn with_hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }
}

pub const ORGANIZATION_SIZE: Size = Size::new(150.0, 80.0);
pub const PERSON_SIZE: Size = Size::new(200.0, 100.0);
/// Size for kinds this crate does not know; the editor draws those with the person card.
pub const DEFAULT_SIZE: Size = PERSON_SIZE;

/// Box size of a node for layout purposes.
pub trait NodeSizer: Send + Sync {
    fn size(&self, node: &Node) -> Size;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultNodeSizer;

impl NodeSizer for DefaultNodeSizer {
    fn size(&self, node: &Node) -> Size {
        match node.kind {
            NodeKind::Organization => ORGANIZATION_SIZE,
            NodeKind::Person => PERSON_SIZE,
            NodeKind::Other(_) => DEFAULT_SIZE,
        }
    }
}

impl<F> NodeSizer for F
where
    F: Fn(&Node) -> Size + Send + Sync,
{
    fn size(&self, node: &Node) -> Size {
        self(node)
    }
}
