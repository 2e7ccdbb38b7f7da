//! Page layout tree sent to the browser.

use crate::slider::SliderConfig;
use serde::Serialize;
use serde_json::{json, Map, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ComponentKind {
    Div,
    Graph,
    Slider,
}

/// A node of the layout tree: `{"type": ..., "props": {...}, "children": [...]}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Component {
    #[serde(rename = "type")]
    pub kind: ComponentKind,
    pub props: Map<String, Value>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Component>,
}

impl Component {
    pub fn div(children: Vec<Component>) -> Self {
        Component {
            kind: ComponentKind::Div,
            props: Map::new(),
            children,
        }
    }

    /// Chart placeholder; its `figure` property is filled by a callback.
    pub fn graph(id: &str) -> Self {
        let mut props = Map::new();
        props.insert("id".to_string(), json!(id));
        Component {
            kind: ComponentKind::Graph,
            props,
            children: Vec::new(),
        }
    }

    pub fn slider(id: &str, config: &SliderConfig) -> Self {
        let marks: Map<String, Value> = config
            .marks
            .iter()
            .map(|mark| (mark.label.clone(), json!(mark.label)))
            .collect();

        let mut props = Map::new();
        props.insert("id".to_string(), json!(id));
        props.insert("min".to_string(), json!(config.min));
        props.insert("max".to_string(), json!(config.max));
        props.insert("value".to_string(), json!(config.value));
        props.insert("step".to_string(), json!(config.step));
        props.insert("marks".to_string(), Value::Object(marks));
        props.insert("stops".to_string(), json!(config.stops()));

        Component {
            kind: ComponentKind::Slider,
            props,
            children: Vec::new(),
        }
    }

    pub fn id(&self) -> Option<&str> {
        self.props.get("id").and_then(Value::as_str)
    }

    /// Depth-first search by component id.
    pub fn find(&self, id: &str) -> Option<&Component> {
        if self.id() == Some(id) {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(id))
    }
}
