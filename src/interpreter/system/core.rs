use std::{fs, path::Path};

use log::warn;
use serde::{Deserialize, Serialize};

use crate::{
    error::SystemError,
    interpreter::{
        system::path::is_valid_identifier,
        value::core::{Node, Value},
    },
};

/// The root of a graph: top-level identifiers mapped to their nodes.
///
/// All paths are resolved starting from a top-level identifier. A system is
/// moved into each evaluation and handed back, possibly modified by
/// assignments, on the result.
///
/// # Example
/// ```
/// use nodeval::interpreter::{system::core::System, value::core::Value};
///
/// let system = System::new().with("tank", [("level", 3.0)]);
///
/// assert_eq!(system.get("tank"), Some(&Value::from([("level", 3.0)])));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct System {
    pub(crate) nodes: Node,
}

impl System {
    /// Creates an empty system.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a system from JSON text.
    ///
    /// The root must be an object; each of its members becomes a top-level
    /// node. JSON numbers, booleans, strings, arrays, objects and `null` map
    /// to the corresponding [`Value`] variants.
    pub fn from_json_str(json: &str) -> Result<Self, SystemError> {
        match serde_json::from_str::<Value>(json)? {
            Value::Node(nodes) => Ok(Self { nodes }),
            other => Err(SystemError::RootNotObject { found: other.type_name() }),
        }
    }

    /// Reads and parses a system from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SystemError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| {
                                                SystemError::Io { path: path.display()
                                                                            .to_string(),
                                                                  source }
                                            })?;
        Self::from_json_str(&json)
    }

    /// Adds or replaces a top-level node, returning the system.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    /// Adds or replaces a top-level node, returning the previous value.
    ///
    /// A name that is not a valid identifier is still inserted, but formulas
    /// will not be able to address it reliably, so a warning is logged.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        let name = name.into();
        if !is_valid_identifier(&name) {
            warn!("'{name}' is not a valid identifier; paths through it may not resolve.");
        }
        self.nodes.insert(name, value.into())
    }

    /// Returns the top-level node called `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.nodes.get(name)
    }

    /// Returns all top-level nodes.
    #[must_use]
    pub const fn nodes(&self) -> &Node {
        &self.nodes
    }
}

impl From<Node> for System {
    fn from(nodes: Node) -> Self {
        Self { nodes }
    }
}
