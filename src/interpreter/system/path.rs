use log::trace;

use crate::interpreter::{
    system::core::System,
    value::core::Value,
};

/// Navigation keyword that leaves the current position unchanged.
pub const THIS: &str = "this";
/// Navigation keyword that moves one level up.
pub const PARENT: &str = "parent";
/// Name reserved for the system root.
pub const SYSTEM: &str = "system";

/// A successfully resolved path.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolved<'a> {
    /// The canonical path: the shortest dotted path from the root reaching
    /// the same location, with every `this` and `parent` folded away.
    pub path:  String,
    /// The value stored at that location.
    pub value: &'a Value,
}

/// Where a path walk currently stands.
#[derive(Clone, Copy)]
enum Position<'a> {
    /// Above every top-level node, reached by ascending past one.
    Root,
    At(&'a Value),
}

impl System {
    /// Resolves an absolute dotted path.
    ///
    /// The first segment must name a top-level node. Each further segment
    /// descends into the key of that name when the current value is a node
    /// holding it; otherwise `this` is skipped and `parent` pops the last
    /// segment walked so far and replays the shortened path from the root,
    /// since nodes keep no reference to their parents. Keys take precedence
    /// over the navigation keywords.
    ///
    /// # Returns
    /// - `Some(Resolved)`: the canonical path and the value found there.
    /// - `None`: a segment is neither a key nor a navigation keyword, or the
    ///   path ends above every top-level node.
    ///
    /// # Example
    /// ```
    /// use nodeval::interpreter::{system::core::System, value::core::Value};
    ///
    /// let system = System::new().with("plant",
    ///                                 [("pump", Value::from([("flow", 4.0)])),
    ///                                  ("valve", Value::from([("open", true)]))]);
    ///
    /// let resolved = system.resolve("plant.pump.this.parent.valve.open").unwrap();
    ///
    /// assert_eq!(resolved.path, "plant.valve.open");
    /// assert_eq!(resolved.value, &Value::from(true));
    /// assert!(system.resolve("plant.pump.pressure").is_none());
    /// ```
    #[must_use]
    pub fn resolve(&self, path: &str) -> Option<Resolved<'_>> {
        let mut segments = path.split('.');
        let first = segments.next()?;

        let mut trail = vec![first];
        let mut position = Position::At(self.nodes.get(first)?);

        for segment in segments {
            let child = match position {
                Position::Root => self.nodes.get(segment),
                Position::At(Value::Node(node)) => node.get(segment),
                Position::At(_) => None,
            };

            if let Some(child) = child {
                trail.push(segment);
                position = Position::At(child);
                continue;
            }

            match segment {
                THIS => {},
                PARENT => {
                    trail.pop();
                    position = self.replay(&trail)?;
                },
                _ => {
                    trace!("Segment '{segment}' of '{path}' is not a key or navigation keyword.");
                    return None;
                },
            }
        }

        match position {
            Position::At(value) => Some(Resolved { path: trail.join("."),
                                                   value }),
            Position::Root => None,
        }
    }

    /// Walks `trail` down from the root.
    fn replay(&self, trail: &[&str]) -> Option<Position<'_>> {
        let Some((first, rest)) = trail.split_first() else {
            return Some(Position::Root);
        };

        let mut current = self.nodes.get(*first)?;
        for segment in rest {
            current = child_of(current, segment)?;
        }

        Some(Position::At(current))
    }
}

fn child_of<'a>(value: &'a Value, key: &str) -> Option<&'a Value> {
    match value {
        Value::Node(node) => node.get(key),
        _ => None,
    }
}

/// Returns `true` if `name` may be used as a node key or top-level name.
///
/// Identifiers must not contain `.` or whitespace, must not be a navigation
/// keyword or `system`, must not be purely numeric and must not be spelled
/// like an operator.
///
/// # Example
/// ```
/// use nodeval::interpreter::system::path::is_valid_identifier;
///
/// assert!(is_valid_identifier("flow_rate"));
/// assert!(!is_valid_identifier("parent"));
/// assert!(!is_valid_identifier("42"));
/// assert!(!is_valid_identifier("sum"));
/// assert!(!is_valid_identifier("a.b"));
/// ```
#[must_use]
pub fn is_valid_identifier(name: &str) -> bool {
    !name.is_empty()
    && !name.contains('.')
    && !name.chars().any(char::is_whitespace)
    && ![THIS, PARENT, SYSTEM].contains(&name)
    && !name.parse::<f64>().is_ok_and(f64::is_finite)
    && !crate::ast::Operator::is_reserved(name)
}
