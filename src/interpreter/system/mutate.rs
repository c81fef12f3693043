use log::debug;

use crate::{
    error::EvalError,
    interpreter::{evaluator::core::EvalResult, system::core::System, value::core::Value},
};

impl System {
    /// Writes `value` at `path`, replacing whatever was stored there.
    ///
    /// `path` is resolved first, so it may contain `this` and `parent`; the
    /// write always lands at the canonical location. Only existing locations
    /// can be written: the final key must already be present in its parent
    /// node.
    ///
    /// # Errors
    /// Returns `EvalError::InvalidPath` if `path` does not resolve.
    ///
    /// # Example
    /// ```
    /// use nodeval::interpreter::{system::core::System, value::core::Value};
    ///
    /// let mut system = System::new().with("tank", [("level", 3.0), ("limit", 9.0)]);
    ///
    /// system.set_value("tank.limit.parent.level", Value::from(5.0)).unwrap();
    ///
    /// assert_eq!(system.resolve("tank.level").unwrap().value, &Value::from(5.0));
    /// assert!(system.set_value("tank.volume", Value::from(1.0)).is_err());
    /// ```
    pub fn set_value(&mut self, path: &str, value: Value) -> EvalResult<()> {
        let invalid = || EvalError::InvalidPath { path: path.to_string() };

        let canonical = self.resolve(path).ok_or_else(invalid)?.path;
        let mut segments: Vec<&str> = canonical.split('.').collect();
        let last = segments.pop().ok_or_else(invalid)?;

        let mut container = &mut self.nodes;
        for segment in segments {
            container = match container.get_mut(segment) {
                Some(Value::Node(node)) => node,
                _ => return Err(invalid()),
            };
        }

        debug!("Setting '{canonical}' to {value}.");
        container.insert(last.to_string(), value);
        Ok(())
    }
}
