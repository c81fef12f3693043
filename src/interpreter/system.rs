/// The `System` type and loading from JSON.
pub mod core;
/// Mutation of values at resolved paths.
pub mod mutate;
/// Path resolution with `this` and `parent` navigation.
pub mod path;
