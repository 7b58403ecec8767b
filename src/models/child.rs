//! Shared behaviour of named child resources.

/// A named child owned by one of the load balancer's collections.
pub trait ChildResource {
    /// Human readable kind, used in error messages.
    const KIND: &'static str;
    /// Path segment under the parent in the canonical resource id.
    const CHILD_TYPE: &'static str;

    fn name(&self) -> &str;
}

/// Case-insensitive name comparison used for every uniqueness check.
pub fn names_match(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

/// Position of the child named `name`, if any.
pub fn position_of<T: ChildResource>(children: &[T], name: &str) -> Option<usize> {
    children.iter().position(|c| names_match(c.name(), name))
}
