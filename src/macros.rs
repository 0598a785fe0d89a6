//! Utility macros for repetitive entity boilerplate

/// Define a transparent integer id newtype for a host entity
///
/// The host keys every entity with an `i32`. Wrapping each one keeps a group id
/// from being compared against a location id by accident.
///
/// # Examples
///
/// ```
/// attended_checkin::define_entity_id!(
///     /// Identifier of a widget
///     WidgetId
/// );
///
/// let id = WidgetId::new(42);
/// assert_eq!(id.value(), 42);
/// assert_eq!(id.to_string(), "42");
/// ```
#[macro_export]
macro_rules! define_entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            serde::Serialize,
            serde::Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub i32);

        impl $name {
            pub const fn new(value: i32) -> Self {
                Self(value)
            }

            pub const fn value(self) -> i32 {
                self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i32> for $name {
            fn from(value: i32) -> Self {
                Self(value)
            }
        }
    };
}
