use serde::{Deserialize, Serialize};

/// Declares a string-backed identifier newtype.
///
/// Identifiers are opaque: the only property the service relies on is
/// whether they are empty, so no format is enforced on construction.
macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Creates an identifier from anything string-like.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Returns the identifier as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Returns true if the identifier is the empty string.
            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

string_id!(
    /// Identifier of the customer who placed an order.
    CustomerId
);

string_id!(
    /// Identifier of an order. Not required to be unique.
    OrderId
);

string_id!(
    /// Identifier of a purchased item (SKU).
    ItemId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn customer_id_serializes_as_plain_string() {
        let id = CustomerId::new("01");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"01\"");
    }

    #[test]
    fn default_id_is_empty() {
        assert!(OrderId::default().is_empty());
        assert!(!ItemId::from("20201").is_empty());
    }

    #[test]
    fn ids_order_lexicographically() {
        let mut ids = vec![CustomerId::from("02"), CustomerId::from("01")];
        ids.sort();
        assert_eq!(ids[0].as_str(), "01");
    }

    #[test]
    fn display_shows_raw_value() {
        assert_eq!(ItemId::new("item1").to_string(), "item1");
    }
}
