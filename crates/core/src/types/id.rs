//! Newtype IDs for type-safe entity references.
//!
//! IDs are opaque strings assigned by whichever backend owns the entity
//! (e.g. `prod_3f2a...`, `ORD-1001`). The components never parse them.

/// Macro to define a type-safe string ID wrapper.
///
/// Creates a newtype wrapper around `String` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`, `PartialOrd`, `Ord`
/// - Conversion methods: `new()`, `as_str()`, `generate()`
/// - `From<&str>` and `From<String>` implementations
///
/// # Example
///
/// ```rust
/// # use storeview_core::define_id;
/// define_id!(UserId, "usr");
/// define_id!(TicketId, "tkt");
///
/// let user_id = UserId::new("usr_1");
/// let ticket_id = TicketId::new("usr_1");
///
/// // These are different types, so this won't compile:
/// // let _: UserId = ticket_id;
/// assert_eq!(user_id.as_str(), ticket_id.as_str());
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident, $prefix:literal) => {
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Prefix used for generated IDs.
            pub const PREFIX: &'static str = $prefix;

            /// Create an ID from any string value.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Generate a fresh random ID of the form `<prefix>_<uuid>`.
            #[must_use]
            pub fn generate() -> Self {
                Self(format!("{}_{}", $prefix, ::uuid::Uuid::new_v4().simple()))
            }

            /// Get the underlying string value.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id!(ProductId, "prod");
define_id!(VariantId, "variant");
define_id!(OrderId, "order");
define_id!(CustomerId, "cus");
define_id!(CategoryId, "pcat");
define_id!(RegionId, "reg");
define_id!(CouponId, "coupon");

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_uses_prefix() {
        let id = ProductId::generate();
        assert!(id.as_str().starts_with("prod_"));
        assert_eq!(id.as_str().len(), "prod_".len() + 32);
    }

    #[test]
    fn test_generate_is_unique() {
        assert_ne!(VariantId::generate(), VariantId::generate());
    }

    #[test]
    fn test_serde_transparent() {
        let id = OrderId::new("ORD-1001");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"ORD-1001\"");
        let parsed: OrderId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_display() {
        assert_eq!(CustomerId::from("cus_42").to_string(), "cus_42");
    }
}
