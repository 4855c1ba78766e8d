//! Wire types shared with the downstream services. All JSON is camelCase.

pub mod address;
pub mod order;
pub mod product;
pub mod user;

pub use address::*;
pub use order::*;
pub use product::*;
pub use user::*;

/// Defines a type-safe integer identifier that travels as a bare number.
macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord,
            serde::Serialize, serde::Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub u32);

        impl From<u32> for $name {
            fn from(id: u32) -> Self {
                Self(id)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

entity_id!(
    /// Type-safe identifier for Orders.
    OrderId
);
entity_id!(
    /// Type-safe identifier for Products.
    ProductId
);
entity_id!(
    /// Type-safe identifier for address-book entries.
    AddressId
);
entity_id!(
    /// Type-safe identifier for Users.
    UserId
);
