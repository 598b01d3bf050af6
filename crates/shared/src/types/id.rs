//! Typed IDs for type-safe entity references.
//!
//! IDs are assigned by the backend as integers; wrapping them prevents
//! accidentally passing an `AssetId` where a `LiabilityId` is expected.

use serde::{Deserialize, Serialize};

/// Macro to generate typed ID wrappers around backend-assigned integers.
macro_rules! typed_id {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl $name {
            /// Creates an ID from a raw backend value.
            #[must_use]
            pub const fn from_raw(id: i64) -> Self {
                Self(id)
            }

            /// Returns the raw backend value.
            #[must_use]
            pub const fn into_inner(self) -> i64 {
                self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            fn from(id: i64) -> Self {
                Self(id)
            }
        }
    };
}

typed_id!(AssetId, "Unique identifier for an asset.");
typed_id!(LiabilityId, "Unique identifier for a liability.");
typed_id!(ObligationId, "Unique identifier for an obligation.");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let id = AssetId::from_raw(42);
        assert_eq!(id.into_inner(), 42);
        assert_eq!(id.to_string(), "42");
    }

    #[test]
    fn test_serde_transparent() {
        let id = LiabilityId::from_raw(7);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "7");
        let back: LiabilityId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
