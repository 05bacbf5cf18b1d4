/// Defines a model with a numeric ID newtype, getters, and a builder.
///
/// Fields get public getters by default. Setters and mutable getters are
/// opted into per field with `#[getset(...)]` so a model controls which of its
/// parts can be changed from the outside.
macro_rules! org_model {
    (
        $(#[$struct_meta:meta])*
        pub struct $name:ident {
            id: <<$id:ident>>,
            $($fields:tt)*
        }
        $builder:ident

    ) => {
        /// A numeric ID, unique among models of the same kind.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[cfg_attr(feature = "with_serde", derive(serde_derive::Serialize, serde_derive::Deserialize), serde(transparent))]
        pub struct $id(u64);

        impl $id {
            pub fn new(id: u64) -> Self {
                Self(id)
            }

            /// Return the raw numeric value of this ID
            pub fn as_u64(&self) -> u64 {
                self.0
            }
        }

        impl std::convert::From<u64> for $id {
            fn from(id: u64) -> Self {
                Self(id)
            }
        }

        impl std::fmt::Display for $id {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        $(#[$struct_meta])*
        #[derive(Clone, Debug, PartialEq, getset::Getters, getset::Setters, getset::MutGetters, derive_builder::Builder)]
        #[cfg_attr(feature = "with_serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
        #[builder(pattern = "owned", setter(into))]
        #[getset(get = "pub")]
        pub struct $name {
            id: $id,
            $($fields)*
        }

        impl $name {
            pub fn builder() -> $builder {
                $builder::default()
            }
        }
    }
}
