// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/// Defines a closed, byte-tagged genome enum.
///
/// Generates the `#[repr(u8)]` enum with `ALL`, `as_u8`, `name`, `Default`,
/// `TryFrom<u8>` (failing with [`GenomeModelError::UnknownEnumValue`](crate::GenomeModelError))
/// and `Display`.
macro_rules! define_genome_enum {
    (
        $(#[$meta:meta])*
        $name:ident (default $default:ident) {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident = $value:literal => $display:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[repr(u8)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                $variant = $value,
            )+
        }

        impl $name {
            /// Every variant, in tag order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub const fn as_u8(self) -> u8 {
                self as u8
            }

            pub const fn name(self) -> &'static str {
                match self {
                    $($name::$variant => $display,)+
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                $name::$default
            }
        }

        impl TryFrom<u8> for $name {
            type Error = $crate::GenomeModelError;

            fn try_from(value: u8) -> Result<Self, Self::Error> {
                match value {
                    $($value => Ok($name::$variant),)+
                    _ => Err($crate::GenomeModelError::UnknownEnumValue {
                        enum_name: stringify!($name),
                        value,
                    }),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.name())
            }
        }
    };
}
