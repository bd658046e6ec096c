//! Element kinds and the [`Element`] trait.
//!
//! Pointers into the arena are typed by a closed set of fixed-width numeric
//! kinds. [`ElementKind`] is the runtime tag; [`Element`] ties each Rust
//! primitive to its tag so typed APIs can recover the width statically.

use std::fmt;

/// Classification of an element's numeric type.
///
/// Every kind has a fixed byte width, which is also its alignment inside
/// the arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// Unsigned 8-bit integer.
    U8,
    /// Signed 8-bit integer.
    I8,
    /// Unsigned 16-bit integer.
    U16,
    /// Signed 16-bit integer.
    I16,
    /// Unsigned 32-bit integer.
    U32,
    /// Signed 32-bit integer.
    I32,
    /// 32-bit IEEE 754 float.
    F32,
    /// 64-bit IEEE 754 float.
    F64,
    /// Unsigned 64-bit big integer.
    U64,
    /// Signed 64-bit big integer.
    I64,
}

impl ElementKind {
    /// Every supported kind, narrowest first.
    pub const ALL: [ElementKind; 10] = [
        Self::U8,
        Self::I8,
        Self::U16,
        Self::I16,
        Self::U32,
        Self::I32,
        Self::F32,
        Self::F64,
        Self::U64,
        Self::I64,
    ];

    /// Size of one element in bytes.
    pub const fn byte_width(self) -> usize {
        match self {
            Self::U8 | Self::I8 => 1,
            Self::U16 | Self::I16 => 2,
            Self::U32 | Self::I32 | Self::F32 => 4,
            Self::F64 | Self::U64 | Self::I64 => 8,
        }
    }

    /// Whether the kind is a floating-point type.
    pub const fn is_float(self) -> bool {
        matches!(self, Self::F32 | Self::F64)
    }

    /// Whether the kind can represent negative values.
    pub const fn is_signed(self) -> bool {
        matches!(
            self,
            Self::I8 | Self::I16 | Self::I32 | Self::I64 | Self::F32 | Self::F64
        )
    }

    /// Short lowercase name matching the Rust primitive.
    pub const fn name(self) -> &'static str {
        match self {
            Self::U8 => "u8",
            Self::I8 => "i8",
            Self::U16 => "u16",
            Self::I16 => "i16",
            Self::U32 => "u32",
            Self::I32 => "i32",
            Self::F32 => "f32",
            Self::F64 => "f64",
            Self::U64 => "u64",
            Self::I64 => "i64",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

mod sealed {
    pub trait Sealed {}
}

/// A primitive that can be stored in the arena.
///
/// Sealed: the set of implementors is exactly the primitives listed in
/// [`ElementKind`]. `Pod` guarantees any byte pattern is a valid value,
/// which is what makes reading reclaimed bytes well-defined at the
/// language level even though the contents are meaningless.
pub trait Element: bytemuck::Pod + PartialEq + fmt::Debug + sealed::Sealed {
    /// Runtime tag for this primitive.
    const KIND: ElementKind;

    /// Size of one element in bytes.
    const WIDTH: usize = Self::KIND.byte_width();
}

macro_rules! impl_element {
    ($($ty:ty => $kind:ident),* $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}

            impl Element for $ty {
                const KIND: ElementKind = ElementKind::$kind;
            }
        )*
    };
}

impl_element! {
    u8 => U8,
    i8 => I8,
    u16 => U16,
    i16 => I16,
    u32 => U32,
    i32 => I32,
    f32 => F32,
    f64 => F64,
    u64 => U64,
    i64 => I64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn width_of<T: Element>() -> usize {
        T::WIDTH
    }

    #[test]
    fn widths_match_primitive_sizes() {
        assert_eq!(width_of::<u8>(), std::mem::size_of::<u8>());
        assert_eq!(width_of::<i16>(), std::mem::size_of::<i16>());
        assert_eq!(width_of::<u32>(), std::mem::size_of::<u32>());
        assert_eq!(width_of::<f32>(), std::mem::size_of::<f32>());
        assert_eq!(width_of::<f64>(), std::mem::size_of::<f64>());
        assert_eq!(width_of::<i64>(), std::mem::size_of::<i64>());
    }

    #[test]
    fn widths_are_powers_of_two() {
        for kind in ElementKind::ALL {
            assert!(kind.byte_width().is_power_of_two(), "{kind}");
        }
    }

    #[test]
    fn signedness_and_float_flags() {
        assert!(ElementKind::I16.is_signed());
        assert!(!ElementKind::U64.is_signed());
        assert!(ElementKind::F32.is_float());
        assert!(ElementKind::F64.is_signed());
        assert!(!ElementKind::I64.is_float());
    }

    #[test]
    fn kind_tags_round_trip_through_trait() {
        assert_eq!(<i16 as Element>::KIND, ElementKind::I16);
        assert_eq!(<f64 as Element>::KIND, ElementKind::F64);
        assert_eq!(<u8 as Element>::KIND, ElementKind::U8);
    }

    #[test]
    fn display_uses_primitive_name() {
        assert_eq!(ElementKind::I64.to_string(), "i64");
        assert_eq!(ElementKind::F32.to_string(), "f32");
    }
}
