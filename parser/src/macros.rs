//! Table and structure generators shared by the type modules.

/// Declares Vulkan enums as `i32` newtypes with a name table.
macro_rules! vk_enum {
    ($(
        $(#[$meta:meta])*
        pub struct $name:ident {
            $( $variant:ident = $value:expr => $text:tt ),* $(,)?
        }
    )*) => { $(
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
        #[repr(transparent)]
        pub struct $name(pub i32);

        impl $name {
            $( pub const $variant: $name = $name($value); )*

            /// Every enumerant name with its value, in declaration order.
            pub const ENUMERANTS: &'static [(&'static str, i32)] = &[ $( ($text, $value) ),* ];

            pub const TYPE_NAME: &'static str = concat!("Vk", stringify!($name));

            pub fn from_raw(raw: i32) -> $name {
                $name(raw)
            }

            pub fn as_raw(self) -> i32 {
                self.0
            }

            pub fn from_name(name: &str) -> Option<$name> {
                ::lazy_static::lazy_static! {
                    static ref BY_NAME: ::std::collections::HashMap<&'static str, i32> =
                        $name::ENUMERANTS.iter().copied().collect();
                }
                BY_NAME.get(name).copied().map($name)
            }

            pub fn name(self) -> Option<&'static str> {
                $name::ENUMERANTS
                    .iter()
                    .find(|(_, value)| *value == self.0)
                    .map(|(name, _)| *name)
            }
        }

        impl ::std::fmt::Debug for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter) -> ::std::fmt::Result {
                match self.name() {
                    Some(name) => f.write_str(name),
                    None => write!(f, "{}({})", stringify!($name), self.0),
                }
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S: ::serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                match self.name() {
                    Some(name) => serializer.serialize_str(name),
                    None => serializer.serialize_i32(self.0),
                }
            }
        }

        impl<'a> $crate::traits::FromJson<'a> for $name {
            fn from_json(
                ctx: &$crate::context::Context<'a>,
                value: &::serde_json::Value,
            ) -> Result<Self, $crate::error::VkJsonError> {
                ctx.enumerant(value, $name::TYPE_NAME, &|name| $name::from_name(name).map(|e| e.0))
                    .map($name)
            }
        }
    )* };
}

/// Declares Vulkan bitmasks as `u32` newtypes with a bit table.
macro_rules! vk_flags {
    ($(
        $(#[$meta:meta])*
        pub struct $name:ident {
            $( $variant:ident = $value:expr => $text:tt ),* $(,)?
        }
    )*) => { $(
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
        #[repr(transparent)]
        pub struct $name(pub u32);

        impl $name {
            $( pub const $variant: $name = $name($value); )*

            /// Every named bit (or bit combination) with its value.
            pub const BITS: &'static [(&'static str, u32)] = &[ $( ($text, $value) ),* ];

            pub const TYPE_NAME: &'static str = concat!("Vk", stringify!($name));

            pub const fn empty() -> $name {
                $name(0)
            }

            pub fn from_raw(raw: u32) -> $name {
                $name(raw)
            }

            pub fn as_raw(self) -> u32 {
                self.0
            }

            pub fn is_empty(self) -> bool {
                self.0 == 0
            }

            pub fn contains(self, other: $name) -> bool {
                self.0 & other.0 == other.0
            }

            pub fn from_name(name: &str) -> Option<$name> {
                ::lazy_static::lazy_static! {
                    static ref BY_NAME: ::std::collections::HashMap<&'static str, u32> =
                        $name::BITS.iter().copied().collect();
                }
                BY_NAME.get(name).copied().map($name)
            }

            /// Writes the mask as `"A | B"`; bits without a name are appended
            /// in hexadecimal.
            pub fn to_expression(self) -> String {
                if self.0 == 0 {
                    return $name::BITS
                        .iter()
                        .find(|(_, bit)| *bit == 0)
                        .map_or_else(|| "0".to_owned(), |(name, _)| (*name).to_owned());
                }
                let mut text = String::new();
                let mut rest = self.0;
                for (name, bit) in $name::BITS {
                    if bit.is_power_of_two() && rest & bit != 0 {
                        if !text.is_empty() {
                            text.push_str(" | ");
                        }
                        text.push_str(name);
                        rest &= !bit;
                    }
                }
                if rest != 0 {
                    if !text.is_empty() {
                        text.push_str(" | ");
                    }
                    text.push_str(&format!("{:#x}", rest));
                }
                text
            }
        }

        impl ::std::ops::BitOr for $name {
            type Output = $name;

            fn bitor(self, rhs: $name) -> $name {
                $name(self.0 | rhs.0)
            }
        }

        impl ::std::ops::BitOrAssign for $name {
            fn bitor_assign(&mut self, rhs: $name) {
                self.0 |= rhs.0;
            }
        }

        impl ::std::ops::BitAnd for $name {
            type Output = $name;

            fn bitand(self, rhs: $name) -> $name {
                $name(self.0 & rhs.0)
            }
        }

        impl ::std::fmt::Debug for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter) -> ::std::fmt::Result {
                f.write_str(&self.to_expression())
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S: ::serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(&self.to_expression())
            }
        }

        impl<'a> $crate::traits::FromJson<'a> for $name {
            fn from_json(
                ctx: &$crate::context::Context<'a>,
                value: &::serde_json::Value,
            ) -> Result<Self, $crate::error::VkJsonError> {
                ctx.flags(value, $name::TYPE_NAME, &|name| $name::from_name(name).map(|f| f.0))
                    .map($name)
            }
        }
    )* };
}

/// Declares non-dispatchable handles as `u64` newtypes.
macro_rules! vk_handle {
    ($( $(#[$meta:meta])* $name:ident ),* $(,)?) => { $(
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
        #[repr(transparent)]
        pub struct $name(pub u64);

        impl $name {
            pub const NULL: $name = $name(0);

            pub fn from_raw(raw: u64) -> $name {
                $name(raw)
            }

            pub fn as_raw(self) -> u64 {
                self.0
            }

            pub fn is_null(self) -> bool {
                self.0 == 0
            }
        }

        impl ::std::fmt::Debug for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter) -> ::std::fmt::Result {
                write!(f, "{}({:#x})", stringify!($name), self.0)
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S: ::serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_u64(self.0)
            }
        }

        impl<'a> $crate::traits::FromJson<'a> for $name {
            fn from_json(
                ctx: &$crate::context::Context<'a>,
                value: &::serde_json::Value,
            ) -> Result<Self, $crate::error::VkJsonError> {
                if $crate::utils::is_null_pointer(value) {
                    return Ok($name::NULL);
                }
                <u64 as $crate::traits::FromJson<'a>>::from_json(ctx, value).map($name)
            }
        }
    )* };
}

/// Declares a Vulkan structure together with its JSON conversion.
///
/// Each member is written `name: Type => "jsonKey"`; array members add
/// `| count_member` so the array length is checked against the count. A
/// structure declared with `: STRUCTURE_TYPE` also gets `s_type` and `p_next`
/// members and implements [`TaggedStructure`](crate::traits::TaggedStructure).
macro_rules! vk_struct {
    (
        $(#[$meta:meta])*
        pub struct $name:ident<$lt:lifetime> : $s_type:ident {
            $( $(#[$fmeta:meta])* $field:ident : $ty:ty => $key:tt $(| $count:ident)? ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, ::serde::Serialize)]
        pub struct $name<$lt> {
            #[serde(rename = "sType")]
            pub s_type: $crate::enums::StructureType,
            #[serde(rename = "pNext")]
            pub p_next: Option<&$lt $crate::pnext::PNext<$lt>>,
            $( $(#[$fmeta])* #[serde(rename = $key)] pub $field: $ty, )*
        }

        impl<$lt> Default for $name<$lt> {
            fn default() -> Self {
                $name {
                    s_type: $crate::enums::StructureType::$s_type,
                    p_next: None,
                    $( $field: Default::default(), )*
                }
            }
        }

        impl<$lt> $crate::traits::TaggedStructure for $name<$lt> {
            const STRUCTURE_TYPE: $crate::enums::StructureType = $crate::enums::StructureType::$s_type;
        }

        impl<$lt> $crate::traits::FromJson<$lt> for $name<$lt> {
            fn from_json(
                ctx: &$crate::context::Context<$lt>,
                value: &::serde_json::Value,
            ) -> Result<Self, $crate::error::VkJsonError> {
                let obj = ctx.object(value)?;
                let parsed = $name {
                    s_type: ctx.structure_type(obj, $crate::enums::StructureType::$s_type)?,
                    p_next: ctx.field(obj, "pNext")?,
                    $( $field: ctx.field(obj, $key)?, )*
                };
                $( $( ctx.check_count($key, stringify!($count), parsed.$count as u64, parsed.$field.len())?; )? )*
                Ok(parsed)
            }
        }

        vk_struct!(@pointer $name<$lt>);
    };

    (
        $(#[$meta:meta])*
        pub struct $name:ident<$lt:lifetime> {
            $( $(#[$fmeta:meta])* $field:ident : $ty:ty => $key:tt $(| $count:ident)? ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Default, PartialEq, ::serde::Serialize)]
        pub struct $name<$lt> {
            $( $(#[$fmeta])* #[serde(rename = $key)] pub $field: $ty, )*
        }

        impl<$lt> $crate::traits::FromJson<$lt> for $name<$lt> {
            fn from_json(
                ctx: &$crate::context::Context<$lt>,
                value: &::serde_json::Value,
            ) -> Result<Self, $crate::error::VkJsonError> {
                let obj = ctx.object(value)?;
                let parsed = $name {
                    $( $field: ctx.field(obj, $key)?, )*
                };
                $( $( ctx.check_count($key, stringify!($count), parsed.$count as u64, parsed.$field.len())?; )? )*
                Ok(parsed)
            }
        }

        vk_struct!(@pointer $name<$lt>);
    };

    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $( $(#[$fmeta:meta])* $field:ident : $ty:ty => $key:tt ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Default, PartialEq, ::serde::Serialize)]
        pub struct $name {
            $( $(#[$fmeta])* #[serde(rename = $key)] pub $field: $ty, )*
        }

        impl<'a> $crate::traits::FromJson<'a> for $name {
            fn from_json(
                ctx: &$crate::context::Context<'a>,
                value: &::serde_json::Value,
            ) -> Result<Self, $crate::error::VkJsonError> {
                let obj = ctx.object(value)?;
                Ok($name {
                    $( $field: ctx.field(obj, $key)?, )*
                })
            }
        }

        impl<'a> $crate::traits::FromJson<'a> for &'a $name {
            fn from_json(
                ctx: &$crate::context::Context<'a>,
                value: &::serde_json::Value,
            ) -> Result<Self, $crate::error::VkJsonError> {
                let parsed = <$name as $crate::traits::FromJson<'a>>::from_json(ctx, value)?;
                Ok(&*ctx.arena().alloc(parsed))
            }
        }
    };

    (@pointer $name:ident<$lt:lifetime>) => {
        impl<$lt> $crate::traits::FromJson<$lt> for &$lt $name<$lt> {
            fn from_json(
                ctx: &$crate::context::Context<$lt>,
                value: &::serde_json::Value,
            ) -> Result<Self, $crate::error::VkJsonError> {
                let parsed = <$name<$lt> as $crate::traits::FromJson<$lt>>::from_json(ctx, value)?;
                Ok(&*ctx.arena().alloc(parsed))
            }
        }
    };
}
