//! Typed field binding.
//!
//! A configuration target describes its own shape through [`Reflect`]: an
//! ordered list of [`FieldDescriptor`]s (name, scalar kind, tags) plus a way to
//! reach each field mutably as a [`FieldSlot`]. The [`record!`](crate::record)
//! macro writes both for a plain struct:
//!
//! ```
//! sealconf::record! {
//!     #[derive(Debug, Default)]
//!     pub struct Database {
//!         #[tags(default = "(localhost)", file_key = "db.host", env_name = "DB_HOST")]
//!         pub host: String,
//!         #[tags(default = "(5432)", file_key = "db.port")]
//!         pub port: i64,
//!     }
//! }
//!
//! let mut db = Database::default();
//! sealconf::set_field(&mut db, "port", "6432").unwrap();
//! assert_eq!(db.port, 6432);
//! ```
//!
//! Only `String`, `i64` and `f64` fields can be bound. Other primitives are
//! accepted in a record but binding them fails with `Error::UnhandledType`.
//! Fields that are not `pub` are described but cannot be bound.

use tracing::{debug, trace};

use crate::error::{Error, Result};

/// Scalar kind of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Int,
    Float,
    /// A type that exists in records but cannot be bound; carries its name.
    Unsupported(&'static str),
}

impl FieldKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Text => "String",
            Self::Int => "i64",
            Self::Float => "f64",
            Self::Unsupported(name) => name,
        }
    }
}

/// Static metadata for one field of a record.
#[derive(Debug, Clone, Copy)]
pub struct FieldDescriptor {
    pub name: &'static str,
    pub kind: FieldKind,
    /// `(tag key, tag value)` pairs in declaration order.
    pub tags: &'static [(&'static str, &'static str)],
}

impl FieldDescriptor {
    /// Value of a tag, if the field carries it.
    pub fn tag(&self, key: &str) -> Option<&'static str> {
        self.tags.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
    }
}

/// What a target type is made of.
#[derive(Debug, Clone, Copy)]
pub enum Shape {
    /// A record with named fields, in declaration order.
    Struct(&'static [FieldDescriptor]),
    /// A bare scalar; not a valid resolution target.
    Scalar(FieldKind),
}

/// Mutable access to one field, by kind.
#[derive(Debug)]
pub enum FieldSlot<'a> {
    Text(&'a mut String),
    Int(&'a mut i64),
    Float(&'a mut f64),
    Unsupported(&'static str),
}

/// Types that may appear as record fields.
pub trait Scalar {
    const KIND: FieldKind;

    fn slot(&mut self) -> FieldSlot<'_>;
}

impl Scalar for String {
    const KIND: FieldKind = FieldKind::Text;

    fn slot(&mut self) -> FieldSlot<'_> {
        FieldSlot::Text(self)
    }
}

impl Scalar for i64 {
    const KIND: FieldKind = FieldKind::Int;

    fn slot(&mut self) -> FieldSlot<'_> {
        FieldSlot::Int(self)
    }
}

impl Scalar for f64 {
    const KIND: FieldKind = FieldKind::Float;

    fn slot(&mut self) -> FieldSlot<'_> {
        FieldSlot::Float(self)
    }
}

macro_rules! unsupported_scalars {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Scalar for $ty {
                const KIND: FieldKind = FieldKind::Unsupported(stringify!($ty));

                fn slot(&mut self) -> FieldSlot<'_> {
                    FieldSlot::Unsupported(stringify!($ty))
                }
            }
        )*
    };
}

unsupported_scalars!(i8, i16, i32, i128, isize, u8, u16, u32, u64, u128, usize, f32, bool, char);

/// Runtime description of a configuration target.
///
/// Implemented by [`record!`](crate::record) for structs, and by every
/// [`Scalar`] so that passing a bare value is reported as
/// `Error::NotStructPointer` rather than silently accepted.
pub trait Reflect {
    fn shape() -> Shape;

    /// Mutable access to a public field by name.
    fn field_mut(&mut self, name: &str) -> Option<FieldSlot<'_>>;
}

macro_rules! scalar_targets {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Reflect for $ty {
                fn shape() -> Shape {
                    Shape::Scalar(<$ty as Scalar>::KIND)
                }

                fn field_mut(&mut self, _name: &str) -> Option<FieldSlot<'_>> {
                    None
                }
            }
        )*
    };
}

scalar_targets!(
    String, i64, f64, i8, i16, i32, i128, isize, u8, u16, u32, u64, u128, usize, f32, bool, char
);

/// Field descriptors of a record type.
///
/// # Errors
///
/// Returns `Error::NotStructPointer` if `T` is not a record.
pub fn fields<T: Reflect>() -> Result<&'static [FieldDescriptor]> {
    match T::shape() {
        Shape::Struct(fields) => Ok(fields),
        Shape::Scalar(_) => Err(Error::NotStructPointer),
    }
}

/// Assign a string value to a named field, converting it to the field's kind.
///
/// # Errors
///
/// - `Error::NotStructPointer` if the target is not a record
/// - `Error::NotExported` if the field does not exist or is not public
/// - `Error::Parse` if the value does not parse as the field's number type
/// - `Error::UnhandledType` if the field's type cannot be bound
pub fn set_field<T: Reflect>(record: &mut T, field: &str, value: &str) -> Result<()> {
    fields::<T>()?;

    let slot = record
        .field_mut(field)
        .ok_or_else(|| Error::NotExported(field.to_string()))?;

    match slot {
        FieldSlot::Text(target) => *target = value.to_string(),
        FieldSlot::Int(target) => {
            *target = value.parse::<i64>().map_err(|e| Error::Parse {
                field: field.to_string(),
                reason: e.to_string(),
            })?;
        }
        FieldSlot::Float(target) => {
            *target = value.parse::<f64>().map_err(|e| Error::Parse {
                field: field.to_string(),
                reason: e.to_string(),
            })?;
        }
        FieldSlot::Unsupported(kind) => {
            return Err(Error::UnhandledType {
                field: field.to_string(),
                kind,
            });
        }
    }

    trace!(field, "bound");
    Ok(())
}

/// Bind a value to the first field whose tag `tag_key` equals `tag_name`.
///
/// No matching field is not an error: the value is ignored.
///
/// # Errors
///
/// Returns `Error::NotStructPointer` if the target is not a record, or any
/// error from [`set_field`] for the matched field.
pub fn set_field_by_tag<T: Reflect>(
    record: &mut T,
    tag_key: &str,
    tag_name: &str,
    value: &str,
) -> Result<()> {
    let fields = fields::<T>()?;

    match fields.iter().find(|f| f.tag(tag_key) == Some(tag_name)) {
        Some(descriptor) => set_field(record, descriptor.name, value),
        None => {
            debug!(tag = tag_key, name = tag_name, "no field matches, ignoring");
            Ok(())
        }
    }
}

/// Declare a configuration record.
///
/// Emits the struct unchanged (minus `#[tags(...)]`) and implements
/// [`Reflect`] for it. Recognized tag keys are `default`, `file_key` and
/// `env_name`; any other key is kept in the descriptor but not interpreted.
#[macro_export]
macro_rules! record {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[doc = $doc:literal])*
                $(#[tags($($tag:ident = $value:literal),* $(,)?)])?
                $fvis:vis $field:ident : $ty:ty
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis struct $name {
            $(
                $(#[doc = $doc])*
                $fvis $field: $ty,
            )*
        }

        impl $crate::Reflect for $name {
            fn shape() -> $crate::Shape {
                const FIELDS: &[$crate::FieldDescriptor] = &[
                    $(
                        $crate::FieldDescriptor {
                            name: stringify!($field),
                            kind: <$ty as $crate::Scalar>::KIND,
                            tags: &[$($((stringify!($tag), $value)),*)?],
                        },
                    )*
                ];
                $crate::Shape::Struct(FIELDS)
            }

            #[allow(unused_variables)]
            fn field_mut(&mut self, name: &str) -> Option<$crate::FieldSlot<'_>> {
                $(
                    if name == stringify!($field) {
                        // Only public fields are bindable.
                        if stringify!($fvis).is_empty() {
                            return None;
                        }
                        return Some($crate::Scalar::slot(&mut self.$field));
                    }
                )*
                None
            }
        }
    };
}
