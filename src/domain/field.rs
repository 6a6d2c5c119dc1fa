use crate::domain::ports::{AsInterface, Inspect};
use std::fmt;

/// Field visibility as seen from outside the subject's module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Visibility {
    Exported,
    Private,
}

/// Kind of a value, as reported by [`Inspect::shape`].
pub enum Shape<'a> {
    /// Struct-shaped: fields in declaration order.
    Struct(Vec<Field<'a>>),
    /// `Box`, `Rc`, `Arc`, `&T`, `Option<T>` and friends. `None` is a null pointer.
    Pointer(Option<&'a dyn Inspect>),
    /// Scalars, sequences, maps, functions, channels. Never contains a mock.
    Opaque,
}

impl fmt::Debug for Shape<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Struct(fields) => f.debug_tuple("Struct").field(fields).finish(),
            Shape::Pointer(None) => f.write_str("Pointer(null)"),
            Shape::Pointer(Some(_)) => f.write_str("Pointer(..)"),
            Shape::Opaque => f.write_str("Opaque"),
        }
    }
}

/// Runtime value of a field.
#[derive(Clone, Copy)]
pub enum FieldValue<'a> {
    /// Statically typed field.
    Concrete(&'a dyn Inspect),
    /// Trait-object field; `None` is a nil interface.
    Interface(Option<&'a dyn Inspect>),
}

/// Per-field metadata produced while walking a struct. Lives for one traversal step only.
#[derive(Clone, Copy)]
pub struct Field<'a> {
    pub name: &'static str,
    pub declared_type: &'static str,
    pub visibility: Visibility,
    pub embedded: bool,
    pub value: FieldValue<'a>,
}

impl<'a> Field<'a> {
    pub fn exported<T: Inspect>(name: &'static str, value: &'a T) -> Self {
        Self::concrete(name, value, Visibility::Exported, false)
    }

    pub fn private<T: Inspect>(name: &'static str, value: &'a T) -> Self {
        Self::concrete(name, value, Visibility::Private, false)
    }

    /// Embedded (anonymous) field. Always visible, whatever its declared visibility.
    pub fn embedded<T: Inspect>(name: &'static str, value: &'a T) -> Self {
        Self::concrete(name, value, Visibility::Private, true)
    }

    pub fn interface<I: AsInterface + ?Sized>(name: &'static str, holder: &'a I) -> Self {
        Self::dynamic(name, holder, Visibility::Exported)
    }

    pub fn private_interface<I: AsInterface + ?Sized>(name: &'static str, holder: &'a I) -> Self {
        Self::dynamic(name, holder, Visibility::Private)
    }

    /// Unexported, non-embedded fields are outside the subject's public surface and are skipped.
    pub fn is_visible(&self) -> bool {
        self.visibility == Visibility::Exported || self.embedded
    }

    fn concrete<T: Inspect>(
        name: &'static str,
        value: &'a T,
        visibility: Visibility,
        embedded: bool,
    ) -> Self {
        Self {
            name,
            declared_type: std::any::type_name::<T>(),
            visibility,
            embedded,
            value: FieldValue::Concrete(value),
        }
    }

    fn dynamic<I: AsInterface + ?Sized>(
        name: &'static str,
        holder: &'a I,
        visibility: Visibility,
    ) -> Self {
        Self {
            name,
            declared_type: std::any::type_name::<I>(),
            visibility,
            embedded: false,
            value: FieldValue::Interface(holder.as_interface()),
        }
    }
}

impl fmt::Debug for Field<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.value {
            FieldValue::Concrete(_) => "concrete",
            FieldValue::Interface(None) => "nil interface",
            FieldValue::Interface(Some(_)) => "interface",
        };
        f.debug_struct("Field")
            .field("name", &self.name)
            .field("declared_type", &self.declared_type)
            .field("visibility", &self.visibility)
            .field("embedded", &self.embedded)
            .field("value", &kind)
            .finish()
    }
}
