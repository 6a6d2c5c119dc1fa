/// Implement [`Inspect`](crate::domain::ports::Inspect) for a struct by listing its fields in
/// declaration order.
///
/// Each entry is `<kind> <field> [as "Name"]`, where kind is one of `field` (exported),
/// `private`, `embedded`, `interface` (a trait-object holder such as `Box<dyn Trait>`) or
/// `private_interface`. The name defaults to the Rust field name.
///
/// ```ignore
/// struct Handler {
///     service: Box<MockService>,
///     store: Option<Arc<dyn Store>>,
///     retries: u32,
/// }
///
/// mockwalk::inspect_struct!(Handler {
///     field service as "Service",
///     interface store as "Store",
///     private retries,
/// });
/// ```
#[macro_export]
macro_rules! inspect_struct {
    (@name $field:ident) => {
        ::std::stringify!($field)
    };
    (@name $field:ident, $name:literal) => {
        $name
    };
    (@field $self:ident, field, $field:ident, $name:expr) => {
        $crate::domain::field::Field::exported($name, &$self.$field)
    };
    (@field $self:ident, private, $field:ident, $name:expr) => {
        $crate::domain::field::Field::private($name, &$self.$field)
    };
    (@field $self:ident, embedded, $field:ident, $name:expr) => {
        $crate::domain::field::Field::embedded($name, &$self.$field)
    };
    (@field $self:ident, interface, $field:ident, $name:expr) => {
        $crate::domain::field::Field::interface($name, &$self.$field)
    };
    (@field $self:ident, private_interface, $field:ident, $name:expr) => {
        $crate::domain::field::Field::private_interface($name, &$self.$field)
    };
    ($ty:ty { $($kind:ident $field:ident $(as $name:literal)?),* $(,)? }) => {
        impl $crate::domain::ports::Inspect for $ty {
            fn as_any(&self) -> &dyn ::std::any::Any {
                self
            }

            fn as_inspect(&self) -> &dyn $crate::domain::ports::Inspect {
                self
            }

            fn shape(&self) -> $crate::domain::field::Shape<'_> {
                $crate::domain::field::Shape::Struct(::std::vec![
                    $(
                        $crate::inspect_struct!(
                            @field self,
                            $kind,
                            $field,
                            $crate::inspect_struct!(@name $field $(, $name)?)
                        )
                    ),*
                ])
            }
        }
    };
}
