//! `Inspect` and `AsInterface` for standard library types.
//!
//! Scalars and collections are opaque: a mock stored inside a `Vec` or a map is out of reach,
//! matching the traversal rules for sequences and maps. Smart pointers, references and
//! `Option` are pointers.

use crate::domain::field::Shape;
use crate::domain::ports::{AsInterface, Inspect};
use std::any::Any;
use std::cell::OnceCell;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::rc::Rc;
use std::sync::{Arc, OnceLock};

macro_rules! opaque {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Inspect for $ty {
                fn as_any(&self) -> &dyn Any {
                    self
                }

                fn as_inspect(&self) -> &dyn Inspect {
                    self
                }

                fn shape(&self) -> Shape<'_> {
                    Shape::Opaque
                }
            }
        )*
    };
}

opaque!(
    (),
    bool,
    char,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    f32,
    f64,
    String,
    std::time::Duration,
    std::path::PathBuf,
);

macro_rules! opaque_generic {
    ($($ty:ident < $($param:ident),+ >),* $(,)?) => {
        $(
            impl<$($param: 'static),+> Inspect for $ty<$($param),+> {
                fn as_any(&self) -> &dyn Any {
                    self
                }

                fn as_inspect(&self) -> &dyn Inspect {
                    self
                }

                fn shape(&self) -> Shape<'_> {
                    Shape::Opaque
                }
            }
        )*
    };
}

opaque_generic!(
    Vec<T>,
    VecDeque<T>,
    HashSet<T>,
    BTreeSet<T>,
    HashMap<K, V>,
    BTreeMap<K, V>,
);

impl<T: 'static> Inspect for std::sync::mpsc::Sender<T> {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_inspect(&self) -> &dyn Inspect {
        self
    }

    fn shape(&self) -> Shape<'_> {
        Shape::Opaque
    }
}

impl<A: 'static, R: 'static> Inspect for fn(A) -> R {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_inspect(&self) -> &dyn Inspect {
        self
    }

    fn shape(&self) -> Shape<'_> {
        Shape::Opaque
    }
}

macro_rules! pointer {
    ($($ty:ident),* $(,)?) => {
        $(
            impl<T: Inspect + ?Sized> Inspect for $ty<T> {
                fn as_any(&self) -> &dyn Any {
                    self
                }

                fn as_inspect(&self) -> &dyn Inspect {
                    self
                }

                fn shape(&self) -> Shape<'_> {
                    Shape::Pointer(Some((**self).as_inspect()))
                }
            }

            impl<T: Inspect + ?Sized> AsInterface for $ty<T> {
                fn as_interface(&self) -> Option<&dyn Inspect> {
                    Some((**self).as_inspect())
                }
            }
        )*
    };
}

pointer!(Box, Rc, Arc);

impl<T: Inspect + ?Sized> Inspect for &'static T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_inspect(&self) -> &dyn Inspect {
        self
    }

    fn shape(&self) -> Shape<'_> {
        Shape::Pointer(Some((**self).as_inspect()))
    }
}

impl<T: Inspect + ?Sized> AsInterface for &T {
    fn as_interface(&self) -> Option<&dyn Inspect> {
        Some((**self).as_inspect())
    }
}

impl<T: Inspect> Inspect for Option<T> {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_inspect(&self) -> &dyn Inspect {
        self
    }

    fn shape(&self) -> Shape<'_> {
        Shape::Pointer(self.as_ref().map(|value| value as &dyn Inspect))
    }
}

impl<I: AsInterface> AsInterface for Option<I> {
    fn as_interface(&self) -> Option<&dyn Inspect> {
        self.as_ref().and_then(AsInterface::as_interface)
    }
}

impl<T: Inspect> Inspect for OnceCell<T> {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_inspect(&self) -> &dyn Inspect {
        self
    }

    fn shape(&self) -> Shape<'_> {
        Shape::Pointer(self.get().map(|value| value as &dyn Inspect))
    }
}

impl<T: Inspect> Inspect for OnceLock<T> {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_inspect(&self) -> &dyn Inspect {
        self
    }

    fn shape(&self) -> Shape<'_> {
        Shape::Pointer(self.get().map(|value| value as &dyn Inspect))
    }
}
