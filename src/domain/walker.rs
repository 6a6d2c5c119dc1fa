use crate::domain::error::VerifyError;
use crate::domain::field::{Field, FieldValue, Shape};
use crate::domain::path::FieldPath;
use crate::domain::ports::{Inspect, Mock};
use crate::domain::verdict;
use std::any::TypeId;
use std::collections::HashSet;
use std::marker::PhantomData;

/// Nesting limit applied when cycle detection is off and no explicit `max_depth` is set.
pub const UNGUARDED_MAX_DEPTH: usize = 64;

/// Traversal limits for the graph walker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WalkParams {
    /// Maximum struct nesting (and pointer chain length) before giving up with
    /// [`VerifyError::DepthExceeded`]. `None` means unlimited while cycles are detected.
    pub max_depth: Option<usize>,
    /// If false, a struct or mock already seen in this walk is walked again on re-entry.
    pub detect_cycles: bool,
}

impl Default for WalkParams {
    fn default() -> Self {
        Self {
            max_depth: None,
            detect_cycles: true,
        }
    }
}

impl WalkParams {
    /// Limit in effect for this walk. Without cycle detection a cyclic subject would recurse
    /// forever, so an unset `max_depth` falls back to [`UNGUARDED_MAX_DEPTH`].
    pub fn depth_limit(&self) -> Option<usize> {
        match self.max_depth {
            Some(limit) => Some(limit),
            None if !self.detect_cycles => Some(UNGUARDED_MAX_DEPTH),
            None => None,
        }
    }
}

/// A struct-shaped value ready to be walked, together with its fields.
struct Subject<'a> {
    value: &'a dyn Inspect,
    fields: Vec<Field<'a>>,
}

impl<'a> Subject<'a> {
    /// Accepts a struct directly or through exactly one pointer.
    fn resolve(value: &'a dyn Inspect) -> Option<Self> {
        match value.shape() {
            Shape::Struct(fields) => Some(Self { value, fields }),
            Shape::Pointer(Some(pointee)) => match pointee.shape() {
                Shape::Struct(fields) => Some(Self {
                    value: pointee,
                    fields,
                }),
                _ => None,
            },
            _ => None,
        }
    }
}

/// Graph walker - finds every mock of type `M` reachable from a subject and checks it.
///
/// Fields are visited depth-first in declaration order and the walk stops at the first mock
/// whose expectations are unmet.
pub struct GraphWalker<M> {
    params: WalkParams,
    visited: HashSet<(usize, TypeId)>,
    _mock: PhantomData<fn() -> M>,
}

impl<M: Mock> Default for GraphWalker<M> {
    fn default() -> Self {
        Self::new(WalkParams::default())
    }
}

impl<M: Mock> GraphWalker<M> {
    pub fn new(params: WalkParams) -> Self {
        Self {
            params,
            visited: HashSet::new(),
            _mock: PhantomData,
        }
    }

    pub fn params(&self) -> &WalkParams {
        &self.params
    }

    /// Verify every mock reachable from `root`.
    ///
    /// `root` must be a struct, or a pointer to one. Absence of mocks is not an error.
    pub fn verify(&mut self, root: &dyn Inspect) -> Result<(), VerifyError> {
        self.visited.clear();
        let subject = Subject::resolve(root).ok_or_else(|| VerifyError::InvalidSubject {
            type_name: root.type_name().to_string(),
        })?;
        tracing::debug!(subject = subject.value.type_name(), "verifying mock expectations");
        self.enter(subject, &FieldPath::root(), 0)
    }

    /// Entry shared by the root and by interface implementations, which are walked as
    /// nested roots under the path of the interface field.
    fn enter(
        &mut self,
        subject: Subject<'_>,
        path: &FieldPath,
        depth: usize,
    ) -> Result<(), VerifyError> {
        if !self.mark(subject.value) {
            tracing::trace!(field = %path, "subject already visited");
            return Ok(());
        }
        self.walk_fields(subject.fields, path, depth)
    }

    fn walk_fields(
        &mut self,
        fields: Vec<Field<'_>>,
        path: &FieldPath,
        depth: usize,
    ) -> Result<(), VerifyError> {
        if let Some(max_depth) = self.params.depth_limit()
            && depth > max_depth
        {
            return Err(VerifyError::DepthExceeded {
                path: path.clone(),
                max_depth,
            });
        }

        for field in fields {
            if !field.is_visible() {
                tracing::debug!(
                    field = field.name,
                    declared_type = field.declared_type,
                    "skipping unexported field"
                );
                continue;
            }

            let field_path = path.child(field.name);
            tracing::debug!(field = %field_path, declared_type = field.declared_type, "inspecting field");

            match field.value {
                FieldValue::Concrete(value) => self.visit_value(value, &field_path, depth)?,
                FieldValue::Interface(None) => {}
                FieldValue::Interface(Some(implementation)) => {
                    if let Some(subject) = Subject::resolve(implementation) {
                        tracing::debug!(
                            field = %field_path,
                            implementation = subject.value.type_name(),
                            "drilling into interface implementation"
                        );
                        self.enter(subject, &field_path, depth + 1)?;
                    }
                }
            }
        }
        Ok(())
    }

    fn visit_value(
        &mut self,
        value: &dyn Inspect,
        path: &FieldPath,
        depth: usize,
    ) -> Result<(), VerifyError> {
        let Some((resolved, shape)) = self.deref(value, path)? else {
            return Ok(());
        };

        if let Some(mock) = resolved.as_any().downcast_ref::<M>() {
            if !self.mark(resolved) {
                return Ok(());
            }
            tracing::debug!(field = %path, mock_type = resolved.type_name(), "found mock field");
            return verdict::check(mock, path);
        }

        match shape {
            Shape::Struct(fields) => {
                if !self.mark(resolved) {
                    tracing::trace!(field = %path, "struct already visited");
                    return Ok(());
                }
                self.walk_fields(fields, path, depth + 1)
            }
            _ => Ok(()),
        }
    }

    /// Follow pointers down to a non-pointer value. `None` means a null pointer somewhere
    /// along the chain.
    fn deref<'a>(
        &self,
        value: &'a dyn Inspect,
        path: &FieldPath,
    ) -> Result<Option<(&'a dyn Inspect, Shape<'a>)>, VerifyError> {
        let mut current = value;
        let mut hops = 0;
        loop {
            match current.shape() {
                Shape::Pointer(Some(pointee)) => {
                    hops += 1;
                    if let Some(max_depth) = self.params.depth_limit()
                        && hops > max_depth
                    {
                        return Err(VerifyError::DepthExceeded {
                            path: path.clone(),
                            max_depth,
                        });
                    }
                    current = pointee;
                }
                Shape::Pointer(None) => return Ok(None),
                shape => return Ok(Some((current, shape))),
            }
        }
    }

    /// Record `value` as visited. Returns false if it was already seen in this walk.
    fn mark(&mut self, value: &dyn Inspect) -> bool {
        if !self.params.detect_cycles {
            return true;
        }
        let address = std::ptr::from_ref(value).cast::<()>() as usize;
        self.visited.insert((address, value.as_any().type_id()))
    }
}
