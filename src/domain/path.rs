use std::fmt;

/// Dotted location of a field inside a subject, e.g. `Inner.Service.Mock`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FieldPath {
    segments: Vec<&'static str>,
}

impl FieldPath {
    pub fn root() -> Self {
        Self::default()
    }

    /// New path with `name` appended; `self` is left untouched.
    pub fn child(&self, name: &'static str) -> Self {
        let mut segments = Vec::with_capacity(self.segments.len() + 1);
        segments.extend_from_slice(&self.segments);
        segments.push(name);
        Self { segments }
    }

    pub fn segments(&self) -> &[&'static str] {
        &self.segments
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn depth(&self) -> usize {
        self.segments.len()
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            return f.write_str("<root>");
        }
        f.write_str(&self.segments.join("."))
    }
}

impl<'a> FromIterator<&'a &'static str> for FieldPath {
    fn from_iter<I: IntoIterator<Item = &'a &'static str>>(iter: I) -> Self {
        Self {
            segments: iter.into_iter().copied().collect(),
        }
    }
}
