use std::marker::PhantomData;

/// Value holder edited by a UI component.
///
/// Components bracket transient edits (dragging a slider, typing into a
/// field) with [`ephemeral_changes_begin`](Model::ephemeral_changes_begin) /
/// [`ephemeral_changes_end`](Model::ephemeral_changes_end), so an
/// implementation can record a single undo step for the whole gesture while
/// still seeing every intermediate value.
pub trait Model {
    type Value;

    fn value(&self) -> Self::Value;

    /// Sets the value. May be an intermediate change inside an ephemeral edit.
    fn set_value(&mut self, value: Self::Value);

    fn ephemeral_changes_begin(&mut self) {}

    fn ephemeral_changes_end(&mut self) {}
}

/// Model that stores nothing and always reports `T::default()`.
#[derive(Debug)]
pub struct EmptyModel<T>(PhantomData<T>);

impl<T> EmptyModel<T> {
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T> Default for EmptyModel<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Default> Model for EmptyModel<T> {
    type Value = T;

    fn value(&self) -> T {
        T::default()
    }

    fn set_value(&mut self, _value: T) {}
}

// ── ValueModel ────────────────────────────────────────────────────────────

/// Model storing a single value.
///
/// Tracks ephemeral edits: `committed()` holds the value from before the
/// outermost `ephemeral_changes_begin` until the matching end.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValueModel<T> {
    value: T,
    committed: T,
    ephemeral_depth: u32,
}

impl<T: Clone> ValueModel<T> {
    pub fn new(value: T) -> Self {
        Self { committed: value.clone(), value, ephemeral_depth: 0 }
    }

    /// `true` between `ephemeral_changes_begin` and the matching end.
    #[inline]
    pub fn is_ephemeral(&self) -> bool {
        self.ephemeral_depth > 0
    }

    /// Last value outside an ephemeral edit.
    #[inline]
    pub fn committed(&self) -> &T {
        &self.committed
    }
}

impl<T: Clone> Model for ValueModel<T> {
    type Value = T;

    fn value(&self) -> T {
        self.value.clone()
    }

    fn set_value(&mut self, value: T) {
        if !self.is_ephemeral() {
            self.committed = value.clone();
        }
        self.value = value;
    }

    fn ephemeral_changes_begin(&mut self) {
        self.ephemeral_depth += 1;
    }

    fn ephemeral_changes_end(&mut self) {
        match self.ephemeral_depth {
            0 => log::warn!("ephemeral_changes_end without matching begin"),
            1 => {
                self.ephemeral_depth = 0;
                self.committed = self.value.clone();
            }
            _ => self.ephemeral_depth -= 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_model_ignores_writes() {
        let mut m = EmptyModel::<i32>::new();
        m.set_value(5);
        assert_eq!(m.value(), 0);
    }

    #[test]
    fn plain_set_commits_immediately() {
        let mut m = ValueModel::new(1.0_f32);
        m.set_value(2.0);
        assert_eq!(m.value(), 2.0);
        assert_eq!(*m.committed(), 2.0);
    }

    #[test]
    fn ephemeral_edit_commits_at_end() {
        let mut m = ValueModel::new(String::from("a"));
        m.ephemeral_changes_begin();
        m.set_value("ab".into());
        m.set_value("abc".into());
        assert!(m.is_ephemeral());
        assert_eq!(m.committed(), "a");
        assert_eq!(m.value(), "abc");

        m.ephemeral_changes_end();
        assert!(!m.is_ephemeral());
        assert_eq!(m.committed(), "abc");
    }

    #[test]
    fn nested_ephemeral_edits_commit_at_outermost_end() {
        let mut m = ValueModel::new(0);
        m.ephemeral_changes_begin();
        m.ephemeral_changes_begin();
        m.set_value(3);
        m.ephemeral_changes_end();
        assert_eq!(*m.committed(), 0);
        m.ephemeral_changes_end();
        assert_eq!(*m.committed(), 3);
    }

    #[test]
    fn unbalanced_end_is_ignored() {
        let mut m = ValueModel::new(1);
        m.ephemeral_changes_end();
        assert!(!m.is_ephemeral());
        assert_eq!(m.value(), 1);
    }
}
