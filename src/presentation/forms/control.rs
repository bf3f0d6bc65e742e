// src/presentation/forms/control.rs

/// A single editable form value that can never be absent.
///
/// The control remembers the value it was created with; [`FormControl::reset`]
/// restores that value instead of clearing to nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormControl<T> {
    default: T,
    value: T,
    dirty: bool,
}

impl<T: Clone> FormControl<T> {
    pub fn new(default: T) -> Self {
        Self {
            value: default.clone(),
            default,
            dirty: false,
        }
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn set_value(&mut self, value: T) {
        self.value = value;
        self.dirty = true;
    }

    pub fn reset(&mut self) {
        self.value = self.default.clone();
        self.dirty = false;
    }

    /// True once the value has been set since construction or the last reset.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }
}

impl<T: Clone + Default> Default for FormControl<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}
