//! Read access to container elements

use crate::structure::{self, Structure};
use crate::Result;

/// Element reads by reference or linear index
///
/// `get_at` is the primitive; `get` translates the linear index with
/// [`structure::reference`]. Containers with flat storage usually override
/// `get` with a direct lookup.
pub trait Access<N>: Structure {
    /// Read the element at `reference`
    fn get_at(&self, reference: &[usize]) -> Result<N>;

    /// Read the element at linear `index`
    fn get(&self, index: usize) -> Result<N> {
        let reference = structure::reference(index, self.shape())?;
        self.get_at(&reference)
    }
}
