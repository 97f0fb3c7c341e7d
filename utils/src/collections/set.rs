use std::fmt::{self, Debug, Formatter};
use std::hash::Hash;

use crate::collections::Map;


/// A concurrent set of unique elements backed by [`Map`].<br/>
/// [`Map`] を基にした、重複のない要素の並行セット。
pub struct Set<E> {
  inner: Map<E, ()>,
}

impl<E: Eq + Hash> Set<E> {
  pub fn new() -> Self {
    Self { inner: Map::new() }
  }

  pub fn len(&self) -> usize {
    self.inner.len()
  }

  pub fn is_empty(&self) -> bool {
    self.inner.is_empty()
  }

  pub fn add(&self, element: E) {
    self.inner.store(element, ());
  }

  pub fn has(&self, element: &E) -> bool {
    self.inner.load(element).is_some()
  }

  pub fn delete(&self, element: &E) {
    self.inner.delete(element);
  }

  /// Visits elements in no particular order until `f` returns `false`.<br/>
  /// `f` が `false` を返すまで、順序を問わず要素を走査します。
  pub fn range<F>(&self, mut f: F)
  where
    F: FnMut(&E) -> bool, {
    self.inner.range(|element, _| f(element));
  }
}

impl<E: Eq + Hash> Default for Set<E> {
  fn default() -> Self {
    Self::new()
  }
}

impl<E> Clone for Set<E> {
  fn clone(&self) -> Self {
    Self {
      inner: self.inner.clone(),
    }
  }
}

impl<E: Eq + Hash> Debug for Set<E> {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    f.debug_struct("Set").field("len", &self.len()).finish()
  }
}
