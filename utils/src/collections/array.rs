use std::cmp::Ordering;
use std::ops::{Bound, RangeBounds};
use std::sync::Arc;

use parking_lot::RwLock;


/// A growable array guarded by a reader/writer lock.<br/>
/// 読み書きロックで保護された可変長配列。
///
/// Readers run concurrently and mutations are exclusive. Clones share the same array.
/// Callbacks run while the lock is held, so they must not call back into the same array.<br/>
/// 読み取りは並行に、変更は排他的に実行されます。クローンは同じ配列を共有します。
/// コールバックはロック保持中に実行されるため、同じ配列を操作してはいけません。
#[derive(Debug)]
pub struct Array<E> {
  inner: Arc<RwLock<Vec<E>>>,
}

impl<E> Array<E> {
  pub fn new() -> Self {
    Self::from(Vec::new())
  }

  pub fn len(&self) -> usize {
    self.inner.read().len()
  }

  pub fn is_empty(&self) -> bool {
    self.inner.read().is_empty()
  }

  pub fn append(&self, element: E) {
    self.inner.write().push(element);
  }

  /// Returns a copy of the element at `index`.<br/>
  /// `index` の位置にある要素のコピーを返します。
  ///
  /// # Panics
  /// If `index` is out of bounds. / `index` が範囲外の場合。
  pub fn get(&self, index: usize) -> E
  where
    E: Clone, {
    self.inner.read()[index].clone()
  }

  /// Visits elements in order until `f` returns `false`.<br/>
  /// `f` が `false` を返すまで要素を順番に走査します。
  pub fn for_each<F>(&self, mut f: F)
  where
    F: FnMut(usize, &E) -> bool, {
    let items = self.inner.read();
    for (index, element) in items.iter().enumerate() {
      if !f(index, element) {
        break;
      }
    }
  }

  /// Returns the first element matching `f` along with its index.<br/>
  /// `f` に一致する最初の要素とそのインデックスを返します。
  pub fn find<F>(&self, mut f: F) -> Option<(usize, E)>
  where
    E: Clone,
    F: FnMut(usize, &E) -> bool, {
    let items = self.inner.read();
    items
      .iter()
      .enumerate()
      .find(|(index, element)| f(*index, *element))
      .map(|(index, element)| (index, element.clone()))
  }

  pub fn all<F>(&self, f: F) -> bool
  where
    F: FnMut(&E) -> bool, {
    self.inner.read().iter().all(f)
  }

  pub fn any<F>(&self, f: F) -> bool
  where
    F: FnMut(&E) -> bool, {
    self.inner.read().iter().any(f)
  }

  /// Sorts in place with `compare`. The sort is stable.<br/>
  /// `compare` で安定ソートします。
  pub fn sort_by<F>(&self, compare: F)
  where
    F: FnMut(&E, &E) -> Ordering, {
    self.inner.write().sort_by(compare);
  }

  /// Returns a new array holding a copy of `range`.<br/>
  /// `range` の範囲をコピーした新しい配列を返します。
  ///
  /// # Panics
  /// If the range is out of bounds or its start is after its end. / 範囲外、または開始が終了より後の場合。
  pub fn slice<R>(&self, range: R) -> Array<E>
  where
    E: Clone,
    R: RangeBounds<usize>, {
    let bounds: (Bound<usize>, Bound<usize>) = (range.start_bound().cloned(), range.end_bound().cloned());
    Array::from(self.inner.read()[bounds].to_vec())
  }

  pub fn map<R, F>(&self, f: F) -> Array<R>
  where
    F: FnMut(&E) -> R, {
    Array::from(self.inner.read().iter().map(f).collect::<Vec<_>>())
  }

  /// Folds elements from left to right.<br/>
  /// 要素を左から右へ畳み込みます。
  pub fn reduce<R, F>(&self, init: R, f: F) -> R
  where
    F: FnMut(R, &E) -> R, {
    self.inner.read().iter().fold(init, f)
  }

  pub fn to_vec(&self) -> Vec<E>
  where
    E: Clone, {
    self.inner.read().to_vec()
  }
}

impl<E> Default for Array<E> {
  fn default() -> Self {
    Self::new()
  }
}

impl<E> Clone for Array<E> {
  fn clone(&self) -> Self {
    Self {
      inner: self.inner.clone(),
    }
  }
}

impl<E> From<Vec<E>> for Array<E> {
  fn from(items: Vec<E>) -> Self {
    Self {
      inner: Arc::new(RwLock::new(items)),
    }
  }
}

impl<E> FromIterator<E> for Array<E> {
  fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
    Self::from(iter.into_iter().collect::<Vec<_>>())
  }
}
