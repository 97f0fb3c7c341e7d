use std::fmt::{self, Debug, Formatter};
use std::hash::Hash;
use std::sync::Arc;

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;


/// A concurrent map with per-entry atomic operations.<br/>
/// エントリ単位でアトミックな操作を提供する並行マップ。
///
/// Clones share the same map.<br/>
/// クローンは同じマップを共有します。
pub struct Map<K, V> {
  inner: Arc<DashMap<K, V>>,
}

impl<K: Eq + Hash, V> Map<K, V> {
  pub fn new() -> Self {
    Self {
      inner: Arc::new(DashMap::new()),
    }
  }

  pub fn len(&self) -> usize {
    self.inner.len()
  }

  pub fn is_empty(&self) -> bool {
    self.inner.is_empty()
  }

  pub fn store(&self, key: K, value: V) {
    self.inner.insert(key, value);
  }

  pub fn load(&self, key: &K) -> Option<V>
  where
    V: Clone, {
    self.inner.get(key).map(|entry| entry.value().clone())
  }

  pub fn delete(&self, key: &K) {
    self.inner.remove(key);
  }

  /// Removes the entry and returns its value.<br/>
  /// エントリを削除し、その値を返します。
  pub fn load_and_delete(&self, key: &K) -> Option<V> {
    self.inner.remove(key).map(|(_, value)| value)
  }

  /// Returns the existing value for `key`, or stores `value` if there is none.<br/>
  /// `key` に既存の値があればそれを返し、なければ `value` を格納します。
  ///
  /// # Return Value / 戻り値
  /// - `(existing, true)` - If the key was present. / キーが存在した場合。
  /// - `(value, false)` - If `value` was stored. / `value` が格納された場合。
  pub fn load_or_store(&self, key: K, value: V) -> (V, bool)
  where
    V: Clone, {
    match self.inner.entry(key) {
      Entry::Occupied(entry) => (entry.get().clone(), true),
      Entry::Vacant(entry) => (entry.insert(value).clone(), false),
    }
  }

  /// Visits entries in no particular order until `f` returns `false`.<br/>
  /// `f` が `false` を返すまで、順序を問わずエントリを走査します。
  ///
  /// Shard locks are held while `f` runs, so `f` must not modify this map.<br/>
  /// `f` の実行中はシャードのロックが保持されるため、`f` からこのマップを変更してはいけません。
  pub fn range<F>(&self, mut f: F)
  where
    F: FnMut(&K, &V) -> bool, {
    for entry in self.inner.iter() {
      if !f(entry.key(), entry.value()) {
        break;
      }
    }
  }
}

impl<K: Eq + Hash, V> Default for Map<K, V> {
  fn default() -> Self {
    Self::new()
  }
}

impl<K, V> Clone for Map<K, V> {
  fn clone(&self) -> Self {
    Self {
      inner: self.inner.clone(),
    }
  }
}

impl<K: Eq + Hash, V> Debug for Map<K, V> {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    f.debug_struct("Map").field("len", &self.len()).finish()
  }
}
