use std::collections::VecDeque;
use std::fmt::{self, Debug, Formatter};
use std::iter::FusedIterator;
use std::sync::Arc;

use parking_lot::{Condvar, Mutex};
use thiserror::Error;


/// An error that occurs when an element is offered to a stopped queue.<br/>
/// 停止済みのキューに要素を追加しようとした場合に発生するエラー。
///
/// The rejected element is handed back untouched.<br/>
/// 拒否された要素はそのまま呼び出し元に返されます。
#[derive(Error, Clone, PartialEq, Eq)]
#[error("queue has been stopped")]
pub struct StoppedError<E>(pub E);

impl<E> StoppedError<E> {
  /// Returns the element that was rejected.<br/>
  /// 拒否された要素を返します。
  pub fn into_inner(self) -> E {
    self.0
  }
}

impl<E> Debug for StoppedError<E> {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    f.debug_struct("StoppedError").finish_non_exhaustive()
  }
}

#[derive(Debug)]
struct QueueState<E> {
  items: VecDeque<E>,
  stopped: bool,
}

#[derive(Debug)]
struct Inner<E> {
  state: Mutex<QueueState<E>>,
  not_empty: Condvar,
}

/// An unbounded FIFO queue whose consumers block while it is empty.<br/>
/// 空の間はコンシューマをブロックする、容量制限のない FIFO キュー。
///
/// Clones share the same queue. A single mutex guards both the elements and the stop flag,
/// and the condition variable waits on that same mutex.<br/>
/// クローンは同じキューを共有します。要素と停止フラグは単一のミューテックスで保護され、
/// 条件変数も同じミューテックス上で待機します。
///
/// After [`BlockingQueue::stop`], new elements are refused, but elements that were already
/// queued are still handed out in order until the queue is drained.<br/>
/// [`BlockingQueue::stop`] の後は新しい要素を受け付けませんが、既に積まれている要素は
/// キューが空になるまで順番に取り出せます。
pub struct BlockingQueue<E> {
  inner: Arc<Inner<E>>,
}

impl<E> BlockingQueue<E> {
  pub fn new() -> Self {
    Self {
      inner: Arc::new(Inner {
        state: Mutex::new(QueueState {
          items: VecDeque::new(),
          stopped: false,
        }),
        not_empty: Condvar::new(),
      }),
    }
  }

  /// Returns the number of queued elements.<br/>
  /// キューに積まれている要素数を返します。
  pub fn len(&self) -> usize {
    self.inner.state.lock().items.len()
  }

  pub fn is_empty(&self) -> bool {
    self.inner.state.lock().items.is_empty()
  }

  pub fn is_stopped(&self) -> bool {
    self.inner.state.lock().stopped
  }

  /// Appends the element to the tail and wakes one waiting consumer.<br/>
  /// 要素を末尾に追加し、待機中のコンシューマを一つ起こします。
  ///
  /// # Return Value / 戻り値
  /// - `Ok(())` - If the element is queued. / 要素が追加された場合。
  /// - `Err(StoppedError(element))` - If the queue has been stopped. / キューが停止済みの場合。
  pub fn enqueue(&self, element: E) -> Result<(), StoppedError<E>> {
    let mut state = self.inner.state.lock();
    if state.stopped {
      return Err(StoppedError(element));
    }
    state.items.push_back(element);
    self.inner.not_empty.notify_one();
    Ok(())
  }

  /// Enqueues the elements in iteration order.<br/>
  /// 要素をイテレーション順に追加します。
  ///
  /// Stops at the first rejected element. Elements queued before it stay queued, and elements
  /// after it are dropped.<br/>
  /// 最初に拒否された要素で中断します。それ以前の要素はキューに残り、以降の要素は破棄されます。
  pub fn enqueue_all<I>(&self, elements: I) -> Result<(), StoppedError<E>>
  where
    I: IntoIterator<Item = E>, {
    for element in elements {
      self.enqueue(element)?;
    }
    Ok(())
  }

  /// Removes the head, waiting until one is available.<br/>
  /// 先頭要素を取り出します。必要に応じて、要素が利用可能になるまで待機します。
  ///
  /// # Return Value / 戻り値
  /// - `Some(element)` - The head of the queue. / キューの先頭要素。
  /// - `None` - If the queue is stopped and drained. / キューが停止済みで空の場合。
  pub fn dequeue(&self) -> Option<E> {
    let mut state = self.inner.state.lock();
    loop {
      if let Some(element) = state.items.pop_front() {
        return Some(element);
      }
      if state.stopped {
        return None;
      }
      self.inner.not_empty.wait(&mut state);
    }
  }

  /// Removes the head without waiting. Returns `None` if the queue is empty.<br/>
  /// 待機せずに先頭要素を取り出します。キューが空の場合は `None` を返します。
  pub fn try_dequeue(&self) -> Option<E> {
    self.inner.state.lock().items.pop_front()
  }

  /// Hands every dequeued element to `handler` until the queue is stopped and drained.<br/>
  /// キューが停止して空になるまで、取り出した要素を `handler` に渡します。
  ///
  /// The first error returned by `handler` is returned as is, and no further elements are taken.<br/>
  /// `handler` が最初に返したエラーをそのまま返し、以降の要素は取り出しません。
  pub fn consume<F, Err>(&self, mut handler: F) -> Result<(), Err>
  where
    F: FnMut(E) -> Result<(), Err>, {
    while let Some(element) = self.dequeue() {
      handler(element)?;
    }
    tracing::trace!("BlockingQueue::consume: drained");
    Ok(())
  }

  /// Stops the queue and wakes every waiting consumer. Calling it again has no further effect.<br/>
  /// キューを停止し、待機中の全てのコンシューマを起こします。二回目以降の呼び出しは何もしません。
  pub fn stop(&self) {
    let mut state = self.inner.state.lock();
    if !state.stopped {
      state.stopped = true;
      tracing::debug!("BlockingQueue::stop: remaining={}", state.items.len());
    }
    self.inner.not_empty.notify_all();
  }

  /// Returns a blocking iterator over dequeued elements.<br/>
  /// 要素を取り出すブロッキングイテレータを返します。
  pub fn iter(&self) -> Dequeue<'_, E> {
    Dequeue { queue: self }
  }
}

impl<E> Default for BlockingQueue<E> {
  fn default() -> Self {
    Self::new()
  }
}

impl<E> Clone for BlockingQueue<E> {
  fn clone(&self) -> Self {
    Self {
      inner: self.inner.clone(),
    }
  }
}

impl<E> Debug for BlockingQueue<E> {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    let state = self.inner.state.lock();
    f.debug_struct("BlockingQueue")
      .field("len", &state.items.len())
      .field("stopped", &state.stopped)
      .finish()
  }
}

impl<'a, E> IntoIterator for &'a BlockingQueue<E> {
  type IntoIter = Dequeue<'a, E>;
  type Item = E;

  fn into_iter(self) -> Self::IntoIter {
    self.iter()
  }
}

/// Blocking iterator returned by [`BlockingQueue::iter`].
///
/// Ends once the queue is stopped and drained. A stopped queue never accepts new elements,
/// so the iterator is fused.
#[derive(Debug)]
pub struct Dequeue<'a, E> {
  queue: &'a BlockingQueue<E>,
}

impl<E> Iterator for Dequeue<'_, E> {
  type Item = E;

  fn next(&mut self) -> Option<Self::Item> {
    self.queue.dequeue()
  }
}

impl<E> FusedIterator for Dequeue<'_, E> {}
