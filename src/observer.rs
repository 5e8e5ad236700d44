//! Observer trait and the optional-capability handler set.
//!
//! The Observer is the consumer side of the push protocol. It receives
//! values via `next`, at most one terminal `error` or `complete`, and
//! nothing after that.

/// Observer trait: the consumer of data in the push protocol.
///
/// All methods take `&mut self`: terminal calls must stay callable so that a
/// second `error` or `complete` can be absorbed as a no-op instead of being
/// rejected by the type system.
pub trait Observer<Item, Err> {
  /// Receive the next value from the observable.
  fn next(&mut self, value: Item);

  /// Receive a terminal error. No events are delivered afterwards.
  fn error(&mut self, err: Err);

  /// Receive the completion notification. No events are delivered
  /// afterwards.
  fn complete(&mut self);
}

/// The handler set a consumer subscribes with.
///
/// Every member is optional: an absent handler means the corresponding event
/// is silently skipped, never an error. `Ret` is whatever the `next` and
/// `error` handlers choose to return; the dispatcher discards it.
///
/// # Examples
///
/// ```
/// use coldstream::prelude::*;
///
/// let handlers: EventHandlers<i32, (), ()> = EventHandlers::new()
///   .on_next(|v| println!("{},", v))
///   .on_complete(|| println!("done"));
/// ```
pub struct EventHandlers<Item, Err, Ret = ()> {
  pub(crate) next: Option<Box<dyn FnMut(Item) -> Ret>>,
  pub(crate) error: Option<Box<dyn FnMut(Err) -> Ret>>,
  pub(crate) complete: Option<Box<dyn FnMut()>>,
}

impl<Item, Err, Ret> Default for EventHandlers<Item, Err, Ret> {
  fn default() -> Self {
    EventHandlers { next: None, error: None, complete: None }
  }
}

impl<Item, Err, Ret> EventHandlers<Item, Err, Ret> {
  /// An empty handler set; every event is skipped.
  #[inline]
  pub fn new() -> Self { Self::default() }

  /// Registers the value handler.
  pub fn on_next(mut self, next: impl FnMut(Item) -> Ret + 'static) -> Self {
    self.next = Some(Box::new(next));
    self
  }

  /// Registers the terminal error handler.
  pub fn on_error(mut self, error: impl FnMut(Err) -> Ret + 'static) -> Self {
    self.error = Some(Box::new(error));
    self
  }

  /// Registers the completion handler.
  pub fn on_complete(mut self, complete: impl FnMut() + 'static) -> Self {
    self.complete = Some(Box::new(complete));
    self
  }
}
