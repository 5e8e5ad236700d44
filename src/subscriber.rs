//! The per-subscription dispatcher.

use crate::observer::{EventHandlers, Observer};
use crate::subscription::{Subscription, SubscriptionLike};

/// Implements the Observer trait and the SubscriptionLike trait. While the
/// handler set is the public API for consuming the values of an Observable,
/// every `subscribe` call wraps it in a Subscriber, which enforces the
/// event-order contract:
///
/// - values are dispatched in emission order, only while active;
/// - the first terminal event (`error` or `complete`) wins, closes the
///   subscription and runs the teardown path;
/// - after termination or cancellation every event is a silent no-op.
///
/// A producer strategy receives the Subscriber by value and may retain it to
/// emit later from an external trigger; the shared `Subscription` state keeps
/// cancellation visible across that gap.
pub struct Subscriber<Item, Err, Ret = ()> {
  handlers: EventHandlers<Item, Err, Ret>,
  subscription: Subscription,
}

impl<Item, Err, Ret> Subscriber<Item, Err, Ret> {
  pub(crate) fn new(
    handlers: EventHandlers<Item, Err, Ret>,
    subscription: Subscription,
  ) -> Self {
    Subscriber { handlers, subscription }
  }
}

impl<Item, Err, Ret> Observer<Item, Err> for Subscriber<Item, Err, Ret> {
  fn next(&mut self, value: Item) {
    if self.subscription.is_closed() {
      return;
    }
    if let Some(next) = self.handlers.next.as_mut() {
      next(value);
    }
  }

  fn error(&mut self, err: Err) {
    if self.subscription.is_closed() {
      return;
    }
    if let Some(error) = self.handlers.error.as_mut() {
      error(err);
    }
    // An error terminates the subscription even without a registered
    // handler.
    self.subscription.unsubscribe();
  }

  fn complete(&mut self) {
    if self.subscription.is_closed() {
      return;
    }
    if let Some(complete) = self.handlers.complete.as_mut() {
      complete();
    }
    self.subscription.unsubscribe();
  }
}

impl<Item, Err, Ret> SubscriptionLike for Subscriber<Item, Err, Ret> {
  #[inline]
  fn unsubscribe(&mut self) { self.subscription.unsubscribe() }

  #[inline]
  fn is_closed(&self) -> bool { self.subscription.is_closed() }
}
