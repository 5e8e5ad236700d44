use crate::observer::EventHandlers;
use crate::subscriber::Subscriber;
use crate::subscription::{Subscription, TeardownFn};
use std::marker::PhantomData;

mod from;
pub use from::*;
mod trivial;
pub use trivial::*;

/// A representation of any set of values over any amount of time. This is
/// the most basic building block of the crate.
///
/// An Observable owns nothing but a producer strategy: a function that,
/// given a fresh [`Subscriber`], performs the emission and returns a
/// teardown action. The strategy is pure configuration: subscribing twice
/// runs it twice, on two independent Subscribers ("cold" semantics).
pub struct Observable<F, Item, Err, Ret = ()> {
  subscribe: F,
  _p: PhantomData<(Item, Err, Ret)>,
}

impl<F, Item, Err, Ret> Observable<F, Item, Err, Ret>
where
  F: Fn(Subscriber<Item, Err, Ret>) -> TeardownFn,
{
  /// param `subscribe`: the function that is called when the Observable is
  /// initially subscribed to. This function is given a Subscriber, to which
  /// new values can be `next`ed, or an `error` method can be called to
  /// raise an error, or `complete` can be called to notify of a successful
  /// completion. It returns the teardown action to run on cancellation.
  pub fn new(subscribe: F) -> Self {
    Self { subscribe, _p: PhantomData }
  }

  /// Runs the producer strategy against `handlers` and returns the handle
  /// that cancels this run.
  ///
  /// The strategy starts executing synchronously within this call; it may
  /// retain its Subscriber and keep emitting after `subscribe` returns. The
  /// teardown action is attached once the synchronous portion of the
  /// strategy is done, so a terminal event fired from inside the strategy
  /// does not run it; any later `unsubscribe` on the returned handle does.
  pub fn subscribe(
    &self,
    handlers: EventHandlers<Item, Err, Ret>,
  ) -> Subscription {
    let subscription = Subscription::default();
    let subscriber = Subscriber::new(handlers, subscription.clone());
    let teardown = (self.subscribe)(subscriber);
    subscription.attach(teardown);
    subscription
  }
}

/// Creates an observable from a producer strategy function.
///
/// # Examples
///
/// ```
/// use coldstream::prelude::*;
/// use std::{cell::Cell, rc::Rc};
///
/// let sum = Rc::new(Cell::new(0));
/// let s = sum.clone();
/// observable::create(|mut subscriber: Subscriber<i32, (), ()>| {
///   subscriber.next(1);
///   subscriber.next(2);
///   subscriber.complete();
///   noop_teardown()
/// })
/// .subscribe(EventHandlers::new().on_next(move |v| s.set(s.get() + v)));
///
/// assert_eq!(sum.get(), 3);
/// ```
pub fn create<F, Item, Err, Ret>(subscribe: F) -> Observable<F, Item, Err, Ret>
where
  F: Fn(Subscriber<Item, Err, Ret>) -> TeardownFn,
{
  Observable::new(subscribe)
}
