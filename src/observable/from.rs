use crate::observable::{create, Observable};
use crate::observer::Observer;
use crate::subscriber::Subscriber;
use crate::subscription::{SubscriptionLike, TeardownFn};
use log::debug;
use std::convert::Infallible;

/// Creates an observable that produces values from an iterator.
///
/// Emits every element in the iterator's order, then completes. Never emits
/// an error. The whole emission runs synchronously inside `subscribe`.
///
/// # Arguments
///
/// * `iter` - An iterator to get all the values from.
///
/// # Examples
///
/// A simple example for a range:
///
/// ```
/// use coldstream::prelude::*;
///
/// observable::from_iter(0..10)
///   .subscribe(EventHandlers::new().on_next(|v| println!("{},", v)));
/// ```
///
/// Or with a vector:
///
/// ```
/// use coldstream::prelude::*;
///
/// observable::from_iter(vec![0, 1, 2, 3])
///   .subscribe(EventHandlers::new().on_next(|v| println!("{},", v)));
/// ```
pub fn from_iter<Iter, Ret>(
  iter: Iter,
) -> Observable<
  impl Fn(Subscriber<Iter::Item, Infallible, Ret>) -> TeardownFn,
  Iter::Item,
  Infallible,
  Ret,
>
where
  Iter: IntoIterator + Clone,
{
  create(move |mut subscriber| {
    for v in iter.clone() {
      if subscriber.is_closed() {
        break;
      }
      subscriber.next(v);
    }
    if !subscriber.is_closed() {
      subscriber.complete();
    }
    let teardown: TeardownFn = Box::new(|| debug!("unsubscribed"));
    teardown
  })
}

/// Creates an observable producing a single value.
///
/// Completes immediately after emitting the value given. Never emits an
/// error.
///
/// # Arguments
///
/// * `v` - A value to emit.
///
/// # Examples
///
/// ```
/// use coldstream::prelude::*;
///
/// observable::of(123)
///   .subscribe(EventHandlers::new().on_next(|v| println!("{},", v)));
/// ```
pub fn of<Item, Ret>(
  v: Item,
) -> Observable<
  impl Fn(Subscriber<Item, Infallible, Ret>) -> TeardownFn,
  Item,
  Infallible,
  Ret,
>
where
  Item: Clone,
{
  from_iter(std::iter::once(v))
}

/// Creates an observable producing the same value repeated N times.
///
/// Completes immediately after emitting N values. Never emits an error.
///
/// # Arguments
///
/// * `v` - A value to emit.
/// * `n` - A number of times to repeat it.
pub fn repeat<Item, Ret>(
  v: Item,
  n: usize,
) -> Observable<
  impl Fn(Subscriber<Item, Infallible, Ret>) -> TeardownFn,
  Item,
  Infallible,
  Ret,
>
where
  Item: Clone,
{
  from_iter(std::iter::repeat(v).take(n))
}
