use crate::observable::{create, Observable};
use crate::observer::Observer;
use crate::subscriber::Subscriber;
use crate::subscription::{noop_teardown, TeardownFn};
use std::convert::Infallible;

/// Creates an observable that produces no values.
///
/// Completes immediately. Never emits an error.
///
/// # Examples
///
/// ```
/// use coldstream::prelude::*;
///
/// observable::empty::<i32, ()>()
///   .subscribe(EventHandlers::new().on_next(|v| println!("{},", v)));
///
/// // Result: nothing printed
/// ```
pub fn empty<Item, Ret>() -> Observable<
  impl Fn(Subscriber<Item, Infallible, Ret>) -> TeardownFn,
  Item,
  Infallible,
  Ret,
> {
  create(|mut subscriber| {
    subscriber.complete();
    noop_teardown()
  })
}

/// Creates an observable that never emits anything.
///
/// Neither emits a value, nor completes, nor emits an error. The only way
/// such a subscription ends is an explicit `unsubscribe`.
pub fn never<Item, Err, Ret>() -> Observable<
  impl Fn(Subscriber<Item, Err, Ret>) -> TeardownFn,
  Item,
  Err,
  Ret,
> {
  create(|_| noop_teardown())
}

/// Creates an observable that emits no items, just terminates with an error.
///
/// # Arguments
///
/// * `e` - An error to emit and terminate with
pub fn throw<Err, Ret>(
  e: Err,
) -> Observable<
  impl Fn(Subscriber<(), Err, Ret>) -> TeardownFn,
  (),
  Err,
  Ret,
>
where
  Err: Clone,
{
  create(move |mut subscriber| {
    subscriber.error(e.clone());
    noop_teardown()
  })
}

#[cfg(test)]
mod test {
  use crate::prelude::*;
  use std::cell::Cell;
  use std::rc::Rc;

  #[test]
  fn empty_completes_without_values() {
    let hits = Rc::new(Cell::new(0));
    let completes = Rc::new(Cell::new(0));
    let h = hits.clone();
    let c = completes.clone();

    let subscription = observable::empty::<i32, ()>().subscribe(
      EventHandlers::new()
        .on_next(move |_| h.set(h.get() + 1))
        .on_complete(move || c.set(c.get() + 1)),
    );

    assert_eq!(hits.get(), 0);
    assert_eq!(completes.get(), 1);
    assert!(subscription.is_closed());
  }

  #[test]
  fn never_stays_open() {
    let subscription = observable::never::<i32, (), ()>()
      .subscribe(EventHandlers::default());
    assert!(!subscription.is_closed());
  }

  #[test]
  fn throw_delivers_the_error_once() {
    let errors = Rc::new(Cell::new(0));
    let completes = Rc::new(Cell::new(0));
    let e = errors.clone();
    let c = completes.clone();

    let subscription = observable::throw("boom").subscribe(
      EventHandlers::new()
        .on_error(move |err| {
          assert_eq!(err, "boom");
          e.set(e.get() + 1)
        })
        .on_complete(move || c.set(c.get() + 1)),
    );

    assert_eq!(errors.get(), 1);
    assert_eq!(completes.get(), 0);
    assert!(subscription.is_closed());
  }

  #[test]
  fn throw_terminates_without_error_handler() {
    let subscription =
      observable::throw::<_, ()>("boom").subscribe(EventHandlers::default());
    assert!(subscription.is_closed());
  }
}
