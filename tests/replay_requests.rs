//! Integration tests for the request-replay flow.
//!
//! Replays the mock request collection end to end against handler sets,
//! covering ordered delivery, terminal errors, cancellation and teardown.

use coldstream::http::{handle_error, handle_request, request_mocks};
use coldstream::prelude::*;
use log::info;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

fn init_logger() {
  let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn replay_mocks_to_full_handler_set() {
  init_logger();
  let mocks = request_mocks();

  let seen = Rc::new(RefCell::new(Vec::new()));
  let completes = Rc::new(Cell::new(0));

  let requests = observable::from_iter(mocks.clone());
  let mut subscription = requests.subscribe(
    EventHandlers::new()
      .on_next({
        let seen = seen.clone();
        move |request: HttpRequest| {
          seen.borrow_mut().push(request.clone());
          handle_request(request)
        }
      })
      .on_complete({
        let completes = completes.clone();
        move || {
          info!("complete");
          completes.set(completes.get() + 1);
        }
      }),
  );

  assert_eq!(*seen.borrow(), mocks);
  assert_eq!(completes.get(), 1);
  assert!(subscription.is_closed());

  // The replay already finished inside subscribe; unsubscribing now only
  // runs the teardown action.
  subscription.unsubscribe();
  assert_eq!(seen.borrow().len(), mocks.len());
  assert_eq!(completes.get(), 1);
}

#[test]
fn failed_replay_reports_through_on_error() {
  init_logger();
  let mocks = request_mocks();

  let failing = failing_producer(mocks.clone());

  let handled = Rc::new(Cell::new(0));
  let errors = Rc::new(Cell::new(0));
  let completes = Rc::new(Cell::new(0));

  let subscription = failing.subscribe(
    EventHandlers::new()
      .on_next({
        let handled = handled.clone();
        move |request| {
          handled.set(handled.get() + 1);
          handle_request(request)
        }
      })
      .on_error({
        let errors = errors.clone();
        move |err: HttpError| {
          assert_eq!(err.message, "boom");
          errors.set(errors.get() + 1);
          handle_error(err)
        }
      })
      .on_complete({
        let completes = completes.clone();
        move || completes.set(completes.get() + 1)
      }),
  );

  assert_eq!(handled.get(), 1);
  assert_eq!(errors.get(), 1);
  // The error won the terminal race; the producer's complete was absorbed.
  assert_eq!(completes.get(), 0);
  assert!(subscription.is_closed());
}

#[test]
fn empty_handler_set_replay_is_a_quiet_success() {
  let subscription = observable::from_iter(request_mocks())
    .subscribe(EventHandlers::<_, _, ()>::default());
  assert!(subscription.is_closed());
}

#[test]
fn cancellation_stops_a_deferred_replay() {
  init_logger();
  let mocks = request_mocks();

  // A producer that hands its subscriber out for deferred driving, standing
  // in for an external trigger such as a timer.
  let slot: DeferredSlot = Rc::new(RefCell::new(None));
  let slot_in = slot.clone();
  let deferred = observable::create(move |subscriber| {
    *slot_in.borrow_mut() = Some(subscriber);
    noop_teardown()
  });

  let handled = Rc::new(Cell::new(0));
  let completes = Rc::new(Cell::new(0));
  let mut subscription = deferred.subscribe(
    EventHandlers::new()
      .on_next({
        let handled = handled.clone();
        move |request| {
          handled.set(handled.get() + 1);
          handle_request(request)
        }
      })
      .on_complete({
        let completes = completes.clone();
        move || completes.set(completes.get() + 1)
      }),
  );

  {
    let mut slot = slot.borrow_mut();
    let subscriber = slot.as_mut().unwrap();
    subscriber.next(mocks[0].clone());
  }
  assert_eq!(handled.get(), 1);

  subscription.unsubscribe();

  {
    let mut slot = slot.borrow_mut();
    let subscriber = slot.as_mut().unwrap();
    subscriber.next(mocks[1].clone());
    subscriber.complete();
  }
  assert_eq!(handled.get(), 1);
  assert_eq!(completes.get(), 0);
}

#[test]
fn guard_cancels_a_pending_replay_on_drop() {
  let pending = observable::never::<HttpRequest, HttpError, HttpResponse>();
  let subscription = pending.subscribe(EventHandlers::default());
  let probe = subscription.clone();

  {
    let _guard = subscription.unsubscribe_when_dropped();
    assert!(!probe.is_closed());
  }
  assert!(probe.is_closed());
}

type DeferredSlot =
  Rc<RefCell<Option<Subscriber<HttpRequest, HttpError, HttpResponse>>>>;

fn failing_producer(
  mocks: Vec<HttpRequest>,
) -> Observable<
  impl Fn(Subscriber<HttpRequest, HttpError, HttpResponse>) -> TeardownFn,
  HttpRequest,
  HttpError,
  HttpResponse,
> {
  observable::create(move |mut observer| {
    observer.next(mocks[0].clone());
    observer.error(HttpError::new("boom"));
    // Already terminated; this must be absorbed.
    observer.complete();
    noop_teardown()
  })
}
