//! Prelude module for convenient imports
//!
//! This module re-exports commonly used types and traits for easy access.

// Creation/Factories
pub use crate::observable;
pub use crate::observable::{
  create, empty, from_iter, never, of, repeat, throw, Observable,
};
// Observer trait and handler set
pub use crate::observer::{EventHandlers, Observer};
// The per-subscription dispatcher
pub use crate::subscriber::Subscriber;
// Subscription
pub use crate::subscription::{
  noop_teardown, Subscription, SubscriptionGuard, SubscriptionLike, TeardownFn,
};
// Boundary payload types
pub use crate::http::{
  HttpError, HttpMethod, HttpRequest, HttpResponse, HttpStatus, User,
};
