//! # coldstream: a minimal cold Observable primitive
//!
//! A lightweight building block for push-driven pipelines: a producer
//! ([`Observable`]) that, on subscription, delivers a sequence of values,
//! an optional terminal error, or a completion signal to a consumer's
//! handler set, with an explicit cancellation handle ([`Subscription`]).
//!
//! ## Quick Start
//!
//! ```rust
//! use coldstream::prelude::*;
//! use std::{cell::Cell, rc::Rc};
//!
//! let sum = Rc::new(Cell::new(0));
//! let s = sum.clone();
//!
//! observable::from_iter(1..=3)
//!   .subscribe(EventHandlers::new().on_next(move |v| s.set(s.get() + v)));
//!
//! assert_eq!(sum.get(), 6);
//! ```
//!
//! ## Key Concepts
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Observable`] | An immutable producer configuration; runs its strategy once per subscription |
//! | [`EventHandlers`] | The consumer's handler set; every member optional |
//! | [`Subscriber`] | The per-subscription dispatcher enforcing terminal-state idempotency |
//! | [`Subscription`] | Handle to cancel an active subscription |
//!
//! Observables here are **cold**: each `subscribe` call runs the producer
//! strategy on a fresh [`Subscriber`], sharing no state with other
//! subscriptions. There are no operators, no multicasting and no built-in
//! scheduling; producers that emit later do so from their own external
//! triggers, and the dispatch contract holds identically for those late
//! calls.
//!
//! [`Observable`]: observable::Observable
//! [`EventHandlers`]: observer::EventHandlers
//! [`Subscriber`]: subscriber::Subscriber
//! [`Subscription`]: subscription::Subscription

pub mod http;
pub mod observable;
pub mod observer;
pub mod prelude;
pub mod subscriber;
pub mod subscription;

// Re-export the prelude module
pub use prelude::*;
