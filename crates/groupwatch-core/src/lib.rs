//! # Groupwatch Core Library
//!
//! This library answers one question: is a group's most recent event
//! currently active, under review, or done? The answer is recomputed on
//! every query from the event's end time, its review window, and the
//! current instant -- never cached.
//!
//! ## Architecture
//!
//! - **Checker**: fetches the last event through the [`LastEventLookup`]
//!   contract and classifies it against "now"
//! - **Classification**: a pure function -- Active until the end time has
//!   passed (inclusive), InReview until the review deadline has passed
//!   (inclusive), Done afterwards or when no event exists
//! - **Clock**: injected time source so tests can freeze "now"
//!
//! ## Key Components
//!
//! - [`EventStatusChecker`]: orchestrates lookup and classification
//! - [`LastEventLookup`]: async data-access contract for the last event
//! - [`InMemoryEventStore`]: map-backed lookup implementation
//! - [`EventStatus`]: Active / InReview / Done

pub mod checker;
pub mod clock;
pub mod error;
pub mod event;
pub mod lookup;


pub use checker::EventStatusChecker;
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{LookupError, Result};
pub use event::{classify, EventStatus, LastEvent};
pub use lookup::{InMemoryEventStore, LastEventLookup};
