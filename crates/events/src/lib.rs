//! Lightweight pub/sub mechanics for observability events.
//!
//! The catalog emits side-channel notifications (low-stock alerts) without
//! knowing who listens. This crate provides the distribution mechanics: an
//! [`Event`] trait for the payloads and an [`EventBus`] with an in-memory
//! implementation for fan-out.

pub mod bus;
pub mod event;
pub mod in_memory_bus;

pub use bus::{EventBus, Subscription};
pub use event::Event;
pub use in_memory_bus::{InMemoryBusError, InMemoryEventBus};
