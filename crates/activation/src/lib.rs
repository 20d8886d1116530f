//! Deferred component activation.
//!
//! Components register work with an [`ActivationGate`] as soon as they are ready;
//! the work runs only after the host calls [`ActivationGate::trigger_activation`].
//! Activation failures are isolated per registration and reported to an
//! [`ActivationSink`].

mod activatable;
mod component;
mod error;
mod gate;
mod latch;
mod sink;

pub use activatable::Activatable;
pub use component::DeferredComponent;
pub use error::ActivationError;
pub use gate::ActivationGate;
pub use latch::Latch;
pub use sink::{ActivationSink, LogSink};
