//! Services layered over the engine.

pub mod services;
