//! Simulation core for two small terminal games.
//!
//! * [`rpg`]: a turn-based elemental battle simulator.
//! * [`shooter`]: a real-time top-down arcade shooter.
//!
//! Both games keep their logic pure: public update functions take the
//! current state by reference and hand back a new one, with randomness
//! injected by the caller. Terminal I/O lives in the binaries.

pub mod config;
pub mod error;
pub mod rpg;
pub mod shooter;
