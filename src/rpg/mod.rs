//! Turn-based elemental battle simulator.
//!
//! A run starts with [`encounter::start_game`]; the front-end then feeds
//! [`turn::Action`]s through [`turn::apply`] until the hero falls.

pub mod catalog;
pub mod combat;
pub mod element;
pub mod encounter;
pub mod entities;
pub mod save;
pub mod shop;
pub mod turn;

pub use catalog::{Catalog, ClassKind, EnemyKind};
pub use combat::AttackKind;
pub use element::Element;
pub use entities::{Enemy, GameState, Item, Player, RpgState};
pub use turn::Action;
