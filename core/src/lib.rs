#![no_std]

//! State machine behind the discovery grid: a wrap-around board of hidden
//! facts, a cursor, and a detail view for whatever was last revealed.

extern crate alloc;

pub use cursor::*;
pub use engine::*;
pub use error::*;
pub use grid::*;
pub use input::*;
pub use item::*;
pub use types::*;

mod cursor;
mod engine;
mod error;
mod grid;
mod input;
mod item;
mod types;
