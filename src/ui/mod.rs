/// Terminal front-end: board rendering and input mapping
pub mod board;
pub mod input;

pub use board::{BoardLayout, BoardRenderer};
pub use input::map_event;
