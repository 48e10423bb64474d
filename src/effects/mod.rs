//! Pure state machines behind the page's animated effects. Nothing here
//! touches the DOM; the frontend advances them from timers, animation
//! frames and event listeners.

pub mod code_typer;
pub mod counter;
pub mod cursor;
pub mod particles;
pub mod scroll;
pub mod selector;
pub mod typewriter;
