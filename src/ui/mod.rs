//! Terminal UI: the input event loop and stage-dependent rendering, from
//! color choice through play to the replay prompt.

mod app;
mod game_view;

pub use app::App;
