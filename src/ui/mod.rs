pub mod detail_panel;
pub mod dialogs;
pub mod interaction;
pub mod network_canvas;
pub mod renderer;
pub mod style;
pub mod theme;
pub mod toolbar;
