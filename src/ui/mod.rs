pub mod app;
pub mod dropdown;
pub mod events;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod picker;
pub mod rates;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;
