//! Interactive activity-on-node network diagrams for CPM/PERT projects.

pub mod app;
pub mod cli;
pub mod config;
pub mod io;
pub mod logging;
pub mod model;
pub mod network;
pub mod ui;
