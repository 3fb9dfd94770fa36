//! Mirror a one-dimensional FFT magnitude series, find the peaks above a
//! height threshold and plot them.
//!
//! [`pipeline::run`] is the headless entry point; [`app::run_window`] shows
//! the result in an egui window.

pub mod app;
pub mod color;
pub mod config;
pub mod data;
pub mod pipeline;
pub mod report;
pub mod state;
pub mod ui;
