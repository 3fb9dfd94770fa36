//! egui widgets: the top bar, the settings/peak side panel and the series plot.

pub mod panels;
pub mod plot;
