//! GUI module - User interface components

mod app;
mod chart_viewer;
mod coordinator;

pub use app::SculptorApp;
pub use chart_viewer::ChartViewer;
pub use coordinator::ViewCoordinator;
