//! Histogram Sculptor
//!
//! Interactive editing of a sample through its histogram. Dragging a bar
//! sets its height, the sample is rebuilt with every point at a bin
//! midpoint, and a normal QQ plot of the rebuilt sample is recomputed.

pub mod charts;
pub mod config;
pub mod data;
pub mod gui;
pub mod stats;
