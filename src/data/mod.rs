//! Data module - Sample ownership and histogram editing

mod editor;
mod sample;

pub use editor::{DragState, HistogramEditor, PointerEvent, PointerPosition};
pub use sample::{SampleError, SampleModel};
