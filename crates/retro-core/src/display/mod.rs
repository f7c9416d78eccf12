pub mod annotate;
pub mod sink;

pub use annotate::{annotate_frame, AnnotatedFrame, Label, Marker};
pub use sink::{CollectingSink, FrameSink, ImageDirSink};
