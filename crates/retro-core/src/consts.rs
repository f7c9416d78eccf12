/// Default expected frame width in pixels.
pub const DEFAULT_FRAME_WIDTH: i32 = 640;

/// Default expected frame height in pixels.
pub const DEFAULT_FRAME_HEIGHT: i32 = 480;

/// Default binarization cutoff for 8-bit frames. Retroreflective tape lit by
/// a ring light saturates well above this.
pub const DEFAULT_THRESHOLD: f64 = 200.0;

/// Largest representable 8-bit pixel value; also the foreground value written
/// by binary thresholding.
pub const MAX_PIXEL_VALUE: u8 = 255;

/// Number of histogram bins for Otsu's thresholding on 8-bit data.
pub const OTSU_HISTOGRAM_BINS: usize = 256;

/// Minimum frame count to use frame-level Rayon parallelism in batch detection.
pub const PARALLEL_FRAME_THRESHOLD: usize = 4;

/// Outline thickness (pixels) for annotated contours.
pub const CONTOUR_THICKNESS: i32 = 2;

/// Radius of the filled centroid marker.
pub const CENTROID_MARKER_RADIUS: i32 = 7;

/// Offset of the label anchor up and to the left of the centroid marker.
pub const LABEL_OFFSET: i32 = 20;

/// Text drawn next to each centroid marker.
pub const CENTROID_LABEL: &str = "centroid";

/// Contour outline color.
pub const CONTOUR_COLOR: [u8; 3] = [0, 255, 0];

/// Marker and label color.
pub const MARKER_COLOR: [u8; 3] = [255, 255, 255];
