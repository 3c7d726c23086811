use crate::error::ProcessingError;
use crate::image::{GrayImageU8, ImageView};

/// Per-pixel edge strength grid produced by the Canny pipeline.
///
/// After hysteresis every cell is either 0 or 255. One map is produced per
/// refinement call and consumed by the snapping refiner of that same call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EdgeMap {
    cells: GrayImageU8,
}

impl EdgeMap {
    /// All-zero map of the given size.
    pub fn zeros(width: usize, height: usize) -> Self {
        Self {
            cells: GrayImageU8::new(width, height),
        }
    }

    pub fn from_raw(width: usize, height: usize, data: Vec<u8>) -> Result<Self, ProcessingError> {
        Ok(Self {
            cells: GrayImageU8::from_raw(width, height, data)?,
        })
    }

    pub fn from_gray(cells: GrayImageU8) -> Self {
        Self { cells }
    }

    #[inline]
    pub fn strength(&self, x: usize, y: usize) -> u8 {
        self.cells.get(x, y)
    }

    /// Number of cells strictly above `threshold`.
    pub fn count_above(&self, threshold: u8) -> usize {
        self.cells.as_raw().iter().filter(|&&v| v > threshold).count()
    }

    pub fn as_gray(&self) -> &GrayImageU8 {
        &self.cells
    }

    pub fn into_gray(self) -> GrayImageU8 {
        self.cells
    }
}

impl ImageView for EdgeMap {
    type Pixel = u8;

    #[inline]
    fn width(&self) -> usize {
        self.cells.width()
    }
    #[inline]
    fn height(&self) -> usize {
        self.cells.height()
    }
    #[inline]
    fn row(&self, y: usize) -> &[u8] {
        self.cells.row(y)
    }
}
