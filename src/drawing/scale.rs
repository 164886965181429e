//! Mapping from data space to plot coordinates.
//!
//! Maps yield offsets from the low edge of the plot area: from the left
//! for horizontal axes and from the bottom for vertical ones. Flipping
//! to the downward figure Y axis is done where the offset is consumed.

/// Linear map from a numeric range onto a plot dimension
#[derive(Debug, Clone, Copy)]
pub(crate) struct LinMap {
    start: f64,
    span: f64,
    size: f32,
}

impl LinMap {
    pub fn new(range: (f64, f64), size: f32) -> Self {
        LinMap {
            start: range.0,
            span: range.1 - range.0,
            size,
        }
    }

    /// Offset of a value from the low plot edge
    pub fn map(&self, v: f64) -> f32 {
        ((v - self.start) / self.span) as f32 * self.size
    }
}

/// Even category bins over a plot dimension
#[derive(Debug, Clone, Copy)]
pub(crate) struct CatBins {
    count: usize,
    size: f32,
}

impl CatBins {
    pub fn new(count: usize, size: f32) -> Self {
        CatBins { count, size }
    }

    /// Width of one category bin
    pub fn bin_size(&self) -> f32 {
        self.size / self.count.max(1) as f32
    }

    /// Offset of the low edge of a category bin
    pub fn start(&self, idx: usize) -> f32 {
        idx as f32 * self.bin_size()
    }

    /// Offset of the center of a category bin
    pub fn center(&self, idx: usize) -> f32 {
        (idx as f32 + 0.5) * self.bin_size()
    }
}

/// Coordinate map of one axis
#[derive(Debug, Clone, Copy)]
pub(crate) enum CoordMap {
    Lin(LinMap),
    Cat(CatBins),
}

impl CoordMap {
    pub fn lin(&self) -> Option<&LinMap> {
        match self {
            CoordMap::Lin(map) => Some(map),
            CoordMap::Cat(..) => None,
        }
    }

    pub fn cat(&self) -> Option<&CatBins> {
        match self {
            CoordMap::Cat(bins) => Some(bins),
            CoordMap::Lin(..) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::assert_near;

    #[test]
    fn lin_map_endpoints() {
        let map = LinMap::new((10.0, 20.0), 200.0);
        assert_near!(map.map(10.0), 0.0f32, 1e-4);
        assert_near!(map.map(20.0), 200.0f32, 1e-4);
        assert_near!(map.map(15.0), 100.0f32, 1e-4);
        assert_near!(map.map(5.0), -100.0f32, 1e-4);
    }

    #[test]
    fn cat_bins_centers() {
        let bins = CatBins::new(4, 100.0);
        assert_near!(bins.bin_size(), 25.0f32, 1e-4);
        assert_near!(bins.start(2), 50.0f32, 1e-4);
        assert_near!(bins.center(0), 12.5f32, 1e-4);
        assert_near!(bins.center(3), 87.5f32, 1e-4);
    }
}
