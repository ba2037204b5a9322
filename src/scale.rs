//! Scale functions for curve-to-grid mappings.
//!
//! Curve coordinates live in `[-1, 1]`. A [`LinearScale`] stretches that
//! interval over a span of cells and an [`IndexScale`] turns the result
//! into a clamped integer row or column.

/// Trait for scale functions that map domain values to range values.
pub trait Scale<D, R> {
    /// Transform a domain value to a range value.
    fn scale(&self, value: D) -> R;

    /// Get the domain extent.
    fn domain(&self) -> (D, D);

    /// Get the range extent.
    fn range(&self) -> (R, R);
}

/// Linear scale for continuous-to-continuous mapping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain_min: f64,
    domain_max: f64,
    range_min: f64,
    range_max: f64,
}

impl LinearScale {
    /// Domain of both curve coordinates.
    pub const UNIT_DOMAIN: (f64, f64) = (-1.0, 1.0);

    /// Create a new linear scale.
    ///
    /// A degenerate domain maps every value to `range.0`.
    #[must_use]
    pub const fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain_min: domain.0, domain_max: domain.1, range_min: range.0, range_max: range.1 }
    }

    /// Scale from `[-1, 1]` onto `range`.
    #[must_use]
    pub const fn from_unit(range: (f64, f64)) -> Self {
        Self::new(Self::UNIT_DOMAIN, range)
    }
}

impl Scale<f64, f64> for LinearScale {
    fn scale(&self, value: f64) -> f64 {
        let width = self.domain_max - self.domain_min;
        if width == 0.0 {
            return self.range_min;
        }
        let t = (value - self.domain_min) / width;
        self.range_min + t * (self.range_max - self.range_min)
    }

    fn domain(&self) -> (f64, f64) {
        (self.domain_min, self.domain_max)
    }

    fn range(&self) -> (f64, f64) {
        (self.range_min, self.range_max)
    }
}

/// Maps a unit coordinate to a grid index: `floor(span * (v + 1) / 2) + offset`,
/// clamped to `[0, max_index]`.
///
/// The clamp covers `v = 1.0`, where the floor lands one past the span.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndexScale {
    linear: LinearScale,
    offset: u16,
    max_index: u16,
}

impl IndexScale {
    /// Spread `[-1, 1]` over `span` cells starting at `offset`, never exceeding `max_index`.
    #[must_use]
    pub fn new(span: u16, offset: u16, max_index: u16) -> Self {
        Self { linear: LinearScale::from_unit((0.0, f64::from(span))), offset, max_index }
    }
}

impl Scale<f64, u16> for IndexScale {
    fn scale(&self, value: f64) -> u16 {
        // `as` saturates: NaN and negatives become 0, overflow becomes u16::MAX.
        let cell = self.linear.scale(value).floor() as u16;
        cell.saturating_add(self.offset).min(self.max_index)
    }

    fn domain(&self) -> (f64, f64) {
        self.linear.domain()
    }

    fn range(&self) -> (u16, u16) {
        (self.offset.min(self.max_index), self.max_index)
    }
}
