//! Lissajous curve sampling and rasterization.

use std::f64::consts::TAU;

use crate::color::{ColorSource, PaletteColor};
use crate::curve::CurveParameters;
use crate::geometry::{Cell, GridSize};
use crate::scale::{IndexScale, Scale};
use crate::surface::Surface;

/// Glyph used for curve points unless configured otherwise.
pub const DEFAULT_GLYPH: char = '*';

/// One rasterized point of the curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sample {
    /// Grid cell the point falls into.
    pub cell: Cell,
    /// Color chosen for this point.
    pub color: PaletteColor,
}

/// The points produced by a single rasterization pass, in sampling order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SampleSet {
    samples: Vec<Sample>,
}

impl SampleSet {
    /// Number of samples (including duplicates landing in the same cell).
    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// True if the pass produced nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Iterate samples in sampling order.
    pub fn iter(&self) -> std::slice::Iter<'_, Sample> {
        self.samples.iter()
    }

    /// Cell positions in sampling order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.samples.iter().map(|s| s.cell)
    }
}

impl<'a> IntoIterator for &'a SampleSet {
    type Item = &'a Sample;
    type IntoIter = std::slice::Iter<'a, Sample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}

/// Maps a curve onto a fixed-size character grid with per-point colors.
///
/// The curve is sampled `rows * cols` times over one period `t ∈ [0, 2π]`,
/// so larger grids get proportionally denser sampling and the curve stays
/// visually continuous. Row 0 is left for the status line.
#[derive(Debug, Clone)]
pub struct Rasterizer<C> {
    grid: GridSize,
    colors: C,
    glyph: char,
    columns: IndexScale,
    rows: IndexScale,
}

impl<C: ColorSource> Rasterizer<C> {
    /// Create a rasterizer for `grid`, drawing point colors from `colors`.
    #[must_use]
    pub fn new(grid: GridSize, colors: C) -> Self {
        let max_row = grid.rows.saturating_sub(1);
        let max_col = grid.cols.saturating_sub(1);
        Self {
            grid,
            colors,
            glyph: DEFAULT_GLYPH,
            columns: IndexScale::new(grid.cols, 0, max_col),
            rows: IndexScale::new(max_row, 1, max_row),
        }
    }

    /// Draw points with `glyph` instead of [`DEFAULT_GLYPH`].
    #[must_use]
    pub fn with_glyph(mut self, glyph: char) -> Self {
        self.glyph = glyph;
        self
    }

    /// Grid this rasterizer targets.
    #[must_use]
    pub const fn grid(&self) -> GridSize {
        self.grid
    }

    /// Number of samples one pass takes: `rows * cols` steps plus the closing `t = 2π`.
    #[must_use]
    pub fn sample_count(&self) -> usize {
        if self.grid.is_empty() {
            0
        } else {
            self.grid.area() + 1
        }
    }

    /// Distance between consecutive values of `t`.
    #[must_use]
    pub fn step(&self) -> f64 {
        TAU / self.grid.area() as f64
    }

    /// Grid cell for the curve point at `t`.
    #[must_use]
    pub fn cell_at(&self, params: &CurveParameters, t: f64) -> Cell {
        let (x, y) = params.point_at(t);
        Cell::new(self.rows.scale(y), self.columns.scale(x))
    }

    /// Sample the curve once and color every point.
    pub fn sample_set(&mut self, params: &CurveParameters) -> SampleSet {
        let count = self.sample_count();
        let step = self.step();
        let mut samples = Vec::with_capacity(count);

        // t = i * step rather than accumulating, so the last sample is exactly 2π.
        for i in 0..count {
            let cell = self.cell_at(params, i as f64 * step);
            samples.push(Sample { cell, color: self.colors.next_color() });
        }

        SampleSet { samples }
    }

    /// Sample the curve and write every point into `surface`.
    ///
    /// Does not flush; the caller presents the surface once the pass is done.
    pub fn rasterize<S: Surface + ?Sized>(&mut self, surface: &mut S, params: &CurveParameters) {
        crate::time_scope!("rasterizer", format!("rasterize {}x{}", self.grid.rows, self.grid.cols));

        let size = surface.size();
        if size != self.grid {
            crate::warn!(
                "rasterizer",
                "surface is {}x{}, grid is {}x{}; points outside the surface are dropped",
                size.rows,
                size.cols,
                self.grid.rows,
                self.grid.cols
            );
        }

        let samples = self.sample_set(params);
        for sample in &samples {
            surface.plot(sample.cell, self.glyph, sample.color);
        }
        crate::trace!("rasterizer", "plotted {} samples", samples.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{CycleColors, RandomColors};
    use proptest::prelude::*;
    use ratatui::buffer::Buffer;
    use ratatui::layout::Rect;
    use std::collections::BTreeSet;

    fn rasterizer(rows: u16, cols: u16) -> Rasterizer<CycleColors> {
        Rasterizer::new(GridSize::new(rows, cols), CycleColors::new())
    }

    #[test]
    fn test_sample_count_tracks_area() {
        assert_eq!(rasterizer(24, 80).sample_count(), 24 * 80 + 1);
        assert_eq!(rasterizer(1, 1).sample_count(), 2);
        assert_eq!(rasterizer(0, 80).sample_count(), 0);
    }

    #[test]
    fn test_step_spans_one_period() {
        let r = rasterizer(24, 80);
        let last = (r.sample_count() - 1) as f64 * r.step();
        assert!((last - TAU).abs() < 1e-9);
    }

    #[test]
    fn test_first_sample_is_center() {
        // t = 0, delta = 0: x = 0, y = 0
        let mut r = rasterizer(24, 80);
        let samples = r.sample_set(&CurveParameters::new(2.0, 3.0, 0.0));

        assert_eq!(samples.iter().next().map(|s| s.cell), Some(Cell::new(12, 40)));
    }

    #[test]
    fn test_x_at_one_clamps_to_last_column() {
        // delta = π/2 makes x = 1.0 at t = 0
        let r = rasterizer(24, 80);
        let params = CurveParameters::new(1.0, 1.0, std::f64::consts::FRAC_PI_2);

        assert_eq!(r.cell_at(&params, 0.0).col, 79);
    }

    #[test]
    fn test_y_at_one_clamps_to_last_row() {
        // b = 1, t = π/2 makes y = 1.0
        let r = rasterizer(24, 80);
        let params = CurveParameters::new(1.0, 1.0, 0.0);

        assert_eq!(r.cell_at(&params, std::f64::consts::FRAC_PI_2).row, 23);
    }

    #[test]
    fn test_status_row_never_drawn() {
        let mut r = rasterizer(24, 80);
        let samples = r.sample_set(&CurveParameters::new(3.0, 5.0, 0.4));

        assert!(samples.cells().all(|c| c.row >= 1));
    }

    #[test]
    fn test_single_row_grid_stays_in_bounds() {
        let mut r = rasterizer(1, 10);
        let samples = r.sample_set(&CurveParameters::default());

        assert!(samples.cells().all(|c| c.row == 0 && c.col < 10));
    }

    #[test]
    fn test_empty_grid_produces_nothing() {
        let mut r = rasterizer(0, 0);
        assert!(r.sample_set(&CurveParameters::default()).is_empty());
    }

    #[test]
    fn test_colors_follow_source_per_point() {
        let mut r = rasterizer(2, 2);
        let samples = r.sample_set(&CurveParameters::default());
        let colors: Vec<_> = samples.iter().map(|s| s.color).collect();

        assert_eq!(
            colors,
            vec![
                PaletteColor::Red,
                PaletteColor::Green,
                PaletteColor::Yellow,
                PaletteColor::Blue,
                PaletteColor::Cyan,
            ]
        );
    }

    #[test]
    fn test_same_parameters_same_cells() {
        let params = CurveParameters::new(2.0, 3.0, 0.0);
        let mut r = Rasterizer::new(GridSize::new(24, 80), RandomColors::from_entropy());

        let first: Vec<_> = r.sample_set(&params).cells().collect();
        let second: Vec<_> = r.sample_set(&params).cells().collect();

        assert_eq!(first, second);
    }

    #[test]
    fn test_rasterize_writes_glyphs() {
        let params = CurveParameters::new(2.0, 3.0, 0.0);
        let mut r = rasterizer(24, 80).with_glyph('o');
        let expected: BTreeSet<_> = r.sample_set(&params).cells().collect();

        let mut buffer = Buffer::empty(Rect::new(0, 0, 80, 24));
        r.rasterize(&mut buffer, &params);

        let mut drawn = BTreeSet::new();
        for row in 0..24 {
            for col in 0..80 {
                if buffer[(col, row)].symbol() == "o" {
                    drawn.insert(Cell::new(row, col));
                }
            }
        }
        assert_eq!(drawn, expected);
    }

    #[test]
    fn test_rasterize_into_smaller_surface_keeps_inside_points() {
        let params = CurveParameters::new(2.0, 3.0, 0.0);
        let mut r = rasterizer(24, 80);
        let expected: BTreeSet<_> = r
            .sample_set(&params)
            .cells()
            .filter(|cell| GridSize::new(12, 40).contains(*cell))
            .collect();

        let mut buffer = Buffer::empty(Rect::new(0, 0, 40, 12));
        r.rasterize(&mut buffer, &params);

        let mut drawn = BTreeSet::new();
        for row in 0..12 {
            for col in 0..40 {
                if buffer[(col, row)].symbol() == "*" {
                    drawn.insert(Cell::new(row, col));
                }
            }
        }
        assert_eq!(drawn, expected);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn prop_samples_inside_grid(
            a in -12.0f64..12.0,
            b in -12.0f64..12.0,
            delta in 0.0f64..TAU,
            rows in 1u16..60,
            cols in 1u16..120,
        ) {
            let grid = GridSize::new(rows, cols);
            let mut r = Rasterizer::new(grid, CycleColors::new());
            let samples = r.sample_set(&CurveParameters::new(a, b, delta));

            prop_assert_eq!(samples.len(), grid.area() + 1);
            for cell in samples.cells() {
                prop_assert!(grid.contains(cell), "{:?} outside {:?}", cell, grid);
            }
        }

        #[test]
        fn prop_cell_positions_are_deterministic(
            a in -6.0f64..6.0,
            b in -6.0f64..6.0,
            delta in 0.0f64..TAU,
        ) {
            let params = CurveParameters::new(a, b, delta);
            let grid = GridSize::new(24, 80);
            let mut first = Rasterizer::new(grid, RandomColors::seeded(1));
            let mut second = Rasterizer::new(grid, RandomColors::seeded(2));

            let lhs: Vec<_> = first.sample_set(&params).cells().collect();
            let rhs: Vec<_> = second.sample_set(&params).cells().collect();
            prop_assert_eq!(lhs, rhs);
        }
    }
}
