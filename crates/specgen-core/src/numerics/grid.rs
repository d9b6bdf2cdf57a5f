use crate::domain::{BroadenedPoint, BroadeningError, BroadeningResult};

/// Largest quadrature whose `num_points + 1` output points fit in one allocation.
pub const MAX_NUM_POINTS: usize = isize::MAX as usize / size_of::<BroadenedPoint>() - 1;

/// Evenly spaced energy grid covering the padded transition range.
///
/// Points are `start + k * step` for `k = 0..=num_points`: one more point than
/// the requested quadrature, ending on `end`. Downstream output lengths depend
/// on that extra point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnergyGrid {
    start: f64,
    end: f64,
    step: f64,
    padding: f64,
    num_points: usize,
}

impl EnergyGrid {
    pub const fn start(&self) -> f64 {
        self.start
    }

    pub const fn end(&self) -> f64 {
        self.end
    }

    /// Spacing between consecutive points (`delta_e`).
    pub const fn step(&self) -> f64 {
        self.step
    }

    pub const fn padding(&self) -> f64 {
        self.padding
    }

    /// Requested quadrature resolution.
    pub const fn num_points(&self) -> usize {
        self.num_points
    }

    /// Number of points actually produced, `num_points + 1`.
    pub const fn len(&self) -> usize {
        self.num_points + 1
    }

    pub const fn is_empty(&self) -> bool {
        false
    }

    #[inline]
    pub fn point(&self, index: usize) -> f64 {
        self.start + index as f64 * self.step
    }

    /// Restartable iterator over the grid in ascending order.
    pub fn points(&self) -> impl ExactSizeIterator<Item = f64> + Clone + '_ {
        (0..self.len()).map(|index| self.point(index))
    }
}

pub fn build_grid(
    energies: &[f64],
    kernel_width: f64,
    padding_factor: u32,
    num_points: usize,
) -> BroadeningResult<EnergyGrid> {
    if num_points == 0 {
        return Err(BroadeningError::invalid_grid(
            "quadrature must contain at least one interval, got 0",
        ));
    }
    if num_points > MAX_NUM_POINTS {
        return Err(BroadeningError::invalid_grid(format!(
            "quadrature {num_points} exceeds the largest representable grid of {MAX_NUM_POINTS} intervals"
        )));
    }
    if energies.is_empty() {
        return Err(BroadeningError::invalid_grid(
            "at least one transition energy is required",
        ));
    }
    if !kernel_width.is_finite() || kernel_width <= 0.0 {
        return Err(BroadeningError::invalid_grid(format!(
            "padding is derived from the kernel width, which must be finite and > 0, got {kernel_width}"
        )));
    }

    let (lowest, highest) = energies
        .iter()
        .copied()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(low, high), energy| {
            (low.min(energy), high.max(energy))
        });
    let padding = kernel_width * f64::from(padding_factor);
    let start = lowest - padding;
    let end = highest + padding;
    let width = end - start;

    if !width.is_finite() {
        return Err(BroadeningError::invalid_grid(format!(
            "energy range [{start}, {end}] is not finite"
        )));
    }
    if width <= 0.0 {
        return Err(BroadeningError::invalid_grid(format!(
            "energy range collapses to a single energy {lowest} (padding factor {padding_factor})"
        )));
    }

    Ok(EnergyGrid {
        start,
        end,
        step: width / num_points as f64,
        padding,
        num_points,
    })
}

#[cfg(test)]
mod tests {
    use super::{MAX_NUM_POINTS, build_grid};
    use crate::domain::BroadeningError;

    #[test]
    fn grid_spans_padded_range_with_one_extra_point() {
        let grid = build_grid(&[12.0, 10.0, 11.0], 0.5, 4, 8).expect("grid");

        assert_eq!(grid.padding(), 2.0);
        assert_eq!(grid.start(), 8.0);
        assert_eq!(grid.end(), 14.0);
        assert_eq!(grid.step(), 0.75);
        assert_eq!(grid.len(), 9);

        let points: Vec<f64> = grid.points().collect();
        assert_eq!(points.len(), 9);
        assert_eq!(points[0], 8.0);
        assert_eq!(points[8], 14.0);
        assert!(points.windows(2).all(|pair| pair[1] > pair[0]));
    }

    #[test]
    fn grid_length_is_quadrature_plus_one() {
        for num_points in [1, 2, 7, 1000, 4096] {
            let grid = build_grid(&[3.1, 4.7], 0.13, 5, num_points).expect("grid");
            assert_eq!(grid.points().count(), num_points + 1);
        }
    }

    #[test]
    fn points_iterator_is_restartable() {
        let grid = build_grid(&[1.0], 0.2, 5, 10).expect("grid");
        let first: Vec<f64> = grid.points().collect();
        let second: Vec<f64> = grid.points().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn single_transition_without_padding_is_degenerate() {
        let error = build_grid(&[5.0, 5.0], 0.3, 0, 100).expect_err("degenerate range");
        assert!(matches!(error, BroadeningError::InvalidGrid { .. }));

        let grid = build_grid(&[5.0, 6.0], 0.3, 0, 100).expect("spread without padding");
        assert_eq!(grid.start(), 5.0);
        assert_eq!(grid.end(), 6.0);
    }

    #[test]
    fn empty_energies_and_zero_quadrature_are_rejected() {
        assert!(matches!(
            build_grid(&[], 1.0, 5, 10).expect_err("empty"),
            BroadeningError::InvalidGrid { .. }
        ));
        assert!(matches!(
            build_grid(&[1.0], 1.0, 5, 0).expect_err("zero points"),
            BroadeningError::InvalidGrid { .. }
        ));
    }

    #[test]
    fn oversized_quadrature_is_rejected_before_sizing_the_grid() {
        for num_points in [usize::MAX, MAX_NUM_POINTS + 1] {
            let error = build_grid(&[10.0], 1.0, 5, num_points).expect_err("oversized grid");
            assert!(matches!(error, BroadeningError::InvalidGrid { .. }), "{error:?}");
        }
        assert!(MAX_NUM_POINTS.checked_add(1).is_some());
    }
}
