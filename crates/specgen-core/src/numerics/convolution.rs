use super::grid::EnergyGrid;
use super::kernels::LineShape;
use super::scaling::IntensityScale;
use crate::domain::{BroadenedPoint, BroadeningError, BroadeningResult, TransitionSet};
use rayon::prelude::*;
use std::ops::Range;

/// Broadened curve plus the unnormalized running integral accumulated while
/// producing it.
#[derive(Debug, Clone, PartialEq)]
pub struct ConvolutionOutput {
    pub points: Vec<BroadenedPoint>,
    pub running_integral: f64,
}

/// Sum every transition's scaled kernel at every grid point.
///
/// `O(grid points * transitions)` with no cutoff: each kernel is evaluated
/// over the whole grid. Transitions are visited in input order so the running
/// integral has a single, well-defined accumulation order.
pub fn convolve(
    grid: &EnergyGrid,
    transitions: &TransitionSet,
    kernel: LineShape,
    scale: IntensityScale,
) -> ConvolutionOutput {
    let (points, running_integral) =
        convolve_range(grid, 0..grid.len(), transitions, kernel, scale);
    ConvolutionOutput {
        points,
        running_integral,
    }
}

/// Shared-nothing parallel form of [`convolve`].
///
/// The grid is cut into `partitions` contiguous index ranges evaluated on the
/// rayon pool. Points come back in grid order and the partial integrals are
/// summed in partition index order, so repeated runs with the same partition
/// count are bit-identical. Point values equal the serial ones exactly; the
/// integral can differ from the serial one in the last bits.
pub fn convolve_partitioned(
    grid: &EnergyGrid,
    transitions: &TransitionSet,
    kernel: LineShape,
    scale: IntensityScale,
    partitions: usize,
) -> BroadeningResult<ConvolutionOutput> {
    if partitions == 0 {
        return Err(BroadeningError::invalid_parameter(
            "partitions",
            0.0,
            "must be a positive integer",
        ));
    }

    let ranges = partition_ranges(grid.len(), partitions);
    tracing::debug!(
        partitions = ranges.len(),
        grid_points = grid.len(),
        "convolving grid partitions"
    );

    let partials: Vec<(Vec<BroadenedPoint>, f64)> = ranges
        .into_par_iter()
        .map(|range| convolve_range(grid, range, transitions, kernel, scale))
        .collect();

    let mut points = Vec::with_capacity(grid.len());
    let mut running_integral = 0.0;
    for (partition_points, partial_integral) in partials {
        points.extend(partition_points);
        running_integral += partial_integral;
    }

    Ok(ConvolutionOutput {
        points,
        running_integral,
    })
}

fn convolve_range(
    grid: &EnergyGrid,
    range: Range<usize>,
    transitions: &TransitionSet,
    kernel: LineShape,
    scale: IntensityScale,
) -> (Vec<BroadenedPoint>, f64) {
    let mut points = Vec::with_capacity(range.len());
    let mut running_integral = 0.0;

    for index in range {
        let energy = grid.point(index);
        let factor = scale.factor(energy);
        let mut intensity = 0.0;

        for transition in transitions.iter() {
            let contribution =
                transition.intensity * kernel.evaluate(energy, transition.energy) / factor;
            intensity += contribution;
            running_integral += scale.integral_weight(contribution, transition.energy);
        }

        points.push(BroadenedPoint::new(energy, intensity));
    }

    (points, running_integral)
}

fn partition_ranges(len: usize, partitions: usize) -> Vec<Range<usize>> {
    let partitions = partitions.min(len).max(1);
    let base = len / partitions;
    let remainder = len % partitions;

    let mut ranges = Vec::with_capacity(partitions);
    let mut start = 0;
    for partition in 0..partitions {
        let size = base + usize::from(partition < remainder);
        ranges.push(start..start + size);
        start += size;
    }
    ranges
}
