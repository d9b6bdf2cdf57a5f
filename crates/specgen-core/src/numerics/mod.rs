pub mod convolution;
pub mod grid;
pub mod integral;
pub mod kernels;
pub mod scaling;

pub use convolution::{ConvolutionOutput, convolve, convolve_partitioned};
pub use grid::{EnergyGrid, MAX_NUM_POINTS, build_grid};
pub use integral::normalize_integral;
pub use kernels::{KernelKind, LineShape, gaussian, lorentzian};
pub use scaling::IntensityScale;
