pub mod broaden;
pub mod report;
pub mod serialization;
pub mod spec_file;

pub use broaden::{BroadenedSpectrum, BroadeningConfig, BroadeningPlan, broaden_spectrum};
pub use report::{DEFAULT_LOG_FILE_NAME, RunReport, render_run_log, render_run_summary_json};
pub use serialization::{render_broadened_curve, write_text_artifact};
pub use spec_file::{parse_spectrum_source, read_spectrum_file};
