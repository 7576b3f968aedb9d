pub mod sparkline;
pub mod progress;
pub mod text;

pub use sparkline::{sparkline, downsample, BARS, DEFAULT_SPARKLINE_LENGTH};
pub use progress::{format_meter, format_interval, DEFAULT_NCOLS};
pub use text::{shorten, formatted_time, DEFAULT_NAME_WIDTH};
