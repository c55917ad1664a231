//! Data Manager crate for the radar chart plugin
//! Maps the host's table onto chart series: row filtering, label formatting
//! and de-duplication, value extraction and color assignment

pub mod builder;
pub mod date_format;
pub mod labels;
pub mod localizer;

pub use builder::{build_chart, DatasetBuilder, SERIES_BORDER_WIDTH};
pub use date_format::{parse_cell_date, translate_dotnet_pattern, DEFAULT_DATE_PATTERN};
pub use labels::{LabelFormatter, LabelTracker};
pub use localizer::{ChronoLocalizer, Localizer};
