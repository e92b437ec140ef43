pub mod args;
pub mod extract;
pub mod report;
pub mod scan;
pub mod stats;
pub mod utils;

pub use args::{Args, SortMode};
pub use extract::{is_valid_octets, Extractor};
pub use report::{build_report, write_report, ReportEntry};
pub use scan::{aggregate_lines, analyze_input, scan_reader, Aggregator};
pub use stats::{AnalysisResult, IpCounts, ScanStats};
