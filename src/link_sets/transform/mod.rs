mod chart;
mod csv_export;
mod listing;

pub use chart::render_chart;
pub use csv_export::{export_csv, write_csv, ExportError};
pub use listing::render_listing;
