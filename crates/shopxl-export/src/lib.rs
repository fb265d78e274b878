pub mod error;
pub mod workbook;

pub use error::ExportError;
pub use workbook::{export_filename, render_workbook, write_workbook, SHEET_NAME};
