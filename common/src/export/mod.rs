//! Export core modules shared by the CSV and PDF writers.

pub mod pdf_core;
pub mod table_core;
