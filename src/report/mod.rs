// Report module
//
// This module turns container records into the text printed to stdout:
// - table: Summary line and the auto-fitted container table

pub mod table;

pub use table::render;
