pub mod document;
pub mod fragment;
pub mod line;
pub mod style;

pub use document::{DocumentOptions, Download, render_document};
pub use fragment::render_fragments;
pub use line::render_line;
