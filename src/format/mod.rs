//! Text file I/O and reporting for graphs.

pub mod reader;
pub mod summary;
pub mod writer;

pub use reader::GraphReader;
pub use summary::render_summary;
pub use writer::GraphWriter;
