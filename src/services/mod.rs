pub mod output_writer;
pub mod sheet_locator;
pub mod topic_grouper;
pub mod ts_renderer;

pub use output_writer::OutputWriter;
pub use sheet_locator::{LocateReport, SheetLocator};
pub use topic_grouper::TopicGrouper;
pub use ts_renderer::render_module;
