pub mod loaders;
pub mod palette;
pub mod raw;
pub mod sheet;

pub use loaders::load_sheet_questions;
pub use palette::{Palette, DEFAULT_TOPIC_COLORS};
pub use raw::{RawQuestion, RawQuestionId, SheetData, SheetDocument};
pub use sheet::{Difficulty, SheetQuestion, SheetSubTopic, SheetTopic};
