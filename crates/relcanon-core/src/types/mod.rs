pub mod content;
pub mod record;
pub mod season;
pub mod update;

pub use content::{ContentType, Year};
pub use record::ParsedTitleRecord;
pub use season::SeasonSpec;
pub use update::{PartAdded, UpdateInfo};
