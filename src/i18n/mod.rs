mod region;
mod localization;

pub use region::Region;
pub use localization::Localization;
