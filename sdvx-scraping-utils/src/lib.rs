#[macro_use]
pub mod macros;

pub mod fs_json_util;

#[doc(hidden)]
pub use once_cell;
#[doc(hidden)]
pub use scraper;
