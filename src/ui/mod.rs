pub mod icons;
pub mod output;
pub mod table;
pub mod theme;

pub use icons::Icons;
pub use output::{error, header, info, section, status, status_err, success, warn};
pub use table::{TableBuilder, locations_table};
pub use theme::{Theme, theme};
