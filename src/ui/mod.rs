pub mod icons;
pub mod output;
pub mod table;
pub mod theme;

pub use icons::Icons;
pub use output::{error, header, money, note, prompt, section, status, success, warn};
pub use table::{history_table, stock_table};
pub use theme::{Theme, theme};
