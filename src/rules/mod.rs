//! Game rules: five-in-a-row win detection

pub mod win;

pub use win::{check_win, has_five_at};
