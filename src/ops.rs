pub mod last_index;
pub mod len;
pub mod list;
pub mod remove;
pub mod scatter;
pub mod zeros;
