//! Constant values.
/// Time a notification is displayed, in milliseconds.
pub static MESSAGE_TIMEOUT: u32 = 5_000;

pub static DEFAULT_TITLE: &str = "Tags Input Box";
pub static DEFAULT_MAX_TAGS: usize = 10;
pub static DEFAULT_STORAGE_KEY: &str = "tags";
pub static DEFAULT_TAGS: [&str; 2] = ["dev", "react"];

pub static HINT: &str = "Press enter or add a comma after each tag";
pub static CONFIRM_REMOVE_ALL: &str = "Are you sure you want to delete all the tags?";
pub static REMOVE_ALL_SUCCESS: &str = "All tags are successfully deleted";
pub static AUTHOR_URL: &str = "https://github.com/nagoev-alim";
