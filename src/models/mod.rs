pub mod user;
pub mod word;

pub use user::{Role, User};
pub use word::WordRecord;
