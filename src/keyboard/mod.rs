pub mod key_id;
pub mod layout;
pub mod tracker;
