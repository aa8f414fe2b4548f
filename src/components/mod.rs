pub mod avatar;
pub mod navbar;
