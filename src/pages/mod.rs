pub mod confirm;
pub mod dashboard;
pub mod home;
pub mod hotel;
pub mod not_found;
pub mod signin;
pub mod signup;
