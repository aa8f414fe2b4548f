//! Types and logic shared between the Tourisn web client and the signup server.
//!
//! The client and the server both talk to the hosted auth/database provider through
//! [`supabase::SupabaseClient`]; the client with the public anon key, the server with the
//! service-role key. Everything the pages decide on their own (where to send a user, which
//! navigation entries to show, what a search form submits) lives here so it can be
//! exercised without a browser.

pub mod api;
pub mod forms;
pub mod models;
pub mod nav;
pub mod redirect;
pub mod session;
pub mod supabase;
