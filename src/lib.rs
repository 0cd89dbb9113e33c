//! GameTracker API - Backend for tracking video games and their reviews
//!
//! This crate provides the REST API for GameTracker:
//! - Game creation, listing, partial update and deletion
//! - Reviews scoped to a game, removed together with it

pub mod config;
pub mod db;
pub mod dto;
pub mod entities;
pub mod error;
pub mod extract;
pub mod routes;
pub mod services;
pub mod state;
pub mod store;
pub mod utils;
