//! Tara front end: landing page, profile planner and menu recommendations,
//! backed by the remote Tara nutrition API.

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod menu;
pub mod packaging;
pub mod profile;
pub mod reveal;
pub mod routes;
pub mod session;
pub mod state;
pub mod storage;
pub mod theme;
pub mod view;
