//! Live subway arrival board.
//!
//! Polls a real-time arrivals feed for one station, ranks the upcoming
//! trains per route and direction, and publishes the result for display.
//! A fuzzy station search resolves informal names like "14th st" so the
//! board can be switched to another station.

pub mod arrivals;
pub mod config;
pub mod domain;
pub mod feed;
pub mod poller;
pub mod service;
pub mod stations;
pub mod web;
