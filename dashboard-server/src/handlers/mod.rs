//! HTTP handlers

pub mod health;
pub mod controls;
pub mod model;
pub mod data;
pub mod visuals;
pub mod predict;
