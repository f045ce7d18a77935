//! Utility modules for the Storyterm application.
//!
//! This module contains common utility functions and helpers that are used
//! throughout the application. These utilities provide functionality for
//! date handling and other cross-cutting concerns.
//!
//! # Available Utilities
//!
//! - [`date`] - Date formatting, parsing, and localization functions

pub mod date;
