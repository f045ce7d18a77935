//! Storyterm - screen utilities for a terminal-based interactive story client
//!
//! This library provides the shared building blocks used by every screen of
//! the story client: locale-aware date formatting, transient on-screen
//! notifications, and a guard that asks for confirmation before leaving a
//! screen with unsaved form input. A small demo binary wires them into a
//! complete screen built with Ratatui.
//!
//! # Modules
//!
//! The library is organized into several key modules:
//!
//! * [`config`] - Application configuration management
//! * [`logger`] - File-based logging setup for the TUI
//! * [`ui`] - Terminal user interface components
//! * [`utils`] - Utility functions and helpers

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Logging setup for debugging and error tracking
pub mod logger;

/// Terminal user interface components and rendering
pub mod ui;

/// Utility functions for date handling and other helpers
pub mod utils;
