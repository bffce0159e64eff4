// ABOUTME: Configuration constants shared across Taskdeck packages
// ABOUTME: Keeps every environment variable name in one place

pub mod constants;
