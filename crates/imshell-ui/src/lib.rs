//! UI layer for imshell.
//!
//! Owns the egui context and the two platform bridges: egui-winit for input
//! translation and egui-wgpu for turning draw data into GPU work. Also ships
//! the built-in demo window the shell shows by default.

pub mod demo;
pub mod integration;

pub use demo::DemoWindowState;
pub use integration::UiIntegration;
