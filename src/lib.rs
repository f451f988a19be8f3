#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! Parametric striped-globe scene generator with framed PNG export.
//!
//! The crate builds a renderer-agnostic [`scene::SceneBundle`] from a
//! [`config::Config`]: tilted rings fanned around a sphere, optional
//! wireframe and inner spheres, surface nodes with polar attribute
//! gradients and proximity connection graphs. The [`render`] module turns
//! a bundle into a framed square PNG through a minimal rasterizer.
//!
//! Generation is pure and deterministic: the same configuration always
//! produces a bit-identical bundle.

pub mod color;
pub mod config;
pub mod geom;
pub mod render;
pub mod scene;

pub use color::Rgb;
pub use config::{Config, ConnectionMode, NodeShape};
pub use scene::{assemble, SceneBundle};
