#![forbid(unsafe_code)]

//! # `phantom`: synthetic volumetric phantoms
//!
//! Builds small synthetic datasets for exercising volumetric import
//! pipelines: a geometric region of one material stamped into a uniform
//! background of another, with co-indexed material and density volumes and
//! the material map that labels them.

extern crate cgmath;
extern crate matmap;
extern crate rawvol;
extern crate voxvol;

mod sphere;
mod template;

pub use crate::sphere::SphereSettings;
pub use crate::template::{
	water_sphere, water_sphere_map, TemplateSet, AIR, AIR_DENSITY, DENSITY_FILE, DIM,
	MATERIAL_FILE, MATERIAL_MAP_FILE, WATER, WATER_DENSITY
};
