#![forbid(unsafe_code)]

//! # `voxvol`: dense voxel volume storage
//!
//! Flat contiguous 3D grids for volumetric datasets. A volume is a single
//! boxed slice co-owned with its extent, linearized in row-major (C) order
//! so that the on-disk byte layout of a serialized volume is exactly the
//! in-memory element order. Bit masks over the same linearization support
//! bulk cell selection without touching the element buffers.

// Variable length bit collections
extern crate bit_vec;

mod extent;
mod mask;
mod volume;

pub use crate::extent::{Extent, Positions, MAX_AXIS};
pub use crate::mask::VolumeMask;
pub use crate::volume::Volume;
