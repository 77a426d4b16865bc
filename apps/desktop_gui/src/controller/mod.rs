//! Controller layer: worker events applied to the region set, and command orchestration.

pub mod events;
pub mod orchestration;
