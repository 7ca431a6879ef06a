//! Evaluation functions that turn a world snapshot into decisions for the
//! strategy layer.

pub mod indirect_chip;

pub use indirect_chip::{
    evaluate_indirect_chip, find_indirect_chip_target, find_indirect_chip_target_from_triangles,
    ChipTargetEvaluation,
};
