//! Apinorm Normalizers - Composite value normalizers and key policies
//!
//! This crate ships the concrete normalizer implementations that sit on
//! top of [`apinorm_core`]:
//!
//! - [`ObjectNormalizer`] - recurses into the engine for a property
//!   holding a nested model
//! - [`ArrayNormalizer`] - applies an element normalizer across an
//!   ordered sequence
//! - [`PassthroughNormalizer`] - the explicit identity normalizer
//! - [`SnakeCaseKeyNormalizer`] - camelCase/snake_case key chain stage
//!
//! Copyright (c) 2025 Apinorm Team
//! Licensed under the Apache-2.0 license

pub mod array;
pub mod object;
pub mod passthrough;
pub mod snake;

pub use array::ArrayNormalizer;
pub use object::ObjectNormalizer;
pub use passthrough::PassthroughNormalizer;
pub use snake::SnakeCaseKeyNormalizer;
