// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use thiserror::Error;

/// Errors produced by transform tracking.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum TransformError {
    /// The current matrix cannot be inverted.
    #[error("transform is singular (determinant {determinant})")]
    SingularTransform {
        /// Determinant of the offending matrix.
        determinant: f64,
    },
    /// `restore` was called without a matching `save`.
    #[error("restore without a matching save")]
    EmptyStack,
}
