/// Numeric conversion and rendering helpers.
///
/// This module provides the lossless integer-to-float conversion used by the
/// tokenizer, the three-decimal rounding applied to final answers, and the
/// decimal rendering shared by the explanation formatter and the CLI.
pub mod num;
