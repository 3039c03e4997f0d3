//! Brim's `prelude` module.
//! It re-exports the most commonly used items from brim.
//! We recommend importing brim like this:
//! `use brim::prelude::*;`
//!
//! For documentation about how to use brim,
//! see the documentation in the [crate root](crate).

pub use crate::{
    error::Error,
    fill, fill_result, fill_unit,
    input::{Block, Input, LogFill, Quiet, TargetSize},
    output::{BlocksWritten, FinalSize, Output, Summary},
};
