#![deny(missing_debug_implementations)]

//! `brim` provides the [`fill!`] macro, that makes it easy to fill
//! files with repeated text blocks from rust programs.
//!
//! ```
//! # let temp_dir = tempfile::TempDir::new().unwrap();
//! # std::env::set_current_dir(&temp_dir).unwrap();
//! use brim::prelude::*;
//!
//! let FinalSize(size) = fill!("filled.txt", TargetSize(1000), Block("lorem ipsum\n"));
//! assert_eq!(size, 1008);
//! ```
//!
//! A fill run creates the output file (truncating it if it already
//! exists) and appends the block to it until the file size reaches the
//! target. Blocks are always written whole, so the final size is the
//! smallest multiple of the block size that is greater than or equal to
//! the target.
//!
//! # The defaults
//!
//! Every input is optional. When an input is not given, its default is
//! used: the output path defaults to [`DEFAULT_OUTPUT_PATH`]
//! (`"file1.txt"`), the block to [`LOREM_BLOCK`] (one Lorem-ipsum
//! paragraph plus a line break, 446 bytes), and the target size to
//! [`DEFAULT_TARGET_SIZE`] (5 GiB). So this program generates a 5 GiB
//! Lorem-ipsum file in the current directory:
//!
//! ```no_run
//! use brim::prelude::*;
//!
//! fill_unit!();
//! ```
//!
//! On success, a fill run prints a one-line summary to `stdout`,
//! reporting the output path and the final size in GiB:
//!
//! ```text
//! Archivo generado: file1.txt (5.00 GB)
//! ```
//!
//! The summary can be suppressed with the [`Quiet`](input::Quiet)
//! input, or captured with the [`Summary`](output::Summary) output.
//!
//! # Inputs
//!
//! You can pass in multiple arguments (of different types) to [`fill!`]
//! to configure the run, as long as they implement the
//! [`Input`](input::Input) trait. Path-like types set the output path,
//! and the provided wrapper types set everything else:
//!
//! ```
//! # let temp_dir = tempfile::TempDir::new().unwrap();
//! # std::env::set_current_dir(&temp_dir).unwrap();
//! use brim::prelude::*;
//!
//! let FinalSize(size) = fill!("filled.txt", TargetSize(1000), Block("x"));
//! assert_eq!(size, 1000);
//! ```
//!
//! For all possible inputs to [`fill!`], see the documentation of
//! [`Input`](input::Input).
//!
//! # Outputs
//!
//! You can choose which return type you want [`fill!`] to return,
//! as long as the chosen return type implements [`Output`](output::Output).
//! For example you can use [`BlocksWritten`](output::BlocksWritten)
//! to find out how many copies of the block the file consists of:
//!
//! ```
//! # let temp_dir = tempfile::TempDir::new().unwrap();
//! # std::env::set_current_dir(&temp_dir).unwrap();
//! use brim::prelude::*;
//!
//! let BlocksWritten(blocks) = fill!("filled.txt", TargetSize(1000), Block("lorem ipsum\n"));
//! assert_eq!(blocks, 84);
//! ```
//!
//! If you don't want any result from [`fill!`], you can use `()`
//! as the return value. Since that's a very common case, `brim`
//! provides the [`fill_unit!`] shortcut.
//!
//! See the implementations for [`Output`](output::Output) for all the
//! supported types.
//!
//! # Error Handling
//!
//! By default [`fill!`] panics when the run fails, e.g.:
//!
//! - when the output file cannot be created,
//! - when the storage layer rejects a write (e.g. on a full disk),
//! - when the given block is empty.
//!
//! For example:
//!
//! ``` should_panic
//! use brim::prelude::*;
//!
//! // panics with "fill!: the text block must not be empty"
//! fill_unit!(Block(""));
//! ```
//!
//! You can turn these panics into [`std::result::Result::Err`]s
//! by using [`fill_result!`]. This will return a value of type
//! [`Result<T, brim::Error>`], where `T` is any type that implements
//! [`Output`](output::Output). Here's some examples:
//!
//! ```
//! # #[cfg(unix)]
//! # {
//! use brim::prelude::*;
//!
//! let result: Result<(), Error> = fill_result!("does-not-exist/filled.txt", TargetSize(10));
//! let error_message = format!("{}", result.unwrap_err());
//! assert_eq!(
//!     error_message,
//!     "does-not-exist/filled.txt: No such file or directory (os error 2)"
//! );
//! # }
//! ```
//!
//! [`fill_result!`] can also be combined with `?` to handle errors in an
//! idiomatic way, for example:
//!
//! ```
//! use brim::prelude::*;
//!
//! fn generate_test_data() -> Result<(), Error> {
//!     # let temp_dir = tempfile::TempDir::new().unwrap();
//!     # std::env::set_current_dir(&temp_dir).unwrap();
//!     let (): () = fill_result!("small.txt", TargetSize(1000))?;
//!     let (): () = fill_result!("large.txt", TargetSize(100_000))?;
//!     Ok(())
//! }
//! # generate_test_data().unwrap();
//! ```
//!
//! A failed run is aborted immediately: nothing is retried, and
//! whatever was written before the failure remains on disk.
//!
//! # Alternative interface
//!
//! `brim` also provides an alternative interface to fill files
//! through methods on the [`Input`](input::Input) trait:
//! [`.fill()`](input::Input::fill), [`.fill_unit()`](input::Input::fill_unit)
//! and [`.fill_result()`](input::Input::fill_result).
//! These methods can be invoked on all values whose types implement
//! [`Input`](input::Input).
//! When using these methods, it's especially useful that
//! [`Input`](input::Input) is implemented by tuples.
//! They work analog to [`fill!`], [`fill_unit!`] and [`fill_result!`].
//! Here are some examples:
//!
//! ```
//! # let temp_dir = tempfile::TempDir::new().unwrap();
//! # std::env::set_current_dir(&temp_dir).unwrap();
//! use brim::prelude::*;
//!
//! let FinalSize(size) = ("filled.txt", TargetSize(1000), Block("x")).fill();
//! assert_eq!(size, 1000);
//!
//! ("filled.txt", TargetSize(1000)).fill_unit();
//!
//! let result: Result<(), Error> = ("filled.txt", Block("")).fill_result();
//! assert_eq!(
//!     result.unwrap_err().to_string(),
//!     "the text block must not be empty"
//! );
//! ```

#[doc(hidden)]
pub mod config;
#[doc(hidden)]
pub mod context;
pub mod error;
#[doc(hidden)]
pub mod fill_result;
pub mod input;
mod macros;
pub mod output;
pub mod prelude;

pub use config::{BYTES_PER_GIB, DEFAULT_OUTPUT_PATH, DEFAULT_TARGET_SIZE, LOREM_BLOCK};
pub use error::Error;
