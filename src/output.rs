//! The [`Output`] trait that defines all possible outputs of a fill run.

use crate::{config::Config, error::Error, fill_result::FillResult};

/// All possible return types of [`fill!`] or [`fill_result!`] must
/// implement this trait.
/// This return-type polymorphism makes `brim` very flexible.
/// For example, if you want to know how many bytes ended up in the
/// output file, you can use [`FinalSize`]:
///
/// ```
/// # let temp_dir = tempfile::TempDir::new().unwrap();
/// # std::env::set_current_dir(&temp_dir).unwrap();
/// use brim::prelude::*;
///
/// let FinalSize(size) = fill!("filled.txt", TargetSize(1000), Block("lorem ipsum\n"));
/// assert_eq!(size, 1008);
/// ```
///
/// But if instead you want the number of blocks the file consists of,
/// you can use [`BlocksWritten`]:
///
/// ```
/// # let temp_dir = tempfile::TempDir::new().unwrap();
/// # std::env::set_current_dir(&temp_dir).unwrap();
/// use brim::prelude::*;
///
/// let BlocksWritten(blocks) = fill!("filled.txt", TargetSize(1000), Block("lorem ipsum\n"));
/// assert_eq!(blocks, 84);
/// ```
///
/// Also, [`Output`] is implemented for tuples.
/// You can use this to combine multiple return types that implement
/// [`Output`]. The following code for example retrieves the final size
/// _and_ the summary line:
///
/// ```
/// # let temp_dir = tempfile::TempDir::new().unwrap();
/// # std::env::set_current_dir(&temp_dir).unwrap();
/// use brim::prelude::*;
///
/// let (FinalSize(size), Summary(line)) =
///     fill!("filled.txt", TargetSize(1000), Block("lorem ipsum\n"));
/// assert_eq!(size, 1008);
/// assert_eq!(line, "Archivo generado: filled.txt (0.00 GB)");
/// ```
pub trait Output: Sized {
    #[doc(hidden)]
    fn configure(config: &mut Config);

    #[doc(hidden)]
    fn from_fill_result(config: &Config, result: &FillResult) -> Result<Self, Error>;
}

/// Use this when you don't need any result from the fill run.
///
/// ```
/// # let temp_dir = tempfile::TempDir::new().unwrap();
/// # std::env::set_current_dir(&temp_dir).unwrap();
/// use brim::prelude::*;
///
/// let () = fill!("filled.txt", TargetSize(1000));
/// ```
///
/// Since [`fill!`] (and [`fill_result!`]) use return type polymorphism,
/// you have to make sure the compiler can figure out which return type
/// you want to use. In this example that happens through the `let () =`.
/// So you can't just omit that.
///
/// See also [`fill_unit!`] for a more convenient way to use `()` as the
/// return type.
impl Output for () {
    #[doc(hidden)]
    fn configure(_config: &mut Config) {}

    #[doc(hidden)]
    fn from_fill_result(_config: &Config, _result: &FillResult) -> Result<Self, Error> {
        Ok(())
    }
}

macro_rules! tuple_impl {
    ($($generics:ident,)+) => {
        impl<$($generics),+> Output for ($($generics,)+)
        where
            $($generics: Output,)+
        {
            #[doc(hidden)]
            fn configure(config: &mut Config) {
                $(<$generics as Output>::configure(config);)+
            }

            #[doc(hidden)]
            fn from_fill_result(config: &Config, result: &FillResult) -> Result<Self, Error> {
                Ok((
                    $(<$generics as Output>::from_fill_result(config, result)?,)+
                ))
            }
        }
    };
}

tuple_impl!(A,);
tuple_impl!(A, B,);
tuple_impl!(A, B, C,);
tuple_impl!(A, B, C, D,);
tuple_impl!(A, B, C, D, E,);
tuple_impl!(A, B, C, D, E, F,);

/// Returns the number of bytes in the completed output file.
/// This is always a whole multiple of the block size, and always at
/// least the target size.
///
/// It's recommended to pattern-match to get to the inner [`u64`].
/// This will make sure that the return type can be inferred.
/// Here's an example:
///
/// ```
/// # let temp_dir = tempfile::TempDir::new().unwrap();
/// # std::env::set_current_dir(&temp_dir).unwrap();
/// use brim::prelude::*;
///
/// let FinalSize(size) = fill!("filled.txt", TargetSize(1000), Block("x"));
/// assert_eq!(size, 1000);
/// ```
#[derive(Debug, PartialEq, Clone)]
pub struct FinalSize(pub u64);

impl Output for FinalSize {
    #[doc(hidden)]
    fn configure(_config: &mut Config) {}

    #[doc(hidden)]
    fn from_fill_result(_config: &Config, result: &FillResult) -> Result<Self, Error> {
        Ok(FinalSize(result.bytes_written))
    }
}

/// Returns how many times the block was written to the output file,
/// i.e. the final size divided by the block size.
///
/// ```
/// # let temp_dir = tempfile::TempDir::new().unwrap();
/// # std::env::set_current_dir(&temp_dir).unwrap();
/// use brim::prelude::*;
///
/// let BlocksWritten(blocks) = fill!("filled.txt", TargetSize(1000), Block("123"));
/// assert_eq!(blocks, 334);
/// ```
#[derive(Debug, PartialEq, Clone)]
pub struct BlocksWritten(pub u64);

impl Output for BlocksWritten {
    #[doc(hidden)]
    fn configure(_config: &mut Config) {}

    #[doc(hidden)]
    fn from_fill_result(_config: &Config, result: &FillResult) -> Result<Self, Error> {
        Ok(BlocksWritten(result.bytes_written / result.block_size))
    }
}

/// Returns the one-line summary of the fill run, without a trailing
/// newline. This also suppresses printing of the summary to the
/// parent's `stdout`. (Which would be the default when not using
/// [`Summary`] as the return value.)
///
/// ```
/// # let temp_dir = tempfile::TempDir::new().unwrap();
/// # std::env::set_current_dir(&temp_dir).unwrap();
/// use brim::prelude::*;
///
/// let Summary(line) = fill!("filled.txt", TargetSize(1000), Block("x"));
/// assert_eq!(line, "Archivo generado: filled.txt (0.00 GB)");
/// ```
#[derive(Debug, PartialEq, Clone)]
pub struct Summary(pub String);

impl Output for Summary {
    #[doc(hidden)]
    fn configure(config: &mut Config) {
        config.print_summary = false;
    }

    #[doc(hidden)]
    fn from_fill_result(_config: &Config, result: &FillResult) -> Result<Self, Error> {
        Ok(Summary(result.summary_line()))
    }
}
