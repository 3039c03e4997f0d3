//! The [`Input`] trait that defines all possible inputs to a fill run.

use crate::{
    config::Config,
    context::Context,
    error::{panic_on_error, Error},
    fill_result::FillResult,
    output::Output,
};
use std::{
    ffi::{OsStr, OsString},
    io::Write,
    path::{Path, PathBuf},
};

/// All types that are possible arguments to [`fill!`], [`fill_unit!`] or
/// [`fill_result!`] must implement this trait.
/// This makes `brim` very flexible.
/// For example you can pass in the output path as a [`String`],
/// and tune the run with the provided wrapper types:
///
/// ```
/// # let temp_dir = tempfile::TempDir::new().unwrap();
/// # std::env::set_current_dir(&temp_dir).unwrap();
/// use brim::prelude::*;
///
/// let path: String = "filled.txt".to_string();
/// let FinalSize(size) = fill!(path, TargetSize(1000), Block("lorem ipsum\n"));
/// assert_eq!(size, 1008);
/// ```
///
/// For more documentation on all possible input types,
/// see the documentation for the individual impls of [`Input`].
/// Here's a non-exhaustive list of the most commonly used types to get you started:
///
/// - [`String`] and [`&str`] (and the other path-like types,
///   [`PathBuf`] and [`&Path`]) to set the output path,
/// - [`TargetSize`] to set the size the file has to reach,
/// - [`Block`] to replace the built-in Lorem-ipsum block,
/// - [`Quiet`] to suppress the summary line, and
/// - [`LogFill`].
///
/// [`String`]: trait.Input.html#impl-Input-for-String
/// [`&str`]: trait.Input.html#impl-Input-for-%26str
/// [`PathBuf`]: trait.Input.html#impl-Input-for-PathBuf
/// [`&Path`]: trait.Input.html#impl-Input-for-%26Path
///
/// ## Tuples
///
/// `brim` also implements [`Input`] for tuples of types that themselves
/// implement [`Input`]. Instead of passing multiple arguments to
/// [`fill!`], they can be passed in a single tuple:
///
/// ```
/// # let temp_dir = tempfile::TempDir::new().unwrap();
/// # std::env::set_current_dir(&temp_dir).unwrap();
/// use brim::prelude::*;
///
/// let scaled_down = (TargetSize(1000), Block("lorem ipsum\n"));
/// let FinalSize(size) = fill!("filled.txt", scaled_down);
/// assert_eq!(size, 1008);
/// ```
///
/// This can be used to group arguments, and it makes it possible to
/// write wrappers around [`fill!`] without requiring the use of macros:
///
/// ```
/// # let temp_dir = tempfile::TempDir::new().unwrap();
/// # std::env::set_current_dir(&temp_dir).unwrap();
/// use brim::prelude::*;
///
/// fn fill_scaled<I: Input>(input: I) -> u64 {
///     let FinalSize(size) = fill!(TargetSize(1000), input);
///     size
/// }
///
/// let size = fill_scaled("a.txt");
/// assert_eq!(size, 446 * 3);
///
/// let size = fill_scaled(("b.txt", Block("x")));
/// assert_eq!(size, 1000);
/// ```
pub trait Input: Sized {
    /// Configures the given [`Config`](crate::config::Config) for the
    /// [`Input`] `self`. Usually you won't have to write your own custom
    /// impls for [`Input`], nor call this function yourself.
    /// So you can safely ignore this method.
    fn configure(self, config: &mut Config);

    /// `input.fill()` fills a file as configured by `input`.
    /// It's equivalent to `fill!(input)`.
    ///
    /// ```
    /// # let temp_dir = tempfile::TempDir::new().unwrap();
    /// # std::env::set_current_dir(&temp_dir).unwrap();
    /// use brim::prelude::*;
    ///
    /// let FinalSize(size) = ("filled.txt", TargetSize(1000)).fill();
    /// assert_eq!(size, 1338);
    /// ```
    #[rustversion::attr(since(1.46), track_caller)]
    fn fill<O>(self) -> O
    where
        O: Output,
    {
        panic_on_error(self.fill_result())
    }

    /// `input.fill_unit()` fills a file as configured by `input`.
    /// It's equivalent to `fill_unit!(input)`.
    ///
    /// ```
    /// # let temp_dir = tempfile::TempDir::new().unwrap();
    /// # std::env::set_current_dir(&temp_dir).unwrap();
    /// use brim::prelude::*;
    ///
    /// ("filled.txt", TargetSize(1000), Quiet).fill_unit();
    /// ```
    #[rustversion::attr(since(1.46), track_caller)]
    fn fill_unit(self) {
        self.fill()
    }

    /// `input.fill_result()` fills a file as configured by `input`.
    /// It's equivalent to `fill_result!(input)`.
    ///
    /// ```
    /// use brim::prelude::*;
    ///
    /// fn generate() -> Result<(), Error> {
    ///     # let temp_dir = tempfile::TempDir::new().unwrap();
    ///     # std::env::set_current_dir(&temp_dir).unwrap();
    ///     let FinalSize(size) = ("filled.txt", TargetSize(1000)).fill_result()?;
    ///     assert_eq!(size % 446, 0);
    ///     Ok(())
    /// }
    /// # generate().unwrap();
    /// ```
    fn fill_result<O>(self) -> Result<O, Error>
    where
        O: Output,
    {
        let context = Context::production();
        fill_result_with_context(context, self)
    }
}

pub(crate) fn fill_result_with_context<Stdout, Stderr, I, O>(
    context: Context<Stdout, Stderr>,
    input: I,
) -> Result<O, Error>
where
    Stdout: Write,
    Stderr: Write,
    I: Input,
    O: Output,
{
    let mut config = Config::default();
    input.configure(&mut config);
    FillResult::run_fill(context, config)
}

/// Blanket implementation for `&_`.
impl<T> Input for &T
where
    T: Input + Clone,
{
    #[doc(hidden)]
    fn configure(self, config: &mut Config) {
        self.clone().configure(config);
    }
}

/// Arguments of type [`OsString`] set the path of the output file.
/// If the path is given multiple times, the last one wins.
impl Input for OsString {
    #[doc(hidden)]
    fn configure(self, config: &mut Config) {
        config.output_path = PathBuf::from(self);
    }
}

/// Arguments of type [`&OsStr`] set the path of the output file.
///
/// [`&OsStr`]: std::ffi::OsStr
impl Input for &OsStr {
    #[doc(hidden)]
    fn configure(self, config: &mut Config) {
        self.to_os_string().configure(config);
    }
}

/// Arguments of type [`&str`] set the path of the output file.
/// This is especially useful because it allows you to use string literals:
///
/// ```
/// # let temp_dir = tempfile::TempDir::new().unwrap();
/// # std::env::set_current_dir(&temp_dir).unwrap();
/// use brim::prelude::*;
///
/// fill_unit!("filled.txt", TargetSize(1000));
/// assert!(std::path::Path::new("filled.txt").exists());
/// ```
impl Input for &str {
    #[doc(hidden)]
    fn configure(self, config: &mut Config) {
        OsStr::new(self).configure(config);
    }
}

/// Arguments of type [`String`] set the path of the output file.
impl Input for String {
    #[doc(hidden)]
    fn configure(self, config: &mut Config) {
        OsString::from(self).configure(config);
    }
}

/// Arguments of type [`PathBuf`] set the path of the output file.
///
/// ```
/// # let temp_dir = tempfile::TempDir::new().unwrap();
/// # std::env::set_current_dir(&temp_dir).unwrap();
/// use brim::prelude::*;
/// use std::path::PathBuf;
///
/// let path: PathBuf = PathBuf::from("filled.txt");
/// fill_unit!(path, TargetSize(1000), Quiet);
/// ```
impl Input for PathBuf {
    #[doc(hidden)]
    fn configure(self, config: &mut Config) {
        self.into_os_string().configure(config);
    }
}

/// Arguments of type [`&Path`] set the path of the output file.
///
/// ```
/// # let temp_dir = tempfile::TempDir::new().unwrap();
/// # std::env::set_current_dir(&temp_dir).unwrap();
/// use brim::prelude::*;
/// use std::path::Path;
///
/// let path: &Path = Path::new("filled.txt");
/// fill_unit!(path, TargetSize(1000));
/// ```
///
/// [`&Path`]: std::path::Path
impl Input for &Path {
    #[doc(hidden)]
    fn configure(self, config: &mut Config) {
        self.as_os_str().to_os_string().configure(config);
    }
}

impl Input for () {
    #[doc(hidden)]
    fn configure(self, _: &mut Config) {}
}

macro_rules! tuple_impl {
    ($($index:tt, $generics:ident,)+) => {
        impl<$($generics),+> Input for ($($generics,)+)
        where
            $($generics: Input,)+
        {
            #[doc(hidden)]
            fn configure(self, config: &mut Config) {
                $(<$generics as Input>::configure(self.$index, config);)+
            }
        }
    };
}

tuple_impl!(0, A,);
tuple_impl!(0, A, 1, B,);
tuple_impl!(0, A, 1, B, 2, C,);
tuple_impl!(0, A, 1, B, 2, C, 3, D,);
tuple_impl!(0, A, 1, B, 2, C, 3, D, 4, E,);
tuple_impl!(0, A, 1, B, 2, C, 3, D, 4, E, 5, F,);
tuple_impl!(0, A, 1, B, 2, C, 3, D, 4, E, 5, F, 6, G,);
tuple_impl!(0, A, 1, B, 2, C, 3, D, 4, E, 5, F, 6, G, 7, H,);

/// All elements of the given [`Vec`] are used as inputs to the fill run.
/// Same as passing in the elements separately.
///
/// ```
/// # let temp_dir = tempfile::TempDir::new().unwrap();
/// # std::env::set_current_dir(&temp_dir).unwrap();
/// use brim::prelude::*;
///
/// let settings: Vec<TargetSize> = vec![TargetSize(1000)];
/// fill_unit!("filled.txt", settings);
/// ```
impl<T> Input for Vec<T>
where
    T: Input,
{
    #[doc(hidden)]
    fn configure(self, config: &mut Config) {
        for t in self.into_iter() {
            t.configure(config);
        }
    }
}

/// Similar to the implementation for [`Vec<T>`].
/// All elements of the array will be used as inputs.
///
/// Only works on rust version `1.51` and up.
#[rustversion::since(1.51)]
impl<T, const N: usize> Input for [T; N]
where
    T: Input,
{
    #[doc(hidden)]
    fn configure(self, config: &mut Config) {
        #[rustversion::before(1.59)]
        fn array_to_iter<T, const N: usize>(array: [T; N]) -> impl Iterator<Item = T> {
            std::array::IntoIter::new(array)
        }
        #[rustversion::since(1.59)]
        fn array_to_iter<T, const N: usize>(array: [T; N]) -> impl Iterator<Item = T> {
            IntoIterator::into_iter(array)
        }

        for t in array_to_iter(self) {
            t.configure(config);
        }
    }
}

/// Similar to the implementation for [`Vec<T>`].
/// All elements of the slice will be used as inputs.
impl<T> Input for &[T]
where
    T: Input + Clone,
{
    #[doc(hidden)]
    fn configure(self, config: &mut Config) {
        self.to_vec().configure(config);
    }
}

/// Replaces the built-in Lorem-ipsum block with the contained text.
/// The block's size in bytes is computed from its UTF-8 encoding,
/// so non-ASCII blocks are accounted for correctly.
///
/// ```
/// # let temp_dir = tempfile::TempDir::new().unwrap();
/// # std::env::set_current_dir(&temp_dir).unwrap();
/// use brim::prelude::*;
///
/// let BlocksWritten(blocks) = fill!("filled.txt", TargetSize(1000), Block("äöü\n"));
/// assert_eq!(blocks, 143);
/// ```
#[derive(Debug, Clone)]
pub struct Block<T: AsRef<str>>(pub T);

impl<T> Input for Block<T>
where
    T: AsRef<str>,
{
    #[doc(hidden)]
    fn configure(self, config: &mut Config) {
        config.block = self.0.as_ref().to_owned();
    }
}

/// Sets the target size of the run in bytes. The output file grows in
/// whole blocks until it reaches the target, so the final size is the
/// smallest multiple of the block size that is greater than or equal to
/// the target.
///
/// ```
/// # let temp_dir = tempfile::TempDir::new().unwrap();
/// # std::env::set_current_dir(&temp_dir).unwrap();
/// use brim::prelude::*;
///
/// let FinalSize(size) = fill!("filled.txt", TargetSize(1000), Block("x"));
/// assert_eq!(size, 1000);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TargetSize(pub u64);

impl Input for TargetSize {
    #[doc(hidden)]
    fn configure(self, config: &mut Config) {
        config.target_size = self.0;
    }
}

/// By default a successful fill run prints a one-line summary to
/// `stdout`. Passing in [`Quiet`] as an argument suppresses it.
///
/// ```
/// # let temp_dir = tempfile::TempDir::new().unwrap();
/// # std::env::set_current_dir(&temp_dir).unwrap();
/// use brim::prelude::*;
///
/// // prints nothing
/// fill_unit!("filled.txt", TargetSize(1000), Quiet);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Quiet;

impl Input for Quiet {
    #[doc(hidden)]
    fn configure(self, config: &mut Config) {
        config.print_summary = false;
    }
}

/// Passing in [`LogFill`] as an argument to `brim` will cause it
/// to log the fill run (output path and target size) to `stderr`.
/// (This is similar to `bash`'s `-x` option.)
///
/// ```
/// # let temp_dir = tempfile::TempDir::new().unwrap();
/// # std::env::set_current_dir(&temp_dir).unwrap();
/// use brim::prelude::*;
///
/// fill_unit!(LogFill, "filled.txt", TargetSize(1000), Quiet);
/// // writes '+ fill filled.txt to 1000 bytes' to stderr
/// ```
#[derive(Debug, Clone, Copy)]
pub struct LogFill;

impl Input for LogFill {
    #[doc(hidden)]
    fn configure(self, config: &mut Config) {
        config.log_fill = true;
    }
}
