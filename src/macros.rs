/// Fill a file with a repeated text block. See the module documentation
/// on how to use it.
#[macro_export]
macro_rules! fill {
    ($($args:tt)*) => {{
        let context = $crate::context::Context::production();
        $crate::error::panic_on_error($crate::fill_result_with_context!(context, $($args)*))
    }}
}

/// Like [`fill!`], but fixes the return type to `()`.
/// It's named after [the unit type `()`](https://doc.rust-lang.org/std/primitive.unit.html).
///
/// ```
/// # let temp_dir = tempfile::TempDir::new().unwrap();
/// # std::env::set_current_dir(&temp_dir).unwrap();
/// use brim::prelude::*;
///
/// fill_unit!("./filled.txt", TargetSize(1000));
/// ```
#[macro_export]
macro_rules! fill_unit {
    ($($args:tt)*) => {{
        let () = $crate::fill!($($args)*);
    }}
}

/// Like [`fill!`], but fixes the return type to [`Result<T, Error>`],
/// where `T` is any type that implements [`Output`](crate::output::Output).
#[macro_export]
macro_rules! fill_result {
    ($($args:tt)*) => {{
        let context = $crate::context::Context::production();
        $crate::fill_result_with_context!(context, $($args)*)
    }}
}

#[doc(hidden)]
#[macro_export]
macro_rules! fill_result_with_context {
    ($context:expr, $($args:tt)*) => {{
        let mut config = $crate::config::Config::default();
        $crate::configure!(config: config, args: $($args)*);
        $crate::fill_result::FillResult::run_fill($context, config)
    }}
}

#[doc(hidden)]
#[macro_export]
macro_rules! configure {
    (config: $config:ident, args: ) => {};
    (config: $config:ident, args: $head:expr $(,)?) => {
        $crate::input::Input::configure($head, &mut $config);
    };
    (config: $config:ident, args: $head:expr, $($tail:tt)*) => {
        $crate::input::Input::configure($head, &mut $config);
        $crate::configure!(config: $config, args: $($tail)*);
    };
}
