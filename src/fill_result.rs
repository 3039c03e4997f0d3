use crate::{
    config::{Config, BYTES_PER_GIB},
    context::Context,
    error::Error,
    output::Output,
};
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::PathBuf,
};

#[doc(hidden)]
#[derive(Clone, Debug)]
pub struct FillResult {
    pub(crate) output_path: PathBuf,
    pub(crate) block_size: u64,
    pub(crate) bytes_written: u64,
}

impl FillResult {
    pub fn run_fill<Stdout, Stderr, T>(
        context: Context<Stdout, Stderr>,
        mut config: Config,
    ) -> Result<T, Error>
    where
        Stdout: Write,
        Stderr: Write,
        T: Output,
    {
        <T as Output>::configure(&mut config);
        let result = FillResult::fill(context, &config)?;
        T::from_fill_result(&config, &result)
    }

    fn fill<Stdout, Stderr>(
        mut context: Context<Stdout, Stderr>,
        config: &Config,
    ) -> Result<Self, Error>
    where
        Stdout: Write,
        Stderr: Write,
    {
        if config.block.is_empty() {
            return Err(Error::EmptyBlock);
        }
        let block = config.block.as_bytes();
        let block_size = config.block_size();
        if config.log_fill {
            writeln!(context.stderr, "+ {}", config.describe())
                .map_err(|error| Error::file_io_error(config, error))?;
        }
        let file = File::create(&config.output_path)
            .map_err(|error| Error::file_io_error(config, error))?;
        let mut writer = BufWriter::new(file);
        let mut bytes_written = 0;
        while bytes_written < config.target_size {
            writer
                .write_all(block)
                .map_err(|error| Error::file_io_error(config, error))?;
            bytes_written += block_size;
        }
        writer
            .flush()
            .map_err(|error| Error::file_io_error(config, error))?;
        drop(writer);
        let result = FillResult {
            output_path: config.output_path.clone(),
            block_size,
            bytes_written,
        };
        if config.print_summary {
            writeln!(context.stdout, "{}", result.summary_line())
                .map_err(|error| Error::file_io_error(config, error))?;
        }
        Ok(result)
    }

    pub(crate) fn summary_line(&self) -> String {
        format!(
            "Archivo generado: {} ({:.2} GB)",
            self.output_path.display(),
            self.bytes_written as f64 / BYTES_PER_GIB as f64
        )
    }
}
