#[test]
fn fills_files() {
    use brim::prelude::*;
    use tempfile::TempDir;

    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("filled.txt");
    fill_unit!(&path, TargetSize(1000), Quiet);
    assert_eq!(std::fs::metadata(&path).unwrap().len(), 1338);
}

#[test]
#[should_panic(expected = "fill!: the text block must not be empty")]
fn panics_on_empty_blocks() {
    use brim::prelude::*;

    fill_unit!(Block(""));
}

#[test]
fn capturing_the_final_size() {
    use brim::prelude::*;
    use tempfile::TempDir;

    let temp_dir = TempDir::new().unwrap();
    let FinalSize(size) = fill!(
        temp_dir.path().join("filled.txt"),
        TargetSize(1000),
        Block("lorem ipsum\n"),
        Quiet
    );
    assert_eq!(size, 1008);
}

#[test]
fn file_contents_are_repetitions_of_the_block() {
    use brim::prelude::*;
    use tempfile::TempDir;

    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("filled.txt");
    let BlocksWritten(blocks) = fill!(&path, TargetSize(1000), Block("lorem ipsum\n"), Quiet);
    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        "lorem ipsum\n".repeat(blocks as usize)
    );
}

#[test]
fn result_succeeding() {
    use brim::prelude::*;
    use tempfile::TempDir;

    fn test() -> Result<(), Error> {
        let temp_dir = TempDir::new().unwrap();
        let (): () = fill_result!(temp_dir.path().join("filled.txt"), TargetSize(1000), Quiet)?;
        Ok(())
    }

    test().unwrap();
}

#[test]
fn result_failing() {
    use brim::prelude::*;

    fn test() -> Result<(), Error> {
        let (): () = fill_result!(Block(""))?;
        Ok(())
    }

    assert_eq!(
        test().unwrap_err().to_string(),
        "the text block must not be empty"
    );
}

#[test]
fn box_dyn_errors_succeeding() {
    use brim::prelude::*;
    use tempfile::TempDir;

    type MyResult<T> = Result<T, Box<dyn std::error::Error>>;

    fn test() -> MyResult<()> {
        let temp_dir = TempDir::new().unwrap();
        let (): () = fill_result!(temp_dir.path().join("filled.txt"), TargetSize(1000), Quiet)?;
        Ok(())
    }

    test().unwrap();
}

#[test]
fn box_dyn_errors_failing() {
    use brim::prelude::*;

    type MyResult<T> = Result<T, Box<dyn std::error::Error>>;

    fn test() -> MyResult<()> {
        let (): () = fill_result!(Block(""))?;
        Ok(())
    }

    assert_eq!(
        test().unwrap_err().to_string(),
        "the text block must not be empty"
    );
}

#[test]
fn user_supplied_errors_succeeding() {
    use brim::prelude::*;
    use tempfile::TempDir;

    #[derive(Debug)]
    enum Error {
        Brim(brim::Error),
    }

    impl From<brim::Error> for Error {
        fn from(error: brim::Error) -> Self {
            Error::Brim(error)
        }
    }

    fn test() -> Result<(), Error> {
        let temp_dir = TempDir::new().unwrap();
        let (): () = fill_result!(temp_dir.path().join("filled.txt"), TargetSize(1000), Quiet)?;
        Ok(())
    }

    test().unwrap();
}

#[test]
fn user_supplied_errors_failing() {
    use brim::prelude::*;
    use std::fmt::Display;

    #[derive(Debug)]
    enum Error {
        Brim(brim::Error),
    }

    impl From<brim::Error> for Error {
        fn from(error: brim::Error) -> Self {
            Error::Brim(error)
        }
    }

    impl Display for Error {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            match self {
                Error::Brim(error) => write!(f, "brim error: {}", error),
            }
        }
    }

    fn test() -> Result<(), Error> {
        let (): () = fill_result!(Block(""))?;
        Ok(())
    }

    assert_eq!(
        test().unwrap_err().to_string(),
        "brim error: the text block must not be empty"
    );
}

mod fill_interface {
    #[test]
    fn result_succeeding() {
        use brim::prelude::*;
        use tempfile::TempDir;

        fn test() -> Result<(), Error> {
            let temp_dir = TempDir::new().unwrap();
            (temp_dir.path().join("filled.txt"), TargetSize(1000), Quiet).fill_result::<()>()?;
            Ok(())
        }

        test().unwrap();
    }

    #[test]
    fn result_failing() {
        use brim::prelude::*;

        fn test() -> Result<(), Error> {
            Block("").fill_result::<()>()?;
            Ok(())
        }

        assert_eq!(
            test().unwrap_err().to_string(),
            "the text block must not be empty"
        );
    }

    #[test]
    fn fill_unit() {
        use brim::prelude::*;
        use tempfile::TempDir;

        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("filled.txt");
        (&path, TargetSize(1000), Quiet).fill_unit();
        assert!(path.exists());
    }
}
