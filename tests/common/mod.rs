//! Common utils for integration tests
//!
//!

use error_stack::Result;
use murmur3::murmur3_32;
use std::{
    io::BufReader,
    path::{Path, PathBuf},
};
use tunesweep::error::SweepError;
use tunesweep::*;

pub struct ItEnv {
    config: Config,
    test_description: String,
    test_dir: PathBuf,
}

impl ItEnv {
    pub fn new(test_name_raw: &str) -> Self {
        let test_description = test_name_raw.to_string();
        let mut read = BufReader::new(test_description.as_bytes());
        let test_name = format!(
            "test-{}",
            murmur3_32(&mut read, test_description.len().try_into().unwrap()).unwrap()
        );
        // create test directory
        let root_path = Path::new("target/test_out");
        if !root_path.exists() {
            std::fs::create_dir_all(root_path).unwrap();
        }
        let path = root_path.join(test_name);
        if path.exists() {
            std::fs::remove_dir_all(&path).unwrap();
        }
        std::fs::create_dir_all(&path).unwrap();

        let mut config = Config::default();
        config.verbosity = Verbosity::Quiet;
        config.base_dir = path.clone();

        Self {
            test_description,
            test_dir: path,
            config,
        }
    }

    #[inline]
    pub fn execute<F>(&mut self, f: F)
    where
        F: FnOnce(&mut Self) -> (),
    {
        f(self)
    }

    #[inline]
    pub fn cfg(&mut self) -> &mut Config {
        &mut self.config
    }

    #[inline]
    #[allow(dead_code)]
    pub fn dir(&self) -> &Path {
        &self.test_dir
    }

    #[inline]
    pub fn run(&self) -> Result<(), SweepError> {
        sweep(self.config.clone())
    }

    /// Create a file under the test directory, creating parent
    /// directories as needed.
    pub fn set_file(&self, file_name: &str, contents: &str) {
        let path = self.test_dir.join(file_name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(&path, contents).unwrap();
    }

    #[inline]
    #[allow(dead_code)]
    pub fn make_dir(&self, dir_name: &str) {
        std::fs::create_dir_all(self.test_dir.join(dir_name)).unwrap();
    }

    #[inline]
    #[allow(dead_code)]
    pub fn delete_dir(&self, dir_name: &str) {
        std::fs::remove_dir_all(self.test_dir.join(dir_name)).unwrap();
    }

    #[inline]
    pub fn assert_path_exists(&self, path_name: &str, exists: bool) {
        assert_eq!(
            exists,
            self.test_dir.join(path_name).exists(),
            "file existence test failed in test `{}` ({})",
            self.test_description,
            self.test_dir.display()
        );
    }

    pub fn assert_dir_empty(&self, dir_name: &str) {
        let path = self.test_dir.join(dir_name);
        assert!(
            path.is_dir(),
            "expected directory `{}` does not exist in test `{}` ({})",
            dir_name,
            self.test_description,
            self.test_dir.display()
        );
        let count = std::fs::read_dir(&path).unwrap().count();
        assert_eq!(
            0,
            count,
            "directory `{}` is not empty in test `{}` ({})",
            dir_name,
            self.test_description,
            self.test_dir.display()
        );
    }
}

macro_rules! testit {
    ($test_name:ident, $fnonce:expr) => {
        #[test]
        #[allow(non_snake_case)]
        fn $test_name() {
            let mut env = ItEnv::new(stringify!($test_name));
            env.execute($fnonce);
        }
    };
}

pub(crate) use testit;
