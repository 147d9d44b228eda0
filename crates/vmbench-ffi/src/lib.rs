//! Foreign-call boundary for the native-call benchmark.
//!
//! Loads a pre-built shared library at runtime and resolves its exported
//! `fib(i64) -> i64` once, up front. The benchmark then measures calls
//! through the resolved pointer, so lookup cost never lands inside the
//! timed region. A missing or incompatible library is fatal; there is no
//! fallback.

#![warn(clippy::all)]
#![warn(missing_docs)]

use std::path::{Path, PathBuf};

use libloading::Library;
use thiserror::Error;

/// Signature of the exported Fibonacci routine.
type FibFn = unsafe extern "C" fn(i64) -> i64;

const FIB_SYMBOL: &[u8] = b"fib";

/// Errors from loading or resolving the native library.
#[derive(Debug, Error)]
pub enum FfiError {
    /// The shared library file is absent or not loadable.
    #[error("failed to load native library {path}: {source}")]
    Load {
        /// Path the load was attempted from.
        path: PathBuf,
        /// Underlying loader error.
        #[source]
        source: libloading::Error,
    },

    /// The library loaded but does not export `fib`.
    #[error("native library {path} does not export `fib`: {source}")]
    MissingSymbol {
        /// Path the library was loaded from.
        path: PathBuf,
        /// Underlying loader error.
        #[source]
        source: libloading::Error,
    },
}

/// Result alias for foreign-call operations.
pub type FfiResult<T> = std::result::Result<T, FfiError>;

/// A loaded shared library with its `fib` export resolved.
#[derive(Debug)]
pub struct FibLibrary {
    // Resolved out of `_library`; valid for as long as the library stays
    // loaded, which the field below guarantees.
    fib: FibFn,
    _library: Library,
}

impl FibLibrary {
    /// Load the shared library at `path` and resolve `fib`.
    ///
    /// Relative paths resolve against the working directory, matching the
    /// benchmark's fixed-relative-path contract.
    pub fn load(path: impl AsRef<Path>) -> FfiResult<Self> {
        let path = path.as_ref();
        // SAFETY: loading executes the library's initialization routines.
        // The fib library carries none beyond the C runtime's.
        let library = unsafe { Library::new(path) }.map_err(|source| FfiError::Load {
            path: path.to_path_buf(),
            source,
        })?;
        // SAFETY: the export is declared `extern "C" fn(i64) -> i64`; the
        // `FibFn` signature must match it exactly.
        let fib = unsafe { library.get::<FibFn>(FIB_SYMBOL) }
            .map(|symbol| *symbol)
            .map_err(|source| FfiError::MissingSymbol {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(Self {
            fib,
            _library: library,
        })
    }

    /// Invoke the native routine with `n`.
    pub fn fib(&self, n: i64) -> i64 {
        // SAFETY: the pointer was resolved from `_library`, which stays
        // loaded for the lifetime of `self`.
        unsafe { (self.fib)(n) }
    }
}

/// The fixed relative path loaded when no override is given: the platform's
/// library filename for `vmbench_fib`, in the working directory.
pub fn default_library_path() -> PathBuf {
    PathBuf::from(libloading::library_filename("vmbench_fib"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_library_is_a_load_error() {
        let err = FibLibrary::load("./no-such-library.so").unwrap_err();
        match err {
            FfiError::Load { ref path, .. } => {
                assert_eq!(path, Path::new("./no-such-library.so"));
            }
            other => panic!("expected load error, got {other}"),
        }
    }

    #[test]
    fn load_error_names_the_path() {
        let err = FibLibrary::load("./no-such-library.so").unwrap_err();
        assert!(err.to_string().contains("no-such-library.so"));
    }

    #[test]
    fn default_path_is_relative() {
        let path = default_library_path();
        assert!(path.is_relative());
        assert!(path.to_string_lossy().contains("vmbench_fib"));
    }
}
