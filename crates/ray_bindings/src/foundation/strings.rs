//! String and length marshalling for native calls
//!
//! The native side expects narrow, NUL-terminated strings and `int` element
//! counts. Everything here fails before any native call is made.

use std::ffi::CString;
use std::path::Path;

use crate::error::{BindingError, BindingResult};

/// Convert text into a NUL-terminated native string
pub fn to_cstring(text: &str) -> BindingResult<CString> {
    CString::new(text).map_err(|_| BindingError::InteriorNul(text.to_string()))
}

/// Convert a path into a NUL-terminated native string
///
/// The native loaders take `const char*`, so the path must be valid UTF-8.
pub fn path_to_cstring(path: &Path) -> BindingResult<CString> {
    let text = path
        .to_str()
        .ok_or_else(|| BindingError::NonUtf8Path(path.to_path_buf()))?;
    to_cstring(text)
}

/// Convert an element count into the native `int` type
pub fn native_len(len: usize) -> BindingResult<i32> {
    i32::try_from(len).map_err(|_| BindingError::BufferTooLarge(len))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interior_nul_rejected() {
        let err = to_cstring("bad\0name").unwrap_err();
        assert!(matches!(err, BindingError::InteriorNul(ref s) if s == "bad\0name"));
    }

    #[test]
    fn test_path_round_trip() {
        let c = path_to_cstring(Path::new("assets/tex.png")).unwrap();
        assert_eq!(c.to_str().unwrap(), "assets/tex.png");
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_path_rejected() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let path = Path::new(OsStr::from_bytes(&[0x66, 0x6f, 0xff]));
        assert!(matches!(path_to_cstring(path), Err(BindingError::NonUtf8Path(_))));
    }

    #[test]
    fn test_native_len_overflow() {
        assert_eq!(native_len(4).unwrap(), 4);
        assert!(matches!(
            native_len(usize::MAX),
            Err(BindingError::BufferTooLarge(n)) if n == usize::MAX
        ));
    }
}
