use std::fmt::Write;
use std::path::Path;

/// A path is printable when it is UTF-8 and holds no control characters.
pub fn is_printable(path: &Path) -> bool {
    path.to_str().is_some_and(|s| !s.chars().any(char::is_control))
}

/// Render a path with every byte outside printable ASCII as `\ooo`.
///
/// Backslashes are doubled so the output can be unescaped unambiguously.
pub fn escape_octal(path: &Path) -> String {
    let bytes = path.as_os_str().as_encoded_bytes();
    let mut escaped = String::with_capacity(bytes.len());
    for &b in bytes {
        match b {
            b'\\' => escaped.push_str("\\\\"),
            0x20..=0x7e => escaped.push(b as char),
            _ => {
                let _ = write!(escaped, "\\{b:03o}");
            }
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_paths_are_printable() {
        assert!(is_printable(Path::new("/tmp/some dir/file.txt")));
        assert!(is_printable(Path::new("caf\u{e9}/na\u{ef}ve")));
    }

    #[test]
    fn control_characters_are_not_printable() {
        assert!(!is_printable(Path::new("bad\nname")));
        assert!(!is_printable(Path::new("tab\there")));
        assert!(!is_printable(Path::new("bell\u{7}")));
    }

    #[test]
    fn escapes_control_bytes_in_octal() {
        assert_eq!(escape_octal(Path::new("a\nb")), "a\\012b");
        assert_eq!(escape_octal(Path::new("\u{1b}[0m")), "\\033[0m");
        assert_eq!(escape_octal(Path::new("back\\slash")), "back\\\\slash");
    }

    #[test]
    fn escapes_each_byte_of_multibyte_characters() {
        assert_eq!(escape_octal(Path::new("\u{e9}")), "\\303\\251");
    }

    #[cfg(unix)]
    #[test]
    fn invalid_utf8_is_escaped() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let path = Path::new(OsStr::from_bytes(b"dir/\xff\xfe"));
        assert!(!is_printable(path));
        assert_eq!(escape_octal(path), "dir/\\377\\376");
    }
}
