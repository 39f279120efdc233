use std::io::{self, Write};

use crate::{
    bytes::units::SizeFormat,
    output::escape::{escape_octal, is_printable},
    scan::RootSize,
};

/// Write one `<path> <size>` line per root, in order.
///
/// Roots whose path is not printable go to `err` with the path octal-escaped.
pub fn write_report<O, E>(
    roots: &[RootSize],
    format: SizeFormat,
    out: &mut O,
    err: &mut E,
) -> io::Result<()>
where
    O: Write,
    E: Write,
{
    for root in roots {
        let size = format.format(root.size);
        if is_printable(&root.path) {
            writeln!(out, "{} {}", root.path.display(), size)?;
        } else {
            writeln!(err, "{} {}", escape_octal(&root.path), size)?;
        }
    }
    out.flush()?;
    err.flush()
}

pub fn print_report(roots: &[RootSize], format: SizeFormat) -> io::Result<()> {
    let stdout = io::stdout();
    let stderr = io::stderr();
    write_report(roots, format, &mut stdout.lock(), &mut stderr.lock())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn root(path: &str, size: u64) -> RootSize {
        RootSize {
            path: PathBuf::from(path),
            size,
        }
    }

    #[test]
    fn lines_keep_input_order() {
        let roots = [root("b", 2048), root("a", 42), root("b", 2048)];
        let (mut out, mut err) = (Vec::new(), Vec::new());
        write_report(&roots, SizeFormat::Raw, &mut out, &mut err).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "b 2048\na 42\nb 2048\n");
        assert!(err.is_empty());
    }

    #[test]
    fn human_format_is_applied() {
        let roots = [root("x", 1536), root("y", 7)];
        let (mut out, mut err) = (Vec::new(), Vec::new());
        write_report(&roots, SizeFormat::Human, &mut out, &mut err).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "x 1.5K\ny 7\n");
    }

    #[test]
    fn unprintable_paths_go_to_error_stream() {
        let roots = [root("ok", 1), root("bad\tname", 2)];
        let (mut out, mut err) = (Vec::new(), Vec::new());
        write_report(&roots, SizeFormat::Raw, &mut out, &mut err).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "ok 1\n");
        assert_eq!(String::from_utf8(err).unwrap(), "bad\\011name 2\n");
    }
}
