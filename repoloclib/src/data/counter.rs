//! Raw line counting.
//!
//! A line is anything terminated by `\n`, `\r\n` or a lone `\r`, plus a
//! final unterminated segment if the file does not end with a terminator.
//! Content is never decoded: terminators are ASCII bytes and cannot occur
//! inside a multi-byte UTF-8 sequence, so files with invalid or foreign
//! encodings are counted the same way a lossy text reader would count them.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;

/// Count the lines of a file.
///
/// The handle is opened, fully read and closed before returning.
pub fn count_file_lines(path: impl AsRef<Path>) -> io::Result<u64> {
    let file = File::open(path)?;
    count_lines(file)
}

/// Count the lines produced by a reader.
pub fn count_lines<R: Read>(reader: R) -> io::Result<u64> {
    let mut reader = BufReader::new(reader);
    let mut lines = 0u64;
    // A segment has started but not been terminated yet.
    let mut open = false;
    // The previous chunk ended in `\r`; a leading `\n` completes that `\r\n`.
    let mut after_cr = false;

    loop {
        let buf = match reader.fill_buf() {
            Ok(buf) => buf,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        if buf.is_empty() {
            break;
        }

        for &byte in buf {
            match byte {
                b'\n' if after_cr => after_cr = false,
                b'\n' => {
                    lines += 1;
                    open = false;
                }
                b'\r' => {
                    lines += 1;
                    open = false;
                    after_cr = true;
                }
                _ => {
                    open = true;
                    after_cr = false;
                }
            }
        }

        let len = buf.len();
        reader.consume(len);
    }

    if open {
        lines += 1;
    }
    Ok(lines)
}
