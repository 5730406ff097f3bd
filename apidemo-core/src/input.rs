use std::io::{self, BufRead, Write};

/// Where selection tokens and action parameters come from.
pub trait LineSource {
    /// Next line without its terminator; `Ok(None)` once input is exhausted.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;

    /// True if the source draws `prompt` itself (e.g. an interactive widget).
    fn shows_prompt(&self) -> bool {
        false
    }
}

/// Plain line reader over any buffered stream: piped stdin, a file, a byte slice.
#[derive(Debug)]
pub struct ReaderSource<R> {
    reader: R,
}

impl<R: BufRead> ReaderSource<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> LineSource for ReaderSource<R> {
    fn read_line(&mut self, _prompt: &str) -> io::Result<Option<String>> {
        let mut buf = Vec::new();
        if self.reader.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }

        if buf.ends_with(b"\n") {
            buf.pop();
            if buf.ends_with(b"\r") {
                buf.pop();
            }
        }
        // Undecodable bytes become U+FFFD; the line is then just an unknown token.
        Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
    }
}

/// Show `prompt` on `out` unless the source renders it, then read one line.
pub fn ask<S, W>(input: &mut S, out: &mut W, prompt: &str) -> io::Result<Option<String>>
where
    S: LineSource + ?Sized,
    W: Write + ?Sized,
{
    if !input.shows_prompt() {
        write!(out, "{prompt}")?;
        out.flush()?;
    }
    input.read_line(prompt)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_only_the_line_terminator() {
        let mut src = ReaderSource::new(" 1 \r\nberlin\nlast".as_bytes());
        assert_eq!(src.read_line("").unwrap().as_deref(), Some(" 1 "));
        assert_eq!(src.read_line("").unwrap().as_deref(), Some("berlin"));
        assert_eq!(src.read_line("").unwrap().as_deref(), Some("last"));
        assert_eq!(src.read_line("").unwrap(), None);
    }

    #[test]
    fn empty_line_is_not_end_of_input() {
        let mut src = ReaderSource::new("\n".as_bytes());
        assert_eq!(src.read_line("").unwrap().as_deref(), Some(""));
        assert_eq!(src.read_line("").unwrap(), None);
    }

    #[test]
    fn invalid_utf8_is_replaced_not_an_error() {
        let mut src = ReaderSource::new(&b"\xff\xfe\n7\n"[..]);
        assert_eq!(src.read_line("").unwrap().as_deref(), Some("\u{FFFD}\u{FFFD}"));
        assert_eq!(src.read_line("").unwrap().as_deref(), Some("7"));
        assert_eq!(src.read_line("").unwrap(), None);
    }

    #[test]
    fn ask_echoes_prompt_for_plain_readers() {
        let mut src = ReaderSource::new("3\n".as_bytes());
        let mut out = Vec::new();
        let answer = ask(&mut src, &mut out, "Enter choice (1-7): ").unwrap();
        assert_eq!(answer.as_deref(), Some("3"));
        assert_eq!(String::from_utf8(out).unwrap(), "Enter choice (1-7): ");
    }
}
