use std::cell::RefCell;
use std::io::Write;
use std::rc::Rc;

use atty::Stream;
use termcolor::{Buffer, Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Where non-fatal diagnostics go
#[derive(Debug, Clone)]
pub enum Reporter {
    Stderr(ColorChoice),
    Capture(Rc<RefCell<Buffer>>),
}

impl Reporter {
    /// Reports to stderr, coloured only when stderr is a terminal
    pub fn stderr() -> Self {
        Self::stderr_with(detect_color(Stream::Stderr))
    }

    pub fn stderr_with(color: ColorChoice) -> Self {
        Reporter::Stderr(color)
    }

    /// Reports into an uncoloured in-memory buffer, readable with [`Reporter::captured`]
    pub fn capture() -> Self {
        Reporter::Capture(Rc::new(RefCell::new(Buffer::no_color())))
    }

    /// Text written so far, or `None` for a reporter that does not capture
    pub fn captured(&self) -> Option<String> {
        match self {
            Reporter::Stderr(_) => None,
            Reporter::Capture(buffer) => {
                Some(String::from_utf8_lossy(buffer.borrow().as_slice()).into_owned())
            }
        }
    }

    /// Writes `warn: <message>` on its own line. Write failures are dropped.
    pub fn warn(&self, message: impl AsRef<str>) {
        match self {
            Reporter::Stderr(color) => {
                let mut stderr = StandardStream::stderr(*color);
                write_warning(&mut stderr, message.as_ref());
            }
            Reporter::Capture(buffer) => {
                write_warning(&mut *buffer.borrow_mut(), message.as_ref());
            }
        }
    }
}

impl Default for Reporter {
    fn default() -> Self {
        Self::stderr()
    }
}

/// `Auto` when `stream` is a terminal, `Never` otherwise
pub fn detect_color(stream: Stream) -> ColorChoice {
    if atty::is(stream) {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    }
}

fn write_warning(out: &mut impl WriteColor, message: &str) {
    let mut yellow = ColorSpec::new();
    yellow.set_fg(Some(Color::Yellow)).set_bold(true);

    let _ = out.set_color(&yellow);
    let _ = write!(out, "warn: ");
    let _ = out.reset();
    let _ = writeln!(out, "{}", message);
}
