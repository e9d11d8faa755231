use std::cell::RefCell;
use std::io::Write;
use std::rc::Rc;

use super::Stream;

/// Destination for every line the lint passes print.
///
/// `Terminal` writes to the process streams. `Buffer` interleaves both
/// streams into one buffer in write order, which is what a user watching
/// the terminal sees.
#[derive(Debug, Clone, Default)]
pub enum Console {
    #[default]
    Terminal,
    Buffer(Rc<RefCell<Vec<u8>>>),
}

impl Console {
    #[must_use]
    pub fn buffer() -> Self {
        Self::Buffer(Rc::new(RefCell::new(Vec::new())))
    }

    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Terminal)
    }

    pub fn write_line(&self, stream: Stream, line: &str) {
        match self {
            Self::Terminal => match stream {
                Stream::Stdout => {
                    let _ = writeln!(std::io::stdout().lock(), "{line}");
                }
                Stream::Stderr => {
                    let _ = writeln!(std::io::stderr().lock(), "{line}");
                }
            },
            Self::Buffer(buf) => {
                let _ = writeln!(buf.borrow_mut(), "{line}");
            }
        }
    }

    /// Everything written so far; empty for the terminal.
    #[must_use]
    pub fn captured(&self) -> String {
        match self {
            Self::Terminal => String::new(),
            Self::Buffer(buf) => String::from_utf8_lossy(&buf.borrow()).into_owned(),
        }
    }
}
