//! Output plumbing shared by the commands
//!
//! The summary is either written straight to stdout or buffered into the
//! minus pager, which takes over the terminal once the report is complete.

use is_terminal::IsTerminal;
use minus::Pager;
use std::io::{self, Write};

const NO_PAGER_ENV: &str = "NO_PAGER";

/// Adapts the minus pager to `std::io::Write`
pub struct PagerWriter {
    pager: Pager,
}

impl PagerWriter {
    pub fn new(pager: Pager) -> Self {
        PagerWriter { pager }
    }
}

impl Write for PagerWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let text =
            std::str::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        self.pager.push_str(text).map_err(io::Error::other)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

pub enum OutputTarget {
    Stdout,
    Pager(Pager),
}

impl OutputTarget {
    /// Page only for an interactive terminal, unless `NO_PAGER` is set
    pub fn detect() -> Self {
        if std::env::var_os(NO_PAGER_ENV).is_some() || !io::stdout().is_terminal() {
            OutputTarget::Stdout
        } else {
            OutputTarget::Pager(Pager::new())
        }
    }

    pub fn writer(&self) -> Box<dyn Write> {
        match self {
            OutputTarget::Stdout => Box::new(io::stdout()),
            OutputTarget::Pager(pager) => Box::new(PagerWriter::new(pager.clone())),
        }
    }

    /// Hand the buffered report to the pager; a no-op for stdout
    pub fn finish(self) -> anyhow::Result<()> {
        match self {
            OutputTarget::Stdout => Ok(()),
            OutputTarget::Pager(pager) => {
                minus::page_all(pager)?;
                Ok(())
            }
        }
    }
}
