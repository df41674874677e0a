//! Output plumbing shared by the command-line front end
//!
//! Long listings (`log`, `global-log`) go through the `minus` pager when
//! stdout is a terminal; everything else, and every redirected run, writes
//! straight to stdout.

use derive_new::new;
use is_terminal::IsTerminal;
use minus::Pager;
use std::io::{self, Write};

/// Environment variable that disables the pager when set
pub const NO_PAGER_ENV: &str = "NO_PAGER";

/// `Write` adapter over a `minus` pager
#[derive(new)]
pub struct PagerWriter {
    pager: Pager,
}

impl PagerWriter {
    pub fn pager(&self) -> &Pager {
        &self.pager
    }
}

impl Write for PagerWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.pager
            .push_str(String::from_utf8_lossy(buf))
            .map_err(io::Error::other)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Where a command's output goes
pub enum OutputTarget {
    Pager(PagerWriter),
    Stdout(io::Stdout),
}

impl OutputTarget {
    /// Page long output on a terminal unless `NO_PAGER` is set
    pub fn choose(long_output: bool) -> Self {
        let interactive = io::stdout().is_terminal() && std::env::var_os(NO_PAGER_ENV).is_none();

        if long_output && interactive {
            OutputTarget::Pager(PagerWriter::new(Pager::new()))
        } else {
            OutputTarget::Stdout(io::stdout())
        }
    }

    /// Hand buffered output to the pager, or flush stdout
    pub fn finish(self) -> anyhow::Result<()> {
        match self {
            OutputTarget::Pager(writer) => {
                minus::page_all(writer.pager().clone())?;
                Ok(())
            }
            OutputTarget::Stdout(mut stdout) => {
                stdout.flush()?;
                Ok(())
            }
        }
    }
}

impl Write for OutputTarget {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            OutputTarget::Pager(writer) => writer.write(buf),
            OutputTarget::Stdout(stdout) => stdout.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            OutputTarget::Pager(writer) => writer.flush(),
            OutputTarget::Stdout(stdout) => stdout.flush(),
        }
    }
}
