// std imports
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;

// local imports
use crate::error::{Error, Result};
use crate::filtering::NameFilter;

// ---

pub type Input = Box<dyn BufRead + Send>;

/// Where names are read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputReference {
    Stdin,
    File(PathBuf),
}

impl InputReference {
    pub fn open(&self) -> Result<Input> {
        match self {
            Self::Stdin => Ok(Box::new(BufReader::new(io::stdin()))),
            Self::File(path) => match File::open(path) {
                Ok(file) => Ok(Box::new(BufReader::new(file))),
                Err(err) if err.kind() == io::ErrorKind::NotFound => Err(Error::FileNotFound {
                    filename: path.to_string_lossy().into_owned(),
                }),
                Err(err) => Err(err.into()),
            },
        }
    }
}

// ---

pub struct Options {
    pub filter: NameFilter,
    pub invert: bool,
    pub count: bool,
}

pub struct App {
    options: Options,
}

impl App {
    pub fn new(options: Options) -> Self {
        Self { options }
    }

    /// Reads names line by line and writes the selected ones, or their number, to `output`.
    pub fn run<I, R>(&self, inputs: I, output: &mut dyn Write) -> Result<usize>
    where
        I: IntoIterator<Item = R>,
        R: BufRead,
    {
        let mut selected = 0;
        let mut total = 0;

        for input in inputs {
            for line in input.lines() {
                let line = line?;
                let name = line.strip_suffix('\r').unwrap_or(&line);
                total += 1;

                if self.selects(name) {
                    selected += 1;
                    if !self.options.count {
                        writeln!(output, "{}", name)?;
                    }
                }
            }
        }

        if self.options.count {
            writeln!(output, "{}", selected)?;
        }
        output.flush()?;

        log::debug!("selected {} of {} names", selected, total);

        Ok(selected)
    }

    #[inline]
    fn selects(&self, name: &str) -> bool {
        self.options.filter.accepts(name) != self.options.invert
    }
}
