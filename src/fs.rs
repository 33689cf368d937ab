use std::error::Error;
use std::fs::File;
use std::io::prelude::*;
use std::path::Path;

use log::debug;

use crate::config::Format;
use crate::level::Level;
use crate::parser;
use crate::LoadLevel;

pub(crate) fn read_file<P: AsRef<Path>>(path: P) -> Result<String, Box<dyn Error>> {
    let mut file = File::open(path)?;

    let mut contents = String::new();
    file.read_to_string(&mut contents)?;
    Ok(contents)
}

impl LoadLevel for Path {
    fn load_level(&self) -> Result<Level, Box<dyn Error>> {
        debug!("Loading {}", self.display());
        let level = parser::parse(&read_file(self)?)?;
        Ok(level)
    }

    fn load_level_format(&self, format: Format) -> Result<Level, Box<dyn Error>> {
        debug!("Loading {} as {}", self.display(), format);
        let level = parser::parse_format(&read_file(self)?, format)?;
        Ok(level)
    }
}

impl LoadLevel for str {
    fn load_level(&self) -> Result<Level, Box<dyn Error>> {
        Path::new(self).load_level()
    }

    fn load_level_format(&self, format: Format) -> Result<Level, Box<dyn Error>> {
        Path::new(self).load_level_format(format)
    }
}
