use crate::core::models::configuration::Configuration;
use std::error::Error;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Defines the interface for writing a finished configuration to a file format.
///
/// Implementors handle format-specific serialization. Writers are pure
/// functions of the configuration; the output resource is held for the
/// duration of a single write call only.
pub trait ConfigFile {
    /// The error type for write operations.
    type Error: Error + From<io::Error>;

    /// Writes a configuration to a writer.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails or I/O operations encounter
    /// issues.
    fn write_to(config: &Configuration, writer: &mut impl Write) -> Result<(), Self::Error>;

    /// Writes a configuration to a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or writing fails. No
    /// partial file is guaranteed clean on failure.
    fn write_to_path<P: AsRef<Path>>(config: &Configuration, path: P) -> Result<(), Self::Error> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        Self::write_to(config, &mut writer)?;
        writer.flush()?;
        Ok(())
    }
}
