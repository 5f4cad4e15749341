//! # Error reporting for reading of matrix files
//!
//! A collection of enums and structures describing any problems encountered during reading and
//! parsing.
use std::error::Error;
use std::fmt;
use std::fmt::Display;
use std::io;

/// An `Import` error is created when an error was encountered during IO or parsing.
///
/// It is the highest error in the io error hierarchy.
#[derive(Debug)]
pub enum Import {
    /// The file extension of the provided file path is not known or supported.
    ///
    /// The contained `String` is a message for the end user.
    FileExtension(String),
    /// The file to read isn't found, or the reading of file couldn't start or was interrupted.
    IO(io::Error),
    /// Contents of the file could not be parsed into a matrix.
    ///
    /// # Note
    ///
    /// If the described matrix is inconsistent, that will not be represented with this error. This
    /// variant should only be created for syntactically incorrect files.
    Parse(Parse),
    /// There is a logical inconsistency in the matrix described by a file.
    ///
    /// For example, an element might lie outside of the declared dimensions.
    Inconsistency(Inconsistency),
}

impl Display for Import {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Import::FileExtension(message) => message.fmt(f),
            Import::IO(error) => error.fmt(f),
            Import::Parse(error) => error.fmt(f),
            Import::Inconsistency(error) => error.fmt(f),
        }
    }
}

impl Error for Import {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Import::FileExtension(_) => None,
            Import::IO(error) => Some(error),
            Import::Parse(error) => Some(error),
            Import::Inconsistency(error) => Some(error),
        }
    }
}

impl From<Parse> for Import {
    fn from(error: Parse) -> Self {
        Import::Parse(error)
    }
}

impl From<Inconsistency> for Import {
    fn from(error: Inconsistency) -> Self {
        Import::Inconsistency(error)
    }
}

impl From<io::Error> for Import {
    fn from(error: io::Error) -> Self {
        Import::IO(error)
    }
}

/// Result of a parsing step.
pub type ParseResult<T> = Result<T, Parse>;

/// A `Parse` error represents all errors encountered during parsing.
///
/// It may recursively hold more `Parse` errors to provide more detail. At the end of this chain,
/// there may be a file location containing a line number and line, at which the error was caused,
/// or an error of another kind that caused it.
#[derive(Debug)]
pub struct Parse {
    description: String,
    source: Option<Source>,
}

/// Cause of a `Parse` error.
#[derive(Debug)]
enum Source {
    FileLocation(usize, String),
    Parse(Box<Parse>),
    Other(Box<dyn Error + Send + Sync>),
}

impl Parse {
    /// Create a new `Parse` error with only a description.
    pub fn new(description: impl Into<String>) -> Self {
        Self { description: description.into(), source: None }
    }

    /// Create a new `Parse` error caused at a specific line.
    ///
    /// # Arguments
    ///
    /// * `description`: What's wrong at the moment of creation.
    /// * `file_location`: Line number and line that caused the error.
    pub fn with_location(description: impl Into<String>, file_location: FileLocation) -> Self {
        let (line_number, line) = file_location;
        Self {
            description: description.into(),
            source: Some(Source::FileLocation(line_number, line.to_string())),
        }
    }

    /// Wrap a foreign error, e.g. from parsing a number.
    pub fn wrap_other(source: impl Error + Send + Sync + 'static, description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            source: Some(Source::Other(Box::new(source))),
        }
    }

    /// Wrap a new `Parse` error around this one.
    #[must_use]
    pub fn wrap(self, description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            source: Some(Source::Parse(Box::new(self))),
        }
    }

    /// Get all descriptions in the chain, starting with this one.
    fn chain_description(&self) -> Vec<String> {
        let mut descriptions = vec![self.description.clone()];

        match &self.source {
            None => {},
            Some(Source::FileLocation(line_number, line)) => {
                descriptions.push(format!("\tCaused at line\t{}:\t{}", line_number, line));
            },
            Some(Source::Parse(error)) => descriptions.extend(error.chain_description()),
            Some(Source::Other(error)) => descriptions.push(error.to_string()),
        }

        descriptions
    }
}

impl Display for Parse {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "ParseError: {}", self.chain_description().join("\n"))
    }
}

impl Error for Parse {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match &self.source {
            Some(Source::Parse(error)) => Some(error.as_ref()),
            Some(Source::Other(error)) => Some(error.as_ref()),
            Some(Source::FileLocation(..)) | None => None,
        }
    }
}

/// A `FileLocation` references a line in the file by its line number, counting from one, and
/// contains a reference to the line itself.
pub type FileLocation<'a> = (usize, &'a str);

/// An `Inconsistency` is returned when a well formed file describes an impossible matrix.
#[derive(Debug)]
pub struct Inconsistency {
    description: String,
}

impl Inconsistency {
    /// Wrap a text in an `Inconsistency`.
    ///
    /// # Arguments
    ///
    /// * `description`: A human-readable text meant for the end user.
    pub fn new(description: impl Into<String>) -> Self {
        Self { description: description.into() }
    }
}

impl Display for Inconsistency {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Inconsistency: {}", self.description)
    }
}

impl Error for Inconsistency {}
