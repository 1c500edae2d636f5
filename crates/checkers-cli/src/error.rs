//! Console command errors.

/// Errors that can occur while reading or parsing console commands.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    /// A command is missing a required argument.
    #[error("{command}: missing {argument}")]
    MissingArgument {
        /// The command being parsed.
        command: &'static str,
        /// What was expected.
        argument: &'static str,
    },

    /// A numeric argument could not be parsed.
    #[error("invalid {field}: {value}")]
    InvalidNumber {
        /// Which argument was being parsed.
        field: &'static str,
        /// The offending text.
        value: String,
    },

    /// The row/column pair lies off the board.
    #[error("square ({row},{col}) is off the board")]
    OffBoard { row: u8, col: u8 },

    /// `setoption` named an option the engine does not have.
    #[error("unknown option: {name}")]
    UnknownOption {
        /// The option name as given.
        name: String,
    },

    /// `setoption` gave a value outside the option's range.
    #[error("invalid value for {name}: {value}")]
    InvalidOptionValue {
        /// The option name.
        name: &'static str,
        /// The rejected value.
        value: String,
    },

    /// An I/O error occurred on the console streams.
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}
