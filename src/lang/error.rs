use super::LineNumber;

#[derive(Clone, PartialEq)]
pub struct Error {
    code: u16,
    line_number: LineNumber,
    message: String,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident, $line:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).in_line_number($line)
    };
    ($err:ident; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).message($msg)
    };
    ($err:ident, $line:expr; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_line_number($line)
            .message($msg)
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code: code as u16,
            line_number: None,
            message: String::new(),
        }
    }

    pub fn code(&self) -> u16 {
        self.code
    }

    pub fn line_number(&self) -> LineNumber {
        self.line_number
    }

    /// Input exhausted. This is how every session ends when nothing went wrong.
    pub fn is_end_of_program(&self) -> bool {
        self.code == ErrorCode::EndOfProgram as u16
    }

    /// Variable faults are reported and skipped instead of ending the session.
    pub fn is_recoverable(&self) -> bool {
        self.code == ErrorCode::AlreadyBound as u16 || self.code == ErrorCode::Unbound as u16
    }

    pub fn in_line_number(&self, line: LineNumber) -> Error {
        Error {
            code: self.code,
            line_number: line,
            message: self.message.clone(),
        }
    }

    pub fn message(&self, message: &str) -> Error {
        debug_assert_eq!(self.message.len(), 0);
        Error {
            code: self.code,
            line_number: self.line_number,
            message: message.to_string(),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Error::new(ErrorCode::IoError).message(&error.to_string())
    }
}

pub enum ErrorCode {
    EndOfProgram = 1,
    StackUnderflow = 2,
    StackOverflow = 3,
    AlreadyBound = 4,
    Unbound = 5,
    DivisionByZero = 6,
    Overflow = 7,
    ControlStructureMismatch = 8,
    Interrupted = 9,
    IoError = 50,
    InternalError = 51,
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self.to_string())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let code_str = match self.code {
            1 => "END OF PROGRAM",
            2 => "STACK UNDERFLOW",
            3 => "STACK OVERFLOW",
            4 => "VARIABLE ALREADY SET",
            5 => "VARIABLE DOES NOT EXIST",
            6 => "DIVISION BY ZERO",
            7 => "OVERFLOW",
            8 => "CONTROL STRUCTURE MISMATCH",
            9 => "BREAK",
            50 => "I/O ERROR",
            51 => "INTERNAL ERROR",
            _ => "",
        };
        let mut suffix = String::new();
        if let Some(line_number) = self.line_number {
            suffix.push_str(&format!(" IN {}", line_number));
        }
        if !self.message.is_empty() {
            suffix.push_str(&format!("; {}", self.message));
        }
        if code_str.is_empty() {
            write!(f, "PROGRAM ERROR {}{}", self.code, suffix)
        } else {
            write!(f, "{}{}", code_str, suffix)
        }
    }
}
