/// ## Built-in operations
///
/// Every keyword the interpreter knows at startup. These are registered
/// in the symbol table under their keyword and dispatched by matching on
/// the variant, so each one is guaranteed a handler.
///
/// Operands are read from the operand stack in postfix order. For
/// example: `10 X SET` binds `X`, then `X @ 1 + X !` increments it.
///
/// See <https://en.wikipedia.org/wiki/Reverse_Polish_notation>

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    /// Write the operand stack to the diagnostic sink.
    Dump,

    // *** Arithmetic
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Neg,

    // *** Output
    /// Pop and print.
    Dot,
    Sp,
    Cr,

    // *** Stack shuffling
    Dup,
    Drop,
    Swap,
    Rot,

    // *** Variables
    /// `value name SET` binds a new variable.
    Set,
    /// `name @` pushes the variable's value.
    Fetch,
    /// `value name !` rebinds an existing variable.
    Store,

    // *** Comparison and logic
    Lt,
    LtEq,
    Eq,
    NotEq,
    GtEq,
    Gt,
    And,
    Or,
    Not,

    // *** Control flow
    IfThen,
    Else,
    EndIf,
    Do,
}

/// Closes a `DO` body. Not an operation of its own: it is only ever
/// recognized while a loop body is being captured.
pub const UNTIL: &str = "UNTIL";

impl Op {
    pub const ALL: [Op; 30] = [
        Op::Dump,
        Op::Add,
        Op::Sub,
        Op::Mul,
        Op::Div,
        Op::Mod,
        Op::Neg,
        Op::Dot,
        Op::Sp,
        Op::Cr,
        Op::Dup,
        Op::Drop,
        Op::Swap,
        Op::Rot,
        Op::Set,
        Op::Fetch,
        Op::Store,
        Op::Lt,
        Op::LtEq,
        Op::Eq,
        Op::NotEq,
        Op::GtEq,
        Op::Gt,
        Op::And,
        Op::Or,
        Op::Not,
        Op::IfThen,
        Op::Else,
        Op::EndIf,
        Op::Do,
    ];

    pub fn keyword(self) -> &'static str {
        use Op::*;
        match self {
            Dump => "DUMP",
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Mod => "%",
            Neg => "NEG",
            Dot => ".",
            Sp => "SP",
            Cr => "CR",
            Dup => "DUP",
            Drop => "DROP",
            Swap => "SWAP",
            Rot => "ROT",
            Set => "SET",
            Fetch => "@",
            Store => "!",
            Lt => "<",
            LtEq => "<=",
            Eq => "==",
            NotEq => "!=",
            GtEq => ">=",
            Gt => ">",
            And => "AND",
            Or => "OR",
            Not => "NOT",
            IfThen => "IFTHEN",
            Else => "ELSE",
            EndIf => "ENDIF",
            Do => "DO",
        }
    }

    /// Minimum number of operands that must be on the stack.
    pub fn arity(self) -> usize {
        use Op::*;
        match self {
            Dump | Sp | Cr | Else | EndIf | Do => 0,
            Neg | Dot | Dup | Drop | Fetch | Not | IfThen => 1,
            Add | Sub | Mul | Div | Mod | Swap | Set | Store | Lt | LtEq | Eq | NotEq | GtEq
            | Gt | And | Or => 2,
            Rot => 3,
        }
    }

    pub fn underflow_message(self) -> String {
        let need = match self.arity() {
            1 => "NEED ONE PARAMETER",
            2 => "NEED TWO PARAMETERS",
            _ => "NEED THREE PARAMETERS",
        };
        format!("{} FOR {}", need, self)
    }
}

impl std::fmt::Display for Op {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.keyword())
    }
}
