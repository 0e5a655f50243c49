//! Module `commands`
//!
//! The static command table and the structured frames produced by the
//! classifier. The table is built once and never mutated.

use std::collections::HashMap;
use std::sync::LazyLock;

pub const QUIT: &str = "/quit";
pub const LIST_USERS: &str = "/users";
pub const SET_NAME: &str = "/username";

/// Kinds of command a client can issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CommandKind {
    Quit,
    ListUsers,
    SetName,
}

impl CommandKind {
    /// Whether the command literal is followed by an argument.
    pub fn takes_argument(self) -> bool {
        matches!(self, CommandKind::SetName)
    }
}

/// Literal -> kind. Quit and list-users match the whole trimmed frame;
/// set-name matches as a prefix.
pub(crate) static COMMANDS: LazyLock<HashMap<&'static str, CommandKind>> = LazyLock::new(|| {
    let mut commands = HashMap::new();
    commands.insert(QUIT, CommandKind::Quit);
    commands.insert(LIST_USERS, CommandKind::ListUsers);
    commands.insert(SET_NAME, CommandKind::SetName);
    commands
});

/// Command literals in the order they are advertised to new clients.
pub fn command_literals() -> Vec<&'static str> {
    let mut literals: Vec<&'static str> = COMMANDS.keys().copied().collect();
    literals.sort_by_key(|literal| COMMANDS[literal]);
    literals
}

/// A recognized command with its argument, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Quit,
    ListUsers,
    SetName(String),
}

impl Command {
    /// Build a command of `kind`. The argument is ignored by kinds that take none.
    pub fn new(kind: CommandKind, argument: String) -> Self {
        match kind {
            CommandKind::Quit => Command::Quit,
            CommandKind::ListUsers => Command::ListUsers,
            CommandKind::SetName => Command::SetName(argument),
        }
    }
}

/// One classified read from a connection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Frame {
    Command(Command),
    /// Plain chat text, kept verbatim (including trailing newline).
    Message(String),
    /// Looked like a command but matched nothing in the table.
    Unrecognized(String),
}

impl Frame {
    /// Frames after which the listener stops reading.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            Frame::Command(Command::Quit) | Frame::Unrecognized(_)
        )
    }
}
