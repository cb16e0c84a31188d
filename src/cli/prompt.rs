//! Interactive prompts

use std::io::IsTerminal;

use inquire::{InquireError, Select, Text};

use crate::error::Result;

/// Asks for a new project name, unless one was given on the command line
pub fn project_name(given: Option<String>) -> Result<String> {
    match given {
        Some(name) => Ok(name),
        None => {
            require_terminal()?;
            Ok(Text::new("Project name:").prompt()?)
        }
    }
}

/// Lets the user choose one of `names`, unless a name was given on the command line
pub fn choose_project(message: &str, given: Option<String>, names: &[String]) -> Result<String> {
    match given {
        Some(name) => Ok(name),
        None => {
            require_terminal()?;
            Ok(Select::new(message, names.to_vec()).prompt()?)
        }
    }
}

// inquire needs an interactive stdin
fn require_terminal() -> Result<()> {
    if std::io::stdin().is_terminal() {
        Ok(())
    } else {
        Err(InquireError::NotTTY.into())
    }
}
