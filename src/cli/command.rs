use std::str::FromStr;

use clap::Parser;

use crate::errors::AppError;

#[derive(Parser, Debug)]
#[command(name = "contact-desk", version, about = "Interactive contact list manager")]
pub struct Cli {
    /// Preload a few sample contacts
    #[arg(long)]
    pub demo: bool,

    /// Skip the delete confirmation prompt
    #[arg(long, env = "CONTACT_DESK_ASSUME_YES")]
    pub assume_yes: bool,
}

/// One entry of the session menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    List,
    Edit,
    Delete,
    Filter,
    Stats,
    Export,
    Exit,
}

impl FromStr for MenuChoice {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(MenuChoice::Add),
            "2" => Ok(MenuChoice::List),
            "3" => Ok(MenuChoice::Edit),
            "4" => Ok(MenuChoice::Delete),
            "5" => Ok(MenuChoice::Filter),
            "6" => Ok(MenuChoice::Stats),
            "7" => Ok(MenuChoice::Export),
            "8" => Ok(MenuChoice::Exit),
            other => Err(AppError::ParseCommand(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_menu_entry() -> Result<(), AppError> {
        assert_eq!("1".parse::<MenuChoice>()?, MenuChoice::Add);
        assert_eq!(" 2 ".parse::<MenuChoice>()?, MenuChoice::List);
        assert_eq!("8".parse::<MenuChoice>()?, MenuChoice::Exit);
        Ok(())
    }

    #[test]
    fn rejects_unknown_input() {
        let err = "9".parse::<MenuChoice>().unwrap_err();
        assert!(matches!(err, AppError::ParseCommand(_)));

        assert!("add".parse::<MenuChoice>().is_err());
        assert!("".parse::<MenuChoice>().is_err());
    }
}
