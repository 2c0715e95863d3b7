//
//  Copyright (C) 2022-2024  Chase Ruskin
//
//  This program is free software: you can redistribute it and/or modify
//  it under the terms of the GNU General Public License as published by
//  the Free Software Foundation, either version 3 of the License, or
//  (at your option) any later version.
//
//  This program is distributed in the hope that it will be useful,
//  but WITHOUT ANY WARRANTY; without even the implied warranty of
//  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
//  GNU General Public License for more details.
//
//  You should have received a copy of the GNU General Public License
//  along with this program.  If not, see <http://www.gnu.org/licenses/>.
//

use colored::Colorize;
use std::{fmt::Display, path::PathBuf};

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("failed to reach {0:?}: {1}")]
    Network(String, LastError),
    #[error("failed to decode response from {0:?}: {1}")]
    Decode(String, LastError),
    #[error("the package index rejected the request: {0}")]
    Rpc(LastError),
    #[error("some packages were not found ({0} of {1} requested){2}")]
    PackagesNotFound(usize, usize, Hint),
    #[error("package name cannot be empty")]
    InvalidName,
    #[error("{0} requires {1}{2}")]
    MissingArguments(String, String, Hint),
    #[error("failed to load configuration {0:?}: {1}")]
    ConfigNotLoaded(PathBuf, LastError),
    #[error("invalid origin {0:?}: {1}")]
    InvalidOrigin(String, LastError),
    #[error("failed to detect user's home directory; please set the SEEKAUR_HOME environment variable")]
    MissingHomeDir,
}

#[derive(Debug, PartialEq)]
pub struct LastError(pub String);

impl Display for LastError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", Error::lowerize(self.0.to_string()))
    }
}

impl Error {
    pub fn lowerize(s: String) -> String {
        // get the first word
        let first_word = match s.split_whitespace().next() {
            Some(w) => w,
            None => return s,
        };
        // retain punctuation if the first word is all-caps and longer than 1 character
        if first_word.len() > 1
            && first_word
                .chars()
                .find(|c| c.is_ascii_lowercase() == true)
                .is_none()
        {
            s.to_string()
        } else {
            s.char_indices()
                .map(|(i, c)| if i == 0 { c.to_ascii_lowercase() } else { c })
                .collect()
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum Hint {
    SearchFirst,
    CommandHelp(String),
}

impl Display for Hint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let message = match self {
            Self::SearchFirst => {
                String::from("use `seekaur search` to find the exact name of a package")
            }
            Self::CommandHelp(cmd) => {
                format!("use `seekaur help {}` to read more about the command", cmd)
            }
        };
        write!(f, "\n\n{}: {}", "hint".green(), Error::lowerize(message))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn lowerize_first_letter() {
        assert_eq!(
            Error::lowerize(String::from("Couldn't resolve host name")),
            "couldn't resolve host name"
        );
        // acronyms are left alone
        assert_eq!(
            Error::lowerize(String::from("EOF while parsing a value")),
            "EOF while parsing a value"
        );
        assert_eq!(Error::lowerize(String::new()), "");
    }

    #[test]
    fn hint_follows_message() {
        let e = Error::PackagesNotFound(1, 3, Hint::SearchFirst);
        let text = e.to_string();
        assert!(text.starts_with("some packages were not found (1 of 3 requested)\n\n"));
        assert!(text.ends_with("use `seekaur search` to find the exact name of a package"));
    }
}
