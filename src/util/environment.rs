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

use crate::util::anyerror::AnyError;
use std::str::FromStr;

// seekaur environment variables
pub const SEEKAUR_HOME: &str = "SEEKAUR_HOME";
pub const SEEKAUR_ORIGIN: &str = "SEEKAUR_ORIGIN";
pub const SEEKAUR_LOG: &str = "SEEKAUR_LOG";

/// Default directory name placed under the user's home directory.
pub const DEFAULT_HOME_DIR: &str = ".seekaur";

/// Reads an environment variable, treating an empty value as unset.
pub fn read(key: &str) -> Option<String> {
    match std::env::var(key) {
        Ok(v) if v.is_empty() == false => Some(v),
        _ => None,
    }
}

/// Controls when terminal output is colorized.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum ColorMode {
    Always,
    Never,
    Auto,
}

impl ColorMode {
    /// Applies the mode to the global `colored` state.
    pub fn apply(&self) {
        match self {
            Self::Always => colored::control::set_override(true),
            Self::Never => colored::control::set_override(false),
            Self::Auto => (),
        }
    }
}

impl FromStr for ColorMode {
    type Err = AnyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "always" => Ok(Self::Always),
            "never" => Ok(Self::Never),
            "auto" => Ok(Self::Auto),
            _ => Err(AnyError(format!(
                "value must be 'auto', 'always', or 'never' but got '{}'",
                s
            ))),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn color_mode_from_str() {
        assert_eq!(ColorMode::from_str("always"), Ok(ColorMode::Always));
        assert_eq!(ColorMode::from_str("never"), Ok(ColorMode::Never));
        assert_eq!(ColorMode::from_str("auto"), Ok(ColorMode::Auto));
        assert!(ColorMode::from_str("sometimes").is_err());
    }
}
