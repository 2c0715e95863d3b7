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

use std::error::Error;
use std::fmt::Display;

/// Quickly implement a custom/unique error message.
///
/// Used for one-off failures (bad option values, unparsable settings) that do
/// not deserve their own variant in [crate::error::Error].
#[derive(Debug, PartialEq)]
pub struct AnyError(pub String);

impl Error for AnyError {}

impl Display for AnyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Fault> for AnyError {
    fn from(value: Fault) -> Self {
        AnyError(value.to_string())
    }
}

impl From<&str> for AnyError {
    fn from(value: &str) -> Self {
        AnyError(value.to_string())
    }
}

impl From<String> for AnyError {
    fn from(value: String) -> Self {
        AnyError(value)
    }
}

/// Any boxed error that can bubble up to the command runner.
pub type Fault = Box<dyn Error>;

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn fault_keeps_message() {
        let fault: Fault = Box::new(AnyError::from("package index unreachable"));
        let back = AnyError::from(fault);
        assert_eq!(back, AnyError(String::from("package index unreachable")));
    }
}
