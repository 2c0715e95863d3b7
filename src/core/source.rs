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

//! Locations of a package's sources on the index, derived from its name alone.

use crate::error::{Error, LastError};
use url::Url;

/// Returns the directory prefix packages are sharded under: the first two
/// characters of the name, or the whole name if it is a single character.
pub fn prefix(name: &str) -> Result<&str, Error> {
    match name.char_indices().nth(2) {
        Some((i, _)) => Ok(&name[..i]),
        None if name.is_empty() == false => Ok(name),
        None => Err(Error::InvalidName),
    }
}

/// Returns the path of the package's directory, eg "/packages/co/cower/".
pub fn package_dir(name: &str) -> Result<String, Error> {
    Ok(format!("/packages/{}/{}/", prefix(name)?, name))
}

fn join(origin: &Url, path: &str) -> Result<Url, Error> {
    origin
        .join(path)
        .map_err(|e| Error::InvalidOrigin(origin.to_string(), LastError(e.to_string())))
}

/// Builds the link to the package's source tarball.
pub fn tarball_url(origin: &Url, name: &str) -> Result<Url, Error> {
    join(origin, &format!("{}{}.tar.gz", package_dir(name)?, name))
}

/// Builds the link to the package's PKGBUILD.
pub fn pkgbuild_url(origin: &Url, name: &str) -> Result<Url, Error> {
    join(origin, &format!("{}PKGBUILD", package_dir(name)?))
}

#[cfg(test)]
mod test {
    use super::*;

    fn origin() -> Url {
        Url::parse("https://aur.archlinux.org").unwrap()
    }

    #[test]
    fn two_char_prefix() {
        assert_eq!(prefix("foo"), Ok("fo"));
        assert_eq!(prefix("fo"), Ok("fo"));
        assert_eq!(
            tarball_url(&origin(), "foo").unwrap().as_str(),
            "https://aur.archlinux.org/packages/fo/foo/foo.tar.gz"
        );
        assert_eq!(
            pkgbuild_url(&origin(), "foo").unwrap().as_str(),
            "https://aur.archlinux.org/packages/fo/foo/PKGBUILD"
        );
    }

    #[test]
    fn short_names() {
        assert_eq!(prefix("a"), Ok("a"));
        assert_eq!(
            tarball_url(&origin(), "a").unwrap().as_str(),
            "https://aur.archlinux.org/packages/a/a/a.tar.gz"
        );
        assert_eq!(prefix(""), Err(Error::InvalidName));
        assert_eq!(tarball_url(&origin(), ""), Err(Error::InvalidName));
    }

    #[test]
    fn multibyte_prefix() {
        assert_eq!(prefix("épée"), Ok("ép"));
    }
}
