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

//! The fixed table of AUR package categories.

/// Category names indexed by their id; index 0 is never assigned by the index.
const CATEGORIES: [&str; 21] = [
    "", "none", "daemons", "devel", "editors", "emulators", "games", "gnome", "i18n", "kde",
    "lib", "modules", "multimedia", "network", "office", "science", "system", "x11", "xfce",
    "kernels", "fonts",
];

/// Rendered in place of a category id missing from the table.
pub const UNKNOWN: &str = "unknown";

/// Returns the category name for `id`, if the table defines it.
pub fn lookup(id: u32) -> Option<&'static str> {
    match id {
        0 => None,
        _ => CATEGORIES.get(id as usize).copied(),
    }
}

/// Returns the category name for `id`, falling back to [UNKNOWN].
pub fn name(id: u32) -> &'static str {
    match lookup(id) {
        Some(n) => n,
        None => {
            tracing::warn!("category id {} is not in the category table", id);
            UNKNOWN
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn known_ids() {
        assert_eq!(lookup(1), Some("none"));
        assert_eq!(lookup(3), Some("devel"));
        assert_eq!(lookup(8), Some("i18n"));
        assert_eq!(lookup(20), Some("fonts"));
    }

    #[test]
    fn out_of_range() {
        assert_eq!(lookup(0), None);
        assert_eq!(lookup(21), None);
        assert_eq!(name(99), UNKNOWN);
    }
}
