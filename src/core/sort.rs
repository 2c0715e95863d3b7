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

use crate::core::record::Record;
use std::cmp::Ordering;

/// Orders records by category, then by name within the same category.
///
/// Implements the same ordering as the package listing on the AUR website.
pub fn by_category(a: &Record, b: &Record) -> Ordering {
    match a.get_category_id().cmp(&b.get_category_id()) {
        Ordering::Equal => a.get_name().cmp(b.get_name()),
        Ordering::Less => Ordering::Less,
        Ordering::Greater => Ordering::Greater,
    }
}

/// Sorts search results in place. The sort is stable.
pub fn sort_results(results: &mut [Record]) {
    results.sort_by(by_category);
}
