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

//! Renders records in the style of pacman's search and info output.

use crate::core::category;
use crate::core::record::{Record, Timestamp};
use colored::{ColoredString, Colorize};

/// Repository name shown in front of every search result.
pub const REPO: &str = "aur";

const TIME_FORMAT: &str = "%a %d %b %Y %I:%M:%S %p %Z";

const OUT_OF_DATE: &str = "[out of date]";

/// Color class of a version string in the compact listing.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Freshness {
    Current,
    Stale,
}

impl Freshness {
    pub fn of(rec: &Record) -> Self {
        match rec.is_out_of_date() {
            true => Self::Stale,
            false => Self::Current,
        }
    }

    pub fn paint(&self, s: &str) -> ColoredString {
        match self {
            Self::Current => s.green().bold(),
            Self::Stale => s.red().bold(),
        }
    }
}

/// Formats a record as a two-line search result.
pub fn compact(rec: &Record) -> String {
    format!(
        "{}{} {}\n    {}",
        format!("{}/{}/", REPO, category::name(rec.get_category_id()))
            .magenta()
            .bold(),
        rec.get_name().white().bold(),
        Freshness::of(rec).paint(rec.get_version()),
        rec.get_description()
    )
}

fn format_time(t: &Timestamp) -> String {
    match t.to_local() {
        Some(dt) => dt.format(TIME_FORMAT).to_string(),
        None => t.as_unix().to_string(),
    }
}

/// Formats a record as a labeled info block.
///
/// Every field ends with a newline, so printing the block with `println!`
/// leaves a blank line before the next record.
pub fn verbose(rec: &Record) -> String {
    let version = match rec.is_out_of_date() {
        true => format!("{} {}", rec.get_version(), OUT_OF_DATE),
        false => rec.get_version().to_string(),
    };
    let fields: [(&str, String); 10] = [
        ("Category", category::name(rec.get_category_id()).to_string()),
        ("Name", rec.get_name().to_string()),
        ("Version", version),
        ("Description", rec.get_description().to_string()),
        ("URL", rec.get_url().to_string()),
        ("Licenses", rec.get_license().to_string()),
        ("Maintainer", rec.get_maintainer().unwrap_or("None").to_string()),
        ("First Submitted", format_time(rec.get_first_submitted())),
        ("Last Modified", format_time(rec.get_last_modified())),
        ("Votes", rec.get_num_votes().to_string()),
    ];
    fields
        .into_iter()
        .fold(String::new(), |mut acc, (label, value)| {
            acc.push_str(&format!("{} {}\n", format!("{:<16}:", label).bold(), value));
            acc
        })
}

#[cfg(test)]
mod test {
    use super::*;

    fn stale() -> Record {
        Record::with("cower", 16).out_of_date(true)
    }

    #[test]
    fn verbose_marks_stale_version() {
        let text = verbose(&stale());
        let line = text.lines().find(|l| l.contains("Version")).unwrap();
        assert!(line.ends_with("1.0-1 [out of date]"));
        let fresh = verbose(&Record::with("cower", 16));
        assert_eq!(fresh.contains(OUT_OF_DATE), false);
    }

    #[test]
    fn compact_colors_stale_version() {
        // force escape codes even though stdout is not a terminal
        colored::control::set_override(true);
        let red = "1.0-1".red().bold().to_string();
        let green = "1.0-1".green().bold().to_string();
        assert_ne!(red, green);

        let text = compact(&stale());
        assert_eq!(Freshness::of(&stale()), Freshness::Stale);
        assert!(text.contains(&red));
        assert_eq!(text.contains(&green), false);
        assert_eq!(text.contains(OUT_OF_DATE), false);

        let fresh = Record::with("cower", 16);
        let text = compact(&fresh);
        assert_eq!(Freshness::of(&fresh), Freshness::Current);
        assert!(text.contains(&green));
        assert_eq!(text.contains(&red), false);
    }

    #[test]
    fn compact_layout() {
        let text = compact(&Record::with("cower", 16));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("aur/system/"));
        assert!(lines[1].starts_with("    "));
    }

    #[test]
    fn verbose_field_order() {
        let text = verbose(&Record::with("cower", 16));
        let labels: Vec<&str> = text
            .lines()
            .map(|l| l.split(':').next().unwrap_or(""))
            .collect();
        let order = [
            "Category", "Name", "Version", "Description", "URL", "Licenses", "Maintainer",
            "First Submitted", "Last Modified", "Votes",
        ];
        assert_eq!(labels.len(), order.len());
        for (line, label) in labels.iter().zip(order.iter()) {
            assert!(line.contains(label));
        }
        assert!(text.contains("None"));
    }
}
