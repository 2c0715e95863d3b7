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

//! Matches a batched multiinfo response back to the names that were requested.
//!
//! The order of packages in the response is arbitrary and unknown names are
//! silently omitted, so every requested name is searched for through the
//! entire response.

use crate::core::record::Record;
use crate::core::rpc::{self, RpcClient, Transport};
use crate::error::{Error, Hint};
use crate::util::anyerror::Fault;
use colored::Colorize;
use std::collections::HashSet;

/// The match result for one requested name.
#[derive(Debug, PartialEq)]
pub enum LookupOutcome<'a> {
    Matched(&'a Record),
    Unmatched(&'a str),
}

/// Pairs each name in `names`, in order, with the first record sharing its name.
pub fn reconcile<'a, S: AsRef<str>>(
    names: &'a [S],
    records: &'a [Record],
) -> Vec<LookupOutcome<'a>> {
    names
        .iter()
        .map(|name| {
            let name = name.as_ref();
            match records.iter().find(|r| r.get_name() == name) {
                Some(r) => LookupOutcome::Matched(r),
                None => LookupOutcome::Unmatched(name),
            }
        })
        .collect()
}

/// Drops repeated names, keeping the first occurrence of each.
fn unique<S: AsRef<str>>(names: &[S]) -> Vec<&str> {
    let mut seen = HashSet::new();
    names
        .iter()
        .map(|n| n.as_ref())
        .filter(|n| seen.insert(*n))
        .collect()
}

/// Looks up every name in `names` with a single multiinfo request and calls `f`
/// on each matching record in the order the names were given.
///
/// Repeated names are looked up once. A diagnostic is printed for each name
/// without a record. Returns [Error::PackagesNotFound] after processing every
/// name if the response holds fewer records than names requested. An error from
/// `f` stops the lookup immediately.
pub fn multi_info<T, S, F>(client: &RpcClient<T>, names: &[S], mut f: F) -> Result<(), Fault>
where
    T: Transport,
    S: AsRef<str>,
    F: FnMut(&Record) -> Result<(), Fault>,
{
    let names = unique(names);
    let envelope = client.fetch(&rpc::multiinfo_path(&names))?;
    let records = envelope.get_results();

    let mut missing = 0;
    for outcome in reconcile(&names, records) {
        match outcome {
            LookupOutcome::Matched(r) => f(r)?,
            LookupOutcome::Unmatched(name) => {
                missing += 1;
                println!("{} package '{}' was not found", "error:".red().bold(), name);
            }
        }
    }

    if records.len() < names.len() {
        tracing::debug!(
            "{} records returned for {} names ({} unmatched)",
            records.len(),
            names.len(),
            missing
        );
        return Err(Error::PackagesNotFound(missing, names.len(), Hint::SearchFirst))?;
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::core::rpc::test::{origin, Canned};
    use crate::util::anyerror::AnyError;

    fn record_json(name: &str) -> String {
        format!(
            r#"{{"Name":"{}","Version":"1-1","CategoryID":2,"FirstSubmitted":0,"LastModified":0}}"#,
            name
        )
    }

    fn body(names: &[&str]) -> String {
        let items: Vec<String> = names.iter().map(|n| record_json(n)).collect();
        format!(
            r#"{{"type":"multiinfo","count":{},"results":[{}]}}"#,
            names.len(),
            items.join(",")
        )
    }

    #[test]
    fn reconcile_follows_request_order() {
        let records = vec![Record::with("z", 1), Record::with("y", 1)];
        let names = ["x", "y", "z"];
        let outcome = reconcile(&names, &records);
        assert_eq!(
            outcome,
            vec![
                LookupOutcome::Unmatched("x"),
                LookupOutcome::Matched(&records[1]),
                LookupOutcome::Matched(&records[0]),
            ]
        );
    }

    #[test]
    fn partial_response_fails_after_rendering_matches() {
        let canned = Canned::new(&body(&["z", "y"]));
        let client = RpcClient::new(origin(), &canned);

        let mut seen = Vec::new();
        let result = multi_info(&client, &["x", "y", "z"], |r| {
            seen.push(r.get_name().to_string());
            Ok(())
        });
        assert_eq!(seen, vec!["y", "z"]);
        let err = result.unwrap_err();
        assert!(err
            .to_string()
            .starts_with("some packages were not found (1 of 3 requested)"));
        // one batched request for all names
        assert_eq!(
            canned.requests.borrow().as_slice(),
            &["https://aur.archlinux.org/rpc.php?type=multiinfo&arg[]=x&arg[]=y&arg[]=z"
                .to_string()]
        );
    }

    #[test]
    fn single_match_succeeds() {
        let canned = Canned::new(&body(&["x"]));
        let client = RpcClient::new(origin(), &canned);

        let mut calls = 0;
        let result = multi_info(&client, &["x"], |r| {
            assert_eq!(r.get_name(), "x");
            calls += 1;
            Ok(())
        });
        assert!(result.is_ok());
        assert_eq!(calls, 1);
    }

    #[test]
    fn repeated_names_are_requested_once() {
        let canned = Canned::new(&body(&["x"]));
        let client = RpcClient::new(origin(), &canned);

        let mut calls = 0;
        let result = multi_info(&client, &["x", "x"], |_| {
            calls += 1;
            Ok(())
        });
        assert!(result.is_ok());
        assert_eq!(calls, 1);
        assert_eq!(
            canned.requests.borrow().as_slice(),
            &["https://aur.archlinux.org/rpc.php?type=multiinfo&arg[]=x".to_string()]
        );
    }

    #[test]
    fn callback_error_short_circuits() {
        let canned = Canned::new(&body(&["a", "b"]));
        let client = RpcClient::new(origin(), &canned);

        let mut calls = 0;
        let result = multi_info(&client, &["a", "b"], |_| {
            calls += 1;
            Err(AnyError::from("broken pipe").into())
        });
        assert_eq!(calls, 1);
        assert_eq!(result.unwrap_err().to_string(), "broken pipe");
    }
}
