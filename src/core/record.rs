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

//! The wire model returned by the package index RPC interface.

use crate::error::{Error, LastError};
use chrono::{DateTime, Local, TimeZone, Utc};
use serde::de::{self, Deserializer, Visitor};
use serde_derive::Deserialize;
use serde_json::Value;
use std::fmt;

/// A single package entry in the index.
#[derive(Debug, PartialEq, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Record {
    #[serde(rename = "Maintainer")]
    maintainer: Option<String>,
    #[serde(rename = "ID", deserialize_with = "nullable")]
    id: u64,
    #[serde(rename = "Name", deserialize_with = "nullable")]
    name: String,
    #[serde(rename = "Version", deserialize_with = "nullable")]
    version: String,
    #[serde(rename = "CategoryID", deserialize_with = "nullable")]
    category_id: u32,
    #[serde(rename = "Description", deserialize_with = "nullable")]
    description: String,
    #[serde(rename = "URL", deserialize_with = "nullable")]
    url: String,
    #[serde(rename = "License", deserialize_with = "nullable")]
    license: String,
    #[serde(rename = "NumVotes", deserialize_with = "nullable")]
    num_votes: u64,
    #[serde(rename = "OutOfDate", deserialize_with = "flag")]
    out_of_date: bool,
    #[serde(rename = "FirstSubmitted")]
    first_submitted: Timestamp,
    #[serde(rename = "LastModified")]
    last_modified: Timestamp,
    #[serde(rename = "URLPath", deserialize_with = "nullable")]
    url_path: String,
}

impl Record {
    pub fn get_maintainer(&self) -> Option<&str> {
        self.maintainer.as_deref()
    }

    pub fn get_id(&self) -> u64 {
        self.id
    }

    pub fn get_name(&self) -> &str {
        &self.name
    }

    pub fn get_version(&self) -> &str {
        &self.version
    }

    pub fn get_category_id(&self) -> u32 {
        self.category_id
    }

    pub fn get_description(&self) -> &str {
        &self.description
    }

    pub fn get_url(&self) -> &str {
        &self.url
    }

    pub fn get_license(&self) -> &str {
        &self.license
    }

    pub fn get_num_votes(&self) -> u64 {
        self.num_votes
    }

    /// Checks if the upstream version has outpaced the indexed build.
    pub fn is_out_of_date(&self) -> bool {
        self.out_of_date
    }

    pub fn get_first_submitted(&self) -> &Timestamp {
        &self.first_submitted
    }

    pub fn get_last_modified(&self) -> &Timestamp {
        &self.last_modified
    }

    pub fn get_url_path(&self) -> &str {
        &self.url_path
    }
}

#[cfg(test)]
impl Record {
    /// Builds a minimal record for tests.
    pub fn with(name: &str, category_id: u32) -> Self {
        Self {
            name: name.to_string(),
            category_id,
            version: String::from("1.0-1"),
            ..Default::default()
        }
    }

    pub fn out_of_date(mut self, flag: bool) -> Self {
        self.out_of_date = flag;
        self
    }
}

/// A point in time sent by the index as an integer count of seconds since the
/// Unix epoch.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub struct Timestamp(i64);

impl Timestamp {
    pub fn as_unix(&self) -> i64 {
        self.0
    }

    pub fn to_utc(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_opt(self.0, 0).single()
    }

    pub fn to_local(&self) -> Option<DateTime<Local>> {
        self.to_utc().map(|t| t.with_timezone(&Local))
    }
}

impl<'de> serde::Deserialize<'de> for Timestamp {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct TimestampVisitor;

        impl<'de> Visitor<'de> for TimestampVisitor {
            type Value = Timestamp;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("an integer number of seconds since the unix epoch")
            }

            fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(Timestamp(v))
            }

            fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                match i64::try_from(v) {
                    Ok(v) => Ok(Timestamp(v)),
                    Err(_) => Err(de::Error::invalid_value(de::Unexpected::Unsigned(v), &self)),
                }
            }
        }

        deserializer.deserialize_i64(TimestampVisitor)
    }
}

/// Decodes a field the index may send as `null`, falling back to its zero value.
fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: serde::Deserialize<'de> + Default,
{
    <Option<T> as serde::Deserialize>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Decodes the staleness flag, which the index sends as 0/1.
fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    match <Value as serde::Deserialize>::deserialize(deserializer)? {
        Value::Null => Ok(false),
        Value::Bool(b) => Ok(b),
        Value::Number(n) => match n.as_i64() {
            Some(i) => Ok(i != 0),
            None => Err(de::Error::custom(format!(
                "expected an integer flag but got {}",
                n
            ))),
        },
        other => Err(de::Error::custom(format!(
            "expected an integer flag but got {}",
            other
        ))),
    }
}

/// The top-level object wrapping every RPC response.
#[derive(Debug, PartialEq)]
pub struct Envelope {
    kind: String,
    count: u64,
    results: Vec<Record>,
}

#[derive(Deserialize)]
struct RawEnvelope {
    #[serde(rename = "type", default)]
    kind: String,
    #[serde(default)]
    count: u64,
    #[serde(default)]
    results: Value,
}

const ERROR_KIND: &str = "error";

impl Envelope {
    /// Decodes a response body.
    ///
    /// An `error` envelope carries a message instead of records and is reported
    /// as [Error::Rpc].
    pub fn decode(body: &[u8]) -> Result<Self, Error> {
        let raw: RawEnvelope = serde_json::from_slice(body)
            .map_err(|e| Error::Decode(String::from("response"), LastError(e.to_string())))?;
        if raw.kind == ERROR_KIND {
            let msg = match raw.results {
                Value::String(s) => s,
                other => other.to_string(),
            };
            return Err(Error::Rpc(LastError(msg)));
        }
        let results: Vec<Record> = match raw.results {
            Value::Null => Vec::new(),
            other => serde_json::from_value(other)
                .map_err(|e| Error::Decode(String::from("results"), LastError(e.to_string())))?,
        };
        Ok(Self {
            kind: raw.kind,
            count: raw.count,
            results,
        })
    }

    pub fn get_kind(&self) -> &str {
        &self.kind
    }

    /// The count reported by the server; `results` is authoritative.
    pub fn get_count(&self) -> u64 {
        self.count
    }

    pub fn get_results(&self) -> &Vec<Record> {
        &self.results
    }

    pub fn into_results(self) -> Vec<Record> {
        self.results
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const BODY: &str = r#"{"type":"multiinfo","count":1,"results":[{
        "Maintainer":"falconindy","ID":12345,"Name":"cower","Version":"4-1",
        "CategoryID":16,"Description":"A simple AUR agent","URL":"http://github.com/falconindy/cower",
        "License":"MIT","NumVotes":805,"OutOfDate":1,"FirstSubmitted":1293676237,
        "LastModified":1350939768,"URLPath":"/packages/co/cower/cower.tar.gz"}]}"#;

    #[test]
    fn decode_envelope() {
        let env = Envelope::decode(BODY.as_bytes()).unwrap();
        assert_eq!(env.get_kind(), "multiinfo");
        assert_eq!(env.get_count(), 1);
        let rec = &env.get_results()[0];
        assert_eq!(rec.get_name(), "cower");
        assert_eq!(rec.get_id(), 12345);
        assert_eq!(rec.get_maintainer(), Some("falconindy"));
        assert_eq!(rec.get_category_id(), 16);
        assert_eq!(rec.get_num_votes(), 805);
        assert_eq!(rec.is_out_of_date(), true);
        assert_eq!(rec.get_url_path(), "/packages/co/cower/cower.tar.gz");
        assert_eq!(rec.get_first_submitted().as_unix(), 1293676237);
    }

    #[test]
    fn timestamp_is_epoch_seconds() {
        let t: Timestamp = serde_json::from_str("1350939768").unwrap();
        let expected = Utc.with_ymd_and_hms(2012, 10, 22, 21, 2, 48).unwrap();
        assert_eq!(t.to_utc(), Some(expected));
    }

    #[test]
    fn timestamp_rejects_text() {
        assert!(serde_json::from_str::<Timestamp>("\"1350939768\"").is_err());
        assert!(serde_json::from_str::<Timestamp>("\"2012-10-22T21:02:48Z\"").is_err());
        assert!(serde_json::from_str::<Timestamp>("1350939768.5").is_err());
    }

    #[test]
    fn malformed_timestamp_fails_decode() {
        let body = r#"{"type":"search","count":1,"results":[{"Name":"a","FirstSubmitted":"yesterday"}]}"#;
        match Envelope::decode(body.as_bytes()) {
            Err(Error::Decode(_, _)) => (),
            other => panic!("expected decode error, got {:?}", other),
        }
    }

    #[test]
    fn orphan_and_fresh() {
        let body = r#"{"type":"search","count":1,"results":[{"Name":"a","Maintainer":null,"OutOfDate":0}]}"#;
        let env = Envelope::decode(body.as_bytes()).unwrap();
        let rec = &env.get_results()[0];
        assert_eq!(rec.get_maintainer(), None);
        assert_eq!(rec.is_out_of_date(), false);
    }

    #[test]
    fn null_fields_decode_to_empty() {
        let body = r#"{"type":"search","count":2,"results":[
            {"Name":"cower","Version":"4-1","Description":"A simple AUR agent","URL":"http://github.com/falconindy/cower"},
            {"Name":"orphan-pkg","Version":null,"Description":null,"URL":null,"License":null,
             "ID":null,"CategoryID":null,"NumVotes":null,"URLPath":null}]}"#;
        let env = Envelope::decode(body.as_bytes()).unwrap();
        assert_eq!(env.get_results().len(), 2);
        assert_eq!(env.get_results()[0].get_description(), "A simple AUR agent");
        let rec = &env.get_results()[1];
        assert_eq!(rec.get_name(), "orphan-pkg");
        assert_eq!(rec.get_description(), "");
        assert_eq!(rec.get_url(), "");
        assert_eq!(rec.get_license(), "");
        assert_eq!(rec.get_version(), "");
        assert_eq!(rec.get_id(), 0);
        assert_eq!(rec.get_category_id(), 0);
        assert_eq!(rec.get_num_votes(), 0);
    }

    #[test]
    fn empty_results_are_valid() {
        let env = Envelope::decode(br#"{"type":"search","count":0,"results":[]}"#).unwrap();
        assert!(env.get_results().is_empty());
    }

    #[test]
    fn error_envelope() {
        let body = br#"{"type":"error","results":"Incorrect request type specified."}"#;
        assert_eq!(
            Envelope::decode(body),
            Err(Error::Rpc(LastError(String::from(
                "Incorrect request type specified."
            ))))
        );
    }

    #[test]
    fn malformed_json() {
        assert!(matches!(
            Envelope::decode(b"<html>502</html>"),
            Err(Error::Decode(_, _))
        ));
    }
}
