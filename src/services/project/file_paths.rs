//! Discovery and rewriting of `FilePath` references inside a project descriptor.
//!
//! The descriptor has no fixed schema; any object field literally named
//! `FilePath` whose value is a string refers to an external resource.

use crate::services::archive::manifest::LinkMap;
use serde_json::map;
use serde_json::Value;
use std::slice;

pub const FILE_PATH_KEY: &str = "FilePath";

enum Frame<'a> {
    Object(map::Iter<'a>),
    Array(slice::Iter<'a, Value>),
}

/// Lazy, document-order walk yielding every `FilePath` string. No deduplication.
pub struct FilePaths<'a> {
    stack: Vec<Frame<'a>>,
}

impl<'a> FilePaths<'a> {
    fn push(&mut self, value: &'a Value) {
        match value {
            Value::Object(obj) => self.stack.push(Frame::Object(obj.iter())),
            Value::Array(arr) => self.stack.push(Frame::Array(arr.iter())),
            _ => {}
        }
    }
}

impl<'a> Iterator for FilePaths<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        loop {
            let child = match self.stack.last_mut()? {
                Frame::Object(fields) => match fields.next() {
                    Some((key, Value::String(path))) if key == FILE_PATH_KEY => {
                        return Some(path.as_str());
                    }
                    Some((_, value)) => Some(value),
                    None => None,
                },
                Frame::Array(items) => items.next(),
            };

            match child {
                Some(value) => self.push(value),
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}

pub fn find_file_paths(root: &Value) -> FilePaths<'_> {
    let mut walker = FilePaths { stack: Vec::new() };
    walker.push(root);
    walker
}

/// Replace every `FilePath` value that has a manifest match with its extracted location.
///
/// Unmatched values are left as-is. Returns the number of values rewritten.
pub fn rewrite_file_paths(node: &mut Value, links: &LinkMap) -> usize {
    match node {
        Value::Object(obj) => {
            let mut count = 0;
            for (key, value) in obj.iter_mut() {
                if key == FILE_PATH_KEY {
                    if let Value::String(current) = value {
                        if current.is_empty() {
                            continue;
                        }
                        match links.resolve(current) {
                            Some(target) => {
                                *current = target.to_string_lossy().to_string();
                                count += 1;
                            }
                            None => log::debug!("No package entry for FilePath '{current}'"),
                        }
                        continue;
                    }
                }
                count += rewrite_file_paths(value, links);
            }
            count
        }
        Value::Array(arr) => arr
            .iter_mut()
            .map(|child| rewrite_file_paths(child, links))
            .sum(),
        _ => 0,
    }
}
