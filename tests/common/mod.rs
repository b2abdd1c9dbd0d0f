#![allow(dead_code)]

use request_params::ParameterSource;
use serde_json::{Map, Value};
use std::cell::RefCell;

/// Parameter source that records every key the normalizer asks for.
pub struct RecordingSource {
    values: Map<String, Value>,
    reads: RefCell<Vec<String>>,
}

impl RecordingSource {
    pub fn new(values: Value) -> Self {
        let values = match values {
            Value::Object(map) => map,
            other => panic!("RecordingSource needs an object, got {other}"),
        };
        Self {
            values,
            reads: RefCell::new(Vec::new()),
        }
    }

    pub fn reads(&self) -> Vec<String> {
        self.reads.borrow().clone()
    }

    pub fn was_read(&self, key: &str) -> bool {
        self.reads.borrow().iter().any(|k| k == key)
    }
}

impl ParameterSource for RecordingSource {
    fn get(&self, key: &str) -> Option<Value> {
        self.reads.borrow_mut().push(key.to_string());
        self.values.get(key).cloned()
    }
}
