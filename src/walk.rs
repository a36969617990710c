//! Recursive key rewriting over nested values.
//!
//! The walker dispatches on the three value shapes: scalars are cloned
//! through, arrays are rebuilt element-wise (array elements have no keys of
//! their own), and objects get every key renamed through the case engine
//! before their values are walked in turn.
//!
//! Each top-level call carries a fresh identity-keyed tracker mapping each
//! *source* object instance to its rewritten counterpart. An object is
//! registered in the tracker before its entries are walked, so a
//! self-referential object resolves to the in-progress output, and two keys
//! aliasing the same source object come out aliasing the same rewritten
//! object. The input is never mutated.

use crate::case::convert_case_with_options;
use crate::map::KeyMap;
use crate::options::ConvertOptions;
use crate::style::CaseStyle;
use crate::value::Value;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Source-object identity to rewritten-object mapping, local to one
/// top-level walk.
type Seen = HashMap<*const RefCell<KeyMap>, Value>;

/// Recursively converts all object keys of `input` to the target style.
///
/// # Examples
///
/// ```rust
/// use keycase::{convert_object_keys_with_options, value, CaseStyle, ConvertOptions};
///
/// let doc = value!({
///     "user_name": "Alice",
///     "contact_info": { "email_address": "a@example.com" }
/// });
///
/// let options = ConvertOptions::new();
/// let out = convert_object_keys_with_options(&doc, CaseStyle::Camel, &options);
/// let obj = out.as_object().unwrap();
/// assert!(obj.contains_key("userName"));
/// assert!(obj.get("contactInfo").unwrap().as_object().unwrap().contains_key("emailAddress"));
/// ```
#[must_use]
pub fn convert_object_keys_with_options(
    input: &Value,
    target: CaseStyle,
    options: &ConvertOptions,
) -> Value {
    let mut seen = Seen::new();
    walk(input, target, options, &mut seen)
}

fn walk(input: &Value, target: CaseStyle, options: &ConvertOptions, seen: &mut Seen) -> Value {
    match input {
        Value::Array(items) => {
            let source = items.borrow();
            let rewritten = source
                .iter()
                .map(|element| walk(element, target, options, seen))
                .collect();
            Value::array(rewritten)
        }
        Value::Object(map) => {
            if let Some(existing) = seen.get(&Rc::as_ptr(map)) {
                return existing.clone();
            }

            let result = Rc::new(RefCell::new(KeyMap::new()));
            // Register before walking entries so back-references resolve to
            // the in-progress object.
            seen.insert(Rc::as_ptr(map), Value::Object(Rc::clone(&result)));

            let source = map.borrow();
            for (key, value) in source.iter() {
                let new_key = if options.skips_key(key) {
                    key.clone()
                } else {
                    convert_case_with_options(key, target, options)
                };
                let rewritten = walk(value, target, options, seen);
                // Colliding renamed keys silently overwrite; the last source
                // entry wins.
                result.borrow_mut().insert(new_key, rewritten);
            }

            Value::Object(result)
        }
        scalar => scalar.clone(),
    }
}
