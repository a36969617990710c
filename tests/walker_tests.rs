use keycase::{
    convert_object_keys, convert_object_keys_with_options, value, CaseStyle, ConvertOptions,
    KeyMap, Value,
};
use std::cell::RefCell;
use std::rc::Rc;

#[test]
fn test_nested_document_rekeyed() {
    let doc = value!({
        "user_name": "Alice",
        "contact_info": {
            "email_address": "a@example.com",
            "phone_numbers": [{ "country_code": 1 }]
        }
    });

    let out = convert_object_keys(&doc, CaseStyle::Camel);
    let obj = out.as_object().unwrap();
    assert!(obj.contains_key("userName"));

    let contact = obj.get("contactInfo").unwrap();
    let contact = contact.as_object().unwrap();
    assert!(contact.contains_key("emailAddress"));

    let phones = contact.get("phoneNumbers").unwrap().as_array().unwrap()[0].clone();
    assert!(phones.as_object().unwrap().contains_key("countryCode"));
}

#[test]
fn test_scalars_and_array_values_untouched() {
    let doc = value!({
        "snake_values": ["left_alone", 1, true, null],
        "plain_number": 2.5
    });

    let out = convert_object_keys(&doc, CaseStyle::Pascal);
    let obj = out.as_object().unwrap();

    let items = obj.get("SnakeValues").unwrap();
    let items = items.as_array().unwrap();
    assert_eq!(items.len(), 4);
    assert_eq!(items[0], Value::from("left_alone"));
    assert_eq!(items[1], Value::from(1));
    assert_eq!(items[2], Value::from(true));
    assert_eq!(items[3], Value::Null);
    assert_eq!(obj.get("PlainNumber"), Some(&Value::from(2.5)));
}

#[test]
fn test_top_level_array_recurses_into_records() {
    let doc = value!([{ "item_id": 1 }, { "item_id": 2 }, "item_id"]);
    let out = convert_object_keys(&doc, CaseStyle::Camel);
    let items = out.as_array().unwrap();
    assert!(items[0].as_object().unwrap().contains_key("itemId"));
    assert!(items[1].as_object().unwrap().contains_key("itemId"));
    // A bare string element is a value, not a key.
    assert_eq!(items[2], Value::from("item_id"));
}

#[test]
fn test_ignore_keys_exempts_exact_names() {
    let doc = value!({ "id": 1, "user_name": "Alice", "nested_doc": { "id": 2 } });
    let options = ConvertOptions::new().with_ignore_keys(["id"]);

    let out = convert_object_keys_with_options(&doc, CaseStyle::Camel, &options);
    let obj = out.as_object().unwrap();
    assert!(obj.contains_key("id"));
    assert!(obj.contains_key("userName"));
    // The exemption applies at every depth.
    assert!(obj.get("nestedDoc").unwrap().as_object().unwrap().contains_key("id"));
}

#[test]
fn test_only_keys_restricts_by_original_name() {
    let doc = value!({ "user_name": "Alice", "created_at": "2024-01-01" });
    let options = ConvertOptions::new().with_only_keys(["user_name"]);

    let out = convert_object_keys_with_options(&doc, CaseStyle::Camel, &options);
    let obj = out.as_object().unwrap();
    assert!(obj.contains_key("userName"));
    assert!(obj.contains_key("created_at"));
    assert!(!obj.contains_key("createdAt"));
}

#[test]
fn test_ignore_wins_over_only() {
    let doc = value!({ "user_name": "Alice" });
    let options = ConvertOptions::new()
        .with_only_keys(["user_name"])
        .with_ignore_keys(["user_name"]);

    let out = convert_object_keys_with_options(&doc, CaseStyle::Camel, &options);
    assert!(out.as_object().unwrap().contains_key("user_name"));
}

#[test]
fn test_walker_preserves_abbreviations_in_keys() {
    let doc = value!({ "userHTMLData": 1 });
    let options = ConvertOptions::new().with_preserve_abbreviations();

    let out = convert_object_keys_with_options(&doc, CaseStyle::Snake, &options);
    assert!(out.as_object().unwrap().contains_key("user_HTML_data"));
}

#[test]
fn test_self_referential_object_terminates_and_points_home() {
    let map = Rc::new(RefCell::new(KeyMap::new()));
    let node = Value::Object(Rc::clone(&map));
    map.borrow_mut()
        .insert("display_name".to_string(), Value::from("hub"));
    map.borrow_mut().insert("self_link".to_string(), node.clone());

    let out = convert_object_keys(&node, CaseStyle::Camel);
    let Value::Object(out_map) = &out else {
        panic!("expected object output");
    };

    let guard = out_map.borrow();
    assert_eq!(
        guard.get("displayName").and_then(|v| v.as_str()),
        Some("hub".to_string())
    );
    // The back-reference targets the rewritten object, not the source.
    let link = guard.get("selfLink").unwrap();
    assert!(link.ptr_eq(&out));
    assert!(!link.ptr_eq(&node));
}

#[test]
fn test_mutual_cycle_terminates() {
    let a = Rc::new(RefCell::new(KeyMap::new()));
    let b = Rc::new(RefCell::new(KeyMap::new()));
    a.borrow_mut()
        .insert("next_node".to_string(), Value::Object(Rc::clone(&b)));
    b.borrow_mut()
        .insert("prev_node".to_string(), Value::Object(Rc::clone(&a)));

    let out = convert_object_keys(&Value::Object(Rc::clone(&a)), CaseStyle::Camel);
    let Value::Object(out_a) = &out else {
        panic!("expected object output");
    };

    let guard_a = out_a.borrow();
    let out_b = guard_a.get("nextNode").unwrap().clone();
    let guard_b = out_b.as_object().unwrap();
    // b's back-reference resolves to the rewritten a.
    assert!(guard_b.get("prevNode").unwrap().ptr_eq(&out));
}

#[test]
fn test_shared_child_stays_shared() {
    let mut child_map = KeyMap::new();
    child_map.insert("shared_field".to_string(), Value::from(1));
    let child = Value::object(child_map);

    let mut root = KeyMap::new();
    root.insert("first_ref".to_string(), child.clone());
    root.insert("second_ref".to_string(), child.clone());
    let doc = Value::object(root);

    let out = convert_object_keys(&doc, CaseStyle::Camel);
    let obj = out.as_object().unwrap();
    let first = obj.get("firstRef").unwrap();
    let second = obj.get("secondRef").unwrap();

    assert!(first.ptr_eq(second));
    assert!(!first.ptr_eq(&child));
    assert!(first.as_object().unwrap().contains_key("sharedField"));
}

#[test]
fn test_unknown_target_walk_is_deep_identity() {
    let doc = value!({
        "user_name": "Alice",
        "nested_doc": { "a_b": [1, { "c_d": null }] }
    });

    let out = convert_object_keys(&doc, CaseStyle::Unknown);
    assert_eq!(out, doc);
    assert!(!out.ptr_eq(&doc));
}

#[test]
fn test_json_interop_round_trip() {
    let json = r#"{"user_name":"Alice","contact_info":{"email_address":"a@example.com"},"tag_list":["a_b",2]}"#;
    let doc: Value = serde_json::from_str(json).expect("valid JSON");

    let out = convert_object_keys(&doc, CaseStyle::Camel);
    let back = serde_json::to_string(&out).expect("serializable");

    assert_eq!(
        back,
        r#"{"userName":"Alice","contactInfo":{"emailAddress":"a@example.com"},"tagList":["a_b",2]}"#
    );
}
