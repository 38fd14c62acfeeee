//! Conversion of property-list shaped Foundation objects into JSON values.
//!
//! The window server answers with nested `CFArray`/`CFDictionary` trees
//! (toll-free bridged to their `NS` counterparts). Turning them into
//! [`serde_json::Value`] up front keeps everything past this point free of
//! Objective-C.

use std::ffi::CStr;

use objc2::runtime::{AnyClass, AnyObject};
use objc2::{ClassType, msg_send};
use objc2_foundation::{NSArray, NSDictionary, NSNumber, NSString};
use serde_json::{Map, Number, Value};

pub fn to_value(object: &AnyObject) -> Value {
    if let Some(string) = object.downcast_ref::<NSString>() {
        return Value::String(string.to_string());
    }
    if let Some(number) = object.downcast_ref::<NSNumber>() {
        return number_value(number);
    }
    if is_kind_of(object, <NSArray>::class()) {
        // SAFETY: class checked above, elements are only used as AnyObject.
        let array = unsafe { &*(object as *const AnyObject).cast::<NSArray>() };
        return Value::Array(
            (0..array.count()).map(|index| to_value(&array.objectAtIndex(index))).collect(),
        );
    }
    if is_kind_of(object, <NSDictionary>::class()) {
        // SAFETY: as above.
        let dictionary = unsafe { &*(object as *const AnyObject).cast::<NSDictionary>() };
        let keys = dictionary.allKeys();
        let mut map = Map::with_capacity(keys.count());
        for key in (0..keys.count()).map(|index| keys.objectAtIndex(index)) {
            let Some(name) = key.downcast_ref::<NSString>() else {
                continue;
            };
            if let Some(value) = dictionary.objectForKey(&key) {
                map.insert(name.to_string(), to_value(&value));
            }
        }
        return Value::Object(map);
    }
    Value::Null
}

fn is_kind_of(object: &AnyObject, class: &AnyClass) -> bool {
    unsafe { msg_send![object, isKindOfClass: class] }
}

fn number_value(number: &NSNumber) -> Value {
    // SAFETY: objCType is a NUL-terminated encoding string owned by the number.
    let encoding = unsafe { CStr::from_ptr(number.objCType().as_ptr()) };
    match encoding.to_bytes() {
        b"f" | b"d" => Number::from_f64(number.doubleValue()).map_or(Value::Null, Value::Number),
        b"C" | b"S" | b"I" | b"L" | b"Q" => Value::from(number.unsignedLongLongValue()),
        _ => Value::from(number.longLongValue()),
    }
}

#[cfg(test)]
mod tests {
    use objc2::rc::Retained;
    use objc2_foundation::{NSArray, NSDictionary, NSNumber, NSString};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn any<T: objc2::Message>(object: Retained<T>) -> Retained<AnyObject> {
        unsafe { Retained::cast_unchecked(object) }
    }

    #[test]
    fn converts_nested_display_record() {
        let space = NSDictionary::<NSString, AnyObject>::from_retained_objects(
            &[&*NSString::from_str("id64"), &*NSString::from_str("uuid")],
            &[any(NSNumber::new_i64(3)), any(NSString::from_str("space-3"))],
        );
        let spaces = NSArray::<AnyObject>::from_retained_slice(&[any(space)]);
        let record = NSDictionary::<NSString, AnyObject>::from_retained_objects(
            &[&*NSString::from_str("Spaces"), &*NSString::from_str("Scale")],
            &[any(spaces), any(NSNumber::new_f64(2.0))],
        );

        assert_eq!(
            to_value(&record),
            json!({ "Spaces": [{ "id64": 3, "uuid": "space-3" }], "Scale": 2.0 })
        );
    }
}
