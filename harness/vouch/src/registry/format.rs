//! Test names for parameterized tests.

use vouch_value::Value;

/// Build a test name from a format string and one sample.
///
/// `%#` becomes the sample's zero-based index, everywhere it appears. Each
/// `%s` is replaced, left to right, by the next positional value of the
/// sample: the elements of a list, the field values of a map or record (in
/// key order), or the sample itself for anything else. A `%s` with no value
/// left stays as written. Any other `%` is copied through.
pub fn format_name(format: &str, sample: &Value, index: usize) -> String {
    let mut values = positional_values(sample).into_iter();
    let mut name = String::with_capacity(format.len());
    let mut rest = format;

    while let Some(at) = rest.find('%') {
        name.push_str(&rest[..at]);
        let tail = &rest[at..];
        if let Some(after) = tail.strip_prefix("%s") {
            match values.next() {
                Some(value) => name.push_str(&value),
                None => name.push_str("%s"),
            }
            rest = after;
        } else if let Some(after) = tail.strip_prefix("%#") {
            name.push_str(&index.to_string());
            rest = after;
        } else {
            name.push('%');
            rest = &tail[1..];
        }
    }
    name.push_str(rest);
    name
}

fn positional_values(sample: &Value) -> Vec<String> {
    if let Some(items) = sample.as_list() {
        items.iter().map(ToString::to_string).collect()
    } else if let Some(fields) = sample.as_fields() {
        fields.values().map(ToString::to_string).collect()
    } else {
        vec![sample.to_string()]
    }
}
