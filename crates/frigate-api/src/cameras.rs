use serde_json::Value;
use std::collections::HashSet;
use tracing::debug;

/// Pseudo-camera entry in the server config; never shown as a real camera.
pub const RESERVED_CAMERA_KEY: &str = "birdseye";

/// Coerces a loosely-typed JSON value into a list of non-empty strings.
///
/// Anything that is not an array yields an empty list. `null` elements are
/// skipped, string elements pass through, any other element coerces to its
/// compact JSON text. Empty strings are dropped. Order is preserved and
/// duplicates are kept.
pub fn string_array(value: Option<&Value>) -> Vec<String> {
    let items = match value {
        Some(Value::Array(items)) => items,
        _ => return Vec::new(),
    };

    items
        .iter()
        .filter_map(|item| match item {
            Value::Null => None,
            Value::String(text) => Some(text.clone()),
            other => Some(other.to_string()),
        })
        .filter(|text| !text.is_empty())
        .collect()
}

/// Returns the selected cameras in canonical display order.
///
/// Cameras known to `order` come first, in the order's sequence; selected
/// cameras the order does not know keep their relative position from the
/// selection. The result never contains duplicates, regardless of
/// duplicates in either input.
pub fn ordered_selection(selected: &[String], order: &[String]) -> Vec<String> {
    let selected: Vec<&str> = selected
        .iter()
        .map(String::as_str)
        .filter(|name| !name.is_empty())
        .collect();
    if selected.is_empty() {
        return Vec::new();
    }

    let wanted: HashSet<&str> = selected.iter().copied().collect();
    let mut result = Vec::new();
    let mut added: HashSet<&str> = HashSet::new();

    for camera in order {
        let camera = camera.as_str();
        if wanted.contains(camera) && added.insert(camera) {
            result.push(camera.to_string());
        }
    }

    for camera in selected {
        if added.insert(camera) {
            result.push(camera.to_string());
        }
    }

    result
}

/// Extracts the camera names from a server config payload.
///
/// Returns the keys of the `cameras` object, minus the reserved birdseye
/// entry, sorted ascending. An absent or malformed payload yields an empty
/// list.
pub fn parse_camera_list(payload: Option<&Value>) -> Vec<String> {
    let cameras = match payload.and_then(|value| value.get("cameras")) {
        Some(Value::Object(map)) => map,
        _ => {
            debug!("config payload has no cameras object");
            return Vec::new();
        }
    };

    let mut names: Vec<String> = cameras
        .keys()
        .filter(|key| key.as_str() != RESERVED_CAMERA_KEY)
        .cloned()
        .collect();
    names.sort();
    names
}

/// Drops selected cameras that no longer appear in the discovered list.
///
/// Order and duplicates of the kept entries are preserved. A camera removed
/// from discovery disappears from the selection without an error.
pub fn merge_camera_selection(existing: &[String], discovered: &[String]) -> Vec<String> {
    let known: HashSet<&str> = discovered
        .iter()
        .map(String::as_str)
        .filter(|name| !name.is_empty())
        .collect();

    let mut dropped = 0usize;
    let kept: Vec<String> = existing
        .iter()
        .filter(|camera| !camera.is_empty())
        .filter(|camera| {
            if known.contains(camera.as_str()) {
                true
            } else {
                dropped += 1;
                false
            }
        })
        .cloned()
        .collect();

    if dropped > 0 {
        debug!(dropped, "selection referenced cameras missing from discovery");
    }

    kept
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn cams(names: &[&str]) -> Vec<String> {
        names.iter().map(|name| name.to_string()).collect()
    }

    #[test]
    fn test_string_array_coercion() {
        let value = json!(["front", null, "", 7, true]);
        assert_eq!(string_array(Some(&value)), cams(&["front", "7", "true"]));
    }

    #[test]
    fn test_string_array_rejects_non_arrays() {
        assert_eq!(string_array(None), Vec::<String>::new());
        assert_eq!(string_array(Some(&json!(null))), Vec::<String>::new());
        assert_eq!(string_array(Some(&json!("front"))), Vec::<String>::new());
        assert_eq!(string_array(Some(&json!({"a": 1}))), Vec::<String>::new());
    }

    #[test]
    fn test_string_array_keeps_order_and_duplicates() {
        let value = json!(["b", "a", "b"]);
        assert_eq!(string_array(Some(&value)), cams(&["b", "a", "b"]));
    }

    #[test]
    fn test_ordered_selection_known_first() {
        assert_eq!(
            ordered_selection(&cams(&["b", "a", "c"]), &cams(&["a", "b"])),
            cams(&["a", "b", "c"])
        );
    }

    #[test]
    fn test_ordered_selection_empty_selection() {
        assert_eq!(
            ordered_selection(&[], &cams(&["a", "b"])),
            Vec::<String>::new()
        );
    }

    #[test]
    fn test_ordered_selection_deduplicates() {
        assert_eq!(
            ordered_selection(&cams(&["b", "b", "a", "a"]), &cams(&["a", "a", "b"])),
            cams(&["a", "b"])
        );
    }

    #[test]
    fn test_ordered_selection_is_stable_on_its_own_output() {
        let order = cams(&["a", "b", "d"]);
        let first = ordered_selection(&cams(&["c", "b", "a", "c"]), &order);
        let second = ordered_selection(&first, &order);
        assert_eq!(first, second);
    }

    #[test]
    fn test_parse_camera_list_sorts_and_excludes_birdseye() {
        let payload = json!({"cameras": {"front": {}, "birdseye": {}, "back": {}}});
        assert_eq!(parse_camera_list(Some(&payload)), cams(&["back", "front"]));
    }

    #[test]
    fn test_parse_camera_list_malformed_payloads() {
        assert_eq!(parse_camera_list(None), Vec::<String>::new());
        assert_eq!(parse_camera_list(Some(&json!(null))), Vec::<String>::new());
        assert_eq!(parse_camera_list(Some(&json!({}))), Vec::<String>::new());
        assert_eq!(
            parse_camera_list(Some(&json!({"cameras": "front"}))),
            Vec::<String>::new()
        );
        assert_eq!(
            parse_camera_list(Some(&json!({"cameras": null}))),
            Vec::<String>::new()
        );
    }

    #[test]
    fn test_merge_camera_selection_filters_stale_entries() {
        assert_eq!(
            merge_camera_selection(&cams(&["a", "b", "c"]), &cams(&["b", "c"])),
            cams(&["b", "c"])
        );
    }

    #[test]
    fn test_merge_camera_selection_keeps_duplicates_of_kept_names() {
        assert_eq!(
            merge_camera_selection(&cams(&["a", "b", "a"]), &cams(&["a"])),
            cams(&["a", "a"])
        );
    }

    #[test]
    fn test_merge_camera_selection_empty_discovery_drops_all() {
        assert_eq!(
            merge_camera_selection(&cams(&["a", "b"]), &[]),
            Vec::<String>::new()
        );
    }
}
