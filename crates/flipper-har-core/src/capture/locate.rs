//! Walk the capture document down to `Network.requests2`.

use serde_json::Value;

use crate::error::{ConvertError, Result};

/// Returns the raw request records of the first plugin state.
///
/// A missing `requests2` (or an explicit `null`) yields an empty list; every
/// other deviation from the expected nesting is an error.
pub fn request_list(doc: &Value) -> Result<&[Value]> {
    let root = doc.as_object().ok_or(ConvertError::NotAnObject {
        what: "capture document",
    })?;

    let plugin_states = match root.get("pluginStates2") {
        None | Some(Value::Null) => return Err(ConvertError::NoPluginStates),
        Some(v) => v.as_object().ok_or(ConvertError::NotAnObject {
            what: "pluginStates2",
        })?,
    };

    let first = plugin_states
        .values()
        .next()
        .ok_or(ConvertError::NoPluginStates)?
        .as_object()
        .ok_or(ConvertError::NotAnObject {
            what: "first plugin state",
        })?;

    let network = first
        .get("Network")
        .ok_or(ConvertError::MissingNetwork)?
        .as_object()
        .ok_or(ConvertError::NotAnObject { what: "Network" })?;

    match network.get("requests2") {
        None | Some(Value::Null) => Ok(&[][..]),
        Some(Value::Array(items)) => Ok(items.as_slice()),
        Some(_) => Err(ConvertError::RequestsNotAList),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn finds_requests_of_first_plugin_state() {
        let doc = json!({
            "pluginStates2": {
                "device#app": { "Network": { "requests2": [ { "url": "http://a/" } ] } },
                "other#app": { "Network": { "requests2": [ {}, {} ] } }
            }
        });
        let requests = request_list(&doc).unwrap();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0]["url"], "http://a/");
    }

    #[test]
    fn missing_requests2_is_empty() {
        let doc = json!({ "pluginStates2": { "x": { "Network": {} } } });
        assert!(request_list(&doc).unwrap().is_empty());
    }

    #[test]
    fn empty_plugin_states_err() {
        let doc = json!({ "pluginStates2": {} });
        assert!(matches!(
            request_list(&doc),
            Err(ConvertError::NoPluginStates)
        ));
        let doc = json!({ "somethingElse": 1 });
        assert!(matches!(
            request_list(&doc),
            Err(ConvertError::NoPluginStates)
        ));
    }

    #[test]
    fn missing_network_err() {
        let doc = json!({ "pluginStates2": { "x": { "Logs": {} } } });
        assert!(matches!(
            request_list(&doc),
            Err(ConvertError::MissingNetwork)
        ));
    }

    #[test]
    fn wrong_shapes_err() {
        assert!(matches!(
            request_list(&json!([1, 2])),
            Err(ConvertError::NotAnObject { .. })
        ));
        let doc = json!({ "pluginStates2": { "x": 5 } });
        assert!(matches!(
            request_list(&doc),
            Err(ConvertError::NotAnObject { .. })
        ));
        let doc = json!({ "pluginStates2": { "x": { "Network": { "requests2": "nope" } } } });
        assert!(matches!(
            request_list(&doc),
            Err(ConvertError::RequestsNotAList)
        ));
    }
}
