//! The patch message envelope.

use crate::edit::Edit;
use crate::error::ProtocolResult;
use serde::{Deserialize, Serialize};

/// Discriminant carried in the `msgType` wire field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageType {
    /// Subscription request carrying an initial document.
    Add,
    /// Edits exchanged after subscription.
    Patch,
}

/// The wire envelope carrying one or more [`Edit`]s between client and
/// server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatchMessage {
    /// Message discriminant.
    pub msg_type: MessageType,
    /// Document identifier.
    pub id: String,
    /// The client the edits belong to.
    pub client_id: String,
    /// The edits, in the order they must be reconciled.
    pub edits: Vec<Edit>,
}

impl PatchMessage {
    /// Creates a patch message.
    pub fn new(id: impl Into<String>, client_id: impl Into<String>, edits: Vec<Edit>) -> Self {
        Self {
            msg_type: MessageType::Patch,
            id: id.into(),
            client_id: client_id.into(),
            edits,
        }
    }

    /// Encodes to the JSON wire format.
    pub fn encode(&self) -> ProtocolResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decodes from the JSON wire format.
    pub fn decode(json: &str) -> ProtocolResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::edit::DiffOp;

    #[test]
    fn message_type_wire_names() {
        assert_eq!(serde_json::to_string(&MessageType::Add).unwrap(), "\"add\"");
        assert_eq!(
            serde_json::to_string(&MessageType::Patch).unwrap(),
            "\"patch\""
        );
    }

    #[test]
    fn patch_message_encode_decode() {
        let edit = Edit {
            id: "1234".into(),
            client_id: "client-1".into(),
            server_version: 0,
            client_version: 0,
            diffs: vec![DiffOp::unchanged("hello")],
        };
        let message = PatchMessage::new("1234", "client-1", vec![edit]);

        let json = message.encode().unwrap();
        assert!(json.contains("\"msgType\":\"patch\""));
        assert!(json.contains("\"clientId\":\"client-1\""));

        let decoded = PatchMessage::decode(&json).unwrap();
        assert_eq!(decoded, message);
    }

    #[test]
    fn decode_rejects_garbage() {
        assert!(PatchMessage::decode("not json").is_err());
        assert!(PatchMessage::decode("{\"msgType\":\"patch\"}").is_err());
    }

    #[test]
    fn decode_reference_wire_message() {
        let json = r#"{
            "msgType": "patch",
            "id": "1234",
            "clientId": "client-1",
            "edits": [{
                "id": "1234",
                "clientId": "client-1",
                "serverVersion": 0,
                "clientVersion": 0,
                "diffs": [
                    {"operation": "UNCHANGED", "text": "stop calling me "},
                    {"operation": "DELETE", "text": "s"},
                    {"operation": "INSERT", "text": "S"},
                    {"operation": "UNCHANGED", "text": "hirley"}
                ]
            }]
        }"#;

        let message = PatchMessage::decode(json).unwrap();
        assert_eq!(message.edits.len(), 1);
        assert_eq!(message.edits[0].diffs.len(), 4);
        assert_eq!(message.edits[0].diffs[1], DiffOp::delete("s"));
    }
}
