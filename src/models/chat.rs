use serde::{ Serialize, Deserialize };

/// One message of the frontend conversation, oldest first. The frontend
/// tags messages with `sender: "user"` or `sender: "bot"`; any other tag is
/// accepted on the wire and dropped during translation.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ChatMessage {
    pub sender: String,
    pub text: String,
}

/// Successful reply body for `POST /api/chat`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
}

/// Error body shared by every failure status.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
