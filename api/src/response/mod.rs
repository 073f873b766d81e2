use serde::Serialize;

/// Standardized API response wrapper for all outgoing JSON responses.
///
/// Every endpoint answers with the same envelope:
/// ```json
/// {
///   "success": true,
///   "data": { ... },
///   "count": 3,
///   "message": "Events retrieved successfully"
/// }
/// ```
///
/// - `T` is the type of the `data` payload.
/// - `success` is `true` for 2xx responses.
/// - `data` is omitted when there is nothing to return (errors, deletes).
/// - `count` is only present on list responses.
/// - `message` is a human-readable context string.
/// - `error` is a short error title, only present on failures.
///
/// ## Example (error):
/// ```json
/// {
///   "success": false,
///   "message": "Event ID must be a number",
///   "error": "Invalid event ID"
/// }
/// ```
#[derive(Debug, Serialize)]
pub struct ApiResponse<T>
where
    T: Serialize,
{
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T>
where
    T: Serialize,
{
    /// Constructs a success response with the given data and message.
    pub fn success(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: Some(data),
            count: None,
            message: message.into(),
            error: None,
        }
    }
}

impl<T> ApiResponse<Vec<T>>
where
    T: Serialize,
{
    /// Constructs a list response; `count` is the number of items.
    pub fn list(items: Vec<T>, message: impl Into<String>) -> Self {
        Self {
            success: true,
            count: Some(items.len()),
            data: Some(items),
            message: message.into(),
            error: None,
        }
    }
}

impl ApiResponse<()> {
    /// Success without a payload.
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: None,
            count: None,
            message: message.into(),
            error: None,
        }
    }

    /// Constructs an error response.
    ///
    /// # Arguments
    /// - `error`: Short title, e.g. `"Event not found"`.
    /// - `message`: Detail, usually the underlying error text.
    pub fn error(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            count: None,
            message: message.into(),
            error: Some(error.into()),
        }
    }
}
