use serde::Deserialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SendContactMessage {
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
}
