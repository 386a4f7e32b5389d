use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Greeting {
    pub id: i64,
    pub message: String,
}

impl Greeting {
    pub fn hello(id: i64, name: Option<&str>) -> Self {
        let message = match name {
            Some(n) => format!("Hello World {}!!!", n),
            None => "Hello World!!!".to_string(),
        };
        Self { id, message }
    }
}

#[derive(Debug, Deserialize)]
pub struct NameQuery {
    pub name: String,
}

/// Form body; `id` stays textual so a bad value maps to our own 400.
#[derive(Debug, Deserialize)]
pub struct GreetForm {
    pub id: String,
    pub name: String,
}
