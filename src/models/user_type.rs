use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, PartialOrd, Ord)]
pub enum UserType {
    Customer,
    Subscriber,
}

impl UserType {
    pub fn ut_from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "subscriber" => Some(Self::Subscriber),
            "customer" => Some(Self::Customer),
            _ => None,
        }
    }

    pub fn ut_as_str(&self) -> &'static str {
        match self {
            UserType::Subscriber => "Subscriber",
            UserType::Customer => "Customer",
        }
    }
}
