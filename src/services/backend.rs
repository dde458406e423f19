//! Backend greeting services exposed under `/api/service-*`.

/// The four backend services the shell talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendService {
    A,
    B,
    C,
    D,
}

impl BackendService {
    pub const ALL: [BackendService; 4] = [Self::A, Self::B, Self::C, Self::D];

    /// Parse the path segment after `/api/`, e.g. `service-a`.
    #[must_use]
    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|svc| svc.slug() == slug)
    }

    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Self::A => "service-a",
            Self::B => "service-b",
            Self::C => "service-c",
            Self::D => "service-d",
        }
    }

    #[must_use]
    pub fn greeting(self) -> &'static str {
        match self {
            Self::A => "Hello from Service A!",
            Self::B => "Hello from Service B!",
            Self::C => "Hello from Service C!",
            Self::D => "Hello from Service D!",
        }
    }
}

#[cfg(test)]
#[path = "backend_test.rs"]
mod tests;
