//! Root greeting served by the backend.

/// Greeting returned by `GET /`.
pub const GREETING: &str = "Hello from the backend!";

/// Returns the greeting string.
pub fn hello_world() -> &'static str {
    GREETING
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hello_world_is_backend_greeting() {
        assert_eq!(hello_world(), "Hello from the backend!");
    }
}
