/// Greeting shown by the CLI and the demo report.
pub fn greet(name: &str) -> String {
    format!("Hello, {name}!")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greets_by_name() {
        assert_eq!(greet("TypeScript"), "Hello, TypeScript!");
    }

    #[test]
    fn keeps_name_verbatim() {
        assert_eq!(greet("PūteaMātai"), "Hello, PūteaMātai!");
        assert_eq!(greet(""), "Hello, !");
    }
}
