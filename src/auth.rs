pub struct Token(String);

impl From<&str> for Token {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl Token {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<redacted>")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_from_str_creates_token() {
        let token = Token::from("sb_live_1234567890abcdef");

        assert_eq!(token.as_str(), "sb_live_1234567890abcdef");
    }

    #[test]
    fn test_token_from_empty_string() {
        let token = Token::from("");

        assert_eq!(token.as_str(), "");
        assert_eq!(format!("{token:?}"), "<redacted>");
    }

    #[test]
    fn test_token_debug_redacts_value() {
        let token = Token::from("dashboard_secret_do_not_log");
        let debug_output = format!("{token:?}");

        assert_eq!(debug_output, "<redacted>");
        assert!(!debug_output.contains("secret"));
    }

    #[test]
    fn test_token_debug_in_struct() {
        #[derive(Debug)]
        #[allow(dead_code)]
        struct Source {
            token: Token,
            endpoint: String,
        }

        let source = Source {
            token: Token::from("super_secret_token"),
            endpoint: String::from("https://dashboard.example.com/managers"),
        };

        let debug_output = format!("{source:?}");

        assert!(debug_output.contains("<redacted>"));
        assert!(!debug_output.contains("super_secret_token"));
        assert!(debug_output.contains("https://dashboard.example.com/managers"));
    }
}
