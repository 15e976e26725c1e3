//! Machine-readable renderings of tokens and sessions.

use crate::model::{Session, Volumes};
use crate::token::Token;

pub fn session_json(session: &Session, pretty: bool) -> Result<String, serde_json::Error> {
    if pretty {
        serde_json::to_string_pretty(session)
    } else {
        serde_json::to_string(session)
    }
}

pub fn session_yaml(session: &Session) -> Result<String, serde_yaml::Error> {
    serde_yaml::to_string(session)
}

/// One `[Kind] value` line per token.
pub fn tokens_simple(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(Token::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn tokens_json(tokens: &[Token], pretty: bool) -> Result<String, serde_json::Error> {
    if pretty {
        serde_json::to_string_pretty(tokens)
    } else {
        serde_json::to_string(tokens)
    }
}

/// `unit: amount` lines, sorted by unit.
pub fn volumes(volumes: &Volumes) -> String {
    volumes
        .iter()
        .map(|(unit, amount)| format!("{unit}: {amount}"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexing::tokenize;
    use crate::parsing::parse;

    #[test]
    fn test_tokens_simple() {
        let tokens = tokenize("squat:\n100 5r").expect("tokenize failed");
        assert_eq!(
            tokens_simple(&tokens),
            "[Movement] squat\n[Load] 100\n[Reps] 5"
        );
    }

    #[test]
    fn test_tokens_json_carries_ranges() {
        let tokens = tokenize("squat:").expect("tokenize failed");
        let json: serde_json::Value =
            serde_json::from_str(&tokens_json(&tokens, false).expect("serialize"))
                .expect("valid json");
        assert_eq!(json[0]["kind"], "Movement");
        assert_eq!(json[0]["range"]["start"]["column"], 0);
        assert_eq!(json[0]["range"]["end"]["column"], 5);
    }

    #[test]
    fn test_volumes_sorted_by_unit() {
        let session = parse("# unit: lb\nsquat:\n100 5r\nbench:\n# unit: kg\n60 10r\nrow:\n")
            .expect("parse failed");
        assert_eq!(volumes(&session.volumes()), "kg: 600\nlb: 500");
    }

    #[test]
    fn test_session_yaml_uses_camel_case() {
        let session = parse("+ lunge:\n20").expect("parse failed");
        let yaml = session_yaml(&session).expect("serialize");
        assert!(yaml.contains("superSet: true"));
    }
}
