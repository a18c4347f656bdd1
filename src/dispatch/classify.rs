use crate::error::DispatchError;
use crate::model::{Intent, IntentKind, UnknownPrefixPolicy};

/// Turns one line of user input into an [`Intent`].
///
/// Prefixes are tried in [`IntentKind::ALL`] order and must be followed by
/// whitespace or the end of input, so `-navy` is not a `-nav` command. Pure:
/// the same input and policy always give the same result.
pub fn classify(raw: &str, policy: UnknownPrefixPolicy) -> Result<Intent, DispatchError> {
    let text = raw.trim();
    if text.is_empty() {
        return Err(DispatchError::EmptyInput);
    }

    for kind in IntentKind::ALL {
        if let Some(rest) = strip_prefix_token(text, kind.prefix()) {
            let argument = rest.trim();
            if argument.is_empty() {
                return Err(DispatchError::MissingArgument(kind));
            }
            return Ok(Intent::new(kind, argument));
        }
    }

    match policy {
        UnknownPrefixPolicy::Reject => Err(DispatchError::UnrecognizedCommand),
        UnknownPrefixPolicy::DefaultToWebSearch => Ok(Intent::new(IntentKind::WebSearch, text)),
    }
}

fn strip_prefix_token<'a>(text: &'a str, prefix: &str) -> Option<&'a str> {
    let rest = text.strip_prefix(prefix)?;
    match rest.chars().next() {
        None => Some(rest),
        Some(c) if c.is_whitespace() => Some(rest),
        Some(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    use crate::model::UnknownPrefixPolicy::{DefaultToWebSearch, Reject};

    #[test]
    fn each_prefix_maps_to_its_kind() {
        let cases = [
            ("-nav rust lifetimes", IntentKind::WebSearch, "rust lifetimes"),
            ("-exp ~/Documents", IntentKind::FileSearch, "~/Documents"),
            ("-sys wifi", IntentKind::SystemSetting, "wifi"),
            ("-app calculator", IntentKind::LaunchApp, "calculator"),
        ];
        for (input, kind, argument) in cases {
            assert_eq!(classify(input, Reject).unwrap(), Intent::new(kind, argument));
        }
    }

    #[test]
    fn trims_around_prefix_and_argument() {
        assert_eq!(
            classify("   -sys \t bluetooth  ", Reject).unwrap(),
            Intent::new(IntentKind::SystemSetting, "bluetooth")
        );
    }

    #[test]
    fn bare_prefix_is_missing_argument() {
        assert!(matches!(
            classify("-nav", Reject),
            Err(DispatchError::MissingArgument(IntentKind::WebSearch))
        ));
        assert!(matches!(
            classify("-nav   ", Reject),
            Err(DispatchError::MissingArgument(IntentKind::WebSearch))
        ));
        // The policy does not turn a bare prefix into a search for "-app"
        assert!(matches!(
            classify("-app", DefaultToWebSearch),
            Err(DispatchError::MissingArgument(IntentKind::LaunchApp))
        ));
    }

    #[test]
    fn blank_input_is_empty() {
        for input in ["", "   ", "\t\n"] {
            assert!(matches!(classify(input, Reject), Err(DispatchError::EmptyInput)));
            assert!(matches!(
                classify(input, DefaultToWebSearch),
                Err(DispatchError::EmptyInput)
            ));
        }
    }

    #[test]
    fn unknown_prefix_follows_policy() {
        assert!(matches!(
            classify("hello world", Reject),
            Err(DispatchError::UnrecognizedCommand)
        ));
        assert_eq!(
            classify("hello world", DefaultToWebSearch).unwrap(),
            Intent::new(IntentKind::WebSearch, "hello world")
        );
    }

    #[test]
    fn prefix_needs_a_separator() {
        assert!(matches!(
            classify("-navy seals", Reject),
            Err(DispatchError::UnrecognizedCommand)
        ));
        assert_eq!(
            classify("-navy seals", DefaultToWebSearch).unwrap(),
            Intent::new(IntentKind::WebSearch, "-navy seals")
        );
        assert!(matches!(
            classify("-NAV rust", Reject),
            Err(DispatchError::UnrecognizedCommand)
        ));
    }

    #[test]
    fn only_the_leading_prefix_counts() {
        assert_eq!(
            classify("-app -nav", Reject).unwrap(),
            Intent::new(IntentKind::LaunchApp, "-nav")
        );
    }

    proptest! {
        #[test]
        fn prefix_and_argument_round_trip(
            idx in 0usize..4,
            argument in "[a-zA-Z0-9_./~-][a-zA-Z0-9 _./~-]{0,30}[a-zA-Z0-9_./~-]",
        ) {
            let kind = IntentKind::ALL[idx];
            let input = format!("{} {}", kind.prefix(), argument);
            let intent = classify(&input, Reject).unwrap();
            prop_assert_eq!(intent.kind, kind);
            prop_assert_eq!(intent.argument, argument.trim());
        }

        #[test]
        fn classification_is_repeatable(input in "\\PC{0,40}", permissive in any::<bool>()) {
            let policy = if permissive { DefaultToWebSearch } else { Reject };
            let first = format!("{:?}", classify(&input, policy));
            let _ = classify("-sys wifi", policy);
            let second = format!("{:?}", classify(&input, policy));
            prop_assert_eq!(first, second);
        }
    }
}
