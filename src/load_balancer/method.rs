//! Load balancing method resolution.

/// Method used when an upstream declares none.
pub const DEFAULT_LOAD_BALANCING_METHOD: &str = "random two least_conn";

/// The data plane's native method; selected by emitting no directive.
pub const NATIVE_LOAD_BALANCING_METHOD: &str = "round_robin";

/// Resolve a declared method to the directive value to emit.
///
/// Anything other than empty or the native method is passed through
/// unchanged and left for the data plane to reject.
pub fn resolve_load_balancing_method(method: &str) -> String {
    match method {
        "" => DEFAULT_LOAD_BALANCING_METHOD.to_string(),
        NATIVE_LOAD_BALANCING_METHOD => String::new(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_method_uses_two_choice_least_conn() {
        assert_eq!(resolve_load_balancing_method(""), "random two least_conn");
    }

    #[test]
    fn test_round_robin_emits_nothing() {
        assert_eq!(resolve_load_balancing_method("round_robin"), "");
    }

    #[test]
    fn test_other_methods_pass_through() {
        assert_eq!(resolve_load_balancing_method("least_conn"), "least_conn");
        assert_eq!(resolve_load_balancing_method("hash $remote_addr consistent"), "hash $remote_addr consistent");
    }
}
