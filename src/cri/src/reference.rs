//! Image reference splitting and registry auth translation.

use hyperlet_core::provider::RegistryAuth;

use crate::model::AuthConfig;

/// Default tag when none is specified.
const DEFAULT_TAG: &str = "latest";

/// Split an image reference into repository and tag-or-digest.
///
/// - `nginx` → (`nginx`, `latest`)
/// - `nginx:1.19` → (`nginx`, `1.19`)
/// - `localhost:5000/foo` → (`localhost:5000/foo`, `latest`); the colon is a port
/// - `repo@sha256:abcd` → (`repo`, `sha256:abcd`)
///
/// A reference with several `@` keeps only the first two segments; the rest
/// is dropped. Pulls from existing deployments depend on this, so it stays.
pub fn parse_repository_tag(reference: &str) -> (String, String) {
    if reference.contains('@') {
        let mut parts = reference.split('@');
        let repo = parts.next().unwrap_or_default();
        let digest = parts.next().unwrap_or_default();
        return (repo.to_string(), digest.to_string());
    }

    let Some(colon) = reference.rfind(':') else {
        return (reference.to_string(), DEFAULT_TAG.to_string());
    };

    let tag = &reference[colon + 1..];
    if tag.contains('/') {
        return (reference.to_string(), DEFAULT_TAG.to_string());
    }

    (reference[..colon].to_string(), tag.to_string())
}

/// Append `:latest` to a reference that has no colon at all.
pub fn with_default_tag(reference: &str) -> String {
    if reference.contains(':') {
        reference.to_string()
    } else {
        format!("{}:{}", reference, DEFAULT_TAG)
    }
}

/// Build provider credentials, copying only the fields that were supplied.
pub fn registry_auth(auth: Option<&AuthConfig>) -> RegistryAuth {
    let Some(auth) = auth else {
        return RegistryAuth::default();
    };

    RegistryAuth {
        username: auth.username.clone(),
        password: auth.password.clone(),
        auth: auth.auth.clone(),
        registry_token: auth.registry_token.clone(),
        server_address: auth.server_address.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split(reference: &str) -> (String, String) {
        parse_repository_tag(reference)
    }

    fn pair(repo: &str, tag: &str) -> (String, String) {
        (repo.to_string(), tag.to_string())
    }

    #[test]
    fn test_bare_name_defaults_to_latest() {
        assert_eq!(split("nginx"), pair("nginx", "latest"));
    }

    #[test]
    fn test_name_with_tag() {
        assert_eq!(split("nginx:1.19"), pair("nginx", "1.19"));
    }

    #[test]
    fn test_registry_port_is_not_a_tag() {
        assert_eq!(split("localhost:5000/foo"), pair("localhost:5000/foo", "latest"));
    }

    #[test]
    fn test_registry_port_with_tag() {
        assert_eq!(
            split("localhost.localdomain:5000/samalba/hipache:v2"),
            pair("localhost.localdomain:5000/samalba/hipache", "v2")
        );
    }

    #[test]
    fn test_digest() {
        assert_eq!(split("repo@sha256:abcd"), pair("repo", "sha256:abcd"));
        assert_eq!(
            split("localhost:5000/foo/bar@sha256:bc88"),
            pair("localhost:5000/foo/bar", "sha256:bc88")
        );
    }

    #[test]
    fn test_multiple_at_signs_keep_first_two_segments() {
        assert_eq!(split("repo@sha256:aa@extra"), pair("repo", "sha256:aa"));
    }

    #[test]
    fn test_trailing_colon_gives_empty_tag() {
        assert_eq!(split("nginx:"), pair("nginx", ""));
    }

    #[test]
    fn test_with_default_tag() {
        assert_eq!(with_default_tag("busybox"), "busybox:latest");
        assert_eq!(with_default_tag("busybox:1.36"), "busybox:1.36");
    }

    #[test]
    fn test_registry_auth_absent_is_default() {
        assert_eq!(registry_auth(None), RegistryAuth::default());
    }

    #[test]
    fn test_registry_auth_copies_present_fields_only() {
        let auth = AuthConfig {
            username: Some("alice".to_string()),
            password: Some(String::new()),
            server_address: Some("registry.local".to_string()),
            ..Default::default()
        };
        let translated = registry_auth(Some(&auth));
        assert_eq!(translated.username.as_deref(), Some("alice"));
        assert_eq!(translated.password.as_deref(), Some(""));
        assert_eq!(translated.server_address.as_deref(), Some("registry.local"));
        assert!(translated.auth.is_none());
        assert!(translated.registry_token.is_none());
    }
}
