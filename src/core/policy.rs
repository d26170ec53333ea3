/*
 * This module defines the pluggable policy consulted when the display surface
 * raises a page-permission request (geolocation, media capture, notifications,
 * protocol-handler registration) or asks for a client certificate. The shell
 * forwards such requests here instead of hard-wiring dialog boxes, so callers
 * can substitute real UI prompting or automated policy.
 *
 * None of this is real security; it is an explicit seam in place of inline
 * yes/no dialogs and an auto-approve-first-certificate callback.
 */

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PermissionRequestKind {
    Geolocation,
    MediaAudioCapture,
    MediaVideoCapture,
    MediaAudioVideoCapture,
    MouseLock,
    DesktopVideoCapture,
    DesktopAudioVideoCapture,
    Notifications,
    ProtocolHandlerRegistration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyDecision {
    Allow,
    Deny,
}

pub trait PagePermissionPolicy: Send + Sync {
    fn decide(&self, request_kind: PermissionRequestKind, origin: &str) -> PolicyDecision;

    /*
     * Picks a client certificate from the offered list, by index. The default
     * takes the first offered certificate; implementations backed by real UI
     * can prompt instead.
     */
    fn select_client_certificate(&self, offered: &[String]) -> Option<usize> {
        if offered.is_empty() { None } else { Some(0) }
    }
}

/*
 * A policy that returns the same fixed decision for every request. The
 * conservative default is `Deny`; local-archive triage needs none of these
 * capabilities.
 */
pub struct StaticPolicy {
    decision: PolicyDecision,
}

impl StaticPolicy {
    pub fn new(decision: PolicyDecision) -> Self {
        StaticPolicy { decision }
    }
}

impl Default for StaticPolicy {
    fn default() -> Self {
        Self::new(PolicyDecision::Deny)
    }
}

impl PagePermissionPolicy for StaticPolicy {
    fn decide(&self, request_kind: PermissionRequestKind, origin: &str) -> PolicyDecision {
        log::debug!(
            "PagePermissionPolicy: {request_kind:?} from '{origin}' -> {:?}",
            self.decision
        );
        self.decision
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_policy_applies_fixed_decision() {
        let deny_all = StaticPolicy::default();
        assert_eq!(
            deny_all.decide(PermissionRequestKind::Geolocation, "example.org"),
            PolicyDecision::Deny
        );

        let allow_all = StaticPolicy::new(PolicyDecision::Allow);
        assert_eq!(
            allow_all.decide(PermissionRequestKind::Notifications, "example.org"),
            PolicyDecision::Allow
        );
    }

    #[test]
    fn test_default_certificate_selection_takes_first_offered() {
        let policy = StaticPolicy::default();
        let offered = vec!["cert-a".to_string(), "cert-b".to_string()];
        assert_eq!(policy.select_client_certificate(&offered), Some(0));
        assert_eq!(policy.select_client_certificate(&[]), None);
    }

    // A substituted policy that only allows notifications, proving the seam
    // is usable for finer-grained rules.
    struct NotificationsOnly;

    impl PagePermissionPolicy for NotificationsOnly {
        fn decide(&self, request_kind: PermissionRequestKind, _origin: &str) -> PolicyDecision {
            match request_kind {
                PermissionRequestKind::Notifications => PolicyDecision::Allow,
                _ => PolicyDecision::Deny,
            }
        }
    }

    #[test]
    fn test_policies_are_substitutable() {
        let policy: Box<dyn PagePermissionPolicy> = Box::new(NotificationsOnly);
        assert_eq!(
            policy.decide(PermissionRequestKind::Notifications, "example.org"),
            PolicyDecision::Allow
        );
        assert_eq!(
            policy.decide(PermissionRequestKind::MediaAudioCapture, "example.org"),
            PolicyDecision::Deny
        );
    }
}
