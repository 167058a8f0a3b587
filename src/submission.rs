/// Where the submit flow currently is.
///
/// An explicit enum rather than a boolean so future states (cancelling,
/// queued) have somewhere to go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Submitting,
}

/// State of the generate flow: the in-flight guard plus the last result.
///
/// Exactly one request may be outstanding; `try_begin` is the only entry
/// point and refuses re-entry while a request is pending. A failed request
/// leaves the previously generated image untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    phase: Phase,
    generated_url: Option<String>,
    failures: u32,
}

impl Submission {
    pub fn new() -> Self {
        Self {
            phase: Phase::Idle,
            generated_url: None,
            failures: 0,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == Phase::Submitting
    }

    /// Object URL of the last successful generation, if any
    pub fn generated_url(&self) -> Option<&str> {
        self.generated_url.as_deref()
    }

    pub fn failure_count(&self) -> u32 {
        self.failures
    }

    /// Guard and enter `Submitting`. Returns false (and changes nothing)
    /// while a request is already pending or the prompt is blank.
    pub fn try_begin(&mut self, prompt: &str) -> bool {
        if self.phase == Phase::Submitting || prompt.trim().is_empty() {
            return false;
        }
        self.phase = Phase::Submitting;
        true
    }

    /// Record a successful generation and return the URL it replaced so the
    /// caller can revoke it.
    pub fn succeed(&mut self, url: String) -> Option<String> {
        self.phase = Phase::Idle;
        self.generated_url.replace(url)
    }

    /// Record a failed generation; the previous image stays displayed.
    pub fn fail(&mut self) {
        self.phase = Phase::Idle;
        self.failures += 1;
    }
}

impl Default for Submission {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_begin_requires_prompt() {
        let mut flow = Submission::new();
        assert!(!flow.try_begin(""));
        assert!(!flow.try_begin("   "));
        assert_eq!(flow.phase(), Phase::Idle);
        assert!(flow.try_begin("a red balloon"));
        assert_eq!(flow.phase(), Phase::Submitting);
    }

    #[test]
    fn test_second_submit_rejected_while_pending() {
        let mut flow = Submission::new();
        assert!(flow.try_begin("a red balloon"));
        // still in flight: the guard must hold even with a valid prompt
        assert!(!flow.try_begin("a red balloon"));
        flow.succeed("blob:first".to_string());
        assert!(flow.try_begin("a red balloon"));
    }

    #[test]
    fn test_success_stores_url_and_returns_to_idle() {
        let mut flow = Submission::new();
        flow.try_begin("a red balloon");
        let previous = flow.succeed("blob:result".to_string());
        assert_eq!(previous, None);
        assert_eq!(flow.generated_url(), Some("blob:result"));
        assert_eq!(flow.phase(), Phase::Idle);
        assert_eq!(flow.failure_count(), 0);
    }

    #[test]
    fn test_success_hands_back_replaced_url() {
        let mut flow = Submission::new();
        flow.try_begin("first");
        flow.succeed("blob:one".to_string());
        flow.try_begin("second");
        let previous = flow.succeed("blob:two".to_string());
        assert_eq!(previous.as_deref(), Some("blob:one"));
        assert_eq!(flow.generated_url(), Some("blob:two"));
    }

    #[test]
    fn test_failure_preserves_previous_image() {
        let mut flow = Submission::new();
        flow.try_begin("first");
        flow.succeed("blob:kept".to_string());

        flow.try_begin("second");
        flow.fail();
        assert_eq!(flow.generated_url(), Some("blob:kept"));
        assert_eq!(flow.phase(), Phase::Idle);
        assert_eq!(flow.failure_count(), 1);
    }
}
