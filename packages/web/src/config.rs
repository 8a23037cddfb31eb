/// Comment-moderation policy. New comments default to pending review; the
/// legacy behavior that published them immediately stays reachable through
/// COMMENT_AUTO_APPROVE for deployments that still want it.
#[derive(Clone)]
pub struct ModerationPolicy {
    pub auto_approve: bool,
}

impl ModerationPolicy {
    pub fn from_env() -> Self {
        let auto_approve = std::env::var("COMMENT_AUTO_APPROVE")
            .map(|v| matches!(v.as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);
        Self { auto_approve }
    }

    pub fn pending_review() -> Self {
        Self {
            auto_approve: false,
        }
    }
}
