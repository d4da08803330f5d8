#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allow,
    Block,
}

impl Decision {
    pub fn as_str(self) -> &'static str {
        match self {
            Decision::Allow => "allow",
            Decision::Block => "block",
        }
    }

    /// Hook process exit code: 2 tells Claude Code to cancel the tool call.
    pub fn exit_code(self) -> i32 {
        match self {
            Decision::Allow => 0,
            Decision::Block => 2,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RuleMatch {
    pub decision: Decision,
    pub reason: String,
}

impl RuleMatch {
    pub fn allow(reason: impl Into<String>) -> Self {
        Self {
            decision: Decision::Allow,
            reason: reason.into(),
        }
    }

    pub fn block(reason: impl Into<String>) -> Self {
        Self {
            decision: Decision::Block,
            reason: reason.into(),
        }
    }
}
