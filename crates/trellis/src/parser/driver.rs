use crate::syntax::SyntaxTree;

/// Statistics collected during a parse call
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseStats {
    /// Number of match nodes created, including ones later discarded
    pub nodes_created: usize,
    /// Number of times an alternative failed and the next one was tried
    pub backtracks: usize,
    /// Number of rule attempts
    pub rule_attempts: usize,
    /// Deepest rule nesting reached
    pub max_depth: usize,
}

impl ParseStats {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge stats from another instance
    pub fn merge(&mut self, other: &Self) {
        self.nodes_created += other.nodes_created;
        self.backtracks += other.backtracks;
        self.rule_attempts += other.rule_attempts;
        self.max_depth = self.max_depth.max(other.max_depth);
    }
}

/// A parsing event for debugging/tracing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseEvent<'g> {
    /// Started matching a rule
    EnterRule { rule: &'g str, position: usize },
    /// Finished matching a rule; `position` is the end of the match on
    /// success and the failure offset otherwise
    ExitRule {
        rule: &'g str,
        position: usize,
        success: bool,
    },
    /// An alternative failed at `from`; the next one restarts at `to`
    Backtrack { from: usize, to: usize },
}

/// Trait for receiving parse events (for debugging/tracing)
pub trait ParseEventHandler {
    /// Handle a parse event
    fn handle(&mut self, event: ParseEvent<'_>);
}

/// A no-op event handler
#[derive(Debug, Clone, Copy, Default)]
pub struct NullEventHandler;

impl ParseEventHandler for NullEventHandler {
    fn handle(&mut self, _event: ParseEvent<'_>) {}
}

/// Event handler that keeps a printable trace of every event
#[derive(Debug, Clone, Default)]
pub struct RecordingEventHandler {
    /// One line per event, indented by rule depth
    pub lines: Vec<String>,
    depth: usize,
}

impl RecordingEventHandler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The whole trace, one event per line
    #[must_use]
    pub fn trace(&self) -> String {
        self.lines.join("\n")
    }
}

impl ParseEventHandler for RecordingEventHandler {
    fn handle(&mut self, event: ParseEvent<'_>) {
        match event {
            ParseEvent::EnterRule { rule, position } => {
                self.lines
                    .push(format!("{}> {rule} @{position}", "  ".repeat(self.depth)));
                self.depth += 1;
            }
            ParseEvent::ExitRule {
                rule,
                position,
                success,
            } => {
                self.depth = self.depth.saturating_sub(1);
                let verdict = if success { "ok" } else { "fail" };
                self.lines.push(format!(
                    "{}< {rule} {verdict} @{position}",
                    "  ".repeat(self.depth)
                ));
            }
            ParseEvent::Backtrack { from, to } => {
                self.lines.push(format!(
                    "{}~ backtrack {from} -> {to}",
                    "  ".repeat(self.depth)
                ));
            }
        }
    }
}

/// Configuration for a parse call
#[derive(Debug, Clone)]
pub struct ParseConfig {
    /// Fail unless the start rule consumes the whole input
    pub require_full_input: bool,
    /// Enable statistics collection
    pub collect_stats: bool,
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self {
            require_full_input: true,
            collect_stats: true,
        }
    }
}

/// Successful result of [`Grammar::parse_with`](crate::grammar::Grammar::parse_with)
#[derive(Debug, Clone)]
pub struct ParseOutput {
    pub tree: SyntaxTree,
    pub stats: ParseStats,
}
