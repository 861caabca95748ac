//! Mock implementations of session providers for testing
//!
//! Every mock appends to a shared journal so tests can assert on the order in
//! which the command flow touched its collaborators.

use crate::application::config::AppConfig;
use crate::application::session::{
    ConfigProvider, ForwardingError, InteractiveProvider, ProcessProvider, Session,
};
use crate::dependency::{PackageNode, ResolutionError, TreeResolver};
use crate::display::{ConfirmError, DisplayProvider, MockDisplayProvider};
use crate::stats::{LookupError, PackageStats, StatsLookup};
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

/// One interaction with a session collaborator
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    Forward {
        program: String,
        subcommand: String,
        args: Vec<String>,
    },
    Resolve(String),
    Lookup(String),
    Confirm(String),
}

/// Journal shared by all mocks of one session
pub type Journal = Arc<Mutex<Vec<SessionEvent>>>;

fn record(journal: &Journal, event: SessionEvent) {
    journal.lock().unwrap().push(event);
}

/// Mock resolver returning canned trees
#[derive(Default)]
pub struct MockTreeResolver {
    pub trees: HashMap<String, PackageNode>,
    pub failures: HashMap<String, String>,
    journal: Journal,
}

impl MockTreeResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tree(mut self, tree: PackageNode) -> Self {
        self.trees.insert(tree.name.clone(), tree);
        self
    }

    pub fn with_failure(mut self, root: &str, message: &str) -> Self {
        self.failures.insert(root.to_string(), message.to_string());
        self
    }
}

impl TreeResolver for MockTreeResolver {
    fn resolve(&self, root: &str) -> Result<PackageNode, ResolutionError> {
        record(&self.journal, SessionEvent::Resolve(root.to_string()));

        if let Some(message) = self.failures.get(root) {
            return Err(ResolutionError::PackageError {
                package: root.to_string(),
                message: message.clone(),
            });
        }

        self.trees
            .get(root)
            .cloned()
            .ok_or_else(|| ResolutionError::PackageNotFound {
                package: root.to_string(),
            })
    }
}

/// Mock stats lookup; unknown packages fail with a 404
#[derive(Default)]
pub struct MockStatsLookup {
    pub stats: HashMap<String, PackageStats>,
    journal: Journal,
}

impl MockStatsLookup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_stats(mut self, stats: PackageStats) -> Self {
        self.stats.insert(stats.package.clone(), stats);
        self
    }
}

impl StatsLookup for MockStatsLookup {
    fn lookup(&self, package: &str) -> Result<PackageStats, LookupError> {
        record(&self.journal, SessionEvent::Lookup(package.to_string()));

        self.stats
            .get(package)
            .cloned()
            .ok_or_else(|| LookupError::UnexpectedStatus {
                package: package.to_string(),
                status: 404,
            })
    }
}

/// Mock process provider for testing with spy pattern
#[derive(Default)]
pub struct MockProcessProvider {
    /// Programs whose invocation exits non-zero
    pub failing: Vec<String>,
    journal: Journal,
}

impl MockProcessProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_failing_program(mut self, program: &str) -> Self {
        self.failing.push(program.to_string());
        self
    }

    /// Forwarded invocations as `program subcommand`, in order
    pub fn get_calls(&self) -> Vec<(String, String, Vec<String>)> {
        self.journal
            .lock()
            .unwrap()
            .iter()
            .filter_map(|event| match event {
                SessionEvent::Forward {
                    program,
                    subcommand,
                    args,
                } => Some((program.clone(), subcommand.clone(), args.clone())),
                _ => None,
            })
            .collect()
    }
}

impl ProcessProvider for MockProcessProvider {
    fn forward(
        &self,
        program: &str,
        subcommand: &str,
        args: &[String],
    ) -> Result<(), ForwardingError> {
        record(
            &self.journal,
            SessionEvent::Forward {
                program: program.to_string(),
                subcommand: subcommand.to_string(),
                args: args.to_vec(),
            },
        );

        if self.failing.iter().any(|p| p == program) {
            #[cfg(unix)]
            let status = std::os::unix::process::ExitStatusExt::from_raw(1 << 8);
            #[cfg(windows)]
            let status = std::os::windows::process::ExitStatusExt::from_raw(1);

            return Err(ForwardingError::Failed {
                program: program.to_string(),
                status,
            });
        }

        Ok(())
    }
}

/// Mock config provider for testing
pub struct MockConfigProvider {
    pub app_config: AppConfig,
}

impl MockConfigProvider {
    pub fn new(app_config: AppConfig) -> Self {
        Self { app_config }
    }
}

impl ConfigProvider for MockConfigProvider {
    fn app_config(&self) -> &AppConfig {
        &self.app_config
    }
}

/// Mock confirmation gate answering from a queue
///
/// An exhausted queue behaves like closed input.
#[derive(Default)]
pub struct MockInteractiveProvider {
    answers: Mutex<VecDeque<bool>>,
    journal: Journal,
}

impl MockInteractiveProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_confirm(self, answer: bool) -> Self {
        self.answers.lock().unwrap().push_back(answer);
        self
    }
}

impl InteractiveProvider for MockInteractiveProvider {
    fn confirm(&self, prompt: &str) -> Result<bool, ConfirmError> {
        record(&self.journal, SessionEvent::Confirm(prompt.to_string()));
        self.answers
            .lock()
            .unwrap()
            .pop_front()
            .ok_or(ConfirmError::InputClosed)
    }
}

/// Mock command session for testing
pub struct MockCommandSession {
    pub display_provider: MockDisplayProvider,
    pub resolver: MockTreeResolver,
    pub stats_lookup: MockStatsLookup,
    pub process_provider: MockProcessProvider,
    pub config_provider: MockConfigProvider,
    pub interactive_provider: MockInteractiveProvider,
    journal: Journal,
}

impl MockCommandSession {
    pub fn new() -> Self {
        Self {
            display_provider: MockDisplayProvider::new(),
            resolver: MockTreeResolver::new(),
            stats_lookup: MockStatsLookup::new(),
            process_provider: MockProcessProvider::new(),
            config_provider: MockConfigProvider::new(AppConfig::default()),
            interactive_provider: MockInteractiveProvider::new(),
            journal: Journal::default(),
        }
        .attach_journal()
    }

    fn attach_journal(mut self) -> Self {
        self.resolver.journal = self.journal.clone();
        self.stats_lookup.journal = self.journal.clone();
        self.process_provider.journal = self.journal.clone();
        self.interactive_provider.journal = self.journal.clone();
        self
    }

    pub fn with_resolver(mut self, resolver: MockTreeResolver) -> Self {
        self.resolver = resolver;
        self.attach_journal()
    }

    pub fn with_stats(mut self, stats: MockStatsLookup) -> Self {
        self.stats_lookup = stats;
        self.attach_journal()
    }

    pub fn with_process(mut self, process: MockProcessProvider) -> Self {
        self.process_provider = process;
        self.attach_journal()
    }

    pub fn with_config(mut self, config: AppConfig) -> Self {
        self.config_provider = MockConfigProvider::new(config);
        self
    }

    pub fn with_interactive(mut self, interactive: MockInteractiveProvider) -> Self {
        self.interactive_provider = interactive;
        self.attach_journal()
    }

    /// Everything the session was asked to do, in order
    pub fn events(&self) -> Vec<SessionEvent> {
        self.journal.lock().unwrap().clone()
    }

    /// Printed lines, in order
    pub fn messages(&self) -> Vec<String> {
        self.display_provider.messages()
    }
}

impl Default for MockCommandSession {
    fn default() -> Self {
        Self::new()
    }
}

impl Session for MockCommandSession {
    fn display(&self) -> &dyn DisplayProvider {
        &self.display_provider
    }

    fn resolver(&self) -> &dyn TreeResolver {
        &self.resolver
    }

    fn stats(&self) -> &dyn StatsLookup {
        &self.stats_lookup
    }

    fn process(&self) -> &dyn ProcessProvider {
        &self.process_provider
    }

    fn config(&self) -> &dyn ConfigProvider {
        &self.config_provider
    }

    fn interactive(&self) -> &dyn InteractiveProvider {
        &self.interactive_provider
    }
}
