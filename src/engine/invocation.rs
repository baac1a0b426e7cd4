// ABOUTME: External process invocation descriptor and its semantic command kind.
// ABOUTME: Built by the command builder, consumed by executors and the trace emitter.

use std::fmt;

/// What an invocation does, carried alongside its argv.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    VersionProbe,
    InfoProbe,
    Login,
    Pull,
    /// Pull of a cache-source image. Failures are tolerated.
    CachePull,
    Tag,
    Push,
    RemoveImage,
    Prune,
    Build,
    Daemon,
}

impl CommandKind {
    /// Whether a failure of this command may be ignored by the orchestrator.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, CommandKind::CachePull)
    }
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CommandKind::VersionProbe => "version",
            CommandKind::InfoProbe => "info",
            CommandKind::Login => "login",
            CommandKind::Pull => "pull",
            CommandKind::CachePull => "cache-pull",
            CommandKind::Tag => "tag",
            CommandKind::Push => "push",
            CommandKind::RemoveImage => "rmi",
            CommandKind::Prune => "prune",
            CommandKind::Build => "build",
            CommandKind::Daemon => "daemon",
        };
        f.write_str(name)
    }
}

/// How an executor wires the child's stdout and stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Streams {
    /// Pass through to the parent's streams.
    Inherit,
    /// Discard all output.
    Discard,
}

/// A fully formed external process invocation.
#[derive(Clone, PartialEq, Eq)]
pub struct Invocation {
    kind: CommandKind,
    program: String,
    args: Vec<String>,
    stdin: Option<String>,
}

impl Invocation {
    pub fn new<I, S>(kind: CommandKind, program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            kind,
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
            stdin: None,
        }
    }

    /// Attach a payload to be written to the child's standard input.
    pub fn with_stdin(mut self, payload: impl Into<String>) -> Self {
        self.stdin = Some(payload.into());
        self
    }

    pub fn kind(&self) -> CommandKind {
        self.kind
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    pub fn stdin(&self) -> Option<&str> {
        self.stdin.as_deref()
    }

    /// The image reference this invocation operates on, if any.
    pub fn image(&self) -> Option<&str> {
        match self.kind {
            CommandKind::Pull
            | CommandKind::CachePull
            | CommandKind::Tag
            | CommandKind::Push
            | CommandKind::RemoveImage => self.args.get(1).map(String::as_str),
            _ => None,
        }
    }
}

/// Program and arguments joined by single spaces. Never includes stdin.
impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Invocation")
            .field("kind", &self.kind)
            .field("program", &self.program)
            .field("args", &self.args)
            .field("stdin", &self.stdin.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_joins_program_and_args() {
        let inv = Invocation::new(CommandKind::Prune, "docker", ["system", "prune", "-f"]);
        assert_eq!(inv.to_string(), "docker system prune -f");
    }

    #[test]
    fn display_without_args_is_program_only() {
        let inv = Invocation::new(CommandKind::VersionProbe, "docker", Vec::<String>::new());
        assert_eq!(inv.to_string(), "docker");
    }

    #[test]
    fn debug_redacts_stdin() {
        let inv = Invocation::new(CommandKind::Login, "docker", ["login"]).with_stdin("hunter2");
        let rendered = format!("{:?}", inv);
        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains("<redacted>"));
    }

    #[test]
    fn only_cache_pull_is_recoverable() {
        assert!(CommandKind::CachePull.is_recoverable());
        assert!(!CommandKind::Pull.is_recoverable());
        assert!(!CommandKind::Push.is_recoverable());
        assert!(!CommandKind::Login.is_recoverable());
    }

    #[test]
    fn image_is_first_operand_for_image_commands() {
        let pull = Invocation::new(CommandKind::CachePull, "docker", ["pull", "acct/cache:1"]);
        assert_eq!(pull.image(), Some("acct/cache:1"));

        let info = Invocation::new(CommandKind::InfoProbe, "docker", ["info"]);
        assert_eq!(info.image(), None);
    }
}
