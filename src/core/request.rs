use std::path::{Path, PathBuf};

/// A single protection run, as requested on the command line.
#[derive(Debug, Clone)]
pub struct InvocationRequest {
    input: PathBuf,
    output: PathBuf,
    user_password: String,
    owner_password: Option<String>,
    quiet: bool,
}

impl InvocationRequest {
    pub fn new(
        input: impl Into<PathBuf>,
        output: impl Into<PathBuf>,
        user_password: impl Into<String>,
    ) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            user_password: user_password.into(),
            owner_password: None,
            quiet: false,
        }
    }

    /// An empty owner password counts as unset.
    pub fn with_owner_password(mut self, owner_password: Option<String>) -> Self {
        self.owner_password = owner_password.filter(|p| !p.is_empty());
        self
    }

    pub fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    pub fn input(&self) -> &Path {
        &self.input
    }

    pub fn output(&self) -> &Path {
        &self.output
    }

    pub fn user_password(&self) -> &str {
        &self.user_password
    }

    /// The owner password explicitly supplied, if any.
    pub fn explicit_owner_password(&self) -> Option<&str> {
        self.owner_password.as_deref()
    }

    /// Owner password to encrypt with; defaults to the user password.
    pub fn owner_password(&self) -> &str {
        self.owner_password
            .as_deref()
            .unwrap_or(&self.user_password)
    }

    pub fn quiet(&self) -> bool {
        self.quiet
    }
}
