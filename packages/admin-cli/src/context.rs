//! Application context with shared state and utilities

use std::path::PathBuf;
use std::sync::Arc;

use admin_core::{
    ApiClient, Capability, ClientConfig, ControllerConfig, FileStore, ListState, Resource,
    ResourceListController, SessionContext,
};
use anyhow::{bail, Context, Result};
use colored::Colorize;
use dialoguer::{theme::ColorfulTheme, Confirm};

/// Application context passed to all commands
pub struct AppContext {
    pub config: ClientConfig,
    pub session: SessionContext,
    pub client: ApiClient,
    pub quiet: bool,
}

impl AppContext {
    pub fn new(mut config: ClientConfig, quiet: bool) -> Result<Self> {
        let path = match config.session_file.clone() {
            Some(path) => path,
            None => default_session_file()?,
        };
        config.session_file = Some(path.clone());

        let session = SessionContext::new(Arc::new(FileStore::new(path)))
            .with_ttl(config.session_ttl());
        session.initialize();

        let client = ApiClient::from_config(&config, session.clone());

        Ok(Self {
            config,
            session,
            client,
            quiet,
        })
    }

    pub fn controller<R: Resource>(&self, config: ControllerConfig<R>) -> ResourceListController<R> {
        ResourceListController::new(self.client.clone(), config)
    }

    /// Fail unless the current session may use `capability`.
    pub fn require(&self, capability: Capability) -> Result<()> {
        if !self.session.is_authenticated() {
            bail!("Not logged in. Run `admin login` first.");
        }
        if !self.session.permits(capability) {
            bail!(
                "Access denied: {:?} requires one of the roles {}",
                capability,
                capability.allowed_roles().join(", ")
            );
        }
        Ok(())
    }

    pub fn theme(&self) -> ColorfulTheme {
        ColorfulTheme::default()
    }

    /// Ask before a destructive action. `--yes` skips the prompt.
    pub fn confirm(&self, prompt: &str, assume_yes: bool) -> Result<bool> {
        if assume_yes {
            return Ok(true);
        }
        if self.quiet {
            return Ok(false);
        }
        Ok(Confirm::with_theme(&self.theme())
            .with_prompt(prompt)
            .default(false)
            .interact()?)
    }

    pub fn print_header(&self, msg: &str) {
        if !self.quiet {
            println!();
            println!("{}", msg.bold());
        }
    }

    pub fn print_success(&self, msg: &str) {
        if !self.quiet {
            println!("{}", msg.green());
        }
    }

    pub fn print_warning(&self, msg: &str) {
        if !self.quiet {
            println!("{}", msg.yellow());
        }
    }

    pub fn print_info(&self, msg: &str) {
        if !self.quiet {
            println!("{}", msg.cyan());
        }
    }

    /// Fail the command when the list fetch failed, so the error reaches
    /// stderr and the exit code even under `--quiet`.
    pub fn loaded<R>(&self, state: ListState<R>) -> Result<ListState<R>> {
        if let Some(error) = &state.error {
            tracing::warn!(kind = error.kind(), "List fetch failed");
            bail!("Failed to load: {}", error);
        }
        Ok(state)
    }

    /// Footer under a list: empty notice and page position.
    pub fn print_list_footer<R>(&self, state: &ListState<R>) {
        if state.is_empty() {
            self.print_info("Nothing to show.");
        }
        self.print_info(&format!("Page {} of {}", state.page, state.total_pages));
    }
}

fn default_session_file() -> Result<PathBuf> {
    let dir = dirs::config_dir().context("Could not determine a config directory; set ADMIN_SESSION_FILE")?;
    Ok(dir.join("city-insights-admin").join("session.json"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use admin_core::{ApiError, ResourceQuery};

    fn context() -> AppContext {
        let mut config = ClientConfig::new("http://localhost:8000/api");
        config.session_file = Some(
            std::env::temp_dir()
                .join(format!("admin-cli-{}", std::process::id()))
                .join("session.json"),
        );
        AppContext::new(config, true).unwrap()
    }

    fn list_state(error: Option<ApiError>) -> ListState<String> {
        ListState {
            data: vec!["kept".to_string()],
            loading: false,
            error,
            page: 1,
            total_pages: 1,
            query: ResourceQuery::new(10),
        }
    }

    #[test]
    fn test_failed_list_fails_the_command_even_when_quiet() {
        let ctx = context();
        let error = ApiError::Http {
            status: 500,
            message: "Database down".to_string(),
        };

        let result = ctx.loaded(list_state(Some(error)));

        let message = result.err().map(|e| e.to_string());
        assert_eq!(message.as_deref(), Some("Failed to load: Database down"));
    }

    #[test]
    fn test_loaded_list_passes_through() {
        let ctx = context();
        let state = ctx.loaded(list_state(None)).unwrap();
        assert_eq!(state.data, vec!["kept".to_string()]);
    }
}
