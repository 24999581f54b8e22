use async_trait::async_trait;
use minicache_core::types::CommandArguments;
use minicache_core::{Error, Result};
#[cfg(test)]
use std::collections::HashMap;
use std::process::{Output, Stdio};

/// Trait for executing external commands
/// This abstraction allows for testing without mocking by providing
/// different implementations for production and test environments
#[async_trait]
pub trait CommandExecutor: Send + Sync {
    /// Execute a command with the given arguments, capturing stdout and stderr
    async fn execute(&self, cmd: &str, args: &CommandArguments) -> Result<Output>;
}

/// Production implementation that spawns real processes
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemCommandExecutor;

impl SystemCommandExecutor {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CommandExecutor for SystemCommandExecutor {
    async fn execute(&self, cmd: &str, args: &CommandArguments) -> Result<Output> {
        tracing::debug!(command = %cmd, args = %args, "spawning command");

        tokio::process::Command::new(cmd)
            .args(args.as_slice())
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|e| {
                Error::command_execution(
                    cmd,
                    args.clone().into_inner(),
                    format!("failed to execute command: {e}"),
                    None,
                )
            })
    }
}

/// Test implementation that simulates command execution
/// This provides deterministic behavior for testing
#[cfg(test)]
pub struct TestCommandExecutor {
    responses: std::sync::Mutex<HashMap<String, TestResponse>>,
    calls: std::sync::Mutex<Vec<String>>,
}

#[cfg(test)]
#[derive(Clone)]
pub struct TestResponse {
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
    pub status_code: i32,
}

#[cfg(test)]
impl TestCommandExecutor {
    pub fn new() -> Self {
        Self {
            responses: std::sync::Mutex::new(HashMap::new()),
            calls: std::sync::Mutex::new(Vec::new()),
        }
    }

    pub fn add_response(&self, cmd: &str, args: &[&str], response: TestResponse) {
        let key = format!("{} {}", cmd, args.join(" "));
        self.responses.lock().unwrap().insert(key, response);
    }

    pub fn add_simple_response(&self, cmd: &str, args: &[&str], stdout: &str) {
        self.add_response(
            cmd,
            args,
            TestResponse {
                stdout: stdout.as_bytes().to_vec(),
                stderr: Vec::new(),
                status_code: 0,
            },
        );
    }

    pub fn add_error_response(&self, cmd: &str, args: &[&str], stderr: &str) {
        self.add_response(
            cmd,
            args,
            TestResponse {
                stdout: Vec::new(),
                stderr: stderr.as_bytes().to_vec(),
                status_code: 1,
            },
        );
    }

    /// Number of times any command was executed
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[cfg(test)]
#[async_trait]
impl CommandExecutor for TestCommandExecutor {
    async fn execute(&self, cmd: &str, args: &CommandArguments) -> Result<Output> {
        let key = format!("{} {}", cmd, args.as_slice().join(" "));
        self.calls.lock().unwrap().push(key.clone());

        let responses = self.responses.lock().unwrap();
        match responses.get(&key) {
            Some(response) => Ok(Output {
                status: exit_status::from_code(response.status_code),
                stdout: response.stdout.clone(),
                stderr: response.stderr.clone(),
            }),
            None => Err(Error::command_execution(
                cmd,
                args.clone().into_inner(),
                format!("no test response configured for command: {key}"),
                None,
            )),
        }
    }
}
