//! Recording test doubles shared by the orchestration tests

use crate::config::EnvTemplate;
use crate::host::{Host, ManagedProcess};
use crate::product::ProjectConfig;
use crate::runtime::{CommandResult, ToolConfig, ToolProbe};
use anyhow::Result;
use std::cell::RefCell;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::time::Duration;

#[derive(Clone)]
pub struct TestProject;

impl ProjectConfig for TestProject {
    fn display_name(&self) -> &'static str {
        "Test Platform"
    }

    fn tools(&self) -> Vec<ToolConfig> {
        vec![
            ToolConfig::required("node", "Node.js", "https://nodejs.org/"),
            ToolConfig::required("npm", "npm", "https://nodejs.org/"),
            ToolConfig::optional("mongod", "MongoDB", "https://www.mongodb.com/"),
        ]
    }

    fn package_manager(&self) -> &'static str {
        "npm"
    }

    fn client_dir(&self) -> &'static str {
        "client"
    }

    fn env_template(&self) -> EnvTemplate {
        EnvTemplate::new().section("Server", &[("PORT", "5000"), ("NODE_ENV", "development")])
    }

    fn backend_url(&self) -> &'static str {
        "http://localhost:5000"
    }

    fn frontend_url(&self) -> &'static str {
        "http://localhost:3000"
    }

    fn next_steps(&self) -> Vec<String> {
        vec!["npm start".to_string()]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Probe(String),
    Run { command: String, cwd: PathBuf },
    Spawn { program: String, args: Vec<String>, cwd: PathBuf },
    Sleep(Duration),
    Browser(String),
    Confirm(String),
    AwaitInterrupt,
    Terminate(usize),
}

/// Host that records every call and never touches real processes
pub struct FakeHost {
    events: Rc<RefCell<Vec<Event>>>,
    present: HashSet<String>,
    fail_install_in: Vec<PathBuf>,
    fail_spawn_in: Vec<PathBuf>,
    answer: bool,
    interrupt: bool,
    browser_fails: bool,
    spawned: RefCell<usize>,
}

impl FakeHost {
    /// All of node, npm and mongod present; installs succeed; launch declined
    pub fn new() -> Self {
        Self {
            events: Rc::new(RefCell::new(Vec::new())),
            present: ["node", "npm", "mongod"].iter().map(|s| s.to_string()).collect(),
            fail_install_in: Vec::new(),
            fail_spawn_in: Vec::new(),
            answer: false,
            interrupt: false,
            browser_fails: false,
            spawned: RefCell::new(0),
        }
    }

    pub fn without_tool(mut self, tool: &str) -> Self {
        self.present.remove(tool);
        self
    }

    pub fn fail_install_in(mut self, dir: PathBuf) -> Self {
        self.fail_install_in.push(dir);
        self
    }

    pub fn fail_spawn_in(mut self, dir: PathBuf) -> Self {
        self.fail_spawn_in.push(dir);
        self
    }

    pub fn answering(mut self, answer: bool) -> Self {
        self.answer = answer;
        self
    }

    /// Children never exit on their own; the interrupt fires instead
    pub fn interrupt_during_wait(mut self) -> Self {
        self.interrupt = true;
        self
    }

    pub fn browser_fails(mut self) -> Self {
        self.browser_fails = true;
        self
    }

    pub fn events(&self) -> Vec<Event> {
        self.events.borrow().clone()
    }

    pub fn installs(&self) -> Vec<PathBuf> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                Event::Run { cwd, .. } => Some(cwd),
                _ => None,
            })
            .collect()
    }

    pub fn spawns(&self) -> usize {
        self.events()
            .iter()
            .filter(|e| matches!(e, Event::Spawn { .. }))
            .count()
    }

    pub fn confirms(&self) -> usize {
        self.events()
            .iter()
            .filter(|e| matches!(e, Event::Confirm(_)))
            .count()
    }

    pub fn browser_opens(&self) -> usize {
        self.events()
            .iter()
            .filter(|e| matches!(e, Event::Browser(_)))
            .count()
    }

    pub fn terminated(&self) -> Vec<usize> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                Event::Terminate(index) => Some(index),
                _ => None,
            })
            .collect()
    }

    /// Position of the first event matching `pred`
    pub fn position(&self, pred: impl Fn(&Event) -> bool) -> Option<usize> {
        self.events().iter().position(pred)
    }

    /// Spawn, sleep and browser events in call order
    pub fn launch_events(&self) -> Vec<Event> {
        self.events()
            .into_iter()
            .filter(|e| matches!(e, Event::Spawn { .. } | Event::Sleep(_) | Event::Browser(_)))
            .collect()
    }

    fn record(&self, event: Event) {
        self.events.borrow_mut().push(event);
    }
}

impl Host for FakeHost {
    type Process = FakeProcess;

    async fn probe(&self, tool: &str) -> ToolProbe {
        self.record(Event::Probe(tool.to_string()));
        if self.present.contains(tool) {
            ToolProbe::found(tool, Some("v20.11.0".to_string()))
        } else {
            ToolProbe::missing(tool)
        }
    }

    async fn run_command(&self, command_line: &str, cwd: &Path) -> CommandResult {
        self.record(Event::Run {
            command: command_line.to_string(),
            cwd: cwd.to_path_buf(),
        });
        if self.fail_install_in.iter().any(|d| d == cwd) {
            CommandResult {
                success: false,
                stdout: String::new(),
                stderr: "npm ERR! code E404".to_string(),
            }
        } else {
            CommandResult {
                success: true,
                stdout: "added 1 package".to_string(),
                stderr: String::new(),
            }
        }
    }

    fn spawn(&self, program: &str, args: &[&str], cwd: &Path) -> Result<FakeProcess> {
        if self.fail_spawn_in.iter().any(|d| d == cwd) {
            anyhow::bail!("No such file or directory");
        }
        self.record(Event::Spawn {
            program: program.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
            cwd: cwd.to_path_buf(),
        });
        let mut spawned = self.spawned.borrow_mut();
        let index = *spawned;
        *spawned += 1;
        Ok(FakeProcess {
            index,
            hang: self.interrupt,
            events: Rc::clone(&self.events),
        })
    }

    fn open_browser(&self, url: &str) -> Result<()> {
        self.record(Event::Browser(url.to_string()));
        if self.browser_fails {
            anyhow::bail!("no browser available");
        }
        Ok(())
    }

    fn confirm(&self, prompt: &str) -> Result<bool> {
        self.record(Event::Confirm(prompt.to_string()));
        Ok(self.answer)
    }

    async fn sleep(&self, duration: Duration) {
        self.record(Event::Sleep(duration));
    }

    async fn interrupted(&self) {
        self.record(Event::AwaitInterrupt);
        if !self.interrupt {
            std::future::pending::<()>().await;
        }
    }
}

pub struct FakeProcess {
    index: usize,
    hang: bool,
    events: Rc<RefCell<Vec<Event>>>,
}

impl ManagedProcess for FakeProcess {
    fn id(&self) -> Option<u32> {
        Some(1000 + self.index as u32)
    }

    async fn wait(&mut self) -> Result<Option<i32>> {
        if self.hang {
            std::future::pending::<()>().await;
        }
        Ok(Some(0))
    }

    fn terminate(&mut self) -> Result<()> {
        self.events.borrow_mut().push(Event::Terminate(self.index));
        Ok(())
    }
}
