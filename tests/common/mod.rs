// Shared test doubles for integration tests

#![allow(dead_code)]

use anyhow::Result;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::path::{Path, PathBuf};

use autodocstring::oracle::Oracle;

/// Oracle that answers from a script and records every prompt.
///
/// Verification prompts get the next queued verdict (or `verify_default`
/// once the queue is empty). Generation prompts get `generate_reply`.
pub struct ScriptedOracle {
    verify_replies: VecDeque<String>,
    verify_default: String,
    generate_reply: String,
    pub verify_prompts: Vec<String>,
    pub generate_prompts: Vec<String>,
}

impl ScriptedOracle {
    pub fn new(verify_default: &str, generate_reply: &str) -> Self {
        Self {
            verify_replies: VecDeque::new(),
            verify_default: verify_default.to_string(),
            generate_reply: generate_reply.to_string(),
            verify_prompts: Vec::new(),
            generate_prompts: Vec::new(),
        }
    }

    pub fn with_verdicts(mut self, replies: &[&str]) -> Self {
        self.verify_replies = replies.iter().map(|r| r.to_string()).collect();
        self
    }

    pub fn total_calls(&self) -> usize {
        self.verify_prompts.len() + self.generate_prompts.len()
    }
}

#[async_trait]
impl Oracle for ScriptedOracle {
    async fn ask(&mut self, prompt: &str) -> Result<String> {
        if prompt.contains("Generated docstring:") {
            self.generate_prompts.push(prompt.to_string());
            return Ok(self.generate_reply.clone());
        }

        self.verify_prompts.push(prompt.to_string());
        Ok(self
            .verify_replies
            .pop_front()
            .unwrap_or_else(|| self.verify_default.clone()))
    }

    fn name(&self) -> &str {
        "scripted"
    }
}

/// Oracle whose every call fails
pub struct FailingOracle {
    pub calls: usize,
}

#[async_trait]
impl Oracle for FailingOracle {
    async fn ask(&mut self, _prompt: &str) -> Result<String> {
        self.calls += 1;
        anyhow::bail!("service unavailable")
    }

    fn name(&self) -> &str {
        "failing"
    }
}

pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).expect("write test file");
    path
}
