#![allow(dead_code)]
use std::sync::mpsc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use anyhow::{anyhow, Context, Result};

use crate::push::providers::{
    PermissionProvider, PermissionStatus, RegistrationEndpoint, TokenProvider,
};

/// Delay ladder for transient registration failures: 10s, 20s, 30s, …
/// capped at 60s. There is no attempt limit; the loop keeps trying until
/// it succeeds or is torn down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    base: Duration,
    cap: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        RetryPolicy {
            base: Duration::from_secs(10),
            cap: Duration::from_secs(60),
        }
    }
}

impl RetryPolicy {
    pub fn new(base: Duration, cap: Duration) -> Self {
        RetryPolicy { base, cap }
    }

    pub fn delay(&self, attempt: u32) -> Duration {
        let stepped = self.base.saturating_mul(attempt.saturating_add(1));
        stepped.min(self.cap)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Requesting,
    Retrying,
    Registered,
    Denied,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationOutcome {
    Registered,
    Denied,
    TornDown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wait {
    Elapsed,
    Cancelled,
}

/// The scheduler's single pending delay. The loop owns exactly one wait at
/// a time, so a new retry can never be scheduled while an earlier one is
/// still pending.
pub trait RetryWaiter {
    fn wait(&mut self, delay: Duration) -> Wait;
}

/// Cancellable sleep: waits out the delay unless the paired handle fires
/// or is dropped first.
pub struct ChannelWaiter {
    rx: mpsc::Receiver<()>,
}

impl RetryWaiter for ChannelWaiter {
    fn wait(&mut self, delay: Duration) -> Wait {
        match self.rx.recv_timeout(delay) {
            Err(mpsc::RecvTimeoutError::Timeout) => Wait::Elapsed,
            _ => Wait::Cancelled,
        }
    }
}

pub struct CancelHandle {
    tx: mpsc::Sender<()>,
}

impl CancelHandle {
    pub fn cancel(&self) {
        let _ = self.tx.send(());
    }
}

pub fn cancel_pair() -> (CancelHandle, ChannelWaiter) {
    let (tx, rx) = mpsc::channel();
    (CancelHandle { tx }, ChannelWaiter { rx })
}

/// Registers the device push token with the venue backend, retrying
/// transient failures with increasing delay. Permission denial is a user
/// decision and terminal; a missing token, a transport error, and a
/// non-success reply are all transient and indistinguishable to the loop.
pub struct PushRegistrar<P, T, E> {
    permission: P,
    tokens: T,
    endpoint: E,
    policy: RetryPolicy,
    phase: Phase,
    attempt: u32,
}

impl<P, T, E> PushRegistrar<P, T, E>
where
    P: PermissionProvider,
    T: TokenProvider,
    E: RegistrationEndpoint,
{
    pub fn new(permission: P, tokens: T, endpoint: E) -> Self {
        PushRegistrar {
            permission,
            tokens,
            endpoint,
            policy: RetryPolicy::default(),
            phase: Phase::Idle,
            attempt: 0,
        }
    }

    pub fn with_policy(mut self, policy: RetryPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn attempt(&self) -> u32 {
        self.attempt
    }

    /// Drives the machine to a terminal phase. Returns when registration
    /// succeeds, permission is denied, or the waiter reports cancellation
    /// (host teardown).
    pub fn run(&mut self, waiter: &mut impl RetryWaiter) -> RegistrationOutcome {
        self.phase = Phase::Requesting;

        let status = match self.permission.status() {
            PermissionStatus::Granted => PermissionStatus::Granted,
            _ => self.permission.request(),
        };
        if status != PermissionStatus::Granted {
            log::info!("notification permission denied; not registering");
            self.phase = Phase::Denied;
            return RegistrationOutcome::Denied;
        }

        loop {
            self.phase = Phase::Requesting;
            match self.try_register() {
                Ok(()) => {
                    self.phase = Phase::Registered;
                    return RegistrationOutcome::Registered;
                }
                Err(err) => {
                    let delay = self.policy.delay(self.attempt);
                    self.attempt += 1;
                    self.phase = Phase::Retrying;
                    log::warn!(
                        "push registration attempt {} failed: {err:#}; retrying in {}s",
                        self.attempt,
                        delay.as_secs()
                    );
                    if waiter.wait(delay) == Wait::Cancelled {
                        log::debug!("push registration torn down while waiting");
                        return RegistrationOutcome::TornDown;
                    }
                }
            }
        }
    }

    fn try_register(&mut self) -> Result<()> {
        let token = self.tokens.token().context("Acquiring push token")?;
        let reply = self
            .endpoint
            .register(&token)
            .context("Registering push token")?;
        if reply.success {
            log::info!("push token registered");
            Ok(())
        } else {
            Err(anyhow!(
                "backend rejected token: {}",
                reply.message.as_deref().unwrap_or("no reason given")
            ))
        }
    }
}

pub struct SchedulerHandle {
    cancel: CancelHandle,
    thread: JoinHandle<RegistrationOutcome>,
}

impl SchedulerHandle {
    pub fn is_finished(&self) -> bool {
        self.thread.is_finished()
    }

    /// Cancels any pending retry and waits the worker out.
    pub fn shutdown(self) -> RegistrationOutcome {
        self.cancel.cancel();
        self.thread.join().unwrap_or(RegistrationOutcome::TornDown)
    }
}

/// Runs the registrar on its own thread, the way the app starts it at
/// launch. Shutting down the handle cancels the pending delay, so no timer
/// outlives the host.
pub fn spawn<P, T, E>(mut registrar: PushRegistrar<P, T, E>) -> SchedulerHandle
where
    P: PermissionProvider + Send + 'static,
    T: TokenProvider + Send + 'static,
    E: RegistrationEndpoint + Send + 'static,
{
    let (cancel, mut waiter) = cancel_pair();
    let thread = thread::spawn(move || registrar.run(&mut waiter));
    SchedulerHandle { cancel, thread }
}
