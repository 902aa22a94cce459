//! Cooperative interrupt flag raised by SIGINT.
//!
//! The signal handler only stores `true` into an atomic; the engine polls
//! [`InterruptFlag::is_set`] from its main loop and decides what to do. The
//! handler stays registered after it fires, so every later SIGINT is seen too.
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, OnceLock, PoisonError};

use signal_hook::SigId;
use signal_hook::consts::signal::SIGINT;
use tracing::debug;

use crate::error::{Error, Result};

static PROCESS_FLAG: OnceLock<InterruptFlag> = OnceLock::new();

#[derive(Debug, Clone, Default)]
pub struct InterruptFlag {
    raised: Arc<AtomicBool>,
    registration: Arc<Mutex<Option<SigId>>>,
}

impl InterruptFlag {
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide flag, installed on first use. Every call returns a
    /// handle to the same flag, so repeated runs never stack handlers.
    pub fn process() -> Result<Self> {
        let flag = PROCESS_FLAG.get_or_init(InterruptFlag::new);
        flag.install()?;
        Ok(flag.clone())
    }

    /// Register the SIGINT handler for this flag. Calling it again on the
    /// same flag (or a clone) does nothing.
    pub fn install(&self) -> Result<()> {
        let mut registration = self
            .registration
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if registration.is_some() {
            return Ok(());
        }
        let id = signal_hook::flag::register(SIGINT, Arc::clone(&self.raised))
            .map_err(Error::Interrupt)?;
        *registration = Some(id);
        debug!("SIGINT handler installed");
        Ok(())
    }

    /// Remove the handler registered by [`InterruptFlag::install`]. The flag
    /// keeps its current value.
    pub fn uninstall(&self) {
        let mut registration = self
            .registration
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if let Some(id) = registration.take() {
            signal_hook::low_level::unregister(id);
            debug!("SIGINT handler removed");
        }
    }

    pub fn is_installed(&self) -> bool {
        self.registration
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    pub fn is_set(&self) -> bool {
        self.raised.load(Ordering::SeqCst)
    }

    /// Acknowledge a pending interrupt.
    pub fn clear(&self) {
        self.raised.store(false, Ordering::SeqCst);
    }
}
