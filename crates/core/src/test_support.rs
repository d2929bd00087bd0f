use std::sync::Mutex;

/// Serializes tests that read or mutate process-wide environment variables.
pub(crate) static ENV_MUTEX: Mutex<()> = Mutex::new(());
