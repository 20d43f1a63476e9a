use std::future::Future;

use tokio::{runtime::Runtime, sync::broadcast, task::JoinHandle};

pub struct WrenExecutor {
    runtime: Runtime,
    shutdown: broadcast::Sender<()>,
}

impl WrenExecutor {
    pub fn new() -> std::io::Result<Self> {
        let runtime = Runtime::new()?;
        let (shutdown, _) = broadcast::channel(1);
        Ok(Self { runtime, shutdown })
    }

    /// Spawns a task that resolves to `None` once `shutdown` is triggered
    pub fn spawn<F>(&self, future: F) -> JoinHandle<Option<F::Output>>
    where
        F: Future + Send + 'static,
        F::Output: Send + 'static,
    {
        let mut shutdown = self.shutdown.subscribe();
        self.runtime.spawn(async move {
            tokio::select! {
                result = future => Some(result),
                _ = shutdown.recv() => None,
            }
        })
    }

    /// Spawns a task that observes the shutdown channel itself and is
    /// additionally raced against ctrl-c
    pub fn spawn_cancellable<F, Fut, T>(&self, future_fn: F) -> JoinHandle<Option<T>>
    where
        F: FnOnce(broadcast::Receiver<()>) -> Fut + Send + 'static,
        Fut: Future<Output = T> + Send,
        T: Send + 'static,
    {
        let shutdown = self.shutdown.subscribe();
        self.runtime.spawn(async move {
            let future = future_fn(shutdown);
            tokio::select! {
                result = future => Some(result),
                _ = tokio::signal::ctrl_c() => None,
            }
        })
    }

    /// Triggers a shutdown signal to all spawned tasks
    pub fn shutdown(&self) {
        let _ = self.shutdown.send(());
    }

    /// Get a reference to the underlying runtime
    pub fn runtime(&self) -> &Runtime {
        &self.runtime
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use tokio::time::sleep;

    use super::*;

    #[test]
    fn test_basic_task() {
        let executor = WrenExecutor::new().unwrap();

        let handle = executor.spawn(async {
            sleep(Duration::from_millis(100)).await;
            42
        });

        assert_eq!(executor.runtime.block_on(handle).unwrap(), Some(42));
    }

    #[test]
    fn test_shutdown_drops_pending_task() {
        let executor = WrenExecutor::new().unwrap();

        let handle = executor.spawn(async {
            sleep(Duration::from_secs(5)).await;
            42
        });

        executor.shutdown();
        assert_eq!(executor.runtime.block_on(handle).unwrap(), None);
    }

    #[test]
    fn test_cancellable_task() {
        let executor = WrenExecutor::new().unwrap();

        let handle = executor.spawn_cancellable(|mut shutdown| async move {
            tokio::select! {
                _ = sleep(Duration::from_secs(1)) => "completed",
                _ = shutdown.recv() => "cancelled",
            }
        });

        executor.shutdown();
        assert_eq!(
            executor.runtime.block_on(handle).unwrap(),
            Some("cancelled")
        );
    }
}
