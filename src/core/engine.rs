use crate::core::directory::Directory;
use crate::core::session::QuerySession;
use crate::domain::model::SessionSignal;
use crate::domain::ports::{ConfigProvider, InputSource, OutputSink};
use crate::utils::error::{Result, SessionError};
use crate::utils::monitor::SystemMonitor;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// Coordinates one session: the query loop races the deadline, and the
/// first signal to arrive decides how the session ends.
pub struct SessionEngine<C: ConfigProvider> {
    config: C,
    directory: Arc<Directory>,
    monitor: SystemMonitor,
}

impl<C: ConfigProvider> SessionEngine<C> {
    pub fn new(config: C, directory: Arc<Directory>) -> Self {
        Self::new_with_monitoring(config, directory, false)
    }

    pub fn new_with_monitoring(
        config: C,
        directory: Arc<Directory>,
        monitor_enabled: bool,
    ) -> Self {
        Self {
            config,
            directory,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    pub async fn run<I, O>(&self, input: I, output: O) -> Result<SessionSignal>
    where
        I: InputSource + 'static,
        O: OutputSink + Clone + 'static,
    {
        output.write_line(&format!("Welcome to {}!", self.config.title()));

        // 容量 1：先完成的任務佔走唯一的訊號位
        let (signal_tx, mut signal_rx) = mpsc::channel::<SessionSignal>(1);

        let deadline = self.config.session_timeout();
        tracing::debug!("Arming session deadline: {:?}", deadline);
        tokio::spawn(run_deadline(deadline, signal_tx.clone()));

        let session = QuerySession::new(
            Arc::clone(&self.directory),
            self.config.query_budget(),
            input,
            output.clone(),
        );
        tokio::spawn(async move {
            let signal = session.run().await;
            let _ = signal_tx.send(signal).await;
        });

        // exactly one signal is consumed per session; the loser is left
        // detached and reclaimed at process exit
        let signal =
            signal_rx
                .recv()
                .await
                .ok_or_else(|| SessionError::CoordinationError {
                    message: "signal channel closed before any task finished".to_string(),
                })?;
        tracing::debug!("Received session signal: {:?}", signal);

        output.write_line(&signal.to_string());

        self.monitor.log_stats("Session");
        self.monitor.log_final_stats();

        Ok(signal)
    }
}

/// The timeout half of the race: sleep out the whole deadline, then signal.
async fn run_deadline(after: Duration, signal_tx: mpsc::Sender<SessionSignal>) {
    tokio::time::sleep(after).await;
    // the loser's signal lands in the freed slot, or fails because the
    // receiver is gone; either way it is never observed
    let _ = signal_tx.send(SessionSignal::TimedOut).await;
}
