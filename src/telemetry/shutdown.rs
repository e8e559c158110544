use opentelemetry_sdk::trace::SdkTracerProvider;

/// Flushes exported spans when dropped
pub struct TelemetryGuard {
    provider: Option<SdkTracerProvider>,
}

impl TelemetryGuard {
    pub fn new(provider: Option<SdkTracerProvider>) -> Self {
        Self { provider }
    }
}

impl Drop for TelemetryGuard {
    fn drop(&mut self) {
        let Some(provider) = self.provider.take() else {
            return;
        };

        tracing::info!("Shutting down telemetry...");
        if let Err(e) = provider.shutdown() {
            eprintln!("Failed to flush telemetry: {}", e);
        }
    }
}
