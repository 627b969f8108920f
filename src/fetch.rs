use serde::{Deserialize, Serialize};

/// Response of the run endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RunEnvelope {
    pub success: bool,
    /// Captured simulation stdout on success
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    /// Captured stderr on failure
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl RunEnvelope {
    pub fn into_transcript(self) -> anyhow::Result<String> {
        if !self.success {
            let message = self.error.unwrap_or_else(|| "no error text".to_string());
            anyhow::bail!("Simulation run failed: {}", message.trim_end());
        }
        self.output
            .ok_or_else(|| anyhow::anyhow!("Run succeeded but returned no output"))
    }
}

/// Trigger one run and return its transcript. No retries.
pub fn fetch_transcript(endpoint: &str) -> anyhow::Result<String> {
    tracing::info!(endpoint, "triggering simulation run");
    let envelope: RunEnvelope = ureq::get(endpoint)
        .set("User-Agent", "rotaview")
        .call()
        .map_err(|e| anyhow::anyhow!("Failed to reach {}: {}", endpoint, e))?
        .into_json()?;

    let transcript = envelope.into_transcript()?;
    tracing::info!(bytes = transcript.len(), "received transcript");
    Ok(transcript)
}
