use bollard::models::ContainerSummary;

const BRIDGE_NETWORK: &str = "bridge";

/// One container as reported by the daemon, reduced to what the report shows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContainerRecord {
    pub names: Vec<String>,
    /// Address on the default bridge network, if attached
    pub bridge_ip: Option<String>,
    pub image: String,
    pub status: String,
}

impl ContainerRecord {
    /// First reported name without the leading `/` the daemon adds.
    pub fn display_name(&self) -> &str {
        self.names.first().map(|name| name.trim_start_matches('/')).unwrap_or_default()
    }

    pub fn ip_address(&self) -> &str {
        self.bridge_ip.as_deref().unwrap_or_default()
    }
}

impl From<ContainerSummary> for ContainerRecord {
    fn from(summary: ContainerSummary) -> Self {
        let bridge_ip = summary
            .network_settings
            .and_then(|settings| settings.networks)
            .and_then(|mut networks| networks.remove(BRIDGE_NETWORK))
            .and_then(|bridge| bridge.ip_address)
            .filter(|ip| !ip.is_empty());

        ContainerRecord {
            names: summary.names.unwrap_or_default(),
            bridge_ip,
            image: summary.image.unwrap_or_default(),
            status: summary.status.unwrap_or_default(),
        }
    }
}
