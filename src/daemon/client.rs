use crate::daemon::{ConnectionError, ContainerRecord, Endpoint};
use bollard::container::ListContainersOptions;
use bollard::{API_DEFAULT_VERSION, Docker};
use log::{debug, trace};

/// Request timeout in seconds; matches bollard's private default.
const DEFAULT_TIMEOUT: u64 = 120;

/// Owned handle to the Docker daemon.
///
/// Building the handle does no network I/O; the daemon is first contacted by
/// [`DaemonConnection::list_containers`]. The client is released by
/// [`DaemonConnection::close`] or, failing that, when the handle is dropped.
pub struct DaemonConnection {
    endpoint: Endpoint,
    docker: Option<Docker>,
}

impl DaemonConnection {
    pub fn connect(endpoint: &str) -> Result<Self, ConnectionError> {
        let endpoint: Endpoint = endpoint.parse()?;
        debug!("Connecting to Docker daemon at {}", endpoint);

        let docker = match &endpoint {
            #[cfg(unix)]
            Endpoint::Unix(path) => Docker::connect_with_unix(path, DEFAULT_TIMEOUT, API_DEFAULT_VERSION),
            #[cfg(windows)]
            Endpoint::NamedPipe(path) => Docker::connect_with_named_pipe(path, DEFAULT_TIMEOUT, API_DEFAULT_VERSION),
            Endpoint::Http(address) => Docker::connect_with_http(address, DEFAULT_TIMEOUT, API_DEFAULT_VERSION),
            #[allow(unreachable_patterns)]
            other => {
                return Err(ConnectionError::new(format!("endpoint {} is not supported on this platform", other)));
            }
        }
        .map_err(|err| ConnectionError::from(err).context(format!("cannot connect to {}", endpoint)))?;

        Ok(Self { endpoint, docker: Some(docker) })
    }

    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// Fetch every container the daemon knows about, stopped ones included,
    /// in the order the daemon returns them.
    pub async fn list_containers(&self) -> Result<Vec<ContainerRecord>, ConnectionError> {
        let docker = self.docker.as_ref().ok_or_else(|| ConnectionError::new(format!("connection to {} is already closed", self.endpoint)))?;

        let options = ListContainersOptions::<String> { all: true, ..Default::default() };
        let summaries = docker
            .list_containers(Some(options))
            .await
            .map_err(|err| ConnectionError::from(err).context(format!("cannot list containers from {}", self.endpoint)))?;

        trace!("Daemon returned {} container(s)", summaries.len());
        Ok(summaries.into_iter().map(ContainerRecord::from).collect())
    }

    /// Release the client. Calling it again is a no-op.
    pub fn close(&mut self) {
        if let Some(docker) = self.docker.take() {
            debug!("Closing connection to {}", self.endpoint);
            drop(docker);
        }
    }
}

impl Drop for DaemonConnection {
    fn drop(&mut self) {
        self.close();
    }
}
