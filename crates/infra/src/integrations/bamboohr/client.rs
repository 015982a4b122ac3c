//! BambooHR API client

use std::fmt;
use std::future::Future;

use peoplesync_domain::constants::{
    employee_details_path, employee_files_path, API_GATEWAY_PATH, AUTH_PROBE_PATH,
    BAMBOOHR_API_HOST, COMPANY_FILES_PATH, EMPLOYEE_DIRECTORY_PATH, USERS_PATH,
};
use peoplesync_domain::{
    parse_namespace, AuthenticationError, ClientConfig, DirectoryResponse, Employee,
    EmployeeDetails, EmployeeDirectory, File, FilesResponse, PeopleSyncError, Result, User,
    UserListing, UserWithDetails,
};
use reqwest::header::{HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::{Method, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, info, instrument, warn};

use super::auth::{basic_authorization, is_authenticated_status};
use crate::errors::InfraError;
use crate::http::HttpClient;

const USER_AGENT: &str = concat!("peoplesync/", env!("CARGO_PKG_VERSION"));

/// Client for one BambooHR account.
///
/// Holds only immutable state; every call builds its own snapshot of the
/// provider data, so one instance can serve concurrent callers.
#[derive(Clone)]
pub struct BambooHrClient {
    http_client: HttpClient,
    namespace: String,
    authorization: HeaderValue,
    api_base: String,
}

impl BambooHrClient {
    /// Create a client from the invocation configuration.
    ///
    /// The namespace is normalized here so a bad value fails before any
    /// request is made. The access token is used verbatim.
    ///
    /// # Errors
    /// Returns `PeopleSyncError::Config` if the namespace cannot be parsed or
    /// the HTTP client cannot be built.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let namespace = parse_namespace(&config.client_namespace).ok_or_else(|| {
            PeopleSyncError::Config(format!(
                "Invalid namespace: \"{}\"",
                config.client_namespace
            ))
        })?;

        let http_client = HttpClient::builder().user_agent(USER_AGENT).build()?;
        let authorization = basic_authorization(&config.client_access_token)?;

        debug!(namespace = %namespace, "created BambooHR client");

        Ok(Self {
            http_client,
            namespace,
            authorization,
            api_base: format!("https://{BAMBOOHR_API_HOST}"),
        })
    }

    /// Send requests to another origin than the public BambooHR host.
    ///
    /// Used to point the client at egress proxies and local test servers.
    ///
    /// # Errors
    /// Returns `PeopleSyncError::Config` if `api_base` is not an absolute URL.
    pub fn with_api_base(mut self, api_base: impl AsRef<str>) -> Result<Self> {
        let api_base = api_base.as_ref();
        url::Url::parse(api_base).map_err(|e| {
            PeopleSyncError::Config(format!("Invalid API base \"{api_base}\": {e}"))
        })?;
        self.api_base = api_base.trim_end_matches('/').to_string();
        Ok(self)
    }

    /// Normalized account namespace.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Full URL for a gateway path such as `v1/meta/users`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}/{}/{}", self.api_base, API_GATEWAY_PATH, self.namespace, path)
    }

    /// Authenticated GET against a gateway path.
    ///
    /// The raw response is returned whatever its status.
    ///
    /// # Errors
    /// Returns `PeopleSyncError::Network` if no response was received.
    pub async fn request(&self, path: &str) -> Result<Response> {
        self.request_with_method(Method::GET, path).await
    }

    /// Authenticated request with an explicit method (GET or HEAD).
    ///
    /// # Errors
    /// Returns `PeopleSyncError::Network` if no response was received.
    pub async fn request_with_method(&self, method: Method, path: &str) -> Result<Response> {
        let builder = self
            .http_client
            .request(method, self.endpoint(path))
            .header(ACCEPT, "application/json")
            .header(AUTHORIZATION, self.authorization.clone());

        self.http_client.send(builder).await
    }

    /// Check that the configured credentials are accepted.
    ///
    /// # Errors
    /// Returns `PeopleSyncError::Authentication` for any status other than 200
    /// or 404, and for transport failures (status `-1`).
    #[instrument(skip(self), fields(namespace = %self.namespace))]
    pub async fn verify_authentication(&self) -> Result<()> {
        let endpoint = self.endpoint(AUTH_PROBE_PATH);

        let response = match self.request(AUTH_PROBE_PATH).await {
            Ok(response) => response,
            Err(err) => {
                warn!(error = %err, "authentication probe failed before a response");
                return Err(AuthenticationError::from_transport(endpoint, err.to_string()).into());
            }
        };

        let status = response.status();
        if is_authenticated_status(status) {
            info!(status = status.as_u16(), "BambooHR credentials verified");
            return Ok(());
        }

        warn!(status = status.as_u16(), "BambooHR rejected credentials");
        Err(AuthenticationError::from_status(
            endpoint,
            status.as_u16(),
            status.canonical_reason().unwrap_or_default(),
        )
        .into())
    }

    /// Invoke `iteratee` for every user, merged with its directory record.
    ///
    /// Users without a matching employee get empty details. Both fetches
    /// must succeed before the first invocation.
    ///
    /// # Errors
    /// Propagates transport and decode failures of either fetch, and the
    /// first error returned by `iteratee`.
    #[instrument(skip(self, iteratee), fields(namespace = %self.namespace))]
    pub async fn iterate_users<F, Fut>(&self, mut iteratee: F) -> Result<()>
    where
        F: FnMut(UserWithDetails) -> Fut,
        Fut: Future<Output = Result<()>>,
    {
        let (users, directory) =
            tokio::try_join!(self.fetch_users(), self.fetch_employee_directory())?;

        let records = users.into_iter().map(|user| {
            let details = user.employee_id.as_deref().and_then(|id| directory.get(id)).cloned();
            UserWithDetails::new(user, details)
        });

        let count = drive(records, &mut iteratee).await?;
        info!(count, "iterated BambooHR users");
        Ok(())
    }

    /// Fetch the company directory keyed by employee id.
    ///
    /// # Errors
    /// Propagates transport and decode failures.
    pub async fn fetch_employee_directory(&self) -> Result<EmployeeDirectory> {
        let response: DirectoryResponse = self.fetch_json(EMPLOYEE_DIRECTORY_PATH).await?;
        let directory = EmployeeDirectory::from(response);
        debug!(employees = directory.len(), "fetched employee directory");
        Ok(directory)
    }

    /// Invoke `iteratee` once per directory employee.
    ///
    /// # Errors
    /// Propagates directory fetch failures and the first `iteratee` error.
    #[instrument(skip(self, iteratee), fields(namespace = %self.namespace))]
    pub async fn iterate_employees<F, Fut>(&self, mut iteratee: F) -> Result<()>
    where
        F: FnMut(Employee) -> Fut,
        Fut: Future<Output = Result<()>>,
    {
        let directory = self.fetch_employee_directory().await?;
        let count = drive(directory.into_employees(), &mut iteratee).await?;
        info!(count, "iterated BambooHR employees");
        Ok(())
    }

    /// Hire and termination dates for one employee.
    ///
    /// # Errors
    /// Propagates transport and decode failures.
    pub async fn get_employee_details(&self, employee_id: &str) -> Result<EmployeeDetails> {
        self.fetch_json(&employee_details_path(employee_id)).await
    }

    /// Invoke `iteratee` for every file attached to an employee.
    ///
    /// A non-2xx listing iterates nothing and is not an error.
    ///
    /// # Errors
    /// Propagates transport failures, decode failures of a 2xx body, and the
    /// first `iteratee` error.
    #[instrument(skip(self, iteratee), fields(namespace = %self.namespace))]
    pub async fn iterate_employee_files<F, Fut>(
        &self,
        employee_id: &str,
        iteratee: F,
    ) -> Result<()>
    where
        F: FnMut(File) -> Fut,
        Fut: Future<Output = Result<()>>,
    {
        self.iterate_files(&employee_files_path(employee_id), iteratee).await
    }

    /// Invoke `iteratee` for every company-wide file.
    ///
    /// A non-2xx listing iterates nothing and is not an error.
    ///
    /// # Errors
    /// Propagates transport failures, decode failures of a 2xx body, and the
    /// first `iteratee` error.
    #[instrument(skip(self, iteratee), fields(namespace = %self.namespace))]
    pub async fn iterate_company_files<F, Fut>(&self, iteratee: F) -> Result<()>
    where
        F: FnMut(File) -> Fut,
        Fut: Future<Output = Result<()>>,
    {
        self.iterate_files(COMPANY_FILES_PATH, iteratee).await
    }

    async fn iterate_files<F, Fut>(&self, path: &str, mut iteratee: F) -> Result<()>
    where
        F: FnMut(File) -> Fut,
        Fut: Future<Output = Result<()>>,
    {
        let response = self.request(path).await?;

        let status = response.status();
        if !status.is_success() {
            warn!(path, status = status.as_u16(), "skipping file listing");
            return Ok(());
        }

        let listing: FilesResponse = response.json().await.map_err(InfraError::from)?;
        let count = drive(listing.into_files(), &mut iteratee).await?;
        info!(path, count, "iterated BambooHR files");
        Ok(())
    }

    async fn fetch_users(&self) -> Result<Vec<User>> {
        let listing: UserListing = self.fetch_json(USERS_PATH).await?;
        Ok(listing.into_users())
    }

    /// GET and decode without looking at the status; a non-JSON error page
    /// surfaces as a decode error.
    async fn fetch_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let response = self.request(path).await?;
        debug!(path, status = response.status().as_u16(), "decoding response");
        Ok(response.json().await.map_err(InfraError::from)?)
    }
}

impl fmt::Debug for BambooHrClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BambooHrClient")
            .field("namespace", &self.namespace)
            .field("api_base", &self.api_base)
            .finish_non_exhaustive()
    }
}

/// Feed records to `iteratee` one at a time, awaiting each call.
async fn drive<T, I, F, Fut>(records: I, iteratee: &mut F) -> Result<usize>
where
    I: IntoIterator<Item = T>,
    F: FnMut(T) -> Fut,
    Fut: Future<Output = Result<()>>,
{
    let mut count = 0;
    for record in records {
        iteratee(record).await?;
        count += 1;
    }
    Ok(count)
}
