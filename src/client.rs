//! Scheduling backend HTTP client implementation.

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::ApiConfig;
use crate::error::{AppError, Result};
use crate::models::{AppointmentRecord, AppointmentRequest, AttendanceRecord, SubmitReply};

/// Remote calls made by the dashboard screens.
///
/// Every method performs exactly one request/response cycle; nothing is retried.
#[async_trait]
pub trait SchedulingApi: Send + Sync {
    /// List appointments booked with the given instructor.
    async fn fetch_appointments(&self, instructor_email: &str) -> Result<Vec<AppointmentRecord>>;

    /// Submit a new appointment request.
    ///
    /// `Ok(())` only for HTTP 200; any other status is `AppError::Rejected`.
    async fn submit_appointment(&self, request: &AppointmentRequest) -> Result<()>;

    /// List attendance records (unfiltered).
    async fn fetch_attendance(&self) -> Result<Vec<AttendanceRecord>>;
}

/// Scheduling backend client over HTTP/JSON.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    attendance_url: String,
}

impl ApiClient {
    /// Create a new client instance.
    ///
    /// # Arguments
    /// * `config` - Endpoint URLs and request timeout
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let client = Client::builder().timeout(config.timeout()).build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            attendance_url: config.attendance_url.clone(),
        })
    }

    /// Read a JSON array body, mapping non-success statuses to rejections.
    async fn read_list<T: DeserializeOwned>(response: Response) -> Result<Vec<T>> {
        let status = response.status();
        if !status.is_success() {
            return Err(AppError::rejected(status.as_u16(), None));
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

#[async_trait]
impl SchedulingApi for ApiClient {
    async fn fetch_appointments(&self, instructor_email: &str) -> Result<Vec<AppointmentRecord>> {
        let url = format!("{base}/appointments", base = self.base_url);
        debug!("GET {url} for {instructor_email}");

        let response = self
            .client
            .get(&url)
            .query(&[("email", instructor_email)])
            .send()
            .await?;

        Self::read_list(response).await
    }

    async fn submit_appointment(&self, request: &AppointmentRequest) -> Result<()> {
        let url = format!("{base}/setAppointment", base = self.base_url);
        debug!("POST {url}");

        let response = self.client.post(&url).json(request).send().await?;

        let status = response.status();
        if status == StatusCode::OK {
            return Ok(());
        }

        // Body is optional on rejection; an unparseable one just means no message.
        let body = response.bytes().await?;
        let message = serde_json::from_slice::<SubmitReply>(&body)
            .ok()
            .and_then(|reply| reply.message_text());

        Err(AppError::rejected(status.as_u16(), message))
    }

    async fn fetch_attendance(&self) -> Result<Vec<AttendanceRecord>> {
        debug!("GET {}", self.attendance_url);

        let response = self.client.get(&self.attendance_url).send().await?;

        Self::read_list(response).await
    }
}
