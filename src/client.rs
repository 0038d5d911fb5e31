use scraper::{Html, Selector};
use url::Url;

use crate::error::BookError;
use crate::models::SchedulePayload;
use crate::settings::Settings;

/// The remote calls one booking attempt needs. `SitSession` is the real
/// thing; attempt tests substitute stubs.
#[allow(async_fn_in_trait)]
pub trait BookingApi {
    async fn log_in(&self, username: &str, password: &str) -> Result<(), BookError>;
    async fn fetch_token(&self) -> Result<String, BookError>;
    async fn fetch_schedule(&self, token: &str, studio: u32)
    -> Result<SchedulePayload, BookError>;
    async fn fetch_resource_schedule(
        &self,
        token: &str,
        studio: u32,
        resource: u32,
    ) -> Result<SchedulePayload, BookError>;
    async fn book_class(&self, token: &str, class_id: u64) -> Result<(), BookError>;
    async fn book_resource(&self, token: &str, entry_id: u64) -> Result<(), BookError>;
}

/// One authenticated visit to sit.no: a cookie-jar HTTP client scoped to a
/// single booking attempt and dropped with it.
pub struct SitSession {
    client: reqwest::Client,
    portal_url: Url,
    api_url: Url,
    iframe_selector: Selector,
}

impl SitSession {
    pub fn new(settings: &Settings) -> Result<Self, BookError> {
        let client = reqwest::Client::builder().cookie_store(true).build()?;
        Ok(Self {
            client,
            portal_url: settings.portal_url.clone(),
            api_url: settings.api_url.clone(),
            iframe_selector: Selector::parse("#ibooking-iframe").expect("selector compiles"),
        })
    }

    fn portal(&self, path: &str) -> Url {
        self.portal_url.join(path).expect("path joins onto base url")
    }

    fn api(&self, path: &str) -> Url {
        self.api_url.join(path).expect("path joins onto base url")
    }

    /// The member page embeds the booking webapp in an iframe whose src
    /// carries the token the booking API wants.
    fn extract_token(&self, html: &str) -> Option<String> {
        let document = Html::parse_document(html);
        let iframe = document.select(&self.iframe_selector).next()?;
        let src = iframe.value().attr("src")?;
        let src_url = self.portal_url.join(src).ok()?;
        src_url
            .query_pairs()
            .find(|(key, _)| key == "token")
            .map(|(_, value)| value.into_owned())
    }
}

impl BookingApi for SitSession {
    async fn log_in(&self, username: &str, password: &str) -> Result<(), BookError> {
        self.client
            .post(self.portal("/trening"))
            .form(&[
                ("name", username),
                ("pass", password),
                ("form_id", "user_login"),
            ])
            .send()
            .await
            .map_err(BookError::Auth)?
            .error_for_status()
            .map_err(BookError::Auth)?;
        Ok(())
    }

    async fn fetch_token(&self) -> Result<String, BookError> {
        let response = self
            .client
            .get(self.portal("/trening/gruppe"))
            .send()
            .await?
            .error_for_status()?;
        let html = response.text().await?;
        self.extract_token(&html).ok_or(BookError::Token)
    }

    async fn fetch_schedule(
        &self,
        token: &str,
        studio: u32,
    ) -> Result<SchedulePayload, BookError> {
        let payload = self
            .client
            .get(self.api("/webapp/api/Schedule/getSchedule"))
            .query(&[("studios", studio.to_string()), ("token", token.to_string())])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(payload)
    }

    async fn fetch_resource_schedule(
        &self,
        token: &str,
        studio: u32,
        resource: u32,
    ) -> Result<SchedulePayload, BookError> {
        let payload = self
            .client
            .get(self.api("/webapp/api/ResourceBooking/getSchedule"))
            // Without the resourceIds filter the bookingOpensAt in the
            // response is wrong.
            .query(&[
                ("sid", studio.to_string()),
                ("token", token.to_string()),
                ("resourceIds", resource.to_string()),
            ])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(payload)
    }

    async fn book_class(&self, token: &str, class_id: u64) -> Result<(), BookError> {
        self.client
            .post(self.api("/webapp/api/Schedule/addBooking"))
            .form(&[("classId", class_id.to_string()), ("token", token.to_string())])
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    async fn book_resource(&self, token: &str, entry_id: u64) -> Result<(), BookError> {
        self.client
            .post(self.api("/webapp/api/ResourceBooking/addBooking"))
            .form(&[("token", token.to_string()), ("id", entry_id.to_string())])
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}
